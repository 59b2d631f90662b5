//! Two-bit-per-block bitplane codec.
//!
//! Block `i` (row-major over the block grid) lives in byte `i >> 2` at bit
//! offset `(3 - (i & 3)) * 2`: the first of every four blocks occupies bits
//! 6–7, the fourth bits 0–1. There is no header; the buffer is exactly what
//! the display reads.

use crate::mode::DisplayMode;
use crate::palette::PaletteIndex;
use crate::plane::Plane;

use super::error::PackError;

/// One palette index per block, laid out as a plane over the block grid.
pub type BlockIndices = Plane<PaletteIndex>;

/// Bit offset of block `block` inside its byte.
#[inline]
pub const fn pair_shift(block: usize) -> u32 {
    ((3 - (block & 3)) * 2) as u32
}

/// Store `index` for `block`, leaving the other three pairs of the byte
/// untouched.
#[inline]
pub fn write_pair(bytes: &mut [u8], block: usize, index: PaletteIndex) {
    let shift = pair_shift(block);
    let byte = &mut bytes[block >> 2];
    *byte = (*byte & !(0b11 << shift)) | ((index & 0b11) << shift);
}

/// Read the index stored for `block`.
#[inline]
pub fn read_pair(bytes: &[u8], block: usize) -> PaletteIndex {
    (bytes[block >> 2] >> pair_shift(block)) & 0b11
}

/// The packed output artifact: 3072 bytes for 128×96 blocks.
///
/// # Example
///
/// ```
/// use cg3_core::PackedImage;
///
/// let mut image = PackedImage::new();
/// image.set(0, 0, 3);
/// image.set(0, 3, 1);
/// assert_eq!(image.as_bytes()[0], 0b1100_0001);
/// assert_eq!(image.get(0, 3), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    bytes: Vec<u8>,
}

impl PackedImage {
    const MODE: DisplayMode = DisplayMode::CG3;

    /// All blocks set to index 0.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; Self::MODE.packed_len()],
        }
    }

    /// Wrap a buffer read back from disk.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PackError> {
        Self::MODE.validate_packed_len(bytes.len())?;
        Ok(Self { bytes })
    }

    /// Pack a full 128×96 block grid.
    pub fn pack(indices: &BlockIndices) -> Result<Self, PackError> {
        let (wide, high) = indices.dimensions();
        if wide != Self::MODE.blocks_wide() || high != Self::MODE.blocks_high() {
            return Err(PackError::WrongGrid {
                expected_wide: Self::MODE.blocks_wide(),
                expected_high: Self::MODE.blocks_high(),
                actual_wide: wide,
                actual_high: high,
            });
        }

        let mut image = Self::new();
        for (block, &index) in indices.as_slice().iter().enumerate() {
            write_pair(&mut image.bytes, block, index);
        }
        Ok(image)
    }

    /// Expand back into a 128×96 block grid.
    pub fn unpack(&self) -> BlockIndices {
        let wide = Self::MODE.blocks_wide();
        BlockIndices::from_fn(wide, Self::MODE.blocks_high(), |row, col| {
            read_pair(&self.bytes, row * wide + col)
        })
    }

    /// Index of the block at `(block_row, block_col)`.
    #[inline]
    pub fn get(&self, block_row: usize, block_col: usize) -> PaletteIndex {
        read_pair(&self.bytes, self.block_number(block_row, block_col))
    }

    /// Set the block at `(block_row, block_col)`.
    #[inline]
    pub fn set(&mut self, block_row: usize, block_col: usize, index: PaletteIndex) {
        let block = self.block_number(block_row, block_col);
        write_pair(&mut self.bytes, block, index);
    }

    #[inline]
    fn block_number(&self, block_row: usize, block_col: usize) -> usize {
        assert!(
            block_row < Self::MODE.blocks_high() && block_col < Self::MODE.blocks_wide(),
            "block ({block_row}, {block_col}) outside the {}x{} grid",
            Self::MODE.blocks_wide(),
            Self::MODE.blocks_high()
        );
        block_row * Self::MODE.blocks_wide() + block_col
    }

    /// How many blocks use each palette index.
    pub fn usage_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for block in 0..Self::MODE.block_count() {
            counts[read_pair(&self.bytes, block) as usize] += 1;
        }
        counts
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Default for PackedImage {
    fn default() -> Self {
        Self::new()
    }
}
