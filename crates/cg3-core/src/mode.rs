//! Geometry of the 128×96 four-color graphics mode.

use crate::output::PackError;

/// Resolution and block layout of a block-packed display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    /// Displayed width in pixels
    pub width: usize,
    /// Displayed height in pixels
    pub height: usize,
    /// Pixels per block along each axis
    pub block_size: usize,
    /// Bits stored per block
    pub bits_per_block: usize,
}

impl DisplayMode {
    /// 256×192 pixels built from 128×96 blocks of 2×2, two bits per block.
    pub const CG3: Self = Self {
        width: 256,
        height: 192,
        block_size: 2,
        bits_per_block: 2,
    };

    #[inline]
    pub const fn blocks_wide(&self) -> usize {
        self.width / self.block_size
    }

    #[inline]
    pub const fn blocks_high(&self) -> usize {
        self.height / self.block_size
    }

    #[inline]
    pub const fn block_count(&self) -> usize {
        self.blocks_wide() * self.blocks_high()
    }

    /// Bytes in the packed artifact.
    #[inline]
    pub const fn packed_len(&self) -> usize {
        self.block_count() * self.bits_per_block / 8
    }

    /// Reject a packed buffer of the wrong length.
    pub fn validate_packed_len(&self, len: usize) -> Result<(), PackError> {
        if len == self.packed_len() {
            Ok(())
        } else {
            Err(PackError::WrongLength {
                expected: self.packed_len(),
                actual: len,
            })
        }
    }
}
