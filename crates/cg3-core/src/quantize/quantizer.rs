//! Two-pass, difficulty-ordered block quantizer.
//!
//! Pass 1 scores every 2×2 block against the four palette colors and ranks
//! blocks by their best score ("difficulty"), easiest first. Pass 2 walks
//! blocks in that order and picks the color with the smallest score plus
//! usage penalty. Confident blocks lock in their natural color before the
//! penalty builds up; ambiguous blocks processed later get pushed toward
//! colors that are still under-used, which keeps one color from flooding
//! flat or gradient regions.
//!
//! The chosen index is stored at the block's own grid position, so the
//! layout of the result never depends on processing order, only the values.

use crate::output::BlockIndices;
use crate::palette::{Palette, PaletteIndex};
use crate::plane::RgbPlanes;

use super::bias::{UsageBias, DEFAULT_BIAS_STEP};
use super::error::QuantizeError;
use super::score::block_scores;

/// How many of the easiest difficulties to log at debug level.
const LOGGED_DIFFICULTIES: usize = 25;

/// Tuning for [`Quantizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeOptions {
    /// Uses of a color per unit of score penalty.
    pub bias_step: u32,
}

impl QuantizeOptions {
    pub fn new() -> Self {
        Self {
            bias_step: DEFAULT_BIAS_STEP,
        }
    }

    /// Set the usage bias divisor.
    pub fn bias_step(mut self, step: u32) -> Self {
        self.bias_step = step;
        self
    }
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A block's pass-1 result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedBlock {
    /// Pixel row of the block's top-left corner (even)
    pub row: usize,
    /// Pixel column of the block's top-left corner (even)
    pub col: usize,
    /// Unbiased score per palette color
    pub scores: [u32; 4],
    /// Smallest of `scores`
    pub difficulty: u32,
}

/// Summary of one quantization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeStats {
    /// Blocks assigned to each palette index
    pub usage: [u32; 4],
    /// Smallest block difficulty seen
    pub min_difficulty: u32,
    /// Largest block difficulty seen
    pub max_difficulty: u32,
}

/// Output of [`Quantizer::quantize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Quantized {
    /// One palette index per block, in block-grid layout
    pub indices: BlockIndices,
    pub stats: QuantizeStats,
}

/// Difficulty-ordered, usage-biased nearest-color quantizer.
///
/// # Example
///
/// ```
/// use cg3_core::{Palette, Plane, Quantizer, RgbPlanes};
///
/// // A 4×2 image: left block pure blue, right block pure red.
/// let red = Plane::from_fn(4, 2, |_, c| if c >= 2 { 255 } else { 0 });
/// let green = Plane::filled(4, 2, 0u8);
/// let blue = Plane::from_fn(4, 2, |_, c| if c < 2 { 255 } else { 0 });
/// let planes = RgbPlanes::new(red, green, blue).unwrap();
///
/// let result = Quantizer::new(Palette::STANDARD).quantize(&planes).unwrap();
/// assert_eq!(result.indices.as_slice(), &[2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    palette: Palette,
    options: QuantizeOptions,
}

impl Quantizer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            options: QuantizeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QuantizeOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Check the preconditions both passes rely on.
    fn validate(&self, planes: &RgbPlanes<u8>) -> Result<(), QuantizeError> {
        let (width, height) = (planes.width(), planes.height());
        if width == 0 || height == 0 {
            return Err(QuantizeError::Empty { width, height });
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(QuantizeError::OddDimensions { width, height });
        }
        if self.options.bias_step == 0 {
            return Err(QuantizeError::ZeroBiasStep);
        }
        Ok(())
    }

    /// Pass 1: score every block and sort ascending by difficulty.
    ///
    /// Blocks are discovered row-major; the sort is stable, so blocks of
    /// equal difficulty keep that order.
    pub fn rank(&self, planes: &RgbPlanes<u8>) -> Result<Vec<RankedBlock>, QuantizeError> {
        self.validate(planes)?;

        let mut blocks = Vec::with_capacity(planes.width() / 2 * (planes.height() / 2));
        for row in (0..planes.height()).step_by(2) {
            for col in (0..planes.width()).step_by(2) {
                let scores = block_scores(planes, row, col, &self.palette);
                let difficulty = scores.iter().copied().min().unwrap_or(u32::MAX);
                blocks.push(RankedBlock {
                    row,
                    col,
                    scores,
                    difficulty,
                });
            }
        }

        blocks.sort_by_key(|block| block.difficulty);

        tracing::debug!(
            easiest = ?blocks
                .iter()
                .take(LOGGED_DIFFICULTIES)
                .map(|b| b.difficulty)
                .collect::<Vec<_>>(),
            "Ranked {} blocks",
            blocks.len()
        );
        Ok(blocks)
    }

    /// Pick the color for one block under the current bias.
    ///
    /// Strictly smaller biased score wins, so on a tie the lower palette
    /// index is kept.
    #[inline]
    fn choose(scores: &[u32; 4], bias: &UsageBias) -> PaletteIndex {
        let mut best = 0;
        let mut best_score = u32::MAX;
        for (index, &score) in scores.iter().enumerate() {
            let biased = score + bias.penalty(index as PaletteIndex);
            if biased < best_score {
                best_score = biased;
                best = index as PaletteIndex;
            }
        }
        best
    }

    /// Pass 2: assign colors in ranked order.
    ///
    /// `ranked` must come from [`rank`](Self::rank) on planes of
    /// `blocks_wide * 2` × `blocks_high * 2` pixels. The scores stored in
    /// each entry are reused; they depend only on the block's pixels.
    pub fn assign(
        &self,
        ranked: &[RankedBlock],
        blocks_wide: usize,
        blocks_high: usize,
    ) -> Quantized {
        let mut indices = BlockIndices::zeroed(blocks_wide, blocks_high);
        let mut bias = UsageBias::new(self.options.bias_step);

        for block in ranked {
            let chosen = Self::choose(&block.scores, &bias);
            indices[(block.row / 2, block.col / 2)] = chosen;
            bias.record(chosen);
        }

        let stats = QuantizeStats {
            usage: bias.counts(),
            min_difficulty: ranked.first().map_or(0, |b| b.difficulty),
            max_difficulty: ranked.last().map_or(0, |b| b.difficulty),
        };
        tracing::info!(
            green_or_buff = stats.usage[0],
            yellow_or_cyan = stats.usage[1],
            blue_or_magenta = stats.usage[2],
            red_or_orange = stats.usage[3],
            "Quantized blocks"
        );

        Quantized { indices, stats }
    }

    /// Run both passes over `planes`.
    pub fn quantize(&self, planes: &RgbPlanes<u8>) -> Result<Quantized, QuantizeError> {
        let ranked = self.rank(planes)?;
        Ok(self.assign(&ranked, planes.width() / 2, planes.height() / 2))
    }
}
