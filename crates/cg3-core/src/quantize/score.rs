//! Per-block color error scores.

use crate::palette::{Palette, Rgb};
use crate::plane::RgbPlanes;

/// Offsets of the four pixels of a block from its top-left corner.
const BLOCK_PIXELS: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Sum of squared channel differences between the block at `(row, col)`
/// and `color`: 4 pixels × 3 channels.
#[inline]
pub fn block_squared_error(planes: &RgbPlanes<u8>, row: usize, col: usize, color: Rgb) -> u32 {
    let target = color.to_bytes();
    let mut sum = 0u32;
    for (dy, dx) in BLOCK_PIXELS {
        let pixel = planes.pixel(row + dy, col + dx);
        for (&p, &t) in pixel.iter().zip(&target) {
            let d = p as i32 - t as i32;
            sum += (d * d) as u32;
        }
    }
    sum
}

/// `round(sqrt(sum))`, the integer error score of one block/color pair.
#[inline]
pub fn rms_score(squared_error: u32) -> u32 {
    ((squared_error as f64).sqrt() + 0.5) as u32
}

/// Error scores of the block at `(row, col)` against every palette color,
/// in palette order.
pub fn block_scores(planes: &RgbPlanes<u8>, row: usize, col: usize, palette: &Palette) -> [u32; 4] {
    let mut scores = [0u32; 4];
    for (score, (_, color)) in scores.iter_mut().zip(palette.iter()) {
        *score = rms_score(block_squared_error(planes, row, col, color));
    }
    scores
}
