//! Spatial reconstruction: inverse transform plus rounding to 8 bits.

use crate::plane::Plane;

use super::transform::{inverse, Spectrum};

/// Round half up and clamp into `0..=255`.
///
/// Values below zero (ringing next to hard edges) clamp to 0 and values
/// above 255 clamp to 255.
#[inline]
pub fn to_sample(value: f64) -> u8 {
    (value + 0.5).clamp(0.0, 255.0) as u8
}

/// Inverse-transform `spectrum` and quantize every sample to `u8`.
pub fn reconstruct(spectrum: &Spectrum) -> Plane<u8> {
    inverse(spectrum).map(|&v| to_sample(v))
}
