//! cg3-core: spectral resampling and 4-color block quantization for CG3
//! bitmaps
//!
//! This library turns an arbitrary truecolor image into the 3072-byte
//! bitplane of the MC6847 "CG3" mode: 256×192 pixels, one of four colors
//! per 2×2 block.
//!
//! # Quick Start
//!
//! The [`Cg3Converter`] builder is the primary entry point:
//!
//! ```
//! use cg3_core::{Cg3Converter, Palette};
//!
//! let width = 16;
//! let height = 12;
//! let rgba = vec![255u8; width * height * 4];
//!
//! let converter = Cg3Converter::new(Palette::STANDARD).parallel(false);
//! let conversion = converter.convert_rgba(width, height, &rgba).unwrap();
//!
//! let bytes = conversion.packed().as_bytes();
//! assert_eq!(bytes.len(), 3072);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA --split--> RgbPlanes<u8> --forward--> Spectrum ×3
//!      --resize to 256×192--> --reconstruct--> RgbPlanes<u8>
//!      --Quantizer (rank, assign)--> BlockIndices --pack--> PackedImage
//! ```
//!
//! Channels are independent through reconstruction and run concurrently
//! with the `rayon` feature. Quantization is sequential: each block's
//! choice depends on how often every color has already been used.
//!
//! # Spectral Resampling
//!
//! Spectra use the unshifted layout: index `(0, 0)` is zero frequency and
//! the other low frequencies wrap around to the far corners. Resizing keeps
//! or pads the four corner quadrants, so the lowest frequencies always
//! survive:
//!
//! ```
//! use cg3_core::spectral::{resize, Spectrum};
//! use num_complex::Complex64;
//!
//! let spectrum = Spectrum::from_fn(4, 4, |r, c| Complex64::new((r * 4 + c) as f64, 0.0));
//! let small = resize(&spectrum, 2, 2);
//!
//! let kept: Vec<f64> = small.as_slice().iter().map(|c| c.re).collect();
//! assert_eq!(kept, vec![0.0, 3.0, 12.0, 15.0]);
//! ```
//!
//! # Quantization
//!
//! Each block is scored against all four colors as
//! `round(sqrt(sum of squared channel differences))`. Blocks are then
//! visited easiest first (smallest best score), and every color pays a
//! penalty of `uses / 16` on top of its score. Equal totals go to the
//! lower palette index: green, yellow, blue, red.

mod api;
pub mod mode;
pub mod output;
pub mod palette;
pub mod plane;
pub mod quantize;
pub mod spectral;


pub use api::{Cg3Converter, Cg3Error, Conversion};
pub use mode::DisplayMode;
pub use output::{preview_rgba, BlockIndices, PackError, PackedImage};
pub use palette::{ColorSet, Palette, PaletteError, PaletteIndex, ParseColorError, Rgb};
pub use plane::{Plane, PlaneError, RgbPlanes};
pub use quantize::{
    QuantizeError, QuantizeOptions, QuantizeStats, Quantizer, UsageBias, DEFAULT_BIAS_STEP,
};
