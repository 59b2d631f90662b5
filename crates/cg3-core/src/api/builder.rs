//! Cg3Converter builder -- the primary entry point for the crate.
//!
//! [`Cg3Converter`] wraps the whole pipeline (channel split, spectral
//! resampling, quantization, packing) behind a small builder.

use crate::mode::DisplayMode;
use crate::output::PackedImage;
use crate::palette::Palette;
use crate::plane::RgbPlanes;
use crate::quantize::{QuantizeError, QuantizeOptions, Quantizer};
use crate::spectral::{forward, magnitude_image, reconstruct, resize};

use super::conversion::Conversion;
use super::error::Cg3Error;

/// High-level converter from RGB planes to a packed CG3 bitmap.
///
/// - Constructor requires a [`Palette`]
/// - Configuration methods consume and return `self`
/// - [`convert()`](Self::convert) takes `&self`, so one converter can be
///   reused across images
///
/// # Example
///
/// ```
/// use cg3_core::{Cg3Converter, Palette};
///
/// let rgba = vec![0u8; 8 * 6 * 4];
/// let converter = Cg3Converter::new(Palette::STANDARD).parallel(false);
/// let result = converter.convert_rgba(8, 6, &rgba).unwrap();
///
/// assert_eq!(result.packed().as_bytes().len(), 3072);
/// assert_eq!(result.scaled().width(), 256);
/// ```
#[derive(Debug, Clone)]
pub struct Cg3Converter {
    palette: Palette,
    quantize: QuantizeOptions,
    parallel: bool,
    keep_magnitude: bool,
}

impl Cg3Converter {
    /// Default options: bias step 16, parallel channels, no magnitude plot.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            quantize: QuantizeOptions::default(),
            parallel: true,
            keep_magnitude: false,
        }
    }

    /// Set the usage bias divisor.
    #[inline]
    pub fn bias_step(mut self, step: u32) -> Self {
        self.quantize = self.quantize.bias_step(step);
        self
    }

    /// Transform the three channels concurrently (needs the `rayon` feature).
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Also render the log-magnitude plot of each source spectrum.
    #[inline]
    pub fn magnitude(mut self, enabled: bool) -> Self {
        self.keep_magnitude = enabled;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Convert an 8-bit RGBA buffer; alpha is ignored.
    pub fn convert_rgba(
        &self,
        width: usize,
        height: usize,
        rgba: &[u8],
    ) -> Result<Conversion, Cg3Error> {
        let planes = RgbPlanes::from_rgba(width, height, rgba)?;
        self.convert(&planes)
    }

    /// Run the full pipeline on `source`.
    ///
    /// 1. Forward transform of each channel
    /// 2. Spectral resize to 256×192 and reconstruction to 8 bits
    /// 3. Two-pass block quantization
    /// 4. Packing into 3072 bytes
    pub fn convert(&self, source: &RgbPlanes<u8>) -> Result<Conversion, Cg3Error> {
        let (width, height) = (source.width(), source.height());
        if width == 0 || height == 0 {
            return Err(Cg3Error::EmptySource { width, height });
        }

        // Checked before the transforms so a bad option fails fast.
        if self.quantize.bias_step == 0 {
            return Err(QuantizeError::ZeroBiasStep.into());
        }
        let mode = DisplayMode::CG3;
        let quantizer = Quantizer::new(self.palette).with_options(self.quantize.clone());

        tracing::info!(
            width,
            height,
            target_width = mode.width,
            target_height = mode.height,
            "Resampling source"
        );
        let keep_magnitude = self.keep_magnitude;
        let [red, green, blue] = source.each_channel(self.parallel, |plane| {
            let spectrum = forward(plane);
            let magnitude = keep_magnitude.then(|| magnitude_image(&spectrum));
            let scaled = reconstruct(&resize(&spectrum, mode.width, mode.height));
            (scaled, magnitude)
        });

        let magnitude = match (red.1, green.1, blue.1) {
            (Some(r), Some(g), Some(b)) => Some(RgbPlanes::new(r, g, b)?),
            _ => None,
        };
        let scaled = RgbPlanes::new(red.0, green.0, blue.0)?;

        let quantized = quantizer.quantize(&scaled)?;
        let packed = PackedImage::pack(&quantized.indices)?;

        Ok(Conversion {
            packed,
            scaled,
            magnitude,
            stats: quantized.stats,
            palette: self.palette,
        })
    }
}
