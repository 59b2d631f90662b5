//! Result of one conversion run.

use crate::mode::DisplayMode;
use crate::output::{preview_rgba, PackedImage};
use crate::palette::Palette;
use crate::plane::RgbPlanes;
use crate::quantize::QuantizeStats;

/// Everything one [`Cg3Converter::convert`](super::Cg3Converter::convert)
/// call produces.
///
/// The packed image is the artifact; the rest are intermediates kept for
/// the optional diagnostic outputs.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub(super) packed: PackedImage,
    pub(super) scaled: RgbPlanes<u8>,
    pub(super) magnitude: Option<RgbPlanes<u8>>,
    pub(super) stats: QuantizeStats,
    pub(super) palette: Palette,
}

impl Conversion {
    /// The 3072-byte packed bitmap.
    #[inline]
    pub fn packed(&self) -> &PackedImage {
        &self.packed
    }

    pub fn into_packed(self) -> PackedImage {
        self.packed
    }

    /// The 256×192 reconstruction the quantizer saw.
    #[inline]
    pub fn scaled(&self) -> &RgbPlanes<u8> {
        &self.scaled
    }

    /// Log-magnitude plot of each source channel's spectrum, if requested.
    #[inline]
    pub fn magnitude(&self) -> Option<&RgbPlanes<u8>> {
        self.magnitude.as_ref()
    }

    #[inline]
    pub fn stats(&self) -> &QuantizeStats {
        &self.stats
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// 256×192 RGBA rendering of the packed bitmap.
    pub fn preview_rgba(&self) -> Vec<u8> {
        preview_rgba(&self.packed, &self.palette)
    }

    /// Dimensions of [`preview_rgba`](Self::preview_rgba) and
    /// [`scaled`](Self::scaled).
    pub fn output_dimensions(&self) -> (usize, usize) {
        (DisplayMode::CG3.width, DisplayMode::CG3.height)
    }
}
