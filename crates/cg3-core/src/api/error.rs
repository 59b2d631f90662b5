//! Unified error type for the cg3-core public API.
//!
//! [`Cg3Error`] wraps every error type of the crate into one enum for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::output::PackError;
use crate::palette::{PaletteError, ParseColorError};
use crate::plane::PlaneError;
use crate::quantize::QuantizeError;

/// Unified error type for the cg3-core public API.
///
/// # Example
///
/// ```
/// use cg3_core::{Cg3Error, Palette};
///
/// fn custom_palette() -> Result<Palette, Cg3Error> {
///     let palette = Palette::from_hex(&["#000", "#555", "#aaa", "#fff"])?;
///     Ok(palette)
/// }
/// # assert!(custom_palette().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Cg3Error {
    /// Source image has no pixels
    #[error("source image is empty ({width}x{height})")]
    EmptySource { width: usize, height: usize },
    /// Buffer/plane shape error
    #[error("plane error: {0}")]
    Plane(#[from] PlaneError),
    /// Quantizer precondition violated
    #[error("quantize error: {0}")]
    Quantize(#[from] QuantizeError),
    /// Packing error
    #[error("pack error: {0}")]
    Pack(#[from] PackError),
    /// Palette validation error
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
    /// Color parsing error
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
}
