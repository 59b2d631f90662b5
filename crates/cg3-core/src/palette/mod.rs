//! The fixed four-color palette of the CG3 display mode.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{ColorSet, Palette, PaletteIndex, Rgb};
