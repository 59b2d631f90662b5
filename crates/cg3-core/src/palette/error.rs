//! Error types for palette operations.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Hex string contains non-ASCII characters
    #[error("hex color must be ASCII")]
    NonAscii,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The display mode has exactly four colors
    #[error("palette must have exactly {expected} colors, got {actual}")]
    WrongSize { expected: usize, actual: usize },
    /// Duplicate color found at the specified index
    #[error("duplicate color found at index {index}")]
    DuplicateColor { index: usize },
    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
