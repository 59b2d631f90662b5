//! Error types for bitplane packing.

use thiserror::Error;

/// Error type for packing block grids and loading packed buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// Block grid does not match the display mode
    #[error("block grid is {actual_wide}x{actual_high}, expected {expected_wide}x{expected_high}")]
    WrongGrid {
        expected_wide: usize,
        expected_high: usize,
        actual_wide: usize,
        actual_high: usize,
    },
    /// Packed buffer has the wrong number of bytes
    #[error("packed image is {actual} bytes, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
}
