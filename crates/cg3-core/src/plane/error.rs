//! Error types for plane construction.

use thiserror::Error;

/// Error type for building planes from raw buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaneError {
    /// Buffer length does not match the declared dimensions
    #[error("buffer holds {actual} samples, expected {expected} for {width}x{height}")]
    LengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    /// RGBA buffer length is not `width * height * 4`
    #[error("RGBA buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    RgbaLengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    /// The three channel planes do not share one size
    #[error("channel planes differ in size: red {red:?}, green {green:?}, blue {blue:?}")]
    ChannelSizeMismatch {
        red: (usize, usize),
        green: (usize, usize),
        blue: (usize, usize),
    },
}
