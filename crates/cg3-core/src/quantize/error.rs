//! Error types for block quantization.

use thiserror::Error;

/// Precondition failures of the quantizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// Planes cannot be tiled by 2×2 blocks
    #[error("image {width}x{height} cannot be split into 2x2 blocks (dimensions must be even)")]
    OddDimensions { width: usize, height: usize },
    /// Planes contain no pixels
    #[error("image has no pixels ({width}x{height})")]
    Empty { width: usize, height: usize },
    /// Usage bias divisor of zero
    #[error("bias step must be at least 1")]
    ZeroBiasStep,
}
