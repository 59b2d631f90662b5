//! Block quantization to the four-color palette.
//!
//! See [`Quantizer`] for the two-pass algorithm. [`UsageBias`] holds the
//! only sequential state, which is why this stage never runs in parallel.

mod bias;
mod error;
mod quantizer;
mod score;

pub use bias::{UsageBias, DEFAULT_BIAS_STEP};
pub use error::QuantizeError;
pub use quantizer::{QuantizeOptions, QuantizeStats, Quantized, Quantizer, RankedBlock};
pub use score::{block_scores, block_squared_error, rms_score};
