pub mod converter;
pub mod output_naming;

pub use converter::{ConvertOutcome, ConvertRequest, Converter};
pub use output_naming::{diagnostic_path, packed_path};
