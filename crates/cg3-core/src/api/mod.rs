//! Public API for the cg3-core crate.
//!
//! This module provides the high-level API: the [`Cg3Converter`] builder,
//! its [`Conversion`] result and the [`Cg3Error`] unified error type.

mod builder;
mod conversion;
mod error;

pub use builder::Cg3Converter;
pub use conversion::Conversion;
pub use error::Cg3Error;
