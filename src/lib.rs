//! cg3conv - truecolor PNG to MC6847 CG3 bitmap converter
//!
//! File handling, configuration and error reporting around the `cg3_core`
//! pipeline. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
