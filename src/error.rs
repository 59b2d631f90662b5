use std::fmt;
use std::path::PathBuf;

use cg3_core::{Cg3Error, PackError, PaletteError, QuantizeError};
use thiserror::Error;

/// Pipeline stage a [`ConvertError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Decode,
    Validate,
    Convert,
    Encode,
    Write,
    Config,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Decode => "decode",
            Stage::Validate => "validate",
            Stage::Convert => "convert",
            Stage::Encode => "encode",
            Stage::Write => "write",
            Stage::Config => "config",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("Invalid source dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("Pack error: {0}")]
    Pack(#[from] PackError),

    #[error("Conversion error: {0}")]
    Core(Cg3Error),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl ConvertError {
    /// Which stage failed.
    pub fn stage(&self) -> Stage {
        match self {
            ConvertError::Read { .. } | ConvertError::Decode(_) => Stage::Decode,
            ConvertError::InvalidDimensions { .. }
            | ConvertError::Quantize(_)
            | ConvertError::Pack(_) => Stage::Validate,
            ConvertError::Core(_) => Stage::Convert,
            ConvertError::Encode(_) => Stage::Encode,
            ConvertError::Io { .. } => Stage::Write,
            ConvertError::Config(_) => Stage::Config,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<Cg3Error> for ConvertError {
    fn from(e: Cg3Error) -> Self {
        match e {
            Cg3Error::EmptySource { width, height } => ConvertError::InvalidDimensions {
                width: width as u32,
                height: height as u32,
            },
            Cg3Error::Quantize(e) => ConvertError::Quantize(e),
            Cg3Error::Pack(e) => ConvertError::Pack(e),
            other => ConvertError::Core(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("bias_step must be at least 1")]
    ZeroBiasStep,

    #[error("invalid colors: {0}")]
    Palette(#[from] PaletteError),
}
