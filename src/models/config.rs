use std::path::{Path, PathBuf};

use cg3_core::{ColorSet, Palette, DEFAULT_BIAS_STEP};
use serde::Deserialize;

use crate::error::ConfigError;

/// Conversion settings loaded from an optional YAML file.
///
/// ```yaml
/// color_set: alternate
/// bias_step: 16
/// parallel_channels: true
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Which of the display's two color sets to quantize to
    #[serde(default)]
    pub color_set: ColorSet,

    /// Four hex colors replacing the color set (e.g. for a miscalibrated
    /// monitor or emulator)
    #[serde(default)]
    pub colors: Option<Vec<String>>,

    /// Block uses per unit of usage penalty
    #[serde(default = "default_bias_step")]
    pub bias_step: u32,

    /// Transform the three channels concurrently
    #[serde(default = "default_parallel_channels")]
    pub parallel_channels: bool,
}

fn default_bias_step() -> u32 {
    DEFAULT_BIAS_STEP
}

fn default_parallel_channels() -> bool {
    true
}

impl ConvertConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::info!(
            path = %path.display(),
            color_set = ?config.color_set,
            bias_step = config.bias_step,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, all-default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bias_step == 0 {
            return Err(ConfigError::ZeroBiasStep);
        }
        self.palette()?;
        Ok(())
    }

    /// The palette to quantize to: explicit colors win over the color set.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        match &self.colors {
            Some(colors) => Ok(Palette::from_hex(colors)?),
            None => Ok(Palette::for_color_set(self.color_set)),
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            color_set: ColorSet::Standard,
            colors: None,
            bias_step: DEFAULT_BIAS_STEP,
            parallel_channels: true,
        }
    }
}
