use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use cg3_core::{Cg3Converter, Conversion, DisplayMode};

use crate::error::ConvertError;
use crate::models::ConvertConfig;
use crate::rendering::{decode_png, decode_png_bytes, encode_rgba_png, RgbaImage};
use crate::services::output_naming::{diagnostic_path, packed_path};

/// Source and destinations of one CLI run.
#[derive(Debug, Clone, Default)]
pub struct ConvertRequest {
    pub source: PathBuf,
    pub output: PathBuf,
    pub magnitude: Option<PathBuf>,
    pub scaled: Option<PathBuf>,
    pub preview: Option<PathBuf>,
}

/// What a [`Converter::run`] wrote.
#[derive(Debug)]
pub struct ConvertOutcome {
    /// Where the packed bitmap went, after extension normalization
    pub packed_path: PathBuf,
    /// Diagnostic images written, in magnitude, scaled, preview order
    pub diagnostics: Vec<PathBuf>,
    pub conversion: Conversion,
}

/// Drives the core pipeline from PNG files to a `.cg3` file.
pub struct Converter {
    core: Cg3Converter,
}

impl Converter {
    pub fn new(config: &ConvertConfig) -> Result<Self, ConvertError> {
        config.validate()?;
        let core = Cg3Converter::new(config.palette()?)
            .bias_step(config.bias_step)
            .parallel(config.parallel_channels);
        Ok(Self { core })
    }

    /// Convert a decoded image.
    pub fn convert_image(
        &self,
        image: &RgbaImage,
        with_magnitude: bool,
    ) -> Result<Conversion, ConvertError> {
        if image.width == 0 || image.height == 0 {
            return Err(ConvertError::InvalidDimensions {
                width: image.width,
                height: image.height,
            });
        }

        let conversion = self.core.clone().magnitude(with_magnitude).convert_rgba(
            image.width as usize,
            image.height as usize,
            &image.pixels,
        )?;

        let usage = conversion.stats().usage;
        tracing::info!(
            color0 = usage[0],
            color1 = usage[1],
            color2 = usage[2],
            color3 = usage[3],
            "Color usage"
        );
        Ok(conversion)
    }

    /// Decode a PNG held in memory and convert it.
    pub fn convert_png_bytes(
        &self,
        png: &[u8],
        with_magnitude: bool,
    ) -> Result<Conversion, ConvertError> {
        let image = decode_png_bytes(png)?;
        self.convert_image(&image, with_magnitude)
    }

    /// Read the source, convert it and write every requested artifact.
    ///
    /// The packed bitmap is written first; diagnostics follow.
    pub fn run(&self, request: &ConvertRequest) -> Result<ConvertOutcome, ConvertError> {
        let file = File::open(&request.source).map_err(|source| ConvertError::Read {
            path: request.source.clone(),
            source,
        })?;
        let image = decode_png(BufReader::new(file))?;
        tracing::info!(
            path = %request.source.display(),
            width = image.width,
            height = image.height,
            "Loaded source image"
        );

        let conversion = self.convert_image(&image, request.magnitude.is_some())?;

        let packed = conversion.packed().as_bytes();
        DisplayMode::CG3.validate_packed_len(packed.len())?;
        let packed_path = packed_path(&request.output);
        write_file(&packed_path, packed)?;
        tracing::info!(path = %packed_path.display(), bytes = packed.len(), "Wrote packed bitmap");

        let (out_w, out_h) = conversion.output_dimensions();
        let mut diagnostics = Vec::new();
        if let (Some(path), Some(magnitude)) = (&request.magnitude, conversion.magnitude()) {
            let rgba = magnitude.to_rgba();
            diagnostics.push(write_png(path, image.width, image.height, &rgba)?);
        }
        if let Some(path) = &request.scaled {
            let rgba = conversion.scaled().to_rgba();
            diagnostics.push(write_png(path, out_w as u32, out_h as u32, &rgba)?);
        }
        if let Some(path) = &request.preview {
            let rgba = conversion.preview_rgba();
            diagnostics.push(write_png(path, out_w as u32, out_h as u32, &rgba)?);
        }

        Ok(ConvertOutcome {
            packed_path,
            diagnostics,
            conversion,
        })
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    std::fs::write(path, bytes).map_err(|e| ConvertError::io(path, e))
}

fn write_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<PathBuf, ConvertError> {
    let path = diagnostic_path(path);
    let png = encode_rgba_png(width, height, rgba)?;
    write_file(&path, &png)?;
    tracing::debug!(path = %path.display(), width, height, "Wrote diagnostic image");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cg3_core::ColorSet;

    fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
        RgbaImage {
            width,
            height,
            pixels: [rgb[0], rgb[1], rgb[2], 255].repeat((width * height) as usize),
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ConvertConfig {
            bias_step: 0,
            ..Default::default()
        };
        let err = Converter::new(&config).err().unwrap();
        assert!(matches!(err, ConvertError::Config(_)));
    }

    #[test]
    fn test_zero_size_image_is_invalid_dimensions() {
        let converter = Converter::new(&ConvertConfig::default()).unwrap();
        let err = converter
            .convert_image(&solid_image(0, 5, [0, 0, 0]), false)
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidDimensions {
                width: 0,
                height: 5
            }
        ));
    }

    #[test]
    fn test_color_set_reaches_quantizer() {
        let config = ConvertConfig {
            color_set: ColorSet::Alternate,
            parallel_channels: false,
            ..Default::default()
        };
        let converter = Converter::new(&config).unwrap();

        // Cyan is exact in the alternate set, index 1
        let conversion = converter
            .convert_image(&solid_image(8, 8, [0, 255, 255]), false)
            .unwrap();
        assert_eq!(conversion.packed().get(0, 0), 1);
        assert_eq!(conversion.palette(), &cg3_core::Palette::ALTERNATE);
    }

    #[test]
    fn test_run_reports_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let converter = Converter::new(&ConvertConfig::default()).unwrap();
        let request = ConvertRequest {
            source: dir.path().join("missing.png"),
            output: dir.path().join("out.cg3"),
            ..Default::default()
        };

        let err = converter.run(&request).unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
        assert!(!dir.path().join("out.cg3").exists());
    }
}
