//! PNG decode to 8-bit RGBA and RGBA encode for the diagnostic images.

use std::io::{Cursor, Read};

use crate::error::ConvertError;

/// A decoded source image, always 8-bit RGBA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode any PNG color type and bit depth to 8-bit RGBA.
///
/// Palette images are expanded, 16-bit samples are reduced to 8 bits and
/// missing alpha is filled with 255.
pub fn decode_png<R: Read>(reader: R) -> Result<RgbaImage, ConvertError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| ConvertError::Decode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ConvertError::Decode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let (width, height) = (info.width, info.height);
    let pixels = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(ConvertError::Decode(
                "indexed image was not expanded".to_string(),
            ))
        }
    };

    tracing::debug!(width, height, color_type = ?info.color_type, "Decoded PNG");
    Ok(RgbaImage {
        width,
        height,
        pixels,
    })
}

/// Decode a PNG held in memory.
pub fn decode_png_bytes(bytes: &[u8]) -> Result<RgbaImage, ConvertError> {
    decode_png(Cursor::new(bytes))
}

/// Encode 8-bit RGBA pixels as a PNG.
pub fn encode_rgba_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
