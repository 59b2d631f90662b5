//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

/// Decoded 8-bit RGBA image: (width, height, pixels).
pub fn read_rgba_png(path: &Path) -> (u32, u32, Vec<u8>) {
    let file = std::fs::File::open(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!(info.color_type, png::ColorType::Rgba, "Expected RGBA PNG");
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

/// Assert the file is a packed CG3 bitmap and return its bytes.
pub fn assert_packed_file(path: &Path) -> Vec<u8> {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected packed bitmap at {}: {e}", path.display()));
    assert_eq!(
        bytes.len(),
        3072,
        "Packed bitmap {} has the wrong size",
        path.display()
    );
    bytes
}

/// RGBA of pixel `(x, y)` in a row-major buffer of `width` pixels.
pub fn pixel(rgba: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
}
