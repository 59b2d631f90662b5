//! Fixture images written to scratch directories.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Palette colors of the standard set, in index order
pub mod colors {
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const YELLOW: [u8; 3] = [255, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLACK: [u8; 3] = [0, 0, 0];
}

/// Encode RGBA pixels as an 8-bit RGBA PNG.
pub fn rgba_png(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(rgba).unwrap();
    }
    buf
}

/// A single-color opaque image.
pub fn solid_rgba(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    [rgb[0], rgb[1], rgb[2], 255].repeat((width * height) as usize)
}

/// Seeded noise, identical on every run.
pub fn noise_rgba(width: u32, height: u32, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width * height)
        .flat_map(|_| [rng.gen(), rng.gen(), rng.gen(), 255])
        .collect()
}

/// 256×192 image with one palette color per quadrant:
/// green, yellow on top; blue, red below.
pub fn quadrants_rgba() -> Vec<u8> {
    let mut rgba = Vec::with_capacity(256 * 192 * 4);
    for y in 0..192 {
        for x in 0..256 {
            let rgb = match (y < 96, x < 128) {
                (true, true) => colors::GREEN,
                (true, false) => colors::YELLOW,
                (false, true) => colors::BLUE,
                (false, false) => colors::RED,
            };
            rgba.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
    }
    rgba
}

/// Write `png` as `name` inside `dir`.
pub fn write_png(dir: &Path, name: &str, png: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png).unwrap();
    path
}
