//! Full-resolution previews of packed output.

use crate::mode::DisplayMode;
use crate::palette::Palette;

use super::packed_image::{read_pair, BlockIndices, PackedImage};

/// Render the packed image as 256×192 RGBA, each block replicated to 2×2.
///
/// Pixel `(x, y)` reads block `(y / 2) * 128 + (x / 2)` straight from the
/// packed bytes. Alpha is always 255.
pub fn preview_rgba(image: &PackedImage, palette: &Palette) -> Vec<u8> {
    let mode = DisplayMode::CG3;
    let bytes = image.as_bytes();
    let mut rgba = Vec::with_capacity(mode.width * mode.height * 4);

    for y in 0..mode.height {
        for x in 0..mode.width {
            let block = (y / mode.block_size) * mode.blocks_wide() + x / mode.block_size;
            rgba.extend_from_slice(&palette.color(read_pair(bytes, block)).to_rgba());
        }
    }
    rgba
}

/// Render any block grid as RGBA with `block_size × block_size` pixels per
/// block.
///
/// Returns `(width, height, rgba)`.
pub fn render_blocks(
    indices: &BlockIndices,
    palette: &Palette,
    block_size: usize,
) -> (usize, usize, Vec<u8>) {
    let width = indices.width() * block_size;
    let height = indices.height() * block_size;
    let mut rgba = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        let block_row = indices.row(y / block_size);
        for x in 0..width {
            rgba.extend_from_slice(&palette.color(block_row[x / block_size]).to_rgba());
        }
    }
    (width, height, rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(rgba: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let i = (y * width + x) * 4;
        [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
    }

    #[test]
    fn test_preview_replicates_blocks() {
        let mut image = PackedImage::new();
        image.set(0, 1, 3); // red block at pixels x 2..4, y 0..2

        let rgba = preview_rgba(&image, &Palette::STANDARD);

        assert_eq!(rgba.len(), 256 * 192 * 4);
        for (x, y) in [(2, 0), (3, 0), (2, 1), (3, 1)] {
            assert_eq!(pixel(&rgba, 256, x, y), [255, 0, 0, 255]);
        }
        assert_eq!(pixel(&rgba, 256, 1, 0), [0, 255, 0, 255]);
        assert_eq!(pixel(&rgba, 256, 4, 1), [0, 255, 0, 255]);
        assert_eq!(pixel(&rgba, 256, 2, 2), [0, 255, 0, 255]);
    }

    #[test]
    fn test_preview_uses_given_palette() {
        let rgba = preview_rgba(&PackedImage::new(), &Palette::ALTERNATE);
        assert_eq!(pixel(&rgba, 256, 255, 191), [255, 255, 255, 255]);
    }

    #[test]
    fn test_render_blocks_matches_preview() {
        let mut image = PackedImage::new();
        image.set(47, 64, 2);
        image.set(95, 127, 1);

        let (w, h, rgba) = render_blocks(&image.unpack(), &Palette::STANDARD, 2);

        assert_eq!((w, h), (256, 192));
        assert_eq!(rgba, preview_rgba(&image, &Palette::STANDARD));
    }
}
