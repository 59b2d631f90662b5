//! Packed 2-bit output and its preview rendering.
//!
//! [`PackedImage`] is the terminal artifact of a conversion: one palette
//! index per block, four blocks per byte, first block in the two most
//! significant bits. [`preview_rgba`] expands it back to a full-resolution
//! image for inspection.

mod error;
mod packed_image;
mod render;

pub use error::PackError;
pub use packed_image::{pair_shift, read_pair, write_pair, BlockIndices, PackedImage};
pub use render::{preview_rgba, render_blocks};
