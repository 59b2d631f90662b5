pub mod png_io;

pub use png_io::{decode_png, decode_png_bytes, encode_rgba_png, RgbaImage};
