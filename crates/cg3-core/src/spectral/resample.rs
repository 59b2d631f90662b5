//! Frequency-domain crop/pad resize.
//!
//! In the unshifted layout the low frequencies occupy the four corners of
//! the spectrum. Resizing keeps the `min(H, H') × min(W, W')` coefficients
//! nearest zero frequency, split into four corner blocks, and places each
//! block in the matching corner of a zero-filled target. Shrinking discards
//! only the highest frequencies (an anti-aliased downsample); growing pads
//! with zeros (band-limited interpolation).

use num_complex::Complex64;

use super::transform::Spectrum;

/// Split `min(src, dst)` into the leading and trailing parts of one axis.
///
/// Returns `(head, tail)`: `head` coefficients from the start of the axis,
/// `tail` from its end. Odd counts give the extra one to the tail.
#[inline]
fn corner_split(src: usize, dst: usize) -> (usize, usize) {
    let data = src.min(dst);
    let head = data / 2;
    (head, data - head)
}

/// Resize `spectrum` to `target_width × target_height`.
///
/// ```
/// use cg3_core::spectral::{resize, Spectrum};
/// use num_complex::Complex64;
///
/// let spectrum = Spectrum::from_fn(4, 4, |r, c| Complex64::new((r * 4 + c) as f64, 0.0));
/// let shrunk = resize(&spectrum, 2, 2);
///
/// // The four corner coefficients survive.
/// let kept: Vec<f64> = shrunk.as_slice().iter().map(|c| c.re).collect();
/// assert_eq!(kept, vec![0.0, 3.0, 12.0, 15.0]);
/// ```
pub fn resize(spectrum: &Spectrum, target_width: usize, target_height: usize) -> Spectrum {
    let (src_w, src_h) = spectrum.dimensions();
    let mut out = Spectrum::filled(target_width, target_height, Complex64::new(0.0, 0.0));

    let (head_h, tail_h) = corner_split(src_h, target_height);
    let (head_w, tail_w) = corner_split(src_w, target_width);

    // (source row, target row) pairs: head rows at the top, tail rows at the bottom
    let row_pairs = (0..head_h)
        .map(|r| (r, r))
        .chain((0..tail_h).map(|i| (src_h - tail_h + i, target_height - tail_h + i)));

    for (src_row, dst_row) in row_pairs {
        let src = spectrum.row(src_row);
        let dst = &mut out.as_mut_slice()[dst_row * target_width..(dst_row + 1) * target_width];

        dst[..head_w].copy_from_slice(&src[..head_w]);
        dst[target_width - tail_w..].copy_from_slice(&src[src_w - tail_w..]);
    }

    tracing::debug!(
        from_width = src_w,
        from_height = src_h,
        to_width = target_width,
        to_height = target_height,
        "Resized spectrum"
    );
    out
}
