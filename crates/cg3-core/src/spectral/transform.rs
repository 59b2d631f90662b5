//! Separable 2-D discrete Fourier transform.
//!
//! The 2-D transform is computed as a 1-D DFT over every row, a transpose,
//! a 1-D DFT over every row of the transposed array (the original columns),
//! and a transpose back. For an N×N plane this costs O(N³) instead of the
//! O(N⁴) of evaluating the 2-D sum directly.
//!
//! # Normalization
//!
//! The forward transform divides every 1-D sum by its length; the inverse
//! does not. After a full 2-D forward pass coefficient `(0, 0)` is therefore
//! the mean sample value, and `inverse(forward(p))` reproduces `p` with no
//! further scaling. Resampling in between keeps that property, which is what
//! makes a resized spectrum invert to the same intensity range.

use num_complex::Complex64;

use crate::plane::Plane;

/// A plane of complex frequency coefficients.
///
/// Unshifted layout: `(0, 0)` is zero frequency and the low frequencies
/// also sit near the other three corners through wraparound.
pub type Spectrum = Plane<Complex64>;

/// Which way a 1-D pass runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `cos - i·sin` kernel, sum divided by N
    Forward,
    /// `cos + i·sin` kernel, no division
    Inverse,
}

/// `e^(i·2π·k/N)` for `k` in `0..N`.
///
/// Every kernel value of an N-point DFT is one of these, indexed by
/// `(freq · point) mod N`.
fn twiddles(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|k| {
            let angle = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
            Complex64::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// N-point DFT of `input` into `output`.
fn dft_1d(
    input: &[Complex64],
    output: &mut [Complex64],
    twiddles: &[Complex64],
    direction: Direction,
) {
    let n = input.len();
    debug_assert_eq!(output.len(), n);
    debug_assert_eq!(twiddles.len(), n);

    for (freq, out) in output.iter_mut().enumerate() {
        let mut acc = Complex64::new(0.0, 0.0);
        let mut k = 0;
        for &sample in input {
            let w = twiddles[k];
            acc += match direction {
                Direction::Forward => sample * w.conj(),
                Direction::Inverse => sample * w,
            };
            k += freq;
            if k >= n {
                k %= n;
            }
        }
        *out = match direction {
            Direction::Forward => acc / n as f64,
            Direction::Inverse => acc,
        };
    }
}

/// Apply the 1-D transform to every row.
fn transform_rows(plane: &Spectrum, direction: Direction) -> Spectrum {
    let mut out = Spectrum::zeroed(plane.width(), plane.height());
    let table = twiddles(plane.width());
    for (src, dst) in plane.rows().zip(out.rows_mut()) {
        dft_1d(src, dst, &table, direction);
    }
    out
}

/// Full separable 2-D pass over a complex plane.
pub fn transform_2d(plane: &Spectrum, direction: Direction) -> Spectrum {
    let label = match direction {
        Direction::Forward => "DFT",
        Direction::Inverse => "IDFT",
    };
    let (width, height) = plane.dimensions();

    tracing::debug!(width, height, "{label}: transforming rows");
    let rows = transform_rows(plane, direction);

    tracing::debug!("{label}: transposing");
    let transposed = rows.transpose();

    tracing::debug!("{label}: transforming columns");
    let columns = transform_rows(&transposed, direction);

    tracing::debug!("{label}: transposing back");
    columns.transpose()
}

/// Forward transform of a real-valued plane.
///
/// ```
/// use cg3_core::{spectral, Plane};
///
/// let plane = Plane::filled(4, 2, 10u8);
/// let spectrum = spectral::forward(&plane);
///
/// // A flat plane has all its energy at zero frequency: the mean.
/// assert!((spectrum[(0, 0)].re - 10.0).abs() < 1e-9);
/// assert!(spectrum[(1, 3)].norm() < 1e-9);
/// ```
pub fn forward<T>(plane: &Plane<T>) -> Spectrum
where
    T: Copy + Into<f64>,
{
    let complex = plane.map(|&v| Complex64::new(v.into(), 0.0));
    transform_2d(&complex, Direction::Forward)
}

/// Inverse transform, keeping the full complex result.
pub fn inverse_complex(spectrum: &Spectrum) -> Spectrum {
    transform_2d(spectrum, Direction::Inverse)
}

/// Inverse transform, returning the real part of each sample.
///
/// The caller rounds and clamps to the sample range it needs; see
/// [`reconstruct`](super::reconstruct).
pub fn inverse(spectrum: &Spectrum) -> Plane<f64> {
    inverse_complex(spectrum).map(|c| c.re)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Complex64, b: Complex64, tol: f64) {
        assert!(
            (a - b).norm() <= tol,
            "expected {b}, got {a} (tolerance {tol})"
        );
    }

    /// Direct O(N⁴) evaluation of the 2-D sum, used only as a reference.
    fn naive_forward_2d(plane: &Plane<f64>) -> Spectrum {
        let (w, h) = plane.dimensions();
        Spectrum::from_fn(w, h, |fy, fx| {
            let mut acc = Complex64::new(0.0, 0.0);
            for y in 0..h {
                for x in 0..w {
                    let angle = 2.0
                        * std::f64::consts::PI
                        * ((fy * y) as f64 / h as f64 + (fx * x) as f64 / w as f64);
                    acc += plane[(y, x)] * Complex64::new(angle.cos(), -angle.sin());
                }
            }
            acc / (w * h) as f64
        })
    }

    #[test]
    fn test_dft_1d_impulse_is_flat() {
        let n = 8;
        let mut input = vec![Complex64::new(0.0, 0.0); n];
        input[0] = Complex64::new(8.0, 0.0);
        let mut output = vec![Complex64::new(0.0, 0.0); n];

        dft_1d(&input, &mut output, &twiddles(n), Direction::Forward);

        for value in output {
            assert_close(value, Complex64::new(1.0, 0.0), 1e-12);
        }
    }

    #[test]
    fn test_dft_1d_forward_divides_inverse_does_not() {
        let n = 4;
        let input = vec![Complex64::new(1.0, 0.0); n];
        let mut fwd = vec![Complex64::new(0.0, 0.0); n];
        let mut inv = vec![Complex64::new(0.0, 0.0); n];

        dft_1d(&input, &mut fwd, &twiddles(n), Direction::Forward);
        dft_1d(&input, &mut inv, &twiddles(n), Direction::Inverse);

        assert_close(fwd[0], Complex64::new(1.0, 0.0), 1e-12);
        assert_close(inv[0], Complex64::new(4.0, 0.0), 1e-12);
    }

    #[test]
    fn test_dft_1d_single_cosine_lands_in_two_bins() {
        // cos(2π·x/8) has energy only at frequencies 1 and N-1
        let n = 8;
        let input: Vec<Complex64> = (0..n)
            .map(|x| {
                let angle = 2.0 * std::f64::consts::PI * x as f64 / n as f64;
                Complex64::new(angle.cos(), 0.0)
            })
            .collect();
        let mut output = vec![Complex64::new(0.0, 0.0); n];

        dft_1d(&input, &mut output, &twiddles(n), Direction::Forward);

        for (freq, value) in output.iter().enumerate() {
            let expected = if freq == 1 || freq == n - 1 { 0.5 } else { 0.0 };
            assert_close(*value, Complex64::new(expected, 0.0), 1e-12);
        }
    }

    #[test]
    fn test_separable_matches_direct_evaluation() {
        let plane = Plane::from_fn(6, 5, |row, col| ((row * 31 + col * 17) % 23) as f64);
        let separable = forward(&plane);
        let direct = naive_forward_2d(&plane);

        for (a, b) in separable.as_slice().iter().zip(direct.as_slice()) {
            assert_close(*a, *b, 1e-9);
        }
    }

    #[test]
    fn test_round_trip_non_square() {
        let plane = Plane::from_fn(7, 4, |row, col| ((row * 7 + col * 13) % 256) as u8);
        let restored = inverse(&forward(&plane));

        assert_eq!(restored.dimensions(), (7, 4));
        for (a, b) in restored.as_slice().iter().zip(plane.as_slice()) {
            assert!((a - *b as f64).abs() < 1e-9, "{a} vs {b}");
        }
    }

    #[test]
    fn test_real_input_has_conjugate_symmetric_spectrum() {
        let plane = Plane::from_fn(4, 4, |row, col| (row * 4 + col) as u8);
        let spectrum = forward(&plane);

        for fy in 0..4 {
            for fx in 0..4 {
                let mirrored = spectrum[((4 - fy) % 4, (4 - fx) % 4)];
                assert_close(spectrum[(fy, fx)], mirrored.conj(), 1e-9);
            }
        }
    }
}
