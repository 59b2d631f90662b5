//! Log-magnitude visualization of a spectrum.
//!
//! Display only: zero frequency is moved to the middle of the image so the
//! low frequencies form one central blob instead of four corner pieces. The
//! spectrum itself is never reordered.

use crate::plane::Plane;

use super::transform::Spectrum;

/// Brightness of a coefficient with magnitude 1.
pub const MAGNITUDE_OFFSET: f64 = 128.0;
/// Brightness gained per natural-log unit of magnitude.
pub const MAGNITUDE_GAIN: f64 = 23.0;

/// `128 + 23·ln(|c|)`, rounded and clamped to `0..=255`.
///
/// A zero coefficient maps to 0.
#[inline]
pub fn magnitude_sample(magnitude: f64) -> u8 {
    let value = MAGNITUDE_OFFSET + MAGNITUDE_GAIN * magnitude.ln();
    (value + 0.5).clamp(0.0, 255.0) as u8
}

/// Render the spectrum's log magnitude with zero frequency recentered.
///
/// Coefficient `(fy, fx)` lands at `((fy + H/2) mod H, (fx + W/2) mod W)`.
pub fn magnitude_image(spectrum: &Spectrum) -> Plane<u8> {
    let (width, height) = spectrum.dimensions();
    let mut out = Plane::zeroed(width, height);
    for fy in 0..height {
        let row = spectrum.row(fy);
        let y = (fy + height / 2) % height;
        for (fx, coefficient) in row.iter().enumerate() {
            let x = (fx + width / 2) % width;
            out[(y, x)] = magnitude_sample(coefficient.norm());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_magnitude_sample_curve() {
        assert_eq!(magnitude_sample(1.0), 128);
        assert_eq!(magnitude_sample(0.0), 0);
        // e^(127/23) ≈ 250: saturates at the top
        assert_eq!(magnitude_sample(1.0e6), 255);
        assert_eq!(magnitude_sample(std::f64::consts::E), 151);
    }

    #[test]
    fn test_zero_frequency_moves_to_center() {
        let mut spectrum = Spectrum::filled(4, 6, Complex64::new(0.0, 0.0));
        spectrum[(0, 0)] = Complex64::new(1.0, 0.0);

        let image = magnitude_image(&spectrum);

        assert_eq!(image[(3, 2)], 128);
        assert_eq!(image.as_slice().iter().filter(|&&v| v != 0).count(), 1);
    }

    #[test]
    fn test_odd_dimensions_wrap() {
        let mut spectrum = Spectrum::filled(3, 3, Complex64::new(0.0, 0.0));
        spectrum[(2, 2)] = Complex64::new(0.0, 1.0);

        let image = magnitude_image(&spectrum);

        // (2 + 1) % 3 = 0
        assert_eq!(image[(0, 0)], 128);
    }
}
