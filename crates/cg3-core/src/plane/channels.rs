//! Split an RGBA buffer into red/green/blue planes and merge them back.
//!
//! Alpha is dropped on the way in and forced opaque on the way out.

use super::error::PlaneError;
use super::plane::Plane;

/// The red, green and blue planes of one image, all of one size.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbPlanes<T> {
    red: Plane<T>,
    green: Plane<T>,
    blue: Plane<T>,
}

impl<T> RgbPlanes<T> {
    /// Group three planes, rejecting them unless their sizes agree.
    pub fn new(red: Plane<T>, green: Plane<T>, blue: Plane<T>) -> Result<Self, PlaneError> {
        if red.dimensions() != green.dimensions() || red.dimensions() != blue.dimensions() {
            return Err(PlaneError::ChannelSizeMismatch {
                red: red.dimensions(),
                green: green.dimensions(),
                blue: blue.dimensions(),
            });
        }
        Ok(Self { red, green, blue })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.red.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.red.height()
    }

    #[inline]
    pub fn red(&self) -> &Plane<T> {
        &self.red
    }

    #[inline]
    pub fn green(&self) -> &Plane<T> {
        &self.green
    }

    #[inline]
    pub fn blue(&self) -> &Plane<T> {
        &self.blue
    }

    /// Channels in red, green, blue order.
    pub fn channels(&self) -> [&Plane<T>; 3] {
        [&self.red, &self.green, &self.blue]
    }

    pub fn into_channels(self) -> (Plane<T>, Plane<T>, Plane<T>) {
        (self.red, self.green, self.blue)
    }

    /// Run `f` on each channel independently, returning the results in
    /// red, green, blue order.
    ///
    /// Channels share no state, so with the `rayon` feature and
    /// `parallel == true` the three calls run concurrently. Without the
    /// feature the flag is ignored.
    pub fn each_channel<R, F>(&self, parallel: bool, f: F) -> [R; 3]
    where
        T: Sync,
        R: Send,
        F: Fn(&Plane<T>) -> R + Sync,
    {
        #[cfg(feature = "rayon")]
        if parallel {
            let (red, (green, blue)) = rayon::join(
                || f(&self.red),
                || rayon::join(|| f(&self.green), || f(&self.blue)),
            );
            return [red, green, blue];
        }
        #[cfg(not(feature = "rayon"))]
        let _ = parallel;

        [f(&self.red), f(&self.green), f(&self.blue)]
    }

    /// [`each_channel`](Self::each_channel) for plane-to-plane stages.
    pub fn map_channels<U, F>(&self, parallel: bool, f: F) -> RgbPlanes<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&Plane<T>) -> Plane<U> + Sync,
    {
        let [red, green, blue] = self.each_channel(parallel, f);
        RgbPlanes { red, green, blue }
    }
}

impl RgbPlanes<u8> {
    /// Decompose an 8-bit RGBA buffer, discarding alpha.
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Result<Self, PlaneError> {
        let expected = width * height * 4;
        if rgba.len() != expected {
            return Err(PlaneError::RgbaLengthMismatch {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }

        let pixels = width * height;
        let mut red = Vec::with_capacity(pixels);
        let mut green = Vec::with_capacity(pixels);
        let mut blue = Vec::with_capacity(pixels);
        for px in rgba.chunks_exact(4) {
            red.push(px[0]);
            green.push(px[1]);
            blue.push(px[2]);
        }

        Ok(Self {
            red: Plane::from_vec(width, height, red)?,
            green: Plane::from_vec(width, height, green)?,
            blue: Plane::from_vec(width, height, blue)?,
        })
    }

    /// Recompose into an RGBA buffer with alpha 255.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.width() * self.height() * 4);
        for ((&r, &g), &b) in self
            .red
            .as_slice()
            .iter()
            .zip(self.green.as_slice())
            .zip(self.blue.as_slice())
        {
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
        rgba
    }

    /// The `[r, g, b]` triple at `(row, col)`.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.red[(row, col)],
            self.green[(row, col)],
            self.blue[(row, col)],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_drops_alpha() {
        let rgba = [10, 20, 30, 0, 40, 50, 60, 128];
        let planes = RgbPlanes::from_rgba(2, 1, &rgba).unwrap();

        assert_eq!(planes.red().as_slice(), &[10, 40]);
        assert_eq!(planes.green().as_slice(), &[20, 50]);
        assert_eq!(planes.blue().as_slice(), &[30, 60]);
    }

    #[test]
    fn test_to_rgba_forces_opaque() {
        let rgba = [10, 20, 30, 0, 40, 50, 60, 128];
        let planes = RgbPlanes::from_rgba(2, 1, &rgba).unwrap();

        assert_eq!(planes.to_rgba(), vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_from_rgba_rejects_short_buffer() {
        let err = RgbPlanes::from_rgba(2, 2, &[0u8; 15]).unwrap_err();
        assert!(matches!(
            err,
            PlaneError::RgbaLengthMismatch {
                expected: 16,
                actual: 15,
                ..
            }
        ));
    }

    #[test]
    fn test_new_rejects_mismatched_channels() {
        let result = RgbPlanes::new(
            Plane::filled(2, 2, 0u8),
            Plane::filled(2, 2, 0u8),
            Plane::filled(2, 3, 0u8),
        );
        assert!(matches!(result, Err(PlaneError::ChannelSizeMismatch { .. })));
    }

    #[test]
    fn test_map_channels_same_result_either_way() {
        let planes = RgbPlanes::new(
            Plane::from_fn(4, 2, |r, c| (r * 4 + c) as u8),
            Plane::filled(4, 2, 7u8),
            Plane::filled(4, 2, 9u8),
        )
        .unwrap();

        let sequential = planes.map_channels(false, |p| p.map(|&v| v as u32 + 1));
        let parallel = planes.map_channels(true, |p| p.map(|&v| v as u32 + 1));

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.green()[(1, 3)], 8);
    }
}
