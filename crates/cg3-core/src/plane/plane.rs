//! Row-major sample grid shared by every pipeline stage.

use std::ops::{Index, IndexMut};

use super::error::PlaneError;

/// A rectangular grid of samples stored as one flat row-major buffer.
///
/// Width and height are fixed for the lifetime of the plane. Spatial planes
/// hold `u8` samples, spectra hold complex coefficients.
///
/// Indexing uses `(row, col)` and panics when out of bounds; [`Plane::get`]
/// is the checked alternative.
///
/// # Example
///
/// ```
/// use cg3_core::Plane;
///
/// let mut plane = Plane::filled(3, 2, 0u8);
/// plane[(1, 2)] = 7;
/// assert_eq!(plane.get(1, 2), Some(&7));
/// assert_eq!(plane.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone> Plane<T> {
    /// Create a plane with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }
}

impl<T: Clone + Default> Plane<T> {
    /// Create a plane of default-valued samples (zero for numbers).
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T> Plane<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// Fails when the buffer length does not equal `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, PlaneError> {
        if data.len() != width * height {
            return Err(PlaneError::LengthMismatch {
                width,
                height,
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a plane by evaluating `f(row, col)` for every sample.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` pair, convenient for dimension comparisons.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Checked access to the sample at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.data.get(row * self.width + col)
        } else {
            None
        }
    }

    /// Checked mutable access to the sample at `(row, col)`.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.height && col < self.width {
            self.data.get_mut(row * self.width + col)
        } else {
            None
        }
    }

    /// One row as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics; an empty plane has no rows either way
        self.data.chunks_exact(self.width.max(1)).take(self.height)
    }

    /// Iterate mutably over rows in order.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        let height = self.height;
        self.data.chunks_exact_mut(self.width.max(1)).take(height)
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the plane and return its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` to every sample, producing a plane of the same size.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Plane<U> {
        Plane {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Copy> Plane<T> {
    /// Swap rows and columns: an H×W plane becomes W×H.
    pub fn transpose(&self) -> Plane<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.width {
            for row in 0..self.height {
                data.push(self.data[row * self.width + col]);
            }
        }
        Plane {
            width: self.height,
            height: self.width,
            data,
        }
    }
}

impl<T> Index<(usize, usize)> for Plane<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.height && col < self.width,
            "plane index ({row}, {col}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        &self.data[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Plane<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.height && col < self.width,
            "plane index ({row}, {col}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        &mut self.data[row * self.width + col]
    }
}
