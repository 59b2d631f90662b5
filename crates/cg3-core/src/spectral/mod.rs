//! Frequency-domain resampling.
//!
//! The conversion resizes each channel by transforming it, cropping or
//! padding the spectrum around zero frequency, and transforming back:
//!
//! ```text
//! Plane<u8> --forward--> Spectrum --resize--> Spectrum --reconstruct--> Plane<u8>
//!  (H × W)                (H × W)             (H' × W')                  (H' × W')
//! ```

mod magnitude;
mod reconstruct;
mod resample;
mod transform;

pub use magnitude::{magnitude_image, magnitude_sample, MAGNITUDE_GAIN, MAGNITUDE_OFFSET};
pub use reconstruct::{reconstruct, to_sample};
pub use resample::resize;
pub use transform::{forward, inverse, inverse_complex, transform_2d, Direction, Spectrum};

use crate::plane::Plane;

/// Forward transform, spectral resize and reconstruction of one channel.
pub fn resample_plane(plane: &Plane<u8>, target_width: usize, target_height: usize) -> Plane<u8> {
    let spectrum = forward(plane);
    let resized = resize(&spectrum, target_width, target_height);
    reconstruct(&resized)
}
