//! Sample planes and RGBA channel decomposition.
//!
//! A [`Plane`] is the unit every stage consumes and produces. [`RgbPlanes`]
//! groups the three color channels of one image at one stage.

mod channels;
mod error;
mod plane;

pub use channels::RgbPlanes;
pub use error::PlaneError;
pub use plane::Plane;
