//! planescale-core - Basic data structures for plane rescaling
//!
//! This crate provides the types shared by the scaler and its callers:
//!
//! - [`Sample`] - 8-bit and 16-bit sample types
//! - [`Plane`] / [`PlaneView`] / [`PlaneViewMut`] - Owned and borrowed planes
//! - [`FilterMode`] - Resampling quality
//! - [`YuvImage`] - Planar YUV image with optional alpha

pub mod error;
pub mod filter;
pub mod image;
pub mod plane;
pub mod sample;

pub use error::{Error, Result};
pub use filter::FilterMode;
pub use image::{ChromaSubsampling, PlaneData, YuvImage};
pub use plane::{Plane, PlaneView, PlaneViewMut, required_len, try_filled_vec};
pub use sample::Sample;
