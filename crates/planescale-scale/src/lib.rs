//! planescale-scale - Fixed-point plane rescaling
//!
//! This crate resamples 8-bit and 16-bit planes between arbitrary sizes:
//!
//! - Exact-ratio fast paths (1/2, 1/4, 3/4, 3/8, 2x)
//! - Box (area average), bilinear, linear and point filters
//! - 16-bit to 8-bit narrowing with a per-call scale
//! - Interleaved UV and ARGB planes
//! - Whole YUV images with chroma subsampling and alpha
//!
//! Positions are 16.16 fixed point. A requested filter is first reduced to
//! the cheapest one that gives the same result for the ratio
//! ([`reduce_filter`]), then [`select_path`] picks the routine.

mod api;
mod cursor;
mod error;
pub mod fixed;
mod image;
mod options;
mod packed;
pub mod plane;
pub mod reduce;
mod row;
pub mod slope;
pub mod store;
mod typed;

pub use api::{
    copy_plane, copy_plane_16, scale_plane, scale_plane_12, scale_plane_16, scale_plane_16_to_8,
    scale_plane_down2_16_to_8,
};
pub use error::{ScaleError, ScaleResult};
pub use image::scale_image;
pub use options::{DEFAULT_MAX_IMAGE_SIZE, ScaleOptions};
pub use packed::{scale_argb, scale_uv, scale_uv_16};
pub use plane::{ScalePath, select_path};
pub use reduce::reduce_filter;
pub use slope::{ScaleStep, scale_slope};
pub use store::{Narrow, ScaleSample};
pub use typed::{scale, scale_into, scale_to_8};
