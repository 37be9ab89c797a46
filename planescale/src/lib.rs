//! planescale - Planar image rescaling for Rust
//!
//! # Overview
//!
//! planescale resamples planar image buffers between arbitrary sizes:
//!
//! - 8-bit and 16-bit planes, with 16-bit to 8-bit narrowing
//! - Box, bilinear, linear and point filters
//! - Exact-ratio fast paths (1/2, 1/4, 3/4, 3/8, 2x)
//! - Interleaved UV and ARGB planes
//! - YUV images with chroma subsampling and alpha
//!
//! # Example
//!
//! ```
//! use planescale::{FilterMode, Plane};
//!
//! let src = Plane::<u8>::from_fn(64, 48, |x, y| (x + y) as u8).unwrap();
//! let dst = planescale::scale::scale(&src.view(), 32, 24, FilterMode::Box).unwrap();
//! assert_eq!(dst.width(), 32);
//! assert_eq!(dst.height(), 24);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use planescale_core::*;

// Re-export the scaler as a module to avoid name conflicts
pub use planescale_scale as scale;
