//! Error types for planescale-core
//!
//! Plane construction and image assembly report failures through this
//! type. The scaler crate wraps it in its own error enum.

use thiserror::Error;

/// planescale-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid plane dimensions
    #[error("invalid plane dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Row stride shorter than the row width
    #[error("invalid stride: {stride} samples for a row of {width}")]
    InvalidStride { stride: usize, width: u32 },

    /// Owned buffer length does not match the plane size
    #[error("size mismatch: expected {expected} samples, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Sample coordinates outside the plane
    #[error("sample ({x}, {y}) out of bounds")]
    OutOfBounds { x: u32, y: u32 },

    /// Backing buffer cannot hold the described plane
    #[error("buffer too small: need {required} samples, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Plane dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Bit depth not supported by the operation
    #[error("unsupported bit depth: {0} bits")]
    UnsupportedDepth(u32),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Memory allocation failed
    #[error("memory allocation failed")]
    AllocationFailed,
}

/// Result type alias for planescale-core operations
pub type Result<T> = std::result::Result<T, Error>;
