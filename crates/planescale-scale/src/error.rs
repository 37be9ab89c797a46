//! Error types for planescale-scale

use thiserror::Error;

/// Errors that can occur while scaling
#[derive(Debug, Error)]
pub enum ScaleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] planescale_core::Error),

    /// Narrowing scale outside `256..=32768`
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// Invalid dimensions, strides or ratios
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Combination of format and ratio not handled by this scaler
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Requested image exceeds the configured sample limit
    #[error("image too large: {width}x{height}")]
    ImageTooLarge { width: u32, height: u32 },
}

/// Result type for scale operations
pub type ScaleResult<T> = Result<T, ScaleError>;
