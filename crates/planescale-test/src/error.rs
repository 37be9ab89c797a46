//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to decode a plane dump
    #[error("failed to load plane '{path}': {message}")]
    PlaneLoad { path: String, message: String },

    /// Failed to encode a plane dump
    #[error("failed to write plane '{path}': {message}")]
    PlaneWrite { path: String, message: String },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {message}")]
    DirectoryCreate { path: String, message: String },

    /// Plane construction failed
    #[error("plane error: {0}")]
    Core(#[from] planescale_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
