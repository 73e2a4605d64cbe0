//! Error types for pixscale-core
//!
//! Provides a unified error type for raster validation and parameter
//! checking. Every variant is raised before any pixel is read or written;
//! kernels themselves are total and never fail.

use thiserror::Error;

/// pixscale-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Row stride shorter than the row width
    #[error("invalid stride: {stride} < width {width}")]
    InvalidStride { stride: usize, width: u32 },

    /// Pixel buffer too small for the declared geometry
    #[error("buffer too small: need {required} pixels, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pixscale-core operations
pub type Result<T> = std::result::Result<T, Error>;
