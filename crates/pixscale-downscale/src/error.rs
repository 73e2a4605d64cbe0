//! Error types for pixscale-downscale

use pixscale_core::ScaleFactor;
use thiserror::Error;

/// Errors that can occur when configuring or running a downscaler
#[derive(Debug, Error)]
pub enum DownscaleError {
    /// Core library error (raster geometry)
    #[error("core error: {0}")]
    Core(#[from] pixscale_core::Error),

    /// No box kernel exists for the requested ratio
    #[error("box downscale does not support ratio {ratio}")]
    UnsupportedRatio { ratio: ScaleFactor },

    /// The source is smaller than one block in some dimension
    #[error("source {width}x{height} is smaller than ratio {ratio}")]
    SourceTooSmall {
        width: u32,
        height: u32,
        ratio: ScaleFactor,
    },

    /// The caller's cancellation flag was raised between rows
    #[error("downscale cancelled")]
    Cancelled,
}

/// Result type for downscale operations
pub type DownscaleResult<T> = Result<T, DownscaleError>;
