//! Error types for pixscale-upscale

use pixscale_core::ScaleFactor;
use thiserror::Error;

use crate::algorithm::Algorithm;

/// Errors that can occur when configuring or running an upscaler
#[derive(Debug, Error)]
pub enum UpscaleError {
    /// Core library error (raster geometry, tolerances)
    #[error("core error: {0}")]
    Core(#[from] pixscale_core::Error),

    /// The algorithm has no kernel for the requested scale
    #[error("{algorithm} does not support scale {scale}")]
    UnsupportedScale {
        algorithm: Algorithm,
        scale: ScaleFactor,
    },

    /// The caller's cancellation flag was raised between rows
    #[error("upscale cancelled")]
    Cancelled,
}

/// Result type for upscale operations
pub type UpscaleResult<T> = Result<T, UpscaleError>;
