//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building fixtures or comparing results
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixscale_core::Error),

    /// Invalid fixture parameters
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
