//! Centralized error types for W3S.
//!
//! The analysis pipeline degrades upstream failures to empty results at
//! each component boundary, so this enum only covers the failures that
//! genuinely stop the process: bad configuration and adapter I/O.

use thiserror::Error;

/// Main error type for W3S operations.
#[derive(Error, Debug)]
pub enum W3sError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for W3S operations.
pub type W3sResult<T> = Result<T, W3sError>;

impl W3sError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
