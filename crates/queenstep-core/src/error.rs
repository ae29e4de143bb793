//! Error types for queenstep

use thiserror::Error;

/// Main error type for queenstep operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueensError {
    /// The engine was configured with an unusable board dimension
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid operation for the current search state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for queenstep operations
pub type Result<T> = std::result::Result<T, QueensError>;
