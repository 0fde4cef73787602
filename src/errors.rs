//! Error types for rapid_sentrank
//!
//! Input-validation failures are surfaced immediately. Numeric edge cases
//! (dangling sentences, an all-zero similarity matrix, non-convergence) are
//! absorbed by the ranker and never appear here.

use thiserror::Error;

/// Errors produced while summarizing or evaluating text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummarizeError {
    /// The input cannot be processed (empty document, empty reference, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested summary length is outside `[1, available]`
    #[error("requested {requested} sentences, document has {available}")]
    OutOfRange { requested: usize, available: usize },

    /// A configuration value is outside its legal range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SummarizeError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn out_of_range(requested: usize, available: usize) -> Self {
        Self::OutOfRange {
            requested,
            available,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SummarizeError>;
