//! Error types for SLW
//!
//! Only construction and resizing can fail. Every other window operation is
//! total once a window exists.

use thiserror::Error;

/// Result type alias for SLW operations
pub type Result<T> = std::result::Result<T, SlwError>;

/// Main error type for SLW operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlwError {
    /// Requested width is zero, negative or does not fit the platform
    #[error("Invalid capacity: {requested} (width must be a positive integer)")]
    InvalidCapacity { requested: String },

    /// Classifier thresholds are NaN or out of range
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    /// Category name could not be parsed
    #[error("Unknown category: {0:?} (expected none, read or write)")]
    UnknownCategory(String),
}

impl SlwError {
    pub(crate) fn invalid_capacity(requested: impl ToString) -> Self {
        SlwError::InvalidCapacity {
            requested: requested.to_string(),
        }
    }
}
