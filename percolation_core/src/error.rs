//! Error types for the percolation core.

use thiserror::Error;

/// Precondition violations raised by the grid model and the statistics.
///
/// None of these are recoverable: they signal a caller bug or a bad
/// configuration, and the run is expected to stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    /// Grid size was zero or negative
    #[error("Invalid grid dimension: {0} (must be > 0)")]
    InvalidDimension(i64),

    /// Trial count or sample was unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Row or column outside [1, size]
    #[error("Index out of range: ({row}, {col}) not in [1, {size}]")]
    IndexOutOfRange { row: i64, col: i64, size: usize },
}

impl PercolationError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PercolationError>;
