//! Error types for the environment abstraction.

use thiserror::Error;

/// Errors raised while reading configuration from the outside world.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Underlying reader failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the value was read
    #[error("Missing value: {0}")]
    MissingValue(&'static str),

    /// Token could not be parsed as an integer
    #[error("Cannot parse {name} from {value:?}")]
    Parse { name: &'static str, value: String },
}

impl EnvError {
    /// Creates a parse error.
    pub fn parse(name: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            name,
            value: value.into(),
        }
    }
}
