//! Error types for the walking crate

use thiserror::Error;

/// Main error type for the walking crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action {action} (expected 0 = LEFT or 1 = RIGHT)")]
    InvalidAction { action: usize },

    #[error("value table has {got} entries, {expected} were expected")]
    ValueTableSizeMismatch { expected: usize, got: usize },

    #[error("terminal state {state} must have value 0, got {value}")]
    NonZeroTerminalValue { state: usize, value: f64 },

    #[error("walk needs at least 3 states (two terminals and one non-terminal), got {n_states}")]
    InvalidStateCount { n_states: usize },

    #[error("episode already ended in terminal state {state}; reset before stepping again")]
    EpisodeTerminated { state: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

impl Error {
    /// Shorthand for configuration errors built from a message
    pub fn config(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }
}
