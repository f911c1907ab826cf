use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents errors originating from the SQLite store, typically from `sqlx`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents standard input/output errors (local store file, CSV output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents submission validation errors (missing field, unknown option).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents (de)serialization failures of persisted or exported data.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Represents store operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl AppError {
    /// Whether the error came out of the persistence boundary.
    ///
    /// All of these are reported to the submitter the same way: a single
    /// generic failure with a retry prompt.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            AppError::Database(_) | AppError::Io(_) | AppError::Serialization(_) | AppError::Timeout(_)
        )
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Store call timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Serialization(format!("CSV error: {}", err))
    }
}

impl From<crate::models::UnknownVariant> for AppError {
    fn from(err: crate::models::UnknownVariant) -> Self {
        AppError::Validation(err.to_string())
    }
}
