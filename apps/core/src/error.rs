use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// Classification and response selection are total and never produce one of these;
/// only name capture, configuration and report output can fail.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors, e.g. while writing the transcript.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g. an empty customer name).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g. an unknown report format).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Internal(format!("Keyword pattern error: {}", err))
    }
}
