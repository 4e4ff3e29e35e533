//! Error types for study-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in study-sheets-core
#[derive(Debug, Error)]
pub enum Error {
    /// Sheet is unnamed or holds no rows
    #[error("Sheet missing name or data: '{0}'")]
    NotFilled(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
