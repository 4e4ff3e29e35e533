//! Error type covering every study-sheets layer

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the high-level helpers
#[derive(Debug, Error)]
pub enum Error {
    /// Sheet model error
    #[error(transparent)]
    Core(#[from] study_sheets_core::Error),

    /// CSV read/write error
    #[error(transparent)]
    Csv(#[from] study_sheets_csv::CsvError),

    /// Header, record or kind error
    #[error(transparent)]
    Records(#[from] study_sheets_records::RecordError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sheet JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
