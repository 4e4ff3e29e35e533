//! Record mapping error types

use thiserror::Error;

/// Result type for record mapping operations
pub type RecordResult<T> = std::result::Result<T, RecordError>;

/// Errors that can occur while mapping sheets to records and back
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required column header is missing or misnamed
    #[error("Missing or incorrect header '{field}' in {sheet}.csv")]
    MissingHeader { field: &'static str, sheet: String },

    /// A data row has no text in its primary column (1-based position)
    #[error("Missing {field} at row {row}, column {column} in {sheet}")]
    MissingPrimary {
        field: &'static str,
        row: usize,
        column: usize,
        sheet: String,
    },

    /// Sheet name is not one of the known record kinds
    #[error("Mapping for {0} not implemented")]
    UnsupportedKind(String),

    /// Persisted records could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
