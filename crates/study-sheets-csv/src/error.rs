//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended inside a quoted field
    #[error("Unterminated quoted field starting at line {line} in '{sheet}'")]
    UnterminatedQuote { sheet: String, line: usize },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] study_sheets_core::Error),
}
