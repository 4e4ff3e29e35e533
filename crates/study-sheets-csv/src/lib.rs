//! # study-sheets-csv
//!
//! CSV reader and writer for study-sheets.
//!
//! The reader is line driven: a producer hands it one physical line at a
//! time and then signals the end of input. Quoted fields may span several
//! physical lines; a span is detected by the parity of quote characters on
//! each line and is never closed on the reader's behalf.
//!
//! ```rust
//! use study_sheets_csv::{CsvReadOptions, CsvWriteOptions, CsvWriter, SheetParser};
//!
//! let mut parser = SheetParser::new("Phrases", &CsvReadOptions::default());
//! parser.push_line("\"the multiline");
//! parser.push_line("test\",,testing");
//! let sheet = parser.finish().unwrap();
//!
//! assert_eq!(sheet.text(0, 0), Some("the multiline\ntest"));
//! assert_eq!(sheet.text(0, 2), Some("testing"));
//!
//! let lines = CsvWriter::to_lines(&sheet, &CsvWriteOptions::default());
//! assert_eq!(lines, vec!["\"the multiline\ntest\",,testing"]);
//! ```

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator, QUOTE};
pub use reader::{CsvReader, SheetParser};
pub use writer::CsvWriter;
