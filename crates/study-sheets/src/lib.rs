//! # study-sheets
//!
//! Tabular data interchange for a personal study app.
//!
//! Data moves between three shapes:
//!
//! - delimited text, where quoted fields may span several lines
//! - a sparse [`Sheet`] grid, the form a spreadsheet editor works on
//! - keyed JSON records ([`Vocabulary`], [`Phrase`], [`Kanji`]), keyed by the
//!   MD5 digest of their primary text and summarised by a short fingerprint
//!
//! ## Example
//!
//! ```rust
//! use study_sheets::prelude::*;
//!
//! let lines = [
//!     "Kanji,English,Onyomi,Kunyomi,Group,Tags,Radical Examples",
//!     "画,\"brush-stroke, picture\",ガ,,,TV,",
//! ];
//! let sheet = CsvReader::read_lines(lines, "Kanji", &CsvReadOptions::default()).unwrap();
//!
//! let set = sheet.to_records().unwrap();
//! assert_eq!(set.kind(), RecordKind::Kanji);
//! assert_eq!(set.len(), 1);
//!
//! // and back out again
//! let csv = CsvWriter::to_lines(&set.to_sheet(), &CsvWriteOptions::default());
//! assert_eq!(csv[1], "画,\"brush-stroke, picture\",ガ,,,TV,");
//! ```

mod error;
pub mod prelude;
pub mod sync;

pub use error::{Error, Result};
pub use sync::{sync_sheet, SyncOutcome};

// Re-export core types
pub use study_sheets_core::{Cell, Row, Sheet};

// Re-export CSV types
pub use study_sheets_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
    SheetParser,
};

// Re-export record types
pub use study_sheets_records::{
    content_key, convert_sheet, fingerprint, records_from_json, records_from_sheet,
    sheet_from_json, sheet_from_records, AnyRecordSet, Field, HeaderMap, Kanji, Phrase, Record,
    RecordError, RecordKind, RecordMap, RecordResult, RecordSet, Vocabulary,
};

use std::path::Path;

/// Extension trait for Sheet to add file I/O and record conversion
pub trait SheetExt: Sized {
    /// Open a CSV file; the sheet is named after the file stem unless overridden
    fn open<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<Self>;

    /// Save the sheet to a CSV file
    fn save<P: AsRef<Path>>(&self, path: P, options: &CsvWriteOptions) -> Result<()>;

    /// Convert to records of the kind named by the sheet
    fn to_records(&self) -> Result<AnyRecordSet>;
}

impl SheetExt for Sheet {
    fn open<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<Sheet> {
        Ok(CsvReader::read_file(path, options)?)
    }

    fn save<P: AsRef<Path>>(&self, path: P, options: &CsvWriteOptions) -> Result<()> {
        Ok(CsvWriter::write_file(self, path, options)?)
    }

    fn to_records(&self) -> Result<AnyRecordSet> {
        Ok(convert_sheet(self)?)
    }
}

/// Read a CSV data file and convert it to records
///
/// The kind comes from the file stem (`Vocabulary.csv`, `Phrases.csv`,
/// `Kanji.csv`) unless `options.name` overrides it.
pub fn import_csv<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<AnyRecordSet> {
    let sheet = Sheet::open(path, options)?;
    sheet.to_records()
}

/// Write persisted records of `kind` out as a CSV file
pub fn export_csv<P: AsRef<Path>>(
    path: P,
    kind: RecordKind,
    records_json: &str,
    options: &CsvWriteOptions,
) -> Result<()> {
    let sheet = sheet_from_json(kind, records_json)?;
    sheet.save(path, options)
}
