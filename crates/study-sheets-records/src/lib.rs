//! # study-sheets-records
//!
//! Turns sheets into keyed study records and back.
//!
//! Row 0 of a sheet names its columns. Headers are matched against a fixed
//! synonym table ([`Field`]) and every column a [`RecordKind`] requires must
//! be present. Each data row becomes one record keyed by the MD5 hex digest
//! of its primary text (`japanese`, or `kanji` for kanji sheets). A
//! four-character fingerprint over the whole record map lets storage tell
//! whether anything changed.
//!
//! ```rust
//! use study_sheets_core::Sheet;
//! use study_sheets_records::{records_from_sheet, Vocabulary};
//!
//! let mut sheet = Sheet::new("Vocabulary");
//! let headers = ["Japanese", "Romaji", "English", "Group", "Subgroup", "Pronunciation", "Tags"];
//! for (col, header) in headers.into_iter().enumerate() {
//!     sheet.set_text(0, col, header);
//! }
//! sheet.set_text(1, 0, "ねこ");
//! sheet.set_text(1, 2, "cat");
//!
//! let set = records_from_sheet::<Vocabulary>(&sheet).unwrap();
//! let cat = &set.records["fcedeb3e47d759777985cdd471841cd1"];
//! assert_eq!(cat.english.as_deref(), Some("cat"));
//! assert_eq!(cat.romaji, None);
//! assert_eq!(set.hash.len(), 4);
//! ```

mod convert;
mod error;
pub mod headers;
mod kind;
mod mapper;
mod record;

pub use convert::{convert_sheet, records_from_json, sheet_from_json, AnyRecordSet};
pub use error::{RecordError, RecordResult};
pub use headers::{Field, HeaderMap};
pub use kind::RecordKind;
pub use mapper::{
    content_key, fingerprint, records_from_sheet, sheet_from_records, to_matrix, Matrix,
    RecordMap, RecordSet, FINGERPRINT_LEN,
};
pub use record::{Kanji, Phrase, Record, Vocabulary};
