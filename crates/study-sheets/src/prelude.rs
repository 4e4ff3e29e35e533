//! Prelude module - common imports for study-sheets users
//!
//! ```rust
//! use study_sheets::prelude::*;
//! ```

pub use crate::{
    // Record types
    AnyRecordSet,
    // Sheet model
    Cell,
    // CSV types
    CsvError,
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,

    // Error types
    Error,
    Kanji,
    Phrase,
    Record,
    RecordKind,
    RecordMap,
    RecordSet,
    Result,
    Row,
    Sheet,

    // Extension traits
    SheetExt,
    SheetParser,
    Vocabulary,
};
