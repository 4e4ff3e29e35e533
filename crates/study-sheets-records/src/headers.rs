//! Column header resolution
//!
//! Header row cells are matched case-insensitively against a fixed synonym
//! table. The first synonym of each field is its canonical header, used when
//! records are exported back to a sheet.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{RecordError, RecordResult};
use crate::kind::RecordKind;
use study_sheets_core::{Cell, Row};

/// Semantic fields a column can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    English,
    Japanese,
    Romaji,
    Group,
    SubGroup,
    Tag,
    Pronounce,
    Literal,
    Lesson,
    Kanji,
    Onyomi,
    Kunyomi,
    RadicalExamples,
}

impl Field {
    /// Every field, in lookup order
    pub const ALL: [Field; 13] = [
        Field::English,
        Field::Japanese,
        Field::Romaji,
        Field::Group,
        Field::SubGroup,
        Field::Tag,
        Field::Pronounce,
        Field::Literal,
        Field::Lesson,
        Field::Kanji,
        Field::Onyomi,
        Field::Kunyomi,
        Field::RadicalExamples,
    ];

    /// Key used for this field in persisted records
    pub fn key(self) -> &'static str {
        match self {
            Field::English => "english",
            Field::Japanese => "japanese",
            Field::Romaji => "romaji",
            Field::Group => "grp",
            Field::SubGroup => "subGrp",
            Field::Tag => "tag",
            Field::Pronounce => "pronounce",
            Field::Literal => "lit",
            Field::Lesson => "lesson",
            Field::Kanji => "kanji",
            Field::Onyomi => "on",
            Field::Kunyomi => "kun",
            Field::RadicalExamples => "radex",
        }
    }

    /// Accepted header strings; the first is canonical
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Field::English => &["English"],
            Field::Japanese => &["Japanese"],
            Field::Romaji => &["Romaji"],
            Field::Group => &["Group"],
            Field::SubGroup => &["Sub Group", "Subgroup"],
            Field::Tag => &["Tags"],
            Field::Pronounce => &["Pronounced", "Pronounce", "Pronunciation"],
            Field::Literal => &["Literal"],
            Field::Lesson => &["Lesson"],
            Field::Kanji => &["Kanji"],
            Field::Onyomi => &["Onyomi"],
            Field::Kunyomi => &["Kunyomi"],
            Field::RadicalExamples => &["Radical Examples", "Radex"],
        }
    }

    /// Header written on export
    pub fn canonical_header(self) -> &'static str {
        self.headers()[0]
    }

    /// Find the field a header names, ignoring case
    pub fn lookup(header: &str) -> Option<Field> {
        if header.is_empty() {
            return None;
        }
        let search = header.to_lowercase();
        Field::ALL.into_iter().find(|field| {
            field
                .headers()
                .iter()
                .any(|accepted| accepted.to_lowercase() == search)
        })
    }
}

/// Resolved field -> column index mapping for one sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    columns: BTreeMap<Field, usize>,
}

impl HeaderMap {
    /// Map every recognised header cell to its column
    ///
    /// A field named by several columns resolves to the last of them.
    pub fn scan<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a Cell)>,
    {
        let mut columns = BTreeMap::new();
        for (col, cell) in cells {
            if let Some(field) = Field::lookup(cell.text()) {
                columns.insert(field, col);
            }
        }
        Self { columns }
    }

    /// Scan the header row and check every column `kind` requires is present
    pub fn resolve(kind: RecordKind, sheet: &str, header_row: &Row) -> RecordResult<Self> {
        let map = Self::scan(header_row.iter());
        for &field in kind.required_fields() {
            map.require(field, sheet)?;
        }
        debug!(sheet, kind = %kind, columns = ?map.columns, "headers resolved");
        Ok(map)
    }

    /// Column holding `field`, if any
    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Column holding `field`, or a header error naming it
    pub fn require(&self, field: Field, sheet: &str) -> RecordResult<usize> {
        self.column(field).ok_or_else(|| RecordError::MissingHeader {
            field: field.key(),
            sheet: sheet.to_string(),
        })
    }
}
