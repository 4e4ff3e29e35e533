//! Sheet <-> record conversion

use indexmap::IndexMap;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{RecordError, RecordResult};
use crate::headers::{Field, HeaderMap};
use crate::record::Record;
use study_sheets_core::{Row, Sheet};

/// Non-empty rows of a sheet, in row order, cells left sparse
pub type Matrix<'a> = Vec<&'a Row>;

/// Records keyed by content key, in sheet row order
pub type RecordMap<R> = IndexMap<String, R>;

/// Number of hex characters kept from the change fingerprint digest
pub const FINGERPRINT_LEN: usize = 4;

/// Hex MD5 digest of `text`
pub fn content_key(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

/// Short digest over the JSON form of a record map
///
/// The digest covers the map in iteration order, so the same records in a
/// different row order give a different fingerprint.
pub fn fingerprint<R: Serialize>(records: &RecordMap<R>) -> RecordResult<String> {
    let json = serde_json::to_string(records)?;
    let mut digest = content_key(&json);
    digest.truncate(FINGERPRINT_LEN);
    Ok(digest)
}

/// Collect the rows of a sheet that hold cells
///
/// Column positions stay as they are in the sheet, so a cell far to the
/// right costs no more than one at column 0.
pub fn to_matrix(sheet: &Sheet) -> Matrix<'_> {
    sheet
        .rows()
        .filter(|(_, row)| !row.is_empty())
        .map(|(_, row)| row)
        .collect()
}

/// Records converted from one sheet plus their change fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "R: Record"))]
pub struct RecordSet<R> {
    /// Records keyed by the digest of their primary text
    pub records: RecordMap<R>,
    /// Change fingerprint over `records`
    pub hash: String,
}

impl<R: Record> RecordSet<R> {
    /// Wrap a record map, computing its fingerprint
    pub fn new(records: RecordMap<R>) -> RecordResult<Self> {
        let hash = fingerprint(&records)?;
        Ok(Self { records, hash })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Persisted JSON form of the records
    pub fn to_json(&self) -> RecordResult<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Export back to a sheet
    pub fn to_sheet(&self) -> Sheet {
        sheet_from_records(&self.records)
    }
}

/// Convert a sheet into keyed records
///
/// The first non-empty row holds headers. Every following non-empty row
/// becomes one record; rows repeating an earlier primary text replace the
/// earlier record in place. Any header or primary-cell problem fails the
/// whole sheet.
pub fn records_from_sheet<R: Record>(sheet: &Sheet) -> RecordResult<RecordSet<R>> {
    let kind = R::KIND;
    let matrix = to_matrix(sheet);

    let mut records = RecordMap::new();
    let Some(&header_row) = matrix.first() else {
        debug!(sheet = sheet.name(), "sheet has no rows");
        return RecordSet::new(records);
    };

    let headers = HeaderMap::resolve(kind, sheet.name(), header_row)?;
    let primary = kind.primary();
    let primary_col = headers.require(primary, sheet.name())?;

    for (i, row) in matrix.iter().enumerate().skip(1) {
        let cell = |field: Field| -> Option<String> {
            headers
                .column(field)
                .and_then(|col| row.text(col))
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };

        let text = cell(primary).ok_or_else(|| RecordError::MissingPrimary {
            field: primary.key(),
            row: i + 1,
            column: primary_col + 1,
            sheet: sheet.name().to_string(),
        })?;

        let record = R::from_cells(text, &cell);
        let key = content_key(record.primary());
        trace!(row = i, key = %key, "record");
        records.insert(key, record);
    }

    let set = RecordSet::new(records)?;
    debug!(
        sheet = sheet.name(),
        records = set.len(),
        hash = %set.hash,
        "sheet converted"
    );
    Ok(set)
}

/// Export records to a sheet named after their kind
///
/// Row 0 holds the canonical header of each required field; each record
/// fills one row after it. Fields a record lacks leave their cell absent.
pub fn sheet_from_records<R: Record>(records: &RecordMap<R>) -> Sheet {
    let kind = R::KIND;
    let fields = kind.required_fields();
    let mut sheet = Sheet::new(kind.as_str());

    for (col, field) in fields.iter().enumerate() {
        sheet.set_text(0, col, field.canonical_header());
    }

    for (idx, record) in records.values().enumerate() {
        for (col, &field) in fields.iter().enumerate() {
            if let Some(text) = record.field(field) {
                sheet.set_text(idx + 1, col, text);
            }
        }
    }

    sheet.set_len(records.len() + 1);
    sheet
}
