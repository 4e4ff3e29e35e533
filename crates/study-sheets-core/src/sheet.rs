//! Sheet type

use std::collections::BTreeMap;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::row::Row;

/// A named sparse grid of rows.
///
/// `len` is the logical row count kept by whoever fills the sheet. It lets
/// consumers know the extent of the sheet without scanning the row map.
/// Row 0 conventionally holds column headers; the sheet itself does not care.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    /// Sheet name
    pub(crate) name: String,
    /// Rows keyed by 0-based row index
    pub(crate) rows: BTreeMap<usize, Row>,
    /// Logical row count
    pub(crate) len: usize,
}

impl Sheet {
    /// Create a new empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            len: 0,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Logical row count
    pub fn len(&self) -> usize {
        self.len
    }

    /// Overwrite the logical row count
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Check if the sheet has no row entries at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of row entries (blank rows included)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// A sheet is filled when it is named and holds at least one row entry.
    pub fn is_filled(&self) -> bool {
        !self.name.is_empty() && !self.rows.is_empty()
    }

    /// Return `self` if filled, otherwise [`Error::NotFilled`]
    pub fn ensure_filled(&self) -> Result<&Self> {
        if self.is_filled() {
            Ok(self)
        } else {
            Err(Error::NotFilled(self.name.clone()))
        }
    }

    // === Row Access ===

    /// Get a row by index
    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(&idx)
    }

    /// Get a mutable row by index
    pub fn row_mut(&mut self, idx: usize) -> Option<&mut Row> {
        self.rows.get_mut(&idx)
    }

    /// Iterate row entries in ascending index order
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows.iter().map(|(idx, row)| (*idx, row))
    }

    /// Store a row at `idx` without touching the logical length
    ///
    /// Used for blank rows, which occupy an index but do not extend the sheet.
    pub fn put_row(&mut self, idx: usize, row: Row) {
        self.rows.insert(idx, row);
    }

    /// Store a row at `idx`, growing the logical length to cover it
    pub fn insert_row(&mut self, idx: usize, row: Row) {
        self.rows.insert(idx, row);
        self.len = self.len.max(idx + 1);
    }

    // === Cell Access ===

    /// Get a cell by row and column indices
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(&row).and_then(|r| r.cell(col))
    }

    /// Get cell text by row and column indices
    pub fn text(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col).map(Cell::text)
    }

    /// Set cell text, creating the row if needed and growing the logical length
    pub fn set_text<S: Into<String>>(&mut self, row: usize, col: usize, text: S) {
        self.rows.entry(row).or_default().set_text(col, text);
        self.len = self.len.max(row + 1);
    }
}
