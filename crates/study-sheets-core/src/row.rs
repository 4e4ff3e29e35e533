//! Row types

use std::collections::BTreeMap;

use crate::cell::Cell;

/// A sparse row of cells keyed by 0-based column index.
///
/// Column indices need not be contiguous. A row without cells represents a
/// blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    /// Cells in this row
    pub cells: BTreeMap<usize, Cell>,
}

impl Row {
    /// Create a new empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell by column index
    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(&col)
    }

    /// Get the text of a cell by column index
    pub fn text(&self, col: usize) -> Option<&str> {
        self.cells.get(&col).map(Cell::text)
    }

    /// Set the text of a cell, replacing any previous cell
    pub fn set_text<S: Into<String>>(&mut self, col: usize, text: S) {
        self.cells.insert(col, Cell::new(text));
    }

    /// Remove a cell, leaving the column absent
    pub fn remove(&mut self, col: usize) -> Option<Cell> {
        self.cells.remove(&col)
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of populated cells in row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Highest populated column index (0 for an empty row)
    pub fn width(&self) -> usize {
        self.cells.keys().next_back().copied().unwrap_or(0)
    }

    /// Iterate populated cells in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().map(|(col, cell)| (*col, cell))
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for Row {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(col, text)| (col, Cell::new(text)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_row() {
        let row: Row = [(0, "test"), (2, "test")].into_iter().collect();

        assert_eq!(row.text(0), Some("test"));
        assert_eq!(row.text(1), None);
        assert_eq!(row.width(), 2);
        assert_eq!(row.cell_count(), 2);
    }

    #[test]
    fn test_empty_row_width() {
        let row = Row::new();
        assert!(row.is_empty());
        assert_eq!(row.width(), 0);
    }

    #[test]
    fn test_absent_vs_empty() {
        let mut row = Row::new();
        row.set_text(1, "");

        assert_eq!(row.text(0), None);
        assert_eq!(row.text(1), Some(""));
        assert_eq!(row.remove(1), Some(Cell::new("")));
        assert!(row.is_empty());
    }
}
