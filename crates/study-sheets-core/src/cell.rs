//! Cell type

use std::fmt;

/// A single populated cell.
///
/// A column with no `Cell` is absent, which is not the same thing as a cell
/// holding an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    /// Cell text
    pub text: String,
}

impl Cell {
    /// Create a new cell holding `text`
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Get the cell text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the cell text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::new(s)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::new(s)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from() {
        let cell: Cell = "ねこ".into();
        assert_eq!(cell.text(), "ねこ");
        assert!(!cell.is_empty());
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::from(String::from("cat")).to_string(), "cat");
    }
}
