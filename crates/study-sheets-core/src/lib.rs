//! # study-sheets-core
//!
//! Core data structures for the study-sheets interchange layer.
//!
//! This crate provides the sparse grid used between the CSV codec and the
//! record mapper:
//! - [`Cell`] - A single text cell
//! - [`Row`] - A sparse mapping from column index to [`Cell`]
//! - [`Sheet`] - A named sparse mapping from row index to [`Row`] with a logical length
//!
//! ## Example
//!
//! ```rust
//! use study_sheets_core::Sheet;
//!
//! let mut sheet = Sheet::new("Vocabulary");
//! sheet.set_text(0, 0, "Japanese");
//! sheet.set_text(0, 1, "English");
//! sheet.set_text(1, 0, "ねこ");
//!
//! assert_eq!(sheet.len(), 2);
//! assert_eq!(sheet.text(1, 0), Some("ねこ"));
//! assert_eq!(sheet.text(1, 1), None);
//! assert!(sheet.is_filled());
//! ```

pub mod cell;
pub mod error;
pub mod row;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod sheet;

// Re-exports for convenience
pub use cell::Cell;
pub use error::{Error, Result};
pub use row::Row;
pub use sheet::Sheet;
