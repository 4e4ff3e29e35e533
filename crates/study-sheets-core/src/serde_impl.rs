//! Editor JSON shape for sheets
//!
//! The spreadsheet editor exchanges sheets as
//! `{"name": .., "rows": {"0": {"cells": {"0": {"text": ..}}}, "len": 1}}`:
//! row indices are string keys that share the `rows` object with `len`.
//! Styling keys the editor attaches to rows and cells are ignored on input.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cell::Cell;
use crate::row::Row;
use crate::sheet::Sheet;

#[derive(Deserialize)]
struct RawCell {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct RawRow {
    #[serde(default)]
    cells: BTreeMap<usize, RawCell>,
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawRow::deserialize(deserializer)?;
        // cells without text are absent, not empty
        let cells = raw
            .cells
            .into_iter()
            .filter_map(|(col, cell)| cell.text.map(|text| (col, Cell::new(text))))
            .collect();
        Ok(Row { cells })
    }
}

struct RowsRef<'a>(&'a Sheet);

impl Serialize for RowsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sheet = self.0;
        let mut map = serializer.serialize_map(Some(sheet.rows.len() + 1))?;
        for (idx, row) in &sheet.rows {
            map.serialize_entry(&idx.to_string(), row)?;
        }
        map.serialize_entry("len", &sheet.len)?;
        map.end()
    }
}

impl Serialize for Sheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("rows", &RowsRef(self))?;
        map.end()
    }
}

#[derive(Default)]
struct RawRows {
    rows: BTreeMap<usize, Row>,
    len: Option<usize>,
}

impl<'de> Deserialize<'de> for RawRows {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowsVisitor;

        impl<'de> Visitor<'de> for RowsVisitor {
            type Value = RawRows;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of row indices plus an optional `len`")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawRows, A::Error> {
                let mut out = RawRows::default();
                while let Some(key) = access.next_key::<String>()? {
                    if key == "len" {
                        out.len = Some(access.next_value()?);
                    } else if let Ok(idx) = key.parse::<usize>() {
                        out.rows.insert(idx, access.next_value()?);
                    } else {
                        access.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(RowsVisitor)
    }
}

#[derive(Deserialize)]
struct RawSheet {
    #[serde(default)]
    name: String,
    #[serde(default)]
    rows: RawRows,
}

impl<'de> Deserialize<'de> for Sheet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSheet::deserialize(deserializer)?;
        let len = match raw.rows.len {
            Some(len) => len,
            None => raw.rows.rows.keys().next_back().map_or(0, |idx| idx + 1),
        };
        Ok(Sheet {
            name: raw.name,
            rows: raw.rows.rows,
            len,
        })
    }
}
