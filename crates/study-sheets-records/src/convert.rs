//! Conversion dispatched on the sheet name

use crate::error::RecordResult;
use crate::kind::RecordKind;
use crate::mapper::{records_from_sheet, sheet_from_records, RecordMap, RecordSet};
use crate::record::{Kanji, Phrase, Record, Vocabulary};
use study_sheets_core::Sheet;

/// A record set of whichever kind a sheet turned out to hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyRecordSet {
    Vocabulary(RecordSet<Vocabulary>),
    Phrases(RecordSet<Phrase>),
    Kanji(RecordSet<Kanji>),
}

impl AnyRecordSet {
    /// Kind of the contained records
    pub fn kind(&self) -> RecordKind {
        match self {
            AnyRecordSet::Vocabulary(_) => RecordKind::Vocabulary,
            AnyRecordSet::Phrases(_) => RecordKind::Phrases,
            AnyRecordSet::Kanji(_) => RecordKind::Kanji,
        }
    }

    /// Change fingerprint
    pub fn hash(&self) -> &str {
        match self {
            AnyRecordSet::Vocabulary(set) => &set.hash,
            AnyRecordSet::Phrases(set) => &set.hash,
            AnyRecordSet::Kanji(set) => &set.hash,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        match self {
            AnyRecordSet::Vocabulary(set) => set.len(),
            AnyRecordSet::Phrases(set) => set.len(),
            AnyRecordSet::Kanji(set) => set.len(),
        }
    }

    /// Check if there are no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Persisted JSON form of the records (without the fingerprint)
    pub fn to_json(&self) -> RecordResult<String> {
        match self {
            AnyRecordSet::Vocabulary(set) => set.to_json(),
            AnyRecordSet::Phrases(set) => set.to_json(),
            AnyRecordSet::Kanji(set) => set.to_json(),
        }
    }

    /// Export back to a sheet
    pub fn to_sheet(&self) -> Sheet {
        match self {
            AnyRecordSet::Vocabulary(set) => set.to_sheet(),
            AnyRecordSet::Phrases(set) => set.to_sheet(),
            AnyRecordSet::Kanji(set) => set.to_sheet(),
        }
    }
}

/// Convert a sheet to records of the kind its name selects
pub fn convert_sheet(sheet: &Sheet) -> RecordResult<AnyRecordSet> {
    let kind: RecordKind = sheet.name().parse()?;
    Ok(match kind {
        RecordKind::Vocabulary => AnyRecordSet::Vocabulary(records_from_sheet(sheet)?),
        RecordKind::Phrases => AnyRecordSet::Phrases(records_from_sheet(sheet)?),
        RecordKind::Kanji => AnyRecordSet::Kanji(records_from_sheet(sheet)?),
    })
}

fn parse_map<R: Record>(json: &str) -> RecordResult<AnyRecordSet>
where
    AnyRecordSet: From<RecordSet<R>>,
{
    let records: RecordMap<R> = serde_json::from_str(json)?;
    Ok(RecordSet::new(records)?.into())
}

/// Read persisted records of `kind` from JSON
///
/// Keys are kept as stored; map order follows the document.
pub fn records_from_json(kind: RecordKind, json: &str) -> RecordResult<AnyRecordSet> {
    match kind {
        RecordKind::Vocabulary => parse_map::<Vocabulary>(json),
        RecordKind::Phrases => parse_map::<Phrase>(json),
        RecordKind::Kanji => parse_map::<Kanji>(json),
    }
}

/// Export persisted records of `kind` straight to a sheet
pub fn sheet_from_json(kind: RecordKind, json: &str) -> RecordResult<Sheet> {
    Ok(match kind {
        RecordKind::Vocabulary => sheet_from_records(&serde_json::from_str::<RecordMap<Vocabulary>>(json)?),
        RecordKind::Phrases => sheet_from_records(&serde_json::from_str::<RecordMap<Phrase>>(json)?),
        RecordKind::Kanji => sheet_from_records(&serde_json::from_str::<RecordMap<Kanji>>(json)?),
    })
}

impl From<RecordSet<Vocabulary>> for AnyRecordSet {
    fn from(set: RecordSet<Vocabulary>) -> Self {
        AnyRecordSet::Vocabulary(set)
    }
}

impl From<RecordSet<Phrase>> for AnyRecordSet {
    fn from(set: RecordSet<Phrase>) -> Self {
        AnyRecordSet::Phrases(set)
    }
}

impl From<RecordSet<Kanji>> for AnyRecordSet {
    fn from(set: RecordSet<Kanji>) -> Self {
        AnyRecordSet::Kanji(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::mapper::content_key;
    use pretty_assertions::assert_eq;

    fn kanji_sheet(name: &str) -> Sheet {
        let mut sheet = Sheet::new(name);
        let headers = ["Kanji", "English", "Onyomi", "Kunyomi", "Group", "Tags", "Radex"];
        for (col, header) in headers.into_iter().enumerate() {
            sheet.set_text(0, col, header);
        }
        sheet.set_text(1, 0, "画");
        sheet.set_text(1, 1, "brush-stroke, picture");
        sheet
    }

    #[test]
    fn test_convert_dispatches_on_name() {
        let set = convert_sheet(&kanji_sheet("Kanji")).unwrap();
        assert_eq!(set.kind(), RecordKind::Kanji);
        assert_eq!(set.len(), 1);
        assert_eq!(set.hash().len(), 4);
    }

    #[test]
    fn test_convert_unknown_name() {
        let err = convert_sheet(&kanji_sheet("Radicals")).unwrap_err();
        assert!(matches!(err, RecordError::UnsupportedKind(name) if name == "Radicals"));
    }

    #[test]
    fn test_json_round_trip_keeps_hash() {
        let set = convert_sheet(&kanji_sheet("Kanji")).unwrap();
        let json = set.to_json().unwrap();

        let again = records_from_json(RecordKind::Kanji, &json).unwrap();
        assert_eq!(again, set);
    }

    #[test]
    fn test_sheet_from_json() {
        let json = format!(
            r#"{{"{}":{{"japanese":"はい","english":"yes","lesson":"1"}}}}"#,
            content_key("はい")
        );
        let sheet = sheet_from_json(RecordKind::Phrases, &json).unwrap();

        assert_eq!(sheet.name(), "Phrases");
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.text(1, 0), Some("はい"));
        assert_eq!(sheet.text(1, 1), None);
        assert_eq!(sheet.text(1, 2), Some("yes"));
        assert_eq!(sheet.text(1, 6), Some("1"));
    }

    #[test]
    fn test_malformed_json() {
        let err = sheet_from_json(RecordKind::Kanji, "[1, 2]").unwrap_err();
        assert!(matches!(err, RecordError::Json(_)));
    }
}
