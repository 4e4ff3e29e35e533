//! Structured record types
//!
//! Optional fields are `None` when the sheet cell was absent or empty and are
//! left out of the persisted JSON entirely. Field declaration order is the
//! JSON key order, which the change fingerprint depends on.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::headers::Field;
use crate::kind::RecordKind;

/// A record kind that can be built from, and written back to, a sheet row
pub trait Record: Serialize + DeserializeOwned + Clone + Debug {
    /// Kind carried by sheets of these records
    const KIND: RecordKind;

    /// Build a record from its primary text and a lookup for the other fields
    ///
    /// `cell` returns `None` for absent or empty cells.
    fn from_cells(primary: String, cell: &dyn Fn(Field) -> Option<String>) -> Self;

    /// The primary text the record key is derived from
    fn primary(&self) -> &str;

    /// Text of a field, if the record has it
    fn field(&self, field: Field) -> Option<&str>;
}

/// A vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub japanese: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romaji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_grp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronounce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Record for Vocabulary {
    const KIND: RecordKind = RecordKind::Vocabulary;

    fn from_cells(japanese: String, cell: &dyn Fn(Field) -> Option<String>) -> Self {
        Self {
            japanese,
            romaji: cell(Field::Romaji),
            english: cell(Field::English),
            grp: cell(Field::Group),
            sub_grp: cell(Field::SubGroup),
            pronounce: cell(Field::Pronounce),
            tag: cell(Field::Tag),
        }
    }

    fn primary(&self) -> &str {
        &self.japanese
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Japanese => Some(&self.japanese),
            Field::Romaji => self.romaji.as_deref(),
            Field::English => self.english.as_deref(),
            Field::Group => self.grp.as_deref(),
            Field::SubGroup => self.sub_grp.as_deref(),
            Field::Pronounce => self.pronounce.as_deref(),
            Field::Tag => self.tag.as_deref(),
            _ => None,
        }
    }
}

/// A phrase entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    pub japanese: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    /// Literal translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_grp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romaji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Record for Phrase {
    const KIND: RecordKind = RecordKind::Phrases;

    fn from_cells(japanese: String, cell: &dyn Fn(Field) -> Option<String>) -> Self {
        Self {
            japanese,
            english: cell(Field::English),
            lit: cell(Field::Literal),
            grp: cell(Field::Group),
            sub_grp: cell(Field::SubGroup),
            romaji: cell(Field::Romaji),
            lesson: cell(Field::Lesson),
            tag: cell(Field::Tag),
        }
    }

    fn primary(&self) -> &str {
        &self.japanese
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Japanese => Some(&self.japanese),
            Field::English => self.english.as_deref(),
            Field::Literal => self.lit.as_deref(),
            Field::Group => self.grp.as_deref(),
            Field::SubGroup => self.sub_grp.as_deref(),
            Field::Romaji => self.romaji.as_deref(),
            Field::Lesson => self.lesson.as_deref(),
            Field::Tag => self.tag.as_deref(),
            _ => None,
        }
    }
}

/// A kanji entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kanji {
    pub kanji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    /// Onyomi reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<String>,
    /// Kunyomi reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kun: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Kanji using this one as a radical
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radex: Option<String>,
}

impl Record for Kanji {
    const KIND: RecordKind = RecordKind::Kanji;

    fn from_cells(kanji: String, cell: &dyn Fn(Field) -> Option<String>) -> Self {
        Self {
            kanji,
            english: cell(Field::English),
            on: cell(Field::Onyomi),
            kun: cell(Field::Kunyomi),
            grp: cell(Field::Group),
            tag: cell(Field::Tag),
            radex: cell(Field::RadicalExamples),
        }
    }

    fn primary(&self) -> &str {
        &self.kanji
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Kanji => Some(&self.kanji),
            Field::English => self.english.as_deref(),
            Field::Onyomi => self.on.as_deref(),
            Field::Kunyomi => self.kun.as_deref(),
            Field::Group => self.grp.as_deref(),
            Field::Tag => self.tag.as_deref(),
            Field::RadicalExamples => self.radex.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_fields_are_omitted() {
        let vocabulary = Vocabulary {
            japanese: "ねこ".into(),
            romaji: None,
            english: Some("cat".into()),
            grp: None,
            sub_grp: Some("Animal".into()),
            pronounce: None,
            tag: None,
        };

        assert_eq!(
            serde_json::to_string(&vocabulary).unwrap(),
            r#"{"japanese":"ねこ","english":"cat","subGrp":"Animal"}"#
        );
    }

    #[test]
    fn test_phrase_key_order() {
        let phrase = Phrase::from_cells("おはよう".into(), &|field| {
            Some(field.key().to_uppercase())
        });

        assert_eq!(
            serde_json::to_string(&phrase).unwrap(),
            r#"{"japanese":"おはよう","english":"ENGLISH","lit":"LIT","grp":"GRP","subGrp":"SUBGRP","romaji":"ROMAJI","lesson":"LESSON","tag":"TAG"}"#
        );
    }

    #[test]
    fn test_kanji_from_json_ignores_unknown_keys() {
        let kanji: Kanji =
            serde_json::from_str(r#"{"kanji":"画","on":"ガ","uid":"x","radical":{"example":[]}}"#)
                .unwrap();

        assert_eq!(kanji.primary(), "画");
        assert_eq!(kanji.field(Field::Onyomi), Some("ガ"));
        assert_eq!(kanji.field(Field::Kunyomi), None);
        assert_eq!(kanji.field(Field::Japanese), None);
    }
}
