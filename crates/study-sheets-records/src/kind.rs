//! Record kinds

use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;
use crate::headers::Field;

/// The three kinds of data file a sheet can hold, selected by sheet name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `Vocabulary` sheet
    Vocabulary,
    /// `Phrases` sheet
    Phrases,
    /// `Kanji` sheet
    Kanji,
}

const VOCABULARY_FIELDS: [Field; 7] = [
    Field::Japanese,
    Field::Romaji,
    Field::English,
    Field::Group,
    Field::SubGroup,
    Field::Pronounce,
    Field::Tag,
];

const PHRASE_FIELDS: [Field; 8] = [
    Field::Japanese,
    Field::Romaji,
    Field::English,
    Field::Group,
    Field::SubGroup,
    Field::Literal,
    Field::Lesson,
    Field::Tag,
];

const KANJI_FIELDS: [Field; 7] = [
    Field::Kanji,
    Field::English,
    Field::Onyomi,
    Field::Kunyomi,
    Field::Group,
    Field::Tag,
    Field::RadicalExamples,
];

impl RecordKind {
    /// All kinds
    pub const ALL: [RecordKind; 3] = [RecordKind::Phrases, RecordKind::Vocabulary, RecordKind::Kanji];

    /// Sheet name carrying this kind
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Vocabulary => "Vocabulary",
            RecordKind::Phrases => "Phrases",
            RecordKind::Kanji => "Kanji",
        }
    }

    /// Columns a sheet of this kind must have, in export order
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            RecordKind::Vocabulary => &VOCABULARY_FIELDS,
            RecordKind::Phrases => &PHRASE_FIELDS,
            RecordKind::Kanji => &KANJI_FIELDS,
        }
    }

    /// The mandatory text field whose digest keys each record
    pub fn primary(self) -> Field {
        match self {
            RecordKind::Vocabulary | RecordKind::Phrases => Field::Japanese,
            RecordKind::Kanji => Field::Kanji,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Vocabulary" => Ok(RecordKind::Vocabulary),
            "Phrases" => Ok(RecordKind::Phrases),
            "Kanji" => Ok(RecordKind::Kanji),
            other => Err(RecordError::UnsupportedKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.as_str().parse::<RecordKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind() {
        let err = "vocabulary".parse::<RecordKind>().unwrap_err();
        assert!(matches!(err, RecordError::UnsupportedKind(ref name) if name == "vocabulary"));
        assert_eq!(err.to_string(), "Mapping for vocabulary not implemented");
    }

    #[test]
    fn test_primary_is_required() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.required_fields()[0], kind.primary());
        }
    }
}
