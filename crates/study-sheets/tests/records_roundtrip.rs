//! End-to-end tests for csv -> records -> csv

use std::fs;

use pretty_assertions::assert_eq;
use study_sheets::prelude::*;
use study_sheets::{content_key, export_csv, import_csv, RecordError};

const VOCABULARY_CSV: &str = "\
Japanese,Romaji,English,Group,Sub Group,Pronounce,Tags\r\n\
ねこ,neko,cat,Animal,,,\r\n\
,,,,,,\r\n\
\"いぬ\n犬\",inu,dog,Animal,Pet,,\"noun, common\"\r\n";

fn write_file(dir: &std::path::Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_import_vocabulary_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "Vocabulary.csv", VOCABULARY_CSV);

    let set = match import_csv(&path, &CsvReadOptions::default()).unwrap() {
        AnyRecordSet::Vocabulary(set) => set,
        other => panic!("unexpected kind {:?}", other.kind()),
    };

    assert_eq!(set.len(), 2);
    let dog = &set.records[content_key("いぬ\n犬").as_str()];
    assert_eq!(dog.japanese, "いぬ\n犬");
    assert_eq!(dog.sub_grp.as_deref(), Some("Pet"));
    assert_eq!(dog.tag.as_deref(), Some("noun, common"));
    assert_eq!(dog.pronounce, None);
}

#[test]
fn test_header_casing_and_synonyms() {
    let lines = [
        "japanese,ROMAJI,English,group,SUBGROUP,pronunciation,tags",
        "ねこ,neko,cat,,,,",
    ];
    let sheet = CsvReader::read_lines(lines, "Vocabulary", &CsvReadOptions::default()).unwrap();
    let set = sheet.to_records().unwrap();

    assert_eq!(set.len(), 1);
    assert_eq!(set.hash().len(), 4);
}

#[test]
fn test_missing_header_names_field_and_sheet() {
    let lines = ["Japanese,English,Group,Sub Group,Pronounce,Tags", "ねこ,cat,,,,"];
    let sheet = CsvReader::read_lines(lines, "Vocabulary", &CsvReadOptions::default()).unwrap();

    let err = sheet.to_records().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing or incorrect header 'romaji' in Vocabulary.csv"
    );
}

#[test]
fn test_missing_primary_cell() {
    let lines = [
        "Kanji,English,Onyomi,Kunyomi,Group,Tags,Radex",
        "画,picture,,,,,",
        ",person,ジン,ひと,,,",
    ];
    let sheet = CsvReader::read_lines(lines, "Kanji", &CsvReadOptions::default()).unwrap();

    match sheet.to_records() {
        Err(Error::Records(RecordError::MissingPrimary { row, column, .. })) => {
            assert_eq!((row, column), (3, 1));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_unknown_sheet_name() {
    let sheet = CsvReader::read_lines(["Kanji"], "Radicals", &CsvReadOptions::default()).unwrap();
    let err = sheet.to_records().unwrap_err();
    assert_eq!(err.to_string(), "Mapping for Radicals not implemented");
}

#[test]
fn test_key_stability_across_row_order() {
    let header = "Japanese,Romaji,English,Group,Sub Group,Literal,Lesson,Tags";
    let a = "はい,hai,yes,,,,1,";
    let b = "いいえ,iie,no,,,,1,";

    let forward = CsvReader::read_lines([header, a, b], "Phrases", &CsvReadOptions::default())
        .unwrap()
        .to_records()
        .unwrap();
    let reverse = CsvReader::read_lines([header, b, a], "Phrases", &CsvReadOptions::default())
        .unwrap()
        .to_records()
        .unwrap();

    let (AnyRecordSet::Phrases(forward), AnyRecordSet::Phrases(reverse)) = (forward, reverse)
    else {
        panic!("expected phrase sets");
    };

    let mut forward_keys: Vec<_> = forward.records.keys().cloned().collect();
    let mut reverse_keys: Vec<_> = reverse.records.keys().cloned().collect();
    forward_keys.sort();
    reverse_keys.sort();
    assert_eq!(forward_keys, reverse_keys);

    // the fingerprint follows row order
    assert_ne!(forward.hash, reverse.hash);
}

#[test]
fn test_export_then_import() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_file(dir.path(), "Vocabulary.csv", VOCABULARY_CSV);
    let imported = import_csv(&source, &CsvReadOptions::default()).unwrap();

    let exported = dir.path().join("export.csv");
    export_csv(
        &exported,
        RecordKind::Vocabulary,
        &imported.to_json().unwrap(),
        &CsvWriteOptions::default(),
    )
    .unwrap();

    let csv = fs::read_to_string(&exported).unwrap();
    assert!(csv.starts_with("Japanese,Romaji,English,Group,Sub Group,Pronounced,Tags\r\n"));

    let again = import_csv(
        &exported,
        &CsvReadOptions::default().with_name("Vocabulary"),
    )
    .unwrap();
    assert_eq!(again, imported);
}
