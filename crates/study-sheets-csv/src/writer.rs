//! CSV writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, QUOTE};
use study_sheets_core::{Row, Sheet};

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a sheet to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        sheet: &Sheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, BufWriter::new(file), options)
    }

    /// Write a sheet to a writer
    ///
    /// Every record line goes out in a single `write_all` together with its
    /// terminator; the writer is flushed once after the last record.
    pub fn write<W: Write>(sheet: &Sheet, mut writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = options.line_terminator.as_str();
        let lines = Self::to_lines(sheet, options);

        for mut line in lines.iter().cloned() {
            line.push_str(terminator);
            writer.write_all(line.as_bytes())?;
        }

        writer.flush()?;
        debug!(sheet = sheet.name(), records = lines.len(), "csv written");
        Ok(())
    }

    /// Render a sheet as record lines without terminators
    ///
    /// A record holding a multi-line cell keeps its embedded `\n`. Rows
    /// narrower than the first row are padded with trailing delimiters so
    /// every record has the header's field count.
    pub fn to_lines(sheet: &Sheet, options: &CsvWriteOptions) -> Vec<String> {
        let mut header_width = None;

        sheet
            .rows()
            .map(|(_, row)| {
                let width = row.width();
                let header_width = *header_width.get_or_insert(width);
                render_row(row, width, header_width, options.delimiter)
            })
            .collect()
    }
}

fn render_row(row: &Row, width: usize, header_width: usize, delimiter: char) -> String {
    let mut line = String::new();

    for col in 0..=width {
        if let Some(text) = row.text(col) {
            push_field(&mut line, text, delimiter);
        }
        if col != width {
            line.push(delimiter);
        }
    }

    for _ in width..header_width {
        line.push(delimiter);
    }

    line
}

fn push_field(line: &mut String, text: &str, delimiter: char) {
    if text.contains(delimiter) || text.contains('\n') || text.contains(QUOTE) {
        line.push(QUOTE);
        line.push_str(&text.replace(QUOTE, "\"\""));
        line.push(QUOTE);
    } else {
        line.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LineTerminator;
    use crate::{CsvReadOptions, CsvReader};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn sheet(rows: &[&[(usize, &str)]]) -> Sheet {
        let mut sheet = Sheet::new("");
        for (idx, cells) in rows.iter().enumerate() {
            sheet.insert_row(idx, cells.iter().copied().collect());
        }
        sheet
    }

    /// Split records on embedded newlines, the way a line reader sees them
    fn physical(lines: Vec<String>) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split('\n').map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn test_quotations() {
        let sheet = sheet(&[&[
            (0, "アイツに「おそい」ってよばれた\nアイツに「遅い」って呼ばれた"),
            (1, "aitsu ni osoi tte yobareta"),
            (2, "That guy called me \"slow\""),
            (4, "Noun+Verb"),
            (7, "p:に\nfragment\npassive"),
        ]]);

        let actual = physical(CsvWriter::to_lines(&sheet, &CsvWriteOptions::default()));
        assert_eq!(
            actual,
            vec![
                "\"アイツに「おそい」ってよばれた",
                "アイツに「遅い」って呼ばれた\",aitsu ni osoi tte yobareta,\"That guy called me \"\"slow\"\"\",,Noun+Verb,,,\"p:に",
                "fragment",
                "passive\"",
            ]
        );
    }

    #[test]
    fn test_to_csv() {
        let sheet = sheet(&[&[
            (0, "おつかれさまです\nお疲れ様です"),
            (1, "o tsukare sama desu"),
            (2, "I appreciate your efforts, thank you very much, good work"),
            (3, "(Unfinished task) tired person"),
            (4, "Social"),
        ]]);

        let actual = physical(CsvWriter::to_lines(&sheet, &CsvWriteOptions::default()));
        assert_eq!(
            actual,
            vec![
                "\"おつかれさまです",
                "お疲れ様です\",o tsukare sama desu,\"I appreciate your efforts, thank you very much, good work\",(Unfinished task) tired person,Social",
            ]
        );
    }

    #[test]
    fn test_pads_to_header_width() {
        let mut sheet = sheet(&[
            &[(0, "Kanji"), (1, "English"), (2, "Onyomi"), (3, "Kunyomi")],
            &[(0, "画"), (1, "picture")],
            &[(0, "人")],
        ]);
        sheet.put_row(3, Row::new());

        let lines = CsvWriter::to_lines(&sheet, &CsvWriteOptions::default());
        assert_eq!(
            lines,
            vec!["Kanji,English,Onyomi,Kunyomi", "画,picture,,", "人,,,", ",,,"]
        );
    }

    #[test]
    fn test_write_crlf_and_flush() {
        let sheet = sheet(&[&[(0, "a"), (1, "b\nc")], &[(1, "d")]]);

        let mut buf = Vec::new();
        CsvWriter::write(&sheet, &mut buf, &CsvWriteOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b\nc\"\r\n,d\r\n");

        let options = CsvWriteOptions {
            line_terminator: LineTerminator::LF,
            ..Default::default()
        };
        let mut buf = Vec::new();
        CsvWriter::write(&sheet, &mut buf, &options).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b\nc\"\n,d\n");
    }

    #[test]
    fn test_custom_delimiter_quoting() {
        let sheet = sheet(&[&[(0, "a;b"), (1, "c,d")]]);
        let options = CsvWriteOptions::default().with_delimiter(';');

        let lines = CsvWriter::to_lines(&sheet, &options);
        assert_eq!(lines, vec!["\"a;b\";c,d"]);
    }

    #[test]
    fn test_quote_round_trip() {
        let original = sheet(&[&[(0, "That guy called me \"slow\""), (1, "a, b"), (2, "x\ny")]]);

        let mut buf = Vec::new();
        CsvWriter::write(&original, &mut buf, &CsvWriteOptions::default()).unwrap();
        assert!(String::from_utf8_lossy(&buf).starts_with("\"That guy called me \"\"slow\"\"\""));

        let parsed =
            CsvReader::read(buf.as_slice(), "", &CsvReadOptions::default()).unwrap();
        assert_eq!(parsed, original);
    }

    fn text() -> impl Strategy<Value = String> {
        (
            "[a-z]{1,5}",
            proptest::collection::vec(("[ ,\n]", "[a-z]{1,5}"), 0..3),
        )
            .prop_map(|(head, tail)| {
                tail.into_iter().fold(head, |mut acc, (sep, word)| {
                    acc.push_str(&sep);
                    acc.push_str(&word);
                    acc
                })
            })
    }

    fn row_cells() -> impl Strategy<Value = Vec<(usize, String)>> {
        proptest::collection::btree_map(0usize..6, text(), 1..5)
            .prop_map(|cells| cells.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_round_trip(rows in proptest::collection::vec(row_cells(), 1..6)) {
            let mut original = Sheet::new("Phrases");
            for (idx, cells) in rows.into_iter().enumerate() {
                original.insert_row(idx, cells.into_iter().collect());
            }

            let mut buf = Vec::new();
            CsvWriter::write(&original, &mut buf, &CsvWriteOptions::default()).unwrap();
            let parsed = CsvReader::read(buf.as_slice(), "Phrases", &CsvReadOptions::default()).unwrap();

            prop_assert_eq!(parsed, original);
        }
    }
}
