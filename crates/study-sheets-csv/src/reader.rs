//! CSV reader

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::{CsvError, CsvResult};
use crate::options::{CsvReadOptions, QUOTE};
use study_sheets_core::{Row, Sheet};

/// Stands in for an escaped `""` while a logical line is tokenized
const ESCAPED_QUOTE: char = '\u{0002}';

/// Multi-line accumulator state, carried from one physical line to the next.
#[derive(Debug)]
enum Span {
    /// No quoted field is open
    Closed,
    /// A quoted field is open; `text` holds the physical lines seen so far
    Open { text: String, first_line: usize },
}

/// Line-driven CSV parser.
///
/// Feed physical lines (without terminators) in file order with
/// [`push_line`](Self::push_line), then call [`finish`](Self::finish) once
/// the source is exhausted. Each parser owns its own span state, so separate
/// parsers never interfere with one another.
#[derive(Debug)]
pub struct SheetParser {
    sheet: Sheet,
    delimiter: char,
    span: Span,
    /// Index the next completed row is stored at
    next_row: usize,
    /// Physical lines consumed (1-based after the first push)
    line_no: usize,
}

impl SheetParser {
    /// Create a parser for a sheet called `sheet_name` (unless overridden in `options`)
    pub fn new(sheet_name: &str, options: &CsvReadOptions) -> Self {
        let name = options
            .name
            .clone()
            .unwrap_or_else(|| sheet_name.to_string());

        Self {
            sheet: Sheet::new(name),
            delimiter: options.delimiter,
            span: Span::Closed,
            next_row: 0,
            line_no: 0,
        }
    }

    /// Check whether a quoted field is currently open
    pub fn in_quoted_span(&self) -> bool {
        matches!(self.span, Span::Open { .. })
    }

    /// Consume one physical line
    pub fn push_line(&mut self, line: &str) {
        self.line_no += 1;

        if is_blank(line, self.delimiter) {
            trace!(row = self.next_row, "blank row");
            self.sheet.put_row(self.next_row, Row::new());
            self.next_row += 1;
            return;
        }

        let unbalanced = line.matches(QUOTE).count() % 2 == 1;

        let logical = match mem::replace(&mut self.span, Span::Closed) {
            Span::Closed if unbalanced => {
                debug!(line = self.line_no, "quoted field spans lines");
                self.span = Span::Open {
                    text: line.to_string(),
                    first_line: self.line_no,
                };
                return;
            }
            Span::Closed => line.to_string(),
            Span::Open {
                mut text,
                first_line,
            } => {
                text.push('\n');
                text.push_str(line);
                if !unbalanced {
                    self.span = Span::Open { text, first_line };
                    return;
                }
                debug!(first_line, line = self.line_no, "quoted field closed");
                text
            }
        };

        let row = parse_line(&logical, self.delimiter);
        trace!(row = self.next_row, cells = row.cell_count(), "row parsed");
        self.sheet.insert_row(self.next_row, row);
        self.next_row += 1;
    }

    /// Signal the end of input and take the parsed sheet
    ///
    /// Fails if a quoted field is still open; the partial field is not
    /// turned into a row.
    pub fn finish(self) -> CsvResult<Sheet> {
        match self.span {
            Span::Closed => {
                debug!(sheet = self.sheet.name(), len = self.sheet.len(), "csv parsed");
                Ok(self.sheet)
            }
            Span::Open { first_line, .. } => {
                warn!(
                    sheet = self.sheet.name(),
                    line = first_line,
                    "input ended inside a quoted field"
                );
                Err(CsvError::UnterminatedQuote {
                    sheet: self.sheet.name().to_string(),
                    line: first_line,
                })
            }
        }
    }
}

/// A line holding nothing but delimiters (or nothing at all)
fn is_blank(line: &str, delimiter: char) -> bool {
    line.chars().all(|c| c == delimiter)
}

/// Split one complete logical line into a sparse row.
///
/// Empty fields are left absent; the column index still advances past them.
fn parse_line(line: &str, delimiter: char) -> Row {
    let line = line.replace("\"\"", &ESCAPED_QUOTE.to_string());

    let mut row = Row::new();
    let mut chunk = String::new();
    let mut inside = false;
    let mut col = 0;

    for ch in line.chars() {
        match ch {
            c if c == delimiter && !inside => {
                if !chunk.is_empty() {
                    row.set_text(col, mem::take(&mut chunk));
                }
                col += 1;
            }
            QUOTE => inside = !inside,
            ESCAPED_QUOTE => chunk.push(QUOTE),
            c => chunk.push(c),
        }
    }

    if !chunk.is_empty() {
        row.set_text(col, chunk);
    }

    row
}

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a sheet named after the file stem
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let file = File::open(path)?;
        Self::read(BufReader::new(file), &name, options)
    }

    /// Read CSV from a buffered reader into a sheet
    pub fn read<R: BufRead>(
        reader: R,
        sheet_name: &str,
        options: &CsvReadOptions,
    ) -> CsvResult<Sheet> {
        let mut parser = SheetParser::new(sheet_name, options);
        for line in reader.lines() {
            parser.push_line(&line?);
        }
        parser.finish()
    }

    /// Read CSV from already split physical lines
    pub fn read_lines<I, S>(lines: I, sheet_name: &str, options: &CsvReadOptions) -> CsvResult<Sheet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = SheetParser::new(sheet_name, options);
        for line in lines {
            parser.push_line(line.as_ref());
        }
        parser.finish()
    }
}
