// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reading the CSV translation table.
//!
//! The first record is the header: column 0 labels the source strings
//! and every later column names a language. Each following record is
//! a translation unit with the source string in cell 0.
//!
//! A blank line is a row without any cells. The `csv` reader would
//! skip it, so blank lines outside quoted fields are rewritten into a
//! single empty quoted field before parsing. Such a row then fails the
//! bounds check of [`cell`] like any other short row, and a blank first
//! line gives a header without language columns.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::error::{ExportError, Result};

/// The header row of a translation table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Header {
    labels: Vec<String>,
}

impl Header {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, column: usize) -> Option<&str> {
        self.labels.get(column).map(String::as_str)
    }

    /// Returns the `(column, label)` pairs of the language columns, in
    /// column order. Column 0 is never included.
    pub fn languages(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .skip(1)
            .map(|(column, label)| (column, label.as_str()))
    }

    /// Finds the leftmost language column labelled exactly `name`.
    pub fn find_language(&self, name: &str) -> Option<usize> {
        self.languages()
            .find(|(_, label)| *label == name)
            .map(|(column, _)| column)
    }
}

impl From<&StringRecord> for Header {
    fn from(record: &StringRecord) -> Self {
        Self::new(record.iter())
    }
}

/// A translation table whose header has been read and whose data rows
/// are still waiting on a forward-only cursor.
pub struct CatalogTable<R> {
    header: Header,
    records: StringRecordsIntoIter<BlankLines<BufReader<R>>>,
}

/// Where the scanner is within the CSV input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Scan {
    LineStart,
    /// After a `\r` terminator, which may be followed by `\n`.
    AfterCr,
    FieldStart,
    Unquoted,
    Quoted,
    /// A `"` inside a quoted field: either an escaped quote or the end
    /// of the field.
    QuoteInQuoted,
}

impl Scan {
    /// Returns the next state after `byte`, and whether `byte` ends a
    /// blank line.
    fn step(self, byte: u8) -> (Scan, bool) {
        let at_line_start = match self {
            Scan::LineStart => true,
            Scan::AfterCr if byte == b'\n' => return (Scan::LineStart, false),
            Scan::AfterCr => true,
            Scan::Quoted => {
                let next = if byte == b'"' {
                    Scan::QuoteInQuoted
                } else {
                    Scan::Quoted
                };
                return (next, false);
            }
            Scan::QuoteInQuoted if byte == b'"' => return (Scan::Quoted, false),
            Scan::FieldStart | Scan::Unquoted | Scan::QuoteInQuoted => false,
        };
        let opens_field = at_line_start || self == Scan::FieldStart;
        let next = match byte {
            b'\r' => Scan::AfterCr,
            b'\n' => Scan::LineStart,
            b',' => Scan::FieldStart,
            b'"' if opens_field => Scan::Quoted,
            _ => Scan::Unquoted,
        };
        (next, at_line_start && matches!(byte, b'\r' | b'\n'))
    }
}

/// Rewrites every blank line of the CSV input into `""`.
struct BlankLines<R> {
    inner: R,
    scan: Scan,
    pending: VecDeque<u8>,
}

impl<R: BufRead> BlankLines<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            scan: Scan::LineStart,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Read for BlankLines<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut written = 0;
        while written < buf.len() {
            if let Some(byte) = self.pending.pop_front() {
                buf[written] = byte;
                written += 1;
                continue;
            }

            let input = self.inner.fill_buf()?;
            if input.is_empty() {
                break;
            }
            let mut used = 0;
            for &byte in input {
                if written == buf.len() {
                    break;
                }
                used += 1;
                let (next, blank) = self.scan.step(byte);
                self.scan = next;
                if blank {
                    self.pending.extend([b'"', b'"', byte]);
                    break;
                }
                buf[written] = byte;
                written += 1;
            }
            self.inner.consume(used);
        }
        Ok(written)
    }
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    // Rows are allowed to differ in length. A row is only rejected
    // once a missing cell is actually needed.
    builder.has_headers(true).flexible(true);
    builder
}

impl CatalogTable<File> {
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }
}

impl<R: Read> CatalogTable<R> {
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut reader = reader_builder().from_reader(BlankLines::new(BufReader::new(reader)));
        let header = Header::from(reader.headers()?);
        if header.is_empty() {
            return Err(ExportError::MissingHeader);
        }
        Ok(Self {
            header,
            records: reader.into_records(),
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Borrows the row cursor. Rows consumed here are gone for good.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<StringRecord>> + '_ {
        (&mut self.records).map(|record| record.map_err(ExportError::from))
    }

    /// Reads all remaining rows into memory.
    pub fn into_rows(self) -> Result<Vec<StringRecord>> {
        self.records
            .map(|record| record.map_err(ExportError::from))
            .collect()
    }
}

/// Returns the cell at `column`, or a [`ExportError::ShortRow`] naming
/// the input line when the row is too short.
pub fn cell(record: &StringRecord, column: usize) -> Result<&str> {
    record.get(column).ok_or_else(|| ExportError::ShortRow {
        line: record.position().map_or(0, |position| position.line()),
        column,
        len: record.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(csv: &str) -> CatalogTable<&[u8]> {
        CatalogTable::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_header_languages() {
        let table = table("src,en,fr\n");
        assert_eq!(
            table.header().languages().collect::<Vec<_>>(),
            vec![(1, "en"), (2, "fr")]
        );
        assert_eq!(table.header().label(0), Some("src"));
    }

    #[test]
    fn test_find_language_leftmost() {
        let header = Header::new(["src", "fr", "de", "fr"]);
        assert_eq!(header.find_language("fr"), Some(1));
        assert_eq!(header.find_language("de"), Some(2));
    }

    #[test]
    fn test_find_language_exact_match() {
        let header = Header::new(["fr", "FR", "fr_CA"]);
        // Column 0 labels the source strings and never matches.
        assert_eq!(header.find_language("fr"), None);
        assert_eq!(header.find_language("Fr"), None);
        assert_eq!(header.find_language("fr_CA"), Some(2));
    }

    #[test]
    fn test_header_without_languages() {
        let table = table("src\nhello\n");
        assert_eq!(table.header().len(), 1);
        assert_eq!(table.header().languages().count(), 0);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            CatalogTable::from_reader("".as_bytes()),
            Err(ExportError::MissingHeader)
        ));
    }

    #[test]
    fn test_quoted_fields() {
        let table = table("src,en\n\"a, b\",\"say \"\"hi\"\"\"\n");
        let rows = table.into_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(0), Some("a, b"));
        assert_eq!(rows[0].get(1), Some("say \"hi\""));
    }

    #[test]
    fn test_rows_are_consumed() {
        let mut table = table("src,en\na,A\nb,B\n");
        assert_eq!(table.rows().take(1).count(), 1);
        let rest = table.into_rows().unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].get(0), Some("b"));
    }

    fn read_through_blank_lines(input: &str) -> String {
        let mut output = String::new();
        BlankLines::new(input.as_bytes())
            .read_to_string(&mut output)
            .unwrap();
        output
    }

    #[test]
    fn test_blank_lines_marked() {
        assert_eq!(read_through_blank_lines("a,A\n\nb,B\n"), "a,A\n\"\"\nb,B\n");
        assert_eq!(read_through_blank_lines("\nsrc\n"), "\"\"\nsrc\n");
        assert_eq!(read_through_blank_lines("a\n\n\n"), "a\n\"\"\n\"\"\n");
    }

    #[test]
    fn test_blank_lines_crlf() {
        assert_eq!(read_through_blank_lines("a\r\nb\r\n"), "a\r\nb\r\n");
        assert_eq!(read_through_blank_lines("a\r\n\r\nb"), "a\r\n\"\"\r\nb");
    }

    #[test]
    fn test_blank_lines_inside_quotes_untouched() {
        let input = "src,en\n\"one\n\ntwo\",\"say \"\"\n\n\"\"\"\n";
        assert_eq!(read_through_blank_lines(input), input);
        // A quote in the middle of an unquoted field is literal.
        assert_eq!(read_through_blank_lines("a\"b\n\n"), "a\"b\n\"\"\n");
    }

    #[test]
    fn test_blank_lines_small_reads() {
        let mut reader = BlankLines::new("a\n\nb".as_bytes());
        let mut output = Vec::new();
        let mut buf = [0u8; 1];
        loop {
            let count = reader.read(&mut buf).unwrap();
            if count == 0 {
                break;
            }
            output.extend_from_slice(&buf[..count]);
        }
        assert_eq!(output, b"a\n\"\"\nb");
    }

    #[test]
    fn test_blank_line_is_empty_row() {
        let rows = table("src,en\na,A\n\nb,B\n").into_rows().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[1].get(0), Some(""));
        match cell(&rows[1], 1) {
            Err(ExportError::ShortRow { line, column, len }) => {
                assert_eq!((line, column, len), (3, 1, 1));
            }
            other => panic!("expected a short row error, got {other:?}"),
        }
    }

    #[test]
    fn test_leading_blank_line_header() {
        let table = table("\nsrc,en\na,A\n");
        assert_eq!(table.header().languages().count(), 0);
    }

    #[test]
    fn test_cell_short_row() {
        let rows = table("src,en,fr\nhello,Hello\n").into_rows().unwrap();
        assert_eq!(cell(&rows[0], 1).unwrap(), "Hello");
        match cell(&rows[0], 2) {
            Err(ExportError::ShortRow { line, column, len }) => {
                assert_eq!((line, column, len), (2, 2, 2));
            }
            other => panic!("expected a short row error, got {other:?}"),
        }
    }
}
