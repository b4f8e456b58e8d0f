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

//! Writing Gettext PO catalogs.
//!
//! Only the subset of the format needed here is produced: a fixed
//! header entry declaring UTF-8 content, followed by one `msgid` and
//! one `msgstr` line per message. There are no comments, plural forms
//! or blank lines between entries.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::config::Quoting;

/// The header entry written at the top of every catalog.
pub const HEADER: [&str; 4] = [
    "msgid \"\"",
    "msgstr \"\"",
    "\"Content-Type: text/plain; charset=UTF-8\\n\"",
    "\"Content-Transfer-Encoding: 8bit\\n\"",
];

/// Escape `text` for use inside a quoted PO string.
///
/// Backslashes, double quotes, newlines, carriage returns and tabs
/// are replaced with their C-style escape sequences. Text without any
/// of those characters is returned unchanged.
///
/// # Examples
///
/// ```
/// use csv2po::po::escape;
///
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape("say \"hi\"\n"), "say \\\"hi\\\"\\n");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '"', '\n', '\r', '\t']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Line-oriented PO writer.
///
/// Every line ends with a single `\n`. Call [`PoWriter::finish`] to
/// flush the underlying writer and surface any error from doing so.
pub struct PoWriter<W: Write> {
    writer: W,
    quoting: Quoting,
    message_count: usize,
}

impl<W: Write> PoWriter<W> {
    pub fn new(writer: W, quoting: Quoting) -> Self {
        Self {
            writer,
            quoting,
            message_count: 0,
        }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        for line in HEADER {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    pub fn write_message(&mut self, msgid: &str, msgstr: &str) -> io::Result<()> {
        writeln!(self.writer, "msgid \"{}\"", self.quote(msgid))?;
        writeln!(self.writer, "msgstr \"{}\"", self.quote(msgstr))?;
        self.message_count += 1;
        Ok(())
    }

    /// Number of messages written so far, not counting the header.
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn quote<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.quoting {
            Quoting::Verbatim => Cow::Borrowed(text),
            Quoting::Escaped => escape(text),
        }
    }
}
