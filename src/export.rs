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

//! Exporting table columns as PO catalogs.

use std::borrow::Borrow;
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use log::{debug, info};

use crate::config::{CursorMode, ExportConfig, Quoting};
use crate::error::{ExportError, Result};
use crate::po::PoWriter;
use crate::table::{cell, CatalogTable};

/// Write the catalog for `column` to `output`.
///
/// The file is created or truncated and starts with the fixed header.
/// Every row whose cell at `column` is non-empty then contributes one
/// message, with cell 0 as the `msgid`. Rows keep their input order.
///
/// Returns the number of messages written. A row without a cell at
/// `column` aborts the export and leaves the output file with whatever
/// was written before it.
pub fn export_column<I, B>(
    rows: I,
    column: usize,
    output: &Path,
    quoting: Quoting,
) -> Result<usize>
where
    I: IntoIterator<Item = Result<B>>,
    B: Borrow<StringRecord>,
{
    let file = File::create(output).map_err(|source| ExportError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = PoWriter::new(BufWriter::new(file), quoting);
    writer.write_header()?;
    for record in rows {
        let record = record?;
        let record: &StringRecord = record.borrow();
        let msgstr = cell(record, column)?;
        if !msgstr.is_empty() {
            writer.write_message(cell(record, 0)?, msgstr)?;
        }
    }
    let count = writer.message_count();
    writer.finish()?;
    Ok(count)
}

/// Data rows as seen by successive column exports.
enum RowSource<R> {
    Shared(CatalogTable<R>),
    Buffered(Vec<StringRecord>),
}

impl<R: Read> RowSource<R> {
    fn new(table: CatalogTable<R>, cursor: CursorMode) -> Result<Self> {
        Ok(match cursor {
            CursorMode::Rewind => RowSource::Buffered(table.into_rows()?),
            CursorMode::SinglePass => RowSource::Shared(table),
        })
    }

    fn export(&mut self, column: usize, output: &Path, quoting: Quoting) -> Result<usize> {
        match self {
            RowSource::Shared(table) => export_column(table.rows(), column, output, quoting),
            RowSource::Buffered(rows) => {
                export_column(rows.iter().map(Ok), column, output, quoting)
            }
        }
    }
}

/// Export every language column of the table named by `config.input`.
///
/// Returns the paths written, in column order.
pub fn export_all(config: &ExportConfig) -> Result<Vec<PathBuf>> {
    let table = CatalogTable::open(&config.input)?;
    export_all_from_table(table, config)
}

pub fn export_all_from_table<R: Read>(
    table: CatalogTable<R>,
    config: &ExportConfig,
) -> Result<Vec<PathBuf>> {
    let languages = table
        .header()
        .languages()
        .map(|(column, label)| (column, label.to_owned()))
        .collect::<Vec<_>>();
    if languages.is_empty() {
        debug!("Header has no language columns");
        return Ok(Vec::new());
    }

    let mut rows = RowSource::new(table, config.cursor)?;
    let mut written = Vec::with_capacity(languages.len());
    for (column, label) in languages {
        let path = config.catalog_path(&label);
        info!("{}", path.display());
        let count = rows.export(column, &path, config.quoting)?;
        debug!("Wrote {count} messages for {label:?}");
        written.push(path);
    }
    Ok(written)
}

/// Export the column labelled `language` of the table named by
/// `config.input`.
///
/// Only the leftmost matching column is exported. When no column
/// matches, nothing is written and `None` is returned.
pub fn export_selected(config: &ExportConfig, language: &str) -> Result<Option<PathBuf>> {
    let table = CatalogTable::open(&config.input)?;
    export_selected_from_table(table, config, language)
}

pub fn export_selected_from_table<R: Read>(
    mut table: CatalogTable<R>,
    config: &ExportConfig,
    language: &str,
) -> Result<Option<PathBuf>> {
    let Some(column) = table.header().find_language(language) else {
        debug!("No column labelled {language:?}");
        return Ok(None);
    };

    let path = config.catalog_path(language);
    let count = export_column(table.rows(), column, &path, config.quoting)?;
    debug!("Wrote {count} messages for {language:?}");
    Ok(Some(path))
}
