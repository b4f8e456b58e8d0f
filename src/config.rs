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

//! Paths and options shared by both export entry points.

use std::path::PathBuf;

/// How field values are placed inside the quoted PO literals.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Quoting {
    /// Copy the CSV field into the literal as-is, quotes and
    /// backslashes included.
    #[default]
    Verbatim,
    /// Apply C-style PO escaping, see [`crate::po::escape`].
    Escaped,
}

/// How the data rows are fed to each exported column.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CursorMode {
    /// Read the rows once and give every column the full sequence.
    #[default]
    Rewind,
    /// Share one forward-only cursor between all columns. The first
    /// column drains the input, so later columns only see whatever
    /// rows are left over.
    SinglePass,
}

/// Where to read the table from and where to write the catalogs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub quoting: Quoting,
    pub cursor: CursorMode,
}

impl ExportConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            quoting: Quoting::default(),
            cursor: CursorMode::default(),
        }
    }

    /// Reads `msg.csv` and writes one catalog per language into `msg/`.
    pub fn export_all_defaults() -> Self {
        Self::new("msg.csv", "msg")
    }

    /// Reads `input` and writes the selected catalog into `locale/`.
    pub fn export_selected_defaults(input: impl Into<PathBuf>) -> Self {
        Self::new(input, "locale")
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn with_cursor(mut self, cursor: CursorMode) -> Self {
        self.cursor = cursor;
        self
    }

    /// Returns the path of the catalog for the language `label`.
    pub fn catalog_path(&self, label: &str) -> PathBuf {
        self.output_dir.join(format!("{label}.po"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_all_defaults() {
        let config = ExportConfig::export_all_defaults();
        assert_eq!(config.input, PathBuf::from("msg.csv"));
        assert_eq!(config.output_dir, PathBuf::from("msg"));
        assert_eq!(config.quoting, Quoting::Verbatim);
        assert_eq!(config.cursor, CursorMode::Rewind);
    }

    #[test]
    fn test_export_selected_defaults() {
        let config = ExportConfig::export_selected_defaults("strings/table.csv");
        assert_eq!(config.input, PathBuf::from("strings/table.csv"));
        assert_eq!(config.output_dir, PathBuf::from("locale"));
    }

    #[test]
    fn test_catalog_path() {
        let config = ExportConfig::export_all_defaults().with_output_dir("out");
        assert_eq!(config.catalog_path("pt_BR"), PathBuf::from("out").join("pt_BR.po"));
    }

    #[test]
    fn test_builder_setters() {
        let config = ExportConfig::new("a.csv", "po")
            .with_quoting(Quoting::Escaped)
            .with_cursor(CursorMode::SinglePass);
        assert_eq!(config.quoting, Quoting::Escaped);
        assert_eq!(config.cursor, CursorMode::SinglePass);
    }
}
