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

//! Convert a CSV table of translations into Gettext PO catalogs.
//!
//! The first row of the table names the languages: column 0 labels the
//! source strings and every other column holds the translations into
//! one language. Each exported language becomes a `<language>.po` file
//! with a minimal UTF-8 header followed by one `msgid`/`msgstr` pair per
//! non-empty translation.
//!
//! Two entry points are provided: [`export_all`] writes a catalog for
//! every language column, [`export_selected`] writes the catalog for a
//! single named language.
//!
//! # Examples
//!
//! ```
//! use csv2po::export::export_selected_from_table;
//! use csv2po::table::CatalogTable;
//! use csv2po::ExportConfig;
//!
//! let dir = tempfile::tempdir()?;
//! let table = CatalogTable::from_reader("src,fr\nhello,Bonjour\n".as_bytes())?;
//! let config = ExportConfig::new("msg.csv", dir.path());
//!
//! let path = export_selected_from_table(table, &config, "fr")?.unwrap();
//! let catalog = std::fs::read_to_string(path)?;
//! assert!(catalog.ends_with("msgid \"hello\"\nmsgstr \"Bonjour\"\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod po;
pub mod table;

pub use config::{CursorMode, ExportConfig, Quoting};
pub use error::{ExportError, Result};
pub use export::{export_all, export_column, export_selected};
