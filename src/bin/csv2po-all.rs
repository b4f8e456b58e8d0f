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

//! Write one PO catalog per language column of a CSV translation table.
//!
//! Without arguments this reads `msg.csv` and writes into the existing
//! directory `msg/`, printing the name of each catalog as it goes.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use csv2po::{export_all, CursorMode, ExportConfig, Quoting};

/// Write one PO catalog per language column of a CSV translation table.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The CSV table, with source strings in the first column.
    #[arg(short, long, value_name = "table.csv", default_value = "msg.csv")]
    input: PathBuf,
    /// Existing directory which receives the `<language>.po` files.
    #[arg(short, long, value_name = "dir", default_value = "msg")]
    output_dir: PathBuf,
    /// Escape quotes, backslashes and control characters in messages.
    #[arg(long)]
    escape: bool,
    /// Read the rows only once, shared by all languages. Every language
    /// after the first then only sees rows left unread.
    #[arg(long)]
    single_pass: bool,
}

impl Cli {
    fn config(&self) -> ExportConfig {
        let quoting = if self.escape {
            Quoting::Escaped
        } else {
            Quoting::Verbatim
        };
        let cursor = if self.single_pass {
            CursorMode::SinglePass
        } else {
            CursorMode::Rewind
        };
        ExportConfig::new(&self.input, &self.output_dir)
            .with_quoting(quoting)
            .with_cursor(cursor)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));
    let config = Cli::parse().config();

    export_all(&config)
        .with_context(|| format!("Could not export catalogs from {:?}", config.input))?;

    Ok(())
}
