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

//! Write the PO catalog for a single language of a CSV translation
//! table into `locale/<language>.po`.
//!
//! Nothing is written when no column of the header is labelled with
//! the requested language.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use csv2po::{export_selected, ExportConfig, Quoting};
use log::debug;

/// Write the PO catalog for one language of a CSV translation table.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The CSV table, with source strings in the first column.
    #[arg(value_name = "table.csv")]
    csv_path: PathBuf,
    /// Header label of the language to export, matched exactly.
    language: String,
    /// Existing directory which receives `<language>.po`.
    #[arg(short, long, value_name = "dir", default_value = "locale")]
    output_dir: PathBuf,
    /// Escape quotes, backslashes and control characters in messages.
    #[arg(long)]
    escape: bool,
}

impl Cli {
    fn config(&self) -> ExportConfig {
        let quoting = if self.escape {
            Quoting::Escaped
        } else {
            Quoting::Verbatim
        };
        ExportConfig::export_selected_defaults(&self.csv_path)
            .with_output_dir(&self.output_dir)
            .with_quoting(quoting)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));
    let cli = Cli::parse();
    let config = cli.config();

    let written = export_selected(&config, &cli.language).with_context(|| {
        format!(
            "Could not export {:?} from {:?}",
            cli.language, config.input
        )
    })?;
    match written {
        Some(path) => debug!("Wrote {}", path.display()),
        None => debug!("{:?} has no {:?} column", config.input, cli.language),
    }

    Ok(())
}
