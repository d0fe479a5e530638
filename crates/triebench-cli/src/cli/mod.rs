// Dweve Triebench - Trie Benchmark Reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command definitions and argument parsing.
//!
//! Every command reads one results file; the shared options live in
//! [`InputArgs`] and are flattened into each subcommand.

use crate::commands;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use triebench_core::{
    ReportConfig, Result, DEFAULT_ANCHOR_SIZE, DEFAULT_BASELINE, DEFAULT_INPUT,
};

/// Options shared by every command.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct InputArgs {
    /// Benchmark results file
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Dataset size used for cross-variant comparisons
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_ANCHOR_SIZE)]
    pub anchor_size: u64,

    /// Variant that memory reductions are measured against
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_BASELINE)]
    pub baseline: String,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl InputArgs {
    /// Builds the report configuration these options describe.
    pub fn config(&self) -> ReportConfig {
        ReportConfig::default()
            .with_input(&self.input)
            .with_anchor_size(self.anchor_size)
            .with_baseline(&self.baseline)
    }
}

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── analyze   text summary to stdout
/// ├── tables    CSV, markdown and gnuplot artifacts
/// ├── figures   chart data, SVG and PNG figures
/// └── report    all of the above
/// ```
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print the text summary (the default command)
    Analyze(InputArgs),

    /// Write CSV and markdown tables plus gnuplot scripts
    Tables {
        #[command(flatten)]
        input: InputArgs,

        /// Directory for the table artifacts
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },

    /// Write chart data and SVG/PNG figures
    Figures {
        #[command(flatten)]
        input: InputArgs,

        /// Directory for the figures
        #[arg(short, long, value_name = "DIR", default_value = "figures")]
        out_dir: PathBuf,
    },

    /// Print the summary and write every table and figure
    ///
    /// Tables go into DIR and figures into DIR/figures.
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Root directory for all artifacts
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
}

impl Commands {
    /// Whether `--verbose` was given.
    pub fn verbose(&self) -> bool {
        self.input().verbose
    }

    fn input(&self) -> &InputArgs {
        match self {
            Commands::Analyze(input)
            | Commands::Tables { input, .. }
            | Commands::Figures { input, .. }
            | Commands::Report { input, .. } => input,
        }
    }

    /// The configuration this command runs with.
    pub fn config(&self) -> ReportConfig {
        let config = self.input().config();
        match self {
            Commands::Analyze(_) => config,
            Commands::Tables { out_dir, .. } => config.with_table_dir(out_dir),
            Commands::Figures { out_dir, .. } => config.with_figure_dir(out_dir),
            Commands::Report { out_dir, .. } => config
                .with_table_dir(out_dir)
                .with_figure_dir(out_dir.join(triebench_core::config::DEFAULT_FIGURE_DIR)),
        }
    }

    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns the first error from loading, aggregation or writing.
    pub fn execute(self) -> Result<()> {
        let config = self.config();
        match self {
            Commands::Analyze(_) => commands::analyze(&config),
            Commands::Tables { .. } => commands::tables(&config),
            Commands::Figures { .. } => commands::figures(&config),
            Commands::Report { .. } => commands::report(&config),
        }
    }
}
