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

//! Triebench command line interface

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use triebench_cli::cli::{Commands, InputArgs};

/// Triebench - trie benchmark reporting
///
/// Reads a benchmark results CSV and produces a text summary, CSV and
/// markdown tables, gnuplot scripts and SVG/PNG figures.
///
/// # Examples
///
/// ```bash
/// # Text summary of ./benchmark_results.csv
/// triebench
///
/// # Tables and figures for another run, compared at 10,000 words
/// triebench report results/run2.csv --anchor-size 10000 --out-dir paper
/// ```
#[derive(Parser)]
#[command(name = "triebench")]
#[command(author, version, about = "Triebench - trie benchmark reporting", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    analyze: InputArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Analyze(cli.analyze));

    init_tracing(command.verbose());

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only report output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "triebench=info" } else { "triebench=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
