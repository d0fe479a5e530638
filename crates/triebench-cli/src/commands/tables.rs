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

//! Tables command - delimited, markdown and gnuplot artifacts

use super::{load, print_created};
use triebench_core::{BenchmarkTable, ReportConfig, Result};
use triebench_report::format::thousands;
use triebench_report::{export_gnuplot_scripts, export_tables, AnchorTable, MemoryScalingTable};

/// Writes the table artifacts for `config.input` and prints the markdown
/// tables.
pub fn tables(config: &ReportConfig) -> Result<()> {
    let table = load(config)?;
    write_tables(&table, config)
}

pub(super) fn write_tables(table: &BenchmarkTable, config: &ReportConfig) -> Result<()> {
    let mut written = export_tables(table, config)?;
    written.extend(export_gnuplot_scripts(table, config)?);
    print_created(&written);

    println!("\nMemory Usage Comparison:\n");
    print!("{}", MemoryScalingTable::build(table).to_markdown());

    let anchor = AnchorTable::build(table, config.anchor_size);
    println!(
        "\nPerformance on {} Words Dataset:\n",
        thousands(config.anchor_size)
    );
    if anchor.rows.is_empty() {
        println!("No measurements at {} words", config.anchor_size);
    } else {
        print!("{}", anchor.to_markdown());
    }
    Ok(())
}
