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

//! Gnuplot scripts over the exported delimited tables.
//!
//! The scripts reference the CSV files written by [`crate::tables`] by
//! relative name, so they are written into the same directory.

use crate::export::{ensure_dir, write_artifact};
use crate::format::{file_label, thousands};
use crate::tables::MEMORY_SCALING_CSV;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{info, warn};
use triebench_core::{BenchmarkTable, ReportConfig, Result};

/// Memory-scaling script name.
pub const MEMORY_SCALING_GP: &str = "plot_memory_scaling.gp";

/// Bytes-per-word script name.
pub const BYTES_PER_WORD_GP: &str = "plot_bytes_per_word.gp";

/// Line plot of every variant's memory (MB) against dataset size.
///
/// Column `n + 2` of the memory-scaling CSV holds the `n`th variant.
/// Returns `None` when there is nothing to plot.
pub fn memory_scaling_script(table: &BenchmarkTable) -> Option<String> {
    let variants: Vec<&str> = table.variants().collect();
    if variants.is_empty() {
        return None;
    }

    let mut script = String::from(
        "set terminal pngcairo size 1000,600 font \"Arial,12\"\n\
         set output 'fig1_memory_scaling.png'\n\
         set title 'Memory Usage vs Dataset Size'\n\
         set xlabel 'Dataset Size (words)'\n\
         set ylabel 'Memory (MB)'\n\
         set datafile separator ','\n\
         set datafile missing ''\n",
    );

    for (i, variant) in variants.iter().enumerate() {
        let source = if i == 0 {
            format!("plot '{}'", MEMORY_SCALING_CSV)
        } else {
            "     ''".to_string()
        };
        let _ = write!(
            script,
            "{} using 1:{} with linespoints title '{}'",
            source,
            i + 2,
            quote(variant)
        );
        script.push_str(if i + 1 < variants.len() { ", \\\n" } else { "\n" });
    }
    Some(script)
}

/// Histogram of bytes per word at `anchor_size`.
pub fn bytes_per_word_script(anchor_size: u64) -> String {
    format!(
        "set terminal pngcairo size 800,500 font \"Arial,12\"\n\
         set output 'fig2_memory_per_word.png'\n\
         set title 'Memory Efficiency - {} Words'\n\
         set ylabel 'Bytes per Word'\n\
         set datafile separator ','\n\
         set style data histogram\n\
         set style histogram cluster gap 1\n\
         set style fill solid\n\
         set boxwidth 0.8\n\
         plot 'bytes_per_word_{}.csv' using 2:xtic(1) title ''\n",
        thousands(anchor_size),
        file_label(anchor_size)
    )
}

/// Writes both scripts into `config.table_dir`.
pub fn export_gnuplot_scripts(
    table: &BenchmarkTable,
    config: &ReportConfig,
) -> Result<Vec<PathBuf>> {
    let dir = config.table_dir.as_path();
    ensure_dir(dir)?;

    let mut written = Vec::new();
    match memory_scaling_script(table) {
        Some(script) => written.push(write_artifact(dir, MEMORY_SCALING_GP, script)?),
        None => warn!("no variants loaded, skipping memory scaling script"),
    }
    written.push(write_artifact(
        dir,
        BYTES_PER_WORD_GP,
        bytes_per_word_script(config.anchor_size),
    )?);

    info!(dir = %dir.display(), files = written.len(), "gnuplot scripts exported");
    Ok(written)
}

/// Escapes a single-quoted gnuplot string.
fn quote(text: &str) -> String {
    text.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use triebench_core::BenchmarkRecord;

    fn sample() -> BenchmarkTable {
        BenchmarkTable::from_records(vec![
            BenchmarkRecord::new("Standard Trie", 1_000, 470.0, 0.78, 0.21, 481.0),
            BenchmarkRecord::new("Compressed Trie", 1_000, 135.0, 0.21, 0.12, 138.0),
            BenchmarkRecord::new("Double-Array Trie", 1_000, 88.0, 31.91, 0.05, 90.0),
        ])
    }

    #[test]
    fn test_memory_script_columns() {
        let script = memory_scaling_script(&sample()).unwrap();
        assert!(script.contains(
            "plot 'memory_scaling.csv' using 1:2 with linespoints title 'Compressed Trie', \\\n"
        ));
        assert!(script.contains("     '' using 1:3 with linespoints title 'Double-Array Trie', \\\n"));
        assert!(script.ends_with("     '' using 1:4 with linespoints title 'Standard Trie'\n"));
    }

    #[test]
    fn test_memory_script_empty_table() {
        assert!(memory_scaling_script(&BenchmarkTable::new()).is_none());
    }

    #[test]
    fn test_bytes_per_word_script_follows_anchor() {
        let script = bytes_per_word_script(10_000);
        assert!(script.contains("'Memory Efficiency - 10,000 Words'"));
        assert!(script.contains("plot 'bytes_per_word_10k.csv' using 2:xtic(1)"));
    }

    #[test]
    fn test_quote_escapes_apostrophe() {
        assert_eq!(quote("Knuth's Trie"), "Knuth''s Trie");
    }

    #[test]
    fn test_export_writes_both() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::default().with_table_dir(dir.path());
        let written = export_gnuplot_scripts(&sample(), &config).unwrap();
        assert_eq!(written.len(), 2);
        assert!(dir.path().join(MEMORY_SCALING_GP).exists());
        assert!(dir.path().join(BYTES_PER_WORD_GP).exists());
    }
}
