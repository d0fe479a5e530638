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

//! Tabular export: delimited and markdown tables.
//!
//! Two tables are derived from the loaded results:
//!
//! - **memory scaling**: one row per observed dataset size, one column per
//!   variant
//! - **anchor performance**: one row per variant measured at the anchor size,
//!   with memory, insert, search and bytes-per-word columns
//!
//! Variants are always in name order, so identical input always produces
//! identical files.

use crate::export::{ensure_dir, write_artifact};
use crate::format::{file_label, size_label, thousands, thousands_rounded};
use std::path::PathBuf;
use tracing::info;
use triebench_core::record::{column_key, short_name};
use triebench_core::{at_size, BenchmarkTable, ReportConfig, ReportError, Result};

/// Memory-scaling file name.
pub const MEMORY_SCALING_CSV: &str = "memory_scaling.csv";

/// Memory-comparison markdown file name.
pub const MEMORY_COMPARISON_MD: &str = "table_memory_comparison.md";

/// Memory per dataset size, one column per variant.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryScalingTable {
    /// Column variants, in name order.
    pub variants: Vec<String>,
    /// One row per dataset size, ascending.
    pub rows: Vec<ScalingRow>,
}

/// A row of [`MemoryScalingTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingRow {
    /// Dataset size.
    pub size: u64,
    /// Memory in KB per variant column; `None` when not measured.
    pub memory_kb: Vec<Option<f64>>,
}

impl MemoryScalingTable {
    /// Builds the table over every size observed in `table`.
    pub fn build(table: &BenchmarkTable) -> Self {
        let variants: Vec<String> = table.variants().map(str::to_string).collect();
        let rows = table
            .dataset_sizes()
            .into_iter()
            .map(|size| ScalingRow {
                size,
                memory_kb: variants
                    .iter()
                    .map(|v| table.get(v, size).map(|r| r.memory_kb))
                    .collect(),
            })
            .collect();
        Self { variants, rows }
    }

    /// Delimited form, memory in MB. Unmeasured cells are empty.
    pub fn to_csv(&self) -> Result<String> {
        let mut header = vec!["Size".to_string()];
        header.extend(self.variants.iter().map(|v| column_key(v)));

        let rows = self.rows.iter().map(|row| {
            let mut record = vec![row.size.to_string()];
            record.extend(
                row.memory_kb
                    .iter()
                    .map(|kb| kb.map(|kb| (kb / 1024.0).to_string()).unwrap_or_default()),
            );
            record
        });
        write_csv(header, rows)
    }

    /// Markdown form, memory in KB with thousands separators.
    pub fn to_markdown(&self) -> String {
        let mut md = String::from("| Size |");
        for v in &self.variants {
            md.push_str(&format!(" {} (KB) |", short_name(v)));
        }
        md.push('\n');
        md.push_str(&separator(self.variants.len() + 1));

        for row in &self.rows {
            md.push_str(&format!("| {} |", thousands(row.size)));
            for cell in &row.memory_kb {
                let value = cell.map(thousands_rounded).unwrap_or_else(|| "-".to_string());
                md.push_str(&format!(" {} |", value));
            }
            md.push('\n');
        }
        md
    }
}

/// Per-variant metrics at the anchor size.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorTable {
    /// The anchor dataset size.
    pub size: u64,
    /// Rows in variant name order; variants without a measurement at the
    /// anchor are left out.
    pub rows: Vec<AnchorRow>,
}

/// A row of [`AnchorTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorRow {
    /// Variant name.
    pub variant: String,
    /// Memory in MB.
    pub memory_mb: f64,
    /// Insert time in ms.
    pub insert_ms: f64,
    /// Search time in ms.
    pub search_ms: f64,
    /// Bytes per word.
    pub bytes_per_word: f64,
}

impl AnchorTable {
    /// Builds the anchor table for `size`.
    pub fn build(table: &BenchmarkTable, size: u64) -> Self {
        let rows = at_size(table, size)
            .present()
            .map(|r| AnchorRow {
                variant: r.variant.clone(),
                memory_mb: r.memory_mb(),
                insert_ms: r.insert_ms,
                search_ms: r.search_ms,
                bytes_per_word: r.bytes_per_word,
            })
            .collect();
        Self { size, rows }
    }

    /// `bytes_per_word_<anchor>.csv`
    pub fn bytes_per_word_file(&self) -> String {
        format!("bytes_per_word_{}.csv", file_label(self.size))
    }

    /// `performance_<anchor>.csv`
    pub fn performance_file(&self) -> String {
        format!("performance_{}.csv", file_label(self.size))
    }

    /// `table_performance_<anchor>.md`
    pub fn markdown_file(&self) -> String {
        format!("table_performance_{}.md", file_label(self.size))
    }

    /// `Implementation,BytesPerWord` rows.
    pub fn bytes_per_word_csv(&self) -> Result<String> {
        let header = vec!["Implementation".to_string(), "BytesPerWord".to_string()];
        let rows = self
            .rows
            .iter()
            .map(|r| vec![r.variant.clone(), r.bytes_per_word.to_string()]);
        write_csv(header, rows)
    }

    /// Full metrics as delimited text.
    pub fn to_csv(&self) -> Result<String> {
        let header = ["Implementation", "MemoryMB", "InsertMS", "SearchMS", "BytesPerWord"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let rows = self.rows.iter().map(|r| {
            vec![
                r.variant.clone(),
                r.memory_mb.to_string(),
                r.insert_ms.to_string(),
                r.search_ms.to_string(),
                r.bytes_per_word.to_string(),
            ]
        });
        write_csv(header, rows)
    }

    /// Markdown form with display rounding.
    pub fn to_markdown(&self) -> String {
        let mut md =
            String::from("| Implementation | Memory (MB) | Insert (ms) | Search (ms) | Bytes/Word |\n");
        md.push_str(&separator(5));
        for r in &self.rows {
            md.push_str(&format!(
                "| {} | {:.1} | {:.1} | {:.2} | {:.1} |\n",
                r.variant, r.memory_mb, r.insert_ms, r.search_ms, r.bytes_per_word
            ));
        }
        md
    }
}

/// Writes every table artifact into `config.table_dir`.
///
/// Returns the written paths in a fixed order.
pub fn export_tables(table: &BenchmarkTable, config: &ReportConfig) -> Result<Vec<PathBuf>> {
    let dir = config.table_dir.as_path();
    ensure_dir(dir)?;

    let scaling = MemoryScalingTable::build(table);
    let anchor = AnchorTable::build(table, config.anchor_size);

    let memory_md = format!("# Memory Usage Comparison\n\n{}", scaling.to_markdown());
    let perf_md = format!(
        "# Performance Metrics - {} Words\n\n{}",
        size_label(config.anchor_size),
        anchor.to_markdown()
    );

    let written = vec![
        write_artifact(dir, MEMORY_SCALING_CSV, scaling.to_csv()?)?,
        write_artifact(dir, &anchor.bytes_per_word_file(), anchor.bytes_per_word_csv()?)?,
        write_artifact(dir, &anchor.performance_file(), anchor.to_csv()?)?,
        write_artifact(dir, MEMORY_COMPARISON_MD, memory_md)?,
        write_artifact(dir, &anchor.markdown_file(), perf_md)?,
    ];

    info!(dir = %dir.display(), files = written.len(), "tables exported");
    Ok(written)
}

fn separator(columns: usize) -> String {
    let mut s = "|---".repeat(columns);
    s.push_str("|\n");
    s
}

fn write_csv(header: Vec<String>, rows: impl Iterator<Item = Vec<String>>) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    wtr.write_record(&header)
        .map_err(|e| ReportError::Serialization(format!("Failed to write CSV header: {}", e)))?;
    for row in rows {
        wtr.write_record(&row)
            .map_err(|e| ReportError::Serialization(format!("Failed to write CSV record: {}", e)))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ReportError::Serialization(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use triebench_core::BenchmarkRecord;

    fn sample() -> BenchmarkTable {
        BenchmarkTable::from_records(vec![
            BenchmarkRecord::new("Standard", 50_000, 20254.0, 31.27, 4.1, 415.0),
            BenchmarkRecord::new("Compressed", 50_000, 6712.0, 19.96, 3.1, 137.0),
            BenchmarkRecord::new("Double-Array", 50_000, 1144.0, 30160.0, 1.95, 23.0),
            BenchmarkRecord::new("Standard", 1_000, 470.0, 0.78, 0.21, 481.0),
        ])
    }

    #[test]
    fn test_memory_scaling_shape() {
        let scaling = MemoryScalingTable::build(&sample());
        assert_eq!(scaling.variants, vec!["Compressed", "Double-Array", "Standard"]);
        assert_eq!(scaling.rows.len(), 2);
        assert_eq!(scaling.rows[0].size, 1_000);
        assert_eq!(scaling.rows[0].memory_kb, vec![None, None, Some(470.0)]);
    }

    #[test]
    fn test_memory_scaling_csv() {
        let csv = MemoryScalingTable::build(&sample()).to_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Size,Compressed,DoubleArray,Standard"));
        assert_eq!(lines.next(), Some("1000,,,0.458984375"));
        assert_eq!(lines.next(), Some("50000,6.5546875,1.1171875,19.779296875"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_memory_scaling_markdown() {
        let md = MemoryScalingTable::build(&sample()).to_markdown();
        assert!(md.starts_with("| Size | Compressed (KB) | Double-Array (KB) | Standard (KB) |\n|---|---|---|---|\n"));
        assert!(md.contains("| 1,000 | - | - | 470 |\n"));
        assert!(md.contains("| 50,000 | 6,712 | 1,144 | 20,254 |\n"));
    }

    #[test]
    fn test_anchor_rows_in_name_order() {
        let anchor = AnchorTable::build(&sample(), 50_000);
        let names: Vec<&str> = anchor.rows.iter().map(|r| r.variant.as_str()).collect();
        assert_eq!(names, vec!["Compressed", "Double-Array", "Standard"]);
        assert_eq!(anchor.rows[1].insert_ms, 30160.0);
        assert_eq!(anchor.rows[2].bytes_per_word, 415.0);
        assert_eq!(anchor.rows[0].memory_mb, 6712.0 / 1024.0);
    }

    #[test]
    fn test_anchor_csvs() {
        let anchor = AnchorTable::build(&sample(), 50_000);
        assert_eq!(anchor.bytes_per_word_file(), "bytes_per_word_50k.csv");
        assert_eq!(
            anchor.bytes_per_word_csv().unwrap(),
            "Implementation,BytesPerWord\nCompressed,137\nDouble-Array,23\nStandard,415\n"
        );
        let perf = anchor.to_csv().unwrap();
        assert!(perf.starts_with("Implementation,MemoryMB,InsertMS,SearchMS,BytesPerWord\n"));
        assert!(perf.contains("Double-Array,1.1171875,30160,1.95,23\n"));
    }

    #[test]
    fn test_anchor_markdown() {
        let md = AnchorTable::build(&sample(), 50_000).to_markdown();
        assert!(md.contains("| Standard | 19.8 | 31.3 | 4.10 | 415.0 |\n"));
        assert!(md.contains("| Compressed | 6.6 | 20.0 | 3.10 | 137.0 |\n"));
    }

    #[test]
    fn test_anchor_without_measurements() {
        let anchor = AnchorTable::build(&sample(), 10_000);
        assert!(anchor.rows.is_empty());
        assert_eq!(
            anchor.bytes_per_word_csv().unwrap(),
            "Implementation,BytesPerWord\n"
        );
    }

    #[test]
    fn test_variant_with_comma_is_quoted() {
        let table = BenchmarkTable::from_records(vec![BenchmarkRecord::new(
            "Trie, tuned", 50_000, 1.0, 1.0, 1.0, 1.0,
        )]);
        let csv = AnchorTable::build(&table, 50_000).bytes_per_word_csv().unwrap();
        assert!(csv.contains("\"Trie, tuned\",1\n"));
    }
}
