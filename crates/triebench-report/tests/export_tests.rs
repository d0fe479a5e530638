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

//! End-to-end export tests over the shared fixtures.

use std::fs;
use std::path::Path;
use triebench_core::{parse_table, ReportConfig, ReportError};
use triebench_report::{export_figures, export_gnuplot_scripts, export_tables, render_summary};
use triebench_test::fixtures;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

fn config_in(dir: &Path) -> ReportConfig {
    ReportConfig::default()
        .with_table_dir(dir.join("tables"))
        .with_figure_dir(dir.join("figures"))
}

fn read_all(paths: &[std::path::PathBuf]) -> Vec<Vec<u8>> {
    paths.iter().map(|p| fs::read(p).unwrap()).collect()
}

// ==================== Tables ====================

#[test]
fn test_anchor_performance_has_three_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    export_tables(&fixtures::anchor_table(), &config).unwrap();

    let csv = fs::read_to_string(dir.path().join("tables/performance_50k.csv")).unwrap();
    assert_eq!(
        csv,
        "Implementation,MemoryMB,InsertMS,SearchMS,BytesPerWord\n\
         Compressed,6.5546875,19.96,3.1,137\n\
         Double-Array,1.1171875,30160,1.95,23\n\
         Standard,19.779296875,31.27,4.1,415\n"
    );

    let bpw = fs::read_to_string(dir.path().join("tables/bytes_per_word_50k.csv")).unwrap();
    assert_eq!(
        bpw,
        "Implementation,BytesPerWord\nCompressed,137\nDouble-Array,23\nStandard,415\n"
    );
}

#[test]
fn test_table_files_in_fixed_order() {
    let dir = tempfile::tempdir().unwrap();
    let written = export_tables(&fixtures::full_table(), &config_in(dir.path())).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "memory_scaling.csv",
            "bytes_per_word_50k.csv",
            "performance_50k.csv",
            "table_memory_comparison.md",
            "table_performance_50k.md",
        ]
    );
}

#[test]
fn test_memory_comparison_markdown() {
    let dir = tempfile::tempdir().unwrap();
    export_tables(&fixtures::full_table(), &config_in(dir.path())).unwrap();
    let md = fs::read_to_string(dir.path().join("tables/table_memory_comparison.md")).unwrap();
    assert!(md.starts_with("# Memory Usage Comparison\n\n"));
    assert!(md.contains("| 370,105 | 48,086 | 4,150 | 57,212 |\n"));
}

#[test]
fn test_sparse_table_leaves_gaps() {
    let dir = tempfile::tempdir().unwrap();
    export_tables(&fixtures::sparse_table(), &config_in(dir.path())).unwrap();

    let csv = fs::read_to_string(dir.path().join("tables/memory_scaling.csv")).unwrap();
    assert!(csv.contains("\n50000,6.5546875,,19.779296875\n"));

    let md = fs::read_to_string(dir.path().join("tables/table_memory_comparison.md")).unwrap();
    assert!(md.contains("| 1,000 | - | 88 | 470 |\n"));
}

#[test]
fn test_tables_are_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let table = fixtures::full_table();

    let first = read_all(&export_tables(&table, &config).unwrap());
    let second = read_all(&export_tables(&table, &config).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_custom_anchor_renames_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path()).with_anchor_size(10_000);
    export_tables(&fixtures::full_table(), &config).unwrap();
    assert!(dir.path().join("tables/performance_10k.csv").exists());
    assert!(dir.path().join("tables/table_performance_10k.md").exists());
}

// ==================== Gnuplot ====================

#[test]
fn test_gnuplot_scripts_reference_tables() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    export_gnuplot_scripts(&fixtures::full_table(), &config).unwrap();

    let script = fs::read_to_string(dir.path().join("tables/plot_bytes_per_word.gp")).unwrap();
    assert!(script.contains("'bytes_per_word_50k.csv'"));
    let script = fs::read_to_string(dir.path().join("tables/plot_memory_scaling.gp")).unwrap();
    assert!(script.contains("'memory_scaling.csv'"));
}

// ==================== Figures ====================

#[test]
fn test_figures_written() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let written = export_figures(&fixtures::full_table(), &config).unwrap();
    assert_eq!(written.len(), 9);

    let figures = dir.path().join("figures");
    assert!(figures.join("chart_data.json").exists());
    for name in [
        "fig1_memory_comparison",
        "fig2_bytes_per_word",
        "fig3_scalability",
        "fig4_tradeoff",
    ] {
        let svg = fs::read_to_string(figures.join(format!("{name}.svg"))).unwrap();
        assert!(svg.starts_with("<?xml"));
        let png = fs::read(figures.join(format!("{name}.png"))).unwrap();
        assert!(png.starts_with(PNG_MAGIC), "{name}.png is not a PNG");
    }
}

#[test]
fn test_chart_data_reflects_input() {
    let dir = tempfile::tempdir().unwrap();
    export_figures(&fixtures::full_table(), &config_in(dir.path())).unwrap();

    let json = fs::read_to_string(dir.path().join("figures/chart_data.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["baseline"], "Standard Trie");
    assert_eq!(value["dataset_sizes"][3], 370105);
    assert_eq!(value["memory_at_largest"]["dataset_size"], 370105);
    assert_eq!(value["bytes_per_word"]["bars"].as_array().unwrap().len(), 3);
}

#[test]
fn test_figures_are_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let table = fixtures::full_table();

    let first = read_all(&export_figures(&table, &config).unwrap());
    let second = read_all(&export_figures(&table, &config).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_zero_baseline_fails_figures() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_table(fixtures::ZERO_BASELINE_CSV).unwrap();
    let err = export_figures(&table, &config_in(dir.path())).unwrap_err();
    assert!(matches!(err, ReportError::UndefinedReduction { .. }));
}

#[test]
fn test_sparse_table_skips_tradeoff() {
    let dir = tempfile::tempdir().unwrap();
    export_figures(&fixtures::sparse_table(), &config_in(dir.path())).unwrap();
    let figures = dir.path().join("figures");
    assert!(figures.join("fig3_scalability.svg").exists());
    assert!(!figures.join("fig4_tradeoff.svg").exists());
}

// ==================== Text ====================

#[test]
fn test_summary_over_full_results() {
    let text = render_summary(&fixtures::full_table(), 50_000, "Standard Trie").unwrap();
    assert!(text.contains("Reduction from Standard Trie baseline (415.0 bytes/word):"));
    assert!(text.contains("  Compressed Trie: 67.0% reduction"));
    assert!(text.contains("  Double-Array Trie: 94.5% reduction"));
    assert!(text.contains("Double-Array Trie: 30160.0 ms"));
}

#[test]
fn test_summary_zero_baseline_fails() {
    let table = parse_table(fixtures::ZERO_BASELINE_CSV).unwrap();
    assert!(matches!(
        render_summary(&table, 50_000, "Standard Trie"),
        Err(ReportError::UndefinedReduction { .. })
    ));
}
