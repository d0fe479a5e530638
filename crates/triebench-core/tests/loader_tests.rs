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

//! Loader integration tests against the shared fixtures.

use triebench_core::{
    at_size, load_table, parse_table, snapshot_reductions, ReportError, DEFAULT_ANCHOR_SIZE,
};
use triebench_test::{fixtures, results_csv, write_temp_csv};

#[test]
fn test_load_full_fixture_from_disk() {
    let file = write_temp_csv(fixtures::FULL_RESULTS_CSV);
    let table = load_table(file.path(), u64::MAX).unwrap();

    assert_eq!(table.variant_count(), 3);
    assert_eq!(table.len(), 12);
    let sizes: Vec<u64> = table.dataset_sizes().into_iter().collect();
    assert_eq!(sizes, vec![1_000, 10_000, 50_000, 370_105]);

    let da = table.get("Double-Array Trie", 370_105).unwrap();
    assert_eq!(da.insert_ms, 217110.0);
    assert_eq!(da.avg_insert_us, Some(586.62));
}

#[test]
fn test_nonexistent_path_is_input_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("benchmark_results.csv");
    let err = load_table(&path, u64::MAX).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("benchmark_results.csv"));
}

#[test]
fn test_invalid_samples_are_malformed() {
    for (name, csv) in fixtures::invalid_samples() {
        let err = parse_table(csv).unwrap_err();
        assert!(
            matches!(err, ReportError::MalformedRecord { .. }),
            "{name}: unexpected {err:?}"
        );
    }
}

#[test]
fn test_missing_memory_column_from_disk() {
    let file = write_temp_csv(fixtures::MISSING_MEMORY_CSV);
    let err = load_table(file.path(), u64::MAX).unwrap_err();
    assert!(matches!(err, ReportError::MalformedRecord { line: 1, .. }));
}

#[test]
fn test_bad_number_names_line() {
    let err = parse_table(fixtures::BAD_NUMBER_CSV).unwrap_err();
    assert!(err.to_string().starts_with("Malformed record at line 3"), "{err}");
}

#[test]
fn test_anchor_reduction_matches_reference_numbers() {
    let table = fixtures::anchor_table();
    let snapshot = at_size(&table, DEFAULT_ANCHOR_SIZE);
    let reductions = snapshot_reductions(&snapshot, "Standard").unwrap().unwrap();

    let compressed = reductions.iter().find(|r| r.variant == "Compressed").unwrap();
    let double_array = reductions.iter().find(|r| r.variant == "Double-Array").unwrap();
    assert!((compressed.percent - 67.0).abs() < 0.1);
    assert!((double_array.percent - 94.5).abs() < 0.1);
}

#[test]
fn test_zero_baseline_surfaces_error() {
    let table = parse_table(fixtures::ZERO_BASELINE_CSV).unwrap();
    let snapshot = at_size(&table, DEFAULT_ANCHOR_SIZE);
    assert!(matches!(
        snapshot_reductions(&snapshot, "Standard Trie"),
        Err(ReportError::UndefinedReduction { .. })
    ));
}

#[test]
fn test_sparse_snapshot_has_gap() {
    let table = fixtures::sparse_table();
    let snapshot = at_size(&table, 50_000);
    assert!(snapshot.get("Double-Array Trie").is_none());
    assert!(snapshot.get("Compressed Trie").is_some());
}

#[test]
fn test_duplicate_rows_last_wins() {
    let csv = results_csv(&[
        ("Standard Trie", 1_000, 470.0, 0.78, 0.21, 481.0),
        ("Standard Trie", 1_000, 480.0, 0.80, 0.22, 491.0),
    ]);
    let table = parse_table(&csv).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.get("Standard Trie", 1_000).map(|r| r.memory_kb),
        Some(480.0)
    );
}
