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

//! Pure queries over a [`BenchmarkTable`].
//!
//! Every report emitter goes through these functions, so text, tables and
//! charts always agree on the numbers they show.

use crate::error::{ReportError, Result};
use crate::record::BenchmarkRecord;
use crate::table::BenchmarkTable;
use serde::Serialize;

/// All measurements of one variant, ascending by dataset size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantSummary<'a> {
    /// Variant name.
    pub variant: &'a str,
    /// Records sorted by dataset size.
    pub records: &'a [BenchmarkRecord],
}

/// Per-variant records at a single dataset size.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    /// The anchor size the snapshot was taken at.
    pub size: u64,
    /// One entry per variant, in variant order.
    pub entries: Vec<(&'a str, Option<&'a BenchmarkRecord>)>,
}

impl<'a> Snapshot<'a> {
    /// The record of `variant`, if it was measured at this size.
    pub fn get(&self, variant: &str) -> Option<&'a BenchmarkRecord> {
        self.entries
            .iter()
            .find(|(name, _)| *name == variant)
            .and_then(|(_, record)| *record)
    }

    /// Records that exist at this size, in variant order.
    pub fn present(&self) -> impl Iterator<Item = &'a BenchmarkRecord> + '_ {
        self.entries.iter().filter_map(|(_, record)| *record)
    }

    /// Returns true when no variant was measured at this size.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// Memory reduction of one variant against a baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reduction {
    /// The compared variant.
    pub variant: String,
    /// Baseline bytes per word.
    pub baseline_bytes_per_word: f64,
    /// Compared variant's bytes per word.
    pub bytes_per_word: f64,
    /// Reduction in percent; negative when the variant uses more memory.
    pub percent: f64,
}

/// A numeric column of [`BenchmarkRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Memory in KB.
    MemoryKb,
    /// Insert time in ms.
    InsertMs,
    /// Search time in ms.
    SearchMs,
    /// Bytes per word.
    BytesPerWord,
}

impl Metric {
    /// Reads this metric from a record.
    pub fn value(self, record: &BenchmarkRecord) -> f64 {
        match self {
            Metric::MemoryKb => record.memory_kb,
            Metric::InsertMs => record.insert_ms,
            Metric::SearchMs => record.search_ms,
            Metric::BytesPerWord => record.bytes_per_word,
        }
    }

    /// Returns the metric's input column name.
    pub fn as_str(&self) -> &str {
        match self {
            Metric::MemoryKb => "MemoryKB",
            Metric::InsertMs => "InsertTimeMS",
            Metric::SearchMs => "SearchTimeMS",
            Metric::BytesPerWord => "BytesPerWord",
        }
    }
}

/// Per-variant `(dataset size, value)` points of one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<'a> {
    /// Variant name.
    pub variant: &'a str,
    /// Points ascending by dataset size.
    pub points: Vec<(u64, f64)>,
}

/// Lazily yields each variant's records, variants in alphabetical order.
///
/// # Examples
///
/// ```
/// use triebench_core::{summary_by_variant, BenchmarkRecord, BenchmarkTable};
///
/// let table = BenchmarkTable::from_records(vec![
///     BenchmarkRecord::new("Standard", 1_000, 470.0, 0.78, 0.2, 481.0),
///     BenchmarkRecord::new("Compressed", 1_000, 135.0, 0.21, 0.1, 138.0),
/// ]);
/// let names: Vec<&str> = summary_by_variant(&table).map(|s| s.variant).collect();
/// assert_eq!(names, vec!["Compressed", "Standard"]);
/// ```
pub fn summary_by_variant(table: &BenchmarkTable) -> impl Iterator<Item = VariantSummary<'_>> {
    table
        .iter()
        .map(|(variant, records)| VariantSummary { variant, records })
}

/// Takes a snapshot of every variant at `size`.
///
/// Variants without a measurement at `size` are kept with `None` so callers
/// can tell "not measured" from "unknown variant".
pub fn at_size(table: &BenchmarkTable, size: u64) -> Snapshot<'_> {
    let entries = table
        .variants()
        .map(|variant| (variant, table.get(variant, size)))
        .collect();
    Snapshot { size, entries }
}

/// Percentage reduction from `baseline` to `other` bytes per word.
///
/// # Errors
///
/// Returns [`ReportError::UndefinedReduction`] when the baseline is zero.
///
/// # Examples
///
/// ```
/// use triebench_core::{reduction_relative_to, BenchmarkRecord};
///
/// let standard = BenchmarkRecord::new("Standard", 50_000, 20254.0, 31.27, 4.1, 415.0);
/// let compressed = BenchmarkRecord::new("Compressed", 50_000, 6712.0, 19.96, 3.1, 137.0);
///
/// let reductions = reduction_relative_to(&standard, [&compressed]).unwrap();
/// assert!((reductions[0].percent - 67.0).abs() < 0.1);
/// ```
pub fn reduction_relative_to<'a>(
    baseline: &BenchmarkRecord,
    others: impl IntoIterator<Item = &'a BenchmarkRecord>,
) -> Result<Vec<Reduction>> {
    let base = baseline.bytes_per_word;
    if base == 0.0 {
        return Err(ReportError::UndefinedReduction {
            variant: baseline.variant.clone(),
        });
    }

    Ok(others
        .into_iter()
        .map(|other| Reduction {
            variant: other.variant.clone(),
            baseline_bytes_per_word: base,
            bytes_per_word: other.bytes_per_word,
            percent: (base - other.bytes_per_word) / base * 100.0,
        })
        .collect())
}

/// Reductions of every other variant against `baseline` at the snapshot
/// size. Returns `Ok(None)` when the baseline was not measured there.
pub fn snapshot_reductions(snapshot: &Snapshot<'_>, baseline: &str) -> Result<Option<Vec<Reduction>>> {
    let Some(base) = snapshot.get(baseline) else {
        return Ok(None);
    };
    let others = snapshot.present().filter(|r| r.variant != base.variant);
    reduction_relative_to(base, others).map(Some)
}

/// One series per variant for `metric`.
pub fn series(table: &BenchmarkTable, metric: Metric) -> Vec<Series<'_>> {
    table
        .iter()
        .map(|(variant, records)| Series {
            variant,
            points: records
                .iter()
                .map(|r| (r.dataset_size, metric.value(r)))
                .collect(),
        })
        .collect()
}

/// The largest dataset size every variant was measured at.
pub fn largest_common_size(table: &BenchmarkTable) -> Option<u64> {
    table
        .dataset_sizes()
        .into_iter()
        .rev()
        .find(|&size| table.variants().all(|v| table.get(v, size).is_some()))
}
