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

//! Chart data derived from the loaded results.
//!
//! Every value here comes from the [`BenchmarkTable`] through the
//! aggregation queries, so figures always agree with the text and tabular
//! reports.

use serde::Serialize;
use triebench_core::{
    at_size, largest_common_size, series, snapshot_reductions, BenchmarkTable, Metric, Reduction,
    ReportError, Result,
};

/// An `(x, y)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal value (dataset size in words).
    pub x: f64,
    /// Vertical value.
    pub y: f64,
}

/// One variant's line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    /// Variant name.
    pub variant: String,
    /// Points ascending by `x`.
    pub points: Vec<Point>,
}

/// One variant's bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Variant name.
    pub variant: String,
    /// Bar height in the chart's unit.
    pub value: f64,
}

/// Bars of one metric across variants at a single dataset size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    /// Dataset size the bars were measured at.
    pub dataset_size: u64,
    /// Unit of `value`.
    pub unit: &'static str,
    /// Bars in variant order.
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Largest bar value, or zero without bars.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

/// Everything the figures need, in display units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// All observed dataset sizes, ascending.
    pub dataset_sizes: Vec<u64>,
    /// Variants in name order.
    pub variants: Vec<String>,
    /// Memory (MB) against dataset size, per variant.
    pub memory_mb: Vec<LineSeries>,
    /// Bytes per word at the anchor size.
    pub bytes_per_word: BarChart,
    /// Resolved baseline variant, when present in the results.
    pub baseline: Option<String>,
    /// Reductions against the baseline at the anchor size.
    pub reductions: Vec<Reduction>,
    /// Memory (MB) at the largest size shared by all variants.
    pub memory_at_largest: Option<BarChart>,
    /// Insert time (s) at the largest size shared by all variants.
    pub insert_secs_at_largest: Option<BarChart>,
}

impl ChartData {
    /// Derives chart data from `table`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::UndefinedReduction`] when the baseline's bytes
    /// per word at `anchor_size` is zero.
    pub fn build(table: &BenchmarkTable, anchor_size: u64, baseline: &str) -> Result<Self> {
        let memory_mb = series(table, Metric::MemoryKb)
            .into_iter()
            .map(|s| LineSeries {
                variant: s.variant.to_string(),
                points: s
                    .points
                    .iter()
                    .map(|&(size, kb)| Point {
                        x: size as f64,
                        y: kb / 1024.0,
                    })
                    .collect(),
            })
            .collect();

        let snapshot = at_size(table, anchor_size);
        let bytes_per_word = BarChart {
            dataset_size: anchor_size,
            unit: "bytes/word",
            bars: snapshot
                .present()
                .map(|r| Bar {
                    variant: r.variant.clone(),
                    value: r.bytes_per_word,
                })
                .collect(),
        };

        let baseline = table.resolve_variant(baseline).map(str::to_string);
        let reductions = match &baseline {
            Some(name) => snapshot_reductions(&snapshot, name)?.unwrap_or_default(),
            None => Vec::new(),
        };

        let largest = largest_common_size(table);
        let bars_at = |size: u64, unit: &'static str, value: fn(f64, f64) -> f64| BarChart {
            dataset_size: size,
            unit,
            bars: at_size(table, size)
                .present()
                .map(|r| Bar {
                    variant: r.variant.clone(),
                    value: value(r.memory_mb(), r.insert_secs()),
                })
                .collect(),
        };
        let memory_at_largest = largest.map(|size| bars_at(size, "MB", |mb, _| mb));
        let insert_secs_at_largest = largest.map(|size| bars_at(size, "s", |_, secs| secs));

        Ok(Self {
            dataset_sizes: table.dataset_sizes().into_iter().collect(),
            variants: table.variants().map(str::to_string).collect(),
            memory_mb,
            bytes_per_word,
            baseline,
            reductions,
            memory_at_largest,
            insert_secs_at_largest,
        })
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Serialization(format!("Failed to encode chart data: {}", e)))?;
        json.push('\n');
        Ok(json)
    }

    /// Reduction of `variant` against the baseline, if computed.
    pub fn reduction_for(&self, variant: &str) -> Option<f64> {
        self.reductions
            .iter()
            .find(|r| r.variant == variant)
            .map(|r| r.percent)
    }
}
