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

//! Plain-text summary report.
//!
//! Mirrors the layout of the console summary the benchmark tooling has always
//! printed: one block per variant, then anchor-size efficiency and speed
//! comparisons, then fixed recommendations.

use crate::format::size_label;
use std::fmt::Write;
use tracing::warn;
use triebench_core::{at_size, snapshot_reductions, summary_by_variant, BenchmarkTable, Result};

const WIDE_RULE: usize = 60;
const NARROW_RULE: usize = 40;

/// A fixed editorial recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// Situation the advice applies to.
    pub scenario: &'static str,
    /// Suggested variant.
    pub variant: &'static str,
    /// Supporting bullet points.
    pub notes: &'static [&'static str],
}

/// Recommendations printed at the end of every summary. They are editorial
/// and do not depend on the loaded data.
pub const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        scenario: "For most applications",
        variant: "Compressed Trie",
        notes: &["Saves 67% memory vs Standard", "Fast construction and search"],
    },
    Recommendation {
        scenario: "For memory-critical systems",
        variant: "Double-Array Trie",
        notes: &["Saves 94% memory vs Standard", "Note: Slow construction"],
    },
    Recommendation {
        scenario: "For simplicity/dynamic changes",
        variant: "Standard Trie",
        notes: &["Easiest to implement and debug"],
    },
];

/// Renders the full text summary.
///
/// `baseline` is resolved against the table (so `Standard` matches
/// `Standard Trie`); the reduction section is skipped when the baseline has
/// no measurement at `anchor_size`.
///
/// # Errors
///
/// Returns [`triebench_core::ReportError::UndefinedReduction`] when the
/// baseline's bytes per word at the anchor is zero.
pub fn render_summary(table: &BenchmarkTable, anchor_size: u64, baseline: &str) -> Result<String> {
    let mut out = String::new();
    let anchor = size_label(anchor_size);

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Benchmark Results Summary");
    let _ = writeln!(out, "{}", "=".repeat(WIDE_RULE));

    for summary in summary_by_variant(table) {
        let _ = writeln!(out, "\n{}:", summary.variant);
        let _ = writeln!(out, "{}", "-".repeat(NARROW_RULE));
        for r in summary.records {
            let _ = writeln!(out, "  Dataset: {:6} words", r.dataset_size);
            let _ = writeln!(out, "    Memory:     {:10.1} KB", r.memory_kb);
            let _ = writeln!(out, "    Insert:     {:10.2} ms", r.insert_ms);
            let _ = writeln!(out, "    Search:     {:10.2} ms", r.search_ms);
            let _ = writeln!(out, "    Bytes/word: {:10.2}", r.bytes_per_word);
        }
    }

    let snapshot = at_size(table, anchor_size);

    section(&mut out, &format!("Memory Efficiency ({} dataset)", anchor));
    if snapshot.is_empty() {
        let _ = writeln!(out, "No measurements at {} words", anchor_size);
    }
    for r in snapshot.present() {
        let _ = writeln!(out, "{}: {:.1} bytes/word", r.variant, r.bytes_per_word);
    }

    let resolved = table.resolve_variant(baseline);
    match resolved.map(|name| (name, snapshot_reductions(&snapshot, name))) {
        Some((name, Ok(Some(reductions)))) => {
            let base = reductions
                .first()
                .map(|r| r.baseline_bytes_per_word)
                .or_else(|| snapshot.get(name).map(|r| r.bytes_per_word))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "\nReduction from {} baseline ({:.1} bytes/word):",
                name, base
            );
            for r in &reductions {
                if r.percent >= 0.0 {
                    let _ = writeln!(out, "  {}: {:.1}% reduction", r.variant, r.percent);
                } else {
                    let _ = writeln!(out, "  {}: {:.1}% increase", r.variant, -r.percent);
                }
            }
        }
        Some((_, Err(e))) => return Err(e),
        Some((name, Ok(None))) => {
            warn!(baseline = name, anchor_size, "baseline not measured at anchor size");
        }
        None => warn!(baseline, "baseline variant not present in results"),
    }

    section(&mut out, &format!("Construction Speed ({} dataset)", anchor));
    for r in snapshot.present() {
        let _ = writeln!(out, "{}: {:.1} ms", r.variant, r.insert_ms);
    }

    let _ = writeln!(out, "\nRecommendations:");
    let _ = writeln!(out, "{}", "-".repeat(WIDE_RULE));
    for (i, rec) in RECOMMENDATIONS.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}: Use {}", rec.scenario, rec.variant);
        for note in rec.notes {
            let _ = writeln!(out, "  - {}", note);
        }
    }

    Ok(out)
}

fn section(out: &mut String, title: &str) {
    let rule = "=".repeat(WIDE_RULE);
    let _ = writeln!(out, "\n{}\n{}\n{}", rule, title, rule);
}
