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

//! Centralized report configuration.
//!
//! Provides the input location, anchor size, baseline variant and output
//! directories shared by every emitter.

use crate::error::{ReportError, Result};
use std::path::PathBuf;

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "benchmark_results.csv";

/// Dataset size used for cross-variant snapshots.
pub const DEFAULT_ANCHOR_SIZE: u64 = 50_000;

/// Variant that reductions are expressed against.
pub const DEFAULT_BASELINE: &str = "Standard Trie";

/// Directory that receives figures.
pub const DEFAULT_FIGURE_DIR: &str = "figures";

/// Default maximum input size (100 MB).
/// Can be overridden via TRIEBENCH_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "TRIEBENCH_MAX_FILE_SIZE";

/// Report configuration.
///
/// # Example
///
/// ```
/// use triebench_core::ReportConfig;
///
/// let config = ReportConfig::default()
///     .with_input("results/run1.csv")
///     .with_anchor_size(10_000)
///     .with_baseline("Compressed Trie");
///
/// assert_eq!(config.anchor_size, 10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Benchmark results file.
    pub input: PathBuf,
    /// Dataset size for snapshot comparisons.
    pub anchor_size: u64,
    /// Baseline variant for reductions.
    pub baseline: String,
    /// Directory for CSV, markdown and gnuplot artifacts.
    pub table_dir: PathBuf,
    /// Directory for chart data and figures.
    pub figure_dir: PathBuf,
    /// Largest input accepted, in bytes.
    pub max_file_size: u64,
}

impl ReportConfig {
    /// Sets the input path.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the anchor size.
    pub fn with_anchor_size(mut self, anchor_size: u64) -> Self {
        self.anchor_size = anchor_size;
        self
    }

    /// Sets the baseline variant.
    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }

    /// Sets the table output directory.
    pub fn with_table_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.table_dir = dir.into();
        self
    }

    /// Sets the figure output directory.
    pub fn with_figure_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.figure_dir = dir.into();
        self
    }

    /// Sets the maximum input size.
    pub fn with_max_file_size(mut self, max: u64) -> Self {
        self.max_file_size = max;
        self
    }

    /// Checks that the configuration can drive a report.
    pub fn validate(&self) -> Result<()> {
        if self.anchor_size == 0 {
            return Err(ReportError::invalid_config(
                "anchor_size",
                "must be a positive dataset size",
            ));
        }
        if self.baseline.trim().is_empty() {
            return Err(ReportError::invalid_config("baseline", "must not be empty"));
        }
        if self.max_file_size == 0 {
            return Err(ReportError::invalid_config(
                "max_file_size",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            anchor_size: DEFAULT_ANCHOR_SIZE,
            baseline: DEFAULT_BASELINE.to_string(),
            table_dir: PathBuf::from("."),
            figure_dir: PathBuf::from(DEFAULT_FIGURE_DIR),
            max_file_size: max_file_size_from_env(),
        }
    }
}

/// Reads [`MAX_FILE_SIZE_ENV`], falling back to [`DEFAULT_MAX_FILE_SIZE`]
/// when unset or unparsable.
fn max_file_size_from_env() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}
