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

//! Benchmark results loading and aggregation for trie variant comparisons.
//!
//! This crate holds the data side of the reporting pipeline:
//!
//! - [`loader`]: reads a `benchmark_results.csv` style table into memory
//! - [`table`]: the per-variant, size-ordered index of records
//! - [`aggregate`]: pure queries used by every report emitter
//! - [`config`]: shared report configuration
//! - [`error`]: the [`ReportError`] type
//!
//! # Example
//!
//! ```
//! use triebench_core::{at_size, parse_table, snapshot_reductions};
//!
//! let csv = "TrieType,DatasetSize,MemoryKB,InsertTimeMS,SearchTimeMS,BytesPerWord\n\
//!            Standard Trie,50000,20254,31.27,4.10,415\n\
//!            Compressed Trie,50000,6712,19.96,3.10,137\n";
//!
//! let table = parse_table(csv).unwrap();
//! let snapshot = at_size(&table, 50_000);
//! let reductions = snapshot_reductions(&snapshot, "Standard Trie").unwrap().unwrap();
//! assert_eq!(reductions[0].variant, "Compressed Trie");
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod loader;
pub mod record;
pub mod table;

pub use aggregate::{
    at_size, largest_common_size, reduction_relative_to, series, snapshot_reductions,
    summary_by_variant, Metric, Reduction, Series, Snapshot, VariantSummary,
};
pub use config::{ReportConfig, DEFAULT_ANCHOR_SIZE, DEFAULT_BASELINE, DEFAULT_INPUT};
pub use error::{ReportError, Result};
pub use loader::{load_from_reader, load_table, parse_table};
pub use record::{BenchmarkRecord, REQUIRED_COLUMNS};
pub use table::BenchmarkTable;
