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

//! Report emitters for trie benchmark results.
//!
//! Everything here reads a [`triebench_core::BenchmarkTable`] and goes through
//! the aggregation queries in `triebench-core`:
//!
//! - [`text`]: the console summary
//! - [`tables`]: delimited and markdown tables
//! - [`gnuplot`]: plotting scripts over the delimited tables
//! - [`charts`]: chart data JSON plus SVG and PNG figures
//!
//! All emitters are deterministic: the same table and parameters always
//! produce byte-identical artifacts.
//!
//! # Example
//!
//! ```
//! use triebench_core::parse_table;
//! use triebench_report::render_summary;
//!
//! let csv = "TrieType,DatasetSize,MemoryKB,InsertTimeMS,SearchTimeMS,BytesPerWord\n\
//!            Standard Trie,50000,20254,31.27,4.10,415\n\
//!            Compressed Trie,50000,6712,19.96,3.10,137\n";
//!
//! let table = parse_table(csv).unwrap();
//! let summary = render_summary(&table, 50_000, "Standard Trie").unwrap();
//! assert!(summary.contains("Compressed Trie: 67.0% reduction"));
//! ```

pub mod charts;
pub mod export;
pub mod format;
pub mod gnuplot;
pub mod tables;
pub mod text;

pub use charts::{export_figures, ChartData, Figure, Rasterizer};
pub use gnuplot::export_gnuplot_scripts;
pub use tables::{export_tables, AnchorTable, MemoryScalingTable};
pub use text::{render_summary, Recommendation, RECOMMENDATIONS};
