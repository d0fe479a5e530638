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

//! Triebench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **analyze** (default): print the text summary of a results file
//! - **tables**: write `memory_scaling.csv`, `bytes_per_word_<anchor>.csv`,
//!   `performance_<anchor>.csv`, the markdown tables and gnuplot scripts
//! - **figures**: write `chart_data.json` and the SVG/PNG figures
//! - **report**: all of the above in one run
//!
//! Every command accepts the input path (default `benchmark_results.csv`),
//! `--anchor-size`, `--baseline` and `--verbose`.

pub mod cli;
pub mod commands;
