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

//! Report command - summary, tables and figures in one run

use super::analyze::print_summary;
use super::figures::write_figures;
use super::load;
use super::tables::write_tables;
use triebench_core::{ReportConfig, Result};

/// Prints the summary, then writes every table and figure. The input is
/// read once.
pub fn report(config: &ReportConfig) -> Result<()> {
    let table = load(config)?;
    print_summary(&table, config)?;
    println!();
    write_tables(&table, config)?;
    println!();
    write_figures(&table, config)
}
