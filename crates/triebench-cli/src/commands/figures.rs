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

//! Figures command - chart data and SVG/PNG figures

use super::{load, print_created};
use triebench_core::{BenchmarkTable, ReportConfig, Result};
use triebench_report::export_figures;

/// Writes chart data and figures for `config.input`.
pub fn figures(config: &ReportConfig) -> Result<()> {
    let table = load(config)?;
    write_figures(&table, config)
}

pub(super) fn write_figures(table: &BenchmarkTable, config: &ReportConfig) -> Result<()> {
    let written = export_figures(table, config)?;
    print_created(&written);
    Ok(())
}
