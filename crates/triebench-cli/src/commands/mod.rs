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

//! CLI command implementations

mod analyze;
mod figures;
mod report;
mod tables;

pub use analyze::analyze;
pub use figures::figures;
pub use report::report;
pub use tables::tables;

use std::path::PathBuf;
use triebench_core::{load_table, BenchmarkTable, ReportConfig, Result};

/// Validates `config` and loads its input.
fn load(config: &ReportConfig) -> Result<BenchmarkTable> {
    config.validate()?;
    load_table(&config.input, config.max_file_size)
}

fn print_created(paths: &[PathBuf]) {
    for path in paths {
        println!("Created: {}", path.display());
    }
}
