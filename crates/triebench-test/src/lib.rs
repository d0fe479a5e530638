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

//! Shared test fixtures for the triebench crates.
//!
//! # Quick Start
//!
//! ```rust
//! use triebench_test::fixtures;
//!
//! let table = fixtures::full_table();
//! assert_eq!(table.variant_count(), 3);
//!
//! // Write a fixture to disk for loader and CLI tests
//! let file = triebench_test::write_temp_csv(fixtures::FULL_RESULTS_CSV);
//! assert!(file.path().exists());
//! ```

pub mod fixtures;

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `content` to a fresh `.csv` temp file.
///
/// # Panics
///
/// Panics if the temp file cannot be created or written.
pub fn write_temp_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Builds a results CSV from `(variant, size, memory_kb, insert_ms,
/// search_ms, bytes_per_word)` rows.
pub fn results_csv(rows: &[(&str, u64, f64, f64, f64, f64)]) -> String {
    let mut out = String::from(fixtures::HEADER);
    for (variant, size, memory, insert, search, bpw) in rows {
        out.push_str(&format!(
            "{},{},{:.2},{:.2},{:.2},{:.2}\n",
            variant, size, memory, insert, search, bpw
        ));
    }
    out
}
