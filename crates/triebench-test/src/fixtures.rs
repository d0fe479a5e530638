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

//! Canonical benchmark result tables.

use triebench_core::{parse_table, BenchmarkTable};

/// Required header, in the order the benchmark driver writes it.
pub const HEADER: &str = "TrieType,DatasetSize,MemoryKB,InsertTimeMS,SearchTimeMS,BytesPerWord\n";

/// A complete run: three variants over four dataset sizes, with the
/// driver's trailing per-operation averages.
pub const FULL_RESULTS_CSV: &str = "\
TrieType,DatasetSize,MemoryKB,InsertTimeMS,SearchTimeMS,BytesPerWord,AvgInsertUS,AvgSearchUS
Standard Trie,1000,470.00,0.78,0.21,481.00,0.78,0.21
Compressed Trie,1000,135.00,0.21,0.12,138.00,0.21,0.12
Double-Array Trie,1000,88.00,31.91,0.05,90.00,31.91,0.05
Standard Trie,10000,4360.00,7.08,1.35,446.00,0.71,0.14
Compressed Trie,10000,1280.00,1.80,1.02,131.00,0.18,0.10
Double-Array Trie,10000,229.00,1204.00,0.48,23.00,120.40,0.05
Standard Trie,50000,20254.00,31.27,4.10,415.00,0.63,0.08
Compressed Trie,50000,6712.00,19.96,3.10,137.00,0.40,0.06
Double-Array Trie,50000,1144.00,30160.00,1.95,23.00,603.20,0.04
Standard Trie,370105,57212.00,86.29,12.40,158.00,0.23,0.03
Compressed Trie,370105,48086.00,68.29,10.85,133.00,0.18,0.03
Double-Array Trie,370105,4150.00,217110.00,6.20,11.00,586.62,0.02
";

/// The three 50,000-word rows, with short variant names.
pub const ANCHOR_ROWS_CSV: &str = "\
TrieType,DatasetSize,MemoryKB,InsertTimeMS,SearchTimeMS,BytesPerWord
Standard,50000,20254,31.27,4.10,415
Compressed,50000,6712,19.96,3.10,137
Double-Array,50000,1144,30160,1.95,23
";

/// Variants measured at different sizes; Double-Array has no 50,000 row.
pub const SPARSE_RESULTS_CSV: &str = "\
TrieType,DatasetSize,MemoryKB,InsertTimeMS,SearchTimeMS,BytesPerWord
Standard Trie,1000,470.00,0.78,0.21,481.00
Standard Trie,50000,20254.00,31.27,4.10,415.00
Compressed Trie,50000,6712.00,19.96,3.10,137.00
Double-Array Trie,1000,88.00,31.91,0.05,90.00
";

/// Baseline with zero bytes per word at the anchor.
pub const ZERO_BASELINE_CSV: &str = "\
TrieType,DatasetSize,MemoryKB,InsertTimeMS,SearchTimeMS,BytesPerWord
Standard Trie,50000,0.00,31.27,4.10,0.00
Compressed Trie,50000,6712.00,19.96,3.10,137.00
";

/// Header without the `MemoryKB` column.
pub const MISSING_MEMORY_CSV: &str = "\
TrieType,DatasetSize,InsertTimeMS,SearchTimeMS,BytesPerWord
Standard Trie,50000,31.27,4.10,415.00
";

/// Second data row carries a non-numeric dataset size.
pub const BAD_NUMBER_CSV: &str = "\
TrieType,DatasetSize,MemoryKB,InsertTimeMS,SearchTimeMS,BytesPerWord
Standard Trie,1000,470.00,0.78,0.21,481.00
Standard Trie,fifty,20254.00,31.27,4.10,415.00
";

/// Parses [`FULL_RESULTS_CSV`].
///
/// # Panics
///
/// Panics if the fixture does not parse.
pub fn full_table() -> BenchmarkTable {
    parse_table(FULL_RESULTS_CSV).expect("full fixture parses")
}

/// Parses [`ANCHOR_ROWS_CSV`].
///
/// # Panics
///
/// Panics if the fixture does not parse.
pub fn anchor_table() -> BenchmarkTable {
    parse_table(ANCHOR_ROWS_CSV).expect("anchor fixture parses")
}

/// Parses [`SPARSE_RESULTS_CSV`].
///
/// # Panics
///
/// Panics if the fixture does not parse.
pub fn sparse_table() -> BenchmarkTable {
    parse_table(SPARSE_RESULTS_CSV).expect("sparse fixture parses")
}

/// Every invalid fixture with a short name, for negative tests.
pub fn invalid_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("missing_memory_column", MISSING_MEMORY_CSV),
        ("bad_number", BAD_NUMBER_CSV),
    ]
}
