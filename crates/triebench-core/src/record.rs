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

//! A single benchmark measurement.

use serde::{Deserialize, Serialize};

/// Column names every input table must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "TrieType",
    "DatasetSize",
    "MemoryKB",
    "InsertTimeMS",
    "SearchTimeMS",
    "BytesPerWord",
];

/// Suffix dropped from variant names in compact labels.
const VARIANT_SUFFIX: &str = " Trie";

/// One measurement of one trie variant over one dataset size.
///
/// Records are produced by the loader and never mutated afterwards; the
/// table only hands out shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Variant name, e.g. `Compressed Trie`.
    #[serde(rename = "TrieType")]
    pub variant: String,
    /// Number of words the variant was built over.
    #[serde(rename = "DatasetSize")]
    pub dataset_size: u64,
    /// Memory footprint in KB.
    #[serde(rename = "MemoryKB")]
    pub memory_kb: f64,
    /// Total insertion time in milliseconds.
    #[serde(rename = "InsertTimeMS")]
    pub insert_ms: f64,
    /// Total search time in milliseconds.
    #[serde(rename = "SearchTimeMS")]
    pub search_ms: f64,
    /// Memory footprint divided by dataset size.
    #[serde(rename = "BytesPerWord")]
    pub bytes_per_word: f64,
    /// Average time per insert in microseconds, when the driver recorded it.
    #[serde(rename = "AvgInsertUS", default, skip_serializing_if = "Option::is_none")]
    pub avg_insert_us: Option<f64>,
    /// Average time per search in microseconds, when the driver recorded it.
    #[serde(rename = "AvgSearchUS", default, skip_serializing_if = "Option::is_none")]
    pub avg_search_us: Option<f64>,
}

impl BenchmarkRecord {
    /// Creates a record with the required fields only.
    pub fn new(
        variant: impl Into<String>,
        dataset_size: u64,
        memory_kb: f64,
        insert_ms: f64,
        search_ms: f64,
        bytes_per_word: f64,
    ) -> Self {
        Self {
            variant: variant.into(),
            dataset_size,
            memory_kb,
            insert_ms,
            search_ms,
            bytes_per_word,
            avg_insert_us: None,
            avg_search_us: None,
        }
    }

    /// Memory footprint in MB.
    pub fn memory_mb(&self) -> f64 {
        self.memory_kb / 1024.0
    }

    /// Insertion time in seconds.
    pub fn insert_secs(&self) -> f64 {
        self.insert_ms / 1000.0
    }

    /// Variant name without the trailing ` Trie`.
    pub fn short_name(&self) -> &str {
        short_name(&self.variant)
    }

    /// Returns the name of the first numeric field that is negative or not
    /// finite.
    pub(crate) fn invalid_field(&self) -> Option<&'static str> {
        let fields = [
            ("MemoryKB", Some(self.memory_kb)),
            ("InsertTimeMS", Some(self.insert_ms)),
            ("SearchTimeMS", Some(self.search_ms)),
            ("BytesPerWord", Some(self.bytes_per_word)),
            ("AvgInsertUS", self.avg_insert_us),
            ("AvgSearchUS", self.avg_search_us),
        ];
        fields
            .iter()
            .find(|(_, v)| v.is_some_and(|v| !v.is_finite() || v < 0.0))
            .map(|(name, _)| *name)
    }
}

/// Variant name without the trailing ` Trie`.
///
/// ```
/// use triebench_core::record::short_name;
///
/// assert_eq!(short_name("Double-Array Trie"), "Double-Array");
/// assert_eq!(short_name("Standard"), "Standard");
/// ```
pub fn short_name(variant: &str) -> &str {
    variant.strip_suffix(VARIANT_SUFFIX).unwrap_or(variant)
}

/// Compact column key for a variant: the short name with everything but
/// ASCII alphanumerics removed.
///
/// ```
/// use triebench_core::record::column_key;
///
/// assert_eq!(column_key("Double-Array Trie"), "DoubleArray");
/// ```
pub fn column_key(variant: &str) -> String {
    short_name(variant)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
