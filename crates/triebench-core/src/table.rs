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

//! In-memory index of benchmark records.

use crate::record::{short_name, BenchmarkRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Benchmark records grouped by variant.
///
/// Variants iterate in alphabetical order. Within a variant, records are
/// sorted ascending by dataset size and sizes are unique: inserting a record
/// for an existing (variant, size) pair replaces the earlier one.
///
/// # Examples
///
/// ```
/// use triebench_core::{BenchmarkRecord, BenchmarkTable};
///
/// let table = BenchmarkTable::from_records(vec![
///     BenchmarkRecord::new("Standard Trie", 50_000, 20254.0, 31.27, 4.1, 415.0),
///     BenchmarkRecord::new("Standard Trie", 1_000, 470.0, 0.78, 0.1, 481.0),
/// ]);
///
/// let sizes: Vec<u64> = table
///     .records("Standard Trie")
///     .iter()
///     .map(|r| r.dataset_size)
///     .collect();
/// assert_eq!(sizes, vec![1_000, 50_000]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkTable {
    variants: BTreeMap<String, Vec<BenchmarkRecord>>,
}

impl BenchmarkTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from records in parse order (later duplicates win).
    pub fn from_records(records: impl IntoIterator<Item = BenchmarkRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Inserts a record, returning the one it replaced if the variant
    /// already had a measurement at that dataset size.
    pub(crate) fn insert(&mut self, record: BenchmarkRecord) -> Option<BenchmarkRecord> {
        let records = self.variants.entry(record.variant.clone()).or_default();
        match records.binary_search_by_key(&record.dataset_size, |r| r.dataset_size) {
            Ok(idx) => Some(std::mem::replace(&mut records[idx], record)),
            Err(idx) => {
                records.insert(idx, record);
                None
            }
        }
    }

    /// Variant names in alphabetical order.
    pub fn variants(&self) -> impl Iterator<Item = &str> + '_ {
        self.variants.keys().map(String::as_str)
    }

    /// Records of one variant, ascending by dataset size. Empty when the
    /// variant is unknown.
    pub fn records(&self, variant: &str) -> &[BenchmarkRecord] {
        self.variants.get(variant).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates `(variant, records)` pairs in variant order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BenchmarkRecord])> + '_ {
        self.variants
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Looks up the record of `variant` at exactly `size`.
    pub fn get(&self, variant: &str, size: u64) -> Option<&BenchmarkRecord> {
        let records = self.variants.get(variant)?;
        records
            .binary_search_by_key(&size, |r| r.dataset_size)
            .ok()
            .map(|idx| &records[idx])
    }

    /// Every dataset size measured by at least one variant, ascending.
    pub fn dataset_sizes(&self) -> BTreeSet<u64> {
        self.variants
            .values()
            .flatten()
            .map(|r| r.dataset_size)
            .collect()
    }

    /// Resolves a user-supplied variant name against the table.
    ///
    /// An exact match wins; otherwise names are compared without their
    /// ` Trie` suffix, so `Standard` finds `Standard Trie` and vice versa.
    pub fn resolve_variant(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.variants.get_key_value(name) {
            return Some(key.as_str());
        }
        let wanted = short_name(name);
        self.variants()
            .find(|candidate| short_name(candidate) == wanted)
    }

    /// Number of variants.
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Total number of records across all variants.
    pub fn len(&self) -> usize {
        self.variants.values().map(Vec::len).sum()
    }

    /// Returns true when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
