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

//! Property tests for table and aggregation invariants.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use triebench_core::{
    at_size, reduction_relative_to, summary_by_variant, BenchmarkRecord, BenchmarkTable,
};

fn variant_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Standard Trie",
        "Compressed Trie",
        "Double-Array Trie",
        "Radix",
        "Patricia",
    ])
    .prop_map(str::to_string)
}

fn record() -> impl Strategy<Value = BenchmarkRecord> {
    (
        variant_name(),
        prop::sample::select(vec![1_000u64, 10_000, 50_000, 100_000, 370_105]),
        0.0f64..100_000.0,
        0.0f64..1_000.0,
        1.0f64..500.0,
    )
        .prop_map(|(variant, size, memory, time, bpw)| {
            BenchmarkRecord::new(variant, size, memory, time, time / 2.0, bpw)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every input variant appears exactly once, records ascending and unique.
    #[test]
    fn prop_summary_covers_each_variant_once(records in prop::collection::vec(record(), 0..40)) {
        let expected: BTreeSet<String> = records.iter().map(|r| r.variant.clone()).collect();
        let table = BenchmarkTable::from_records(records);

        let summaries: Vec<_> = summary_by_variant(&table).collect();
        let names: Vec<String> = summaries.iter().map(|s| s.variant.to_string()).collect();
        let unique: BTreeSet<String> = names.iter().cloned().collect();

        prop_assert_eq!(names.len(), unique.len());
        prop_assert_eq!(unique, expected);

        for summary in &summaries {
            prop_assert!(!summary.records.is_empty());
            prop_assert!(summary
                .records
                .windows(2)
                .all(|w| w[0].dataset_size < w[1].dataset_size));
        }
    }

    /// The last record parsed for a (variant, size) pair is the one kept.
    #[test]
    fn prop_last_duplicate_wins(records in prop::collection::vec(record(), 1..40)) {
        let mut last: BTreeMap<(String, u64), f64> = BTreeMap::new();
        for r in &records {
            last.insert((r.variant.clone(), r.dataset_size), r.bytes_per_word);
        }
        let table = BenchmarkTable::from_records(records);

        prop_assert_eq!(table.len(), last.len());
        for ((variant, size), bpw) in &last {
            prop_assert_eq!(table.get(variant, *size).map(|r| r.bytes_per_word), Some(*bpw));
        }
    }

    /// A snapshot never invents records for sizes a variant lacks.
    #[test]
    fn prop_at_size_matches_lookup(
        records in prop::collection::vec(record(), 0..40),
        size in prop::sample::select(vec![1_000u64, 50_000, 42]),
    ) {
        let table = BenchmarkTable::from_records(records);
        let snapshot = at_size(&table, size);

        prop_assert_eq!(snapshot.entries.len(), table.variant_count());
        for (variant, record) in &snapshot.entries {
            prop_assert_eq!(record.is_some(), table.get(variant, size).is_some());
            if let Some(record) = record {
                prop_assert_eq!(record.dataset_size, size);
            }
        }
    }

    /// Reductions stay below 100% for any positive comparison value.
    #[test]
    fn prop_reduction_bounded(base in 1.0f64..1_000.0, other in 0.0f64..2_000.0) {
        let baseline = BenchmarkRecord::new("Base", 1, 1.0, 1.0, 1.0, base);
        let compared = BenchmarkRecord::new("Other", 1, 1.0, 1.0, 1.0, other);
        let r = reduction_relative_to(&baseline, [&compared]).unwrap();
        prop_assert!(r[0].percent <= 100.0);
        prop_assert!(r[0].percent.is_finite());
    }
}
