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

//! Load and aggregation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use triebench_core::{at_size, parse_table, series, summary_by_variant, Metric};
use triebench_test::results_csv;

fn synthetic_csv(variants: usize, sizes: usize) -> String {
    let names: Vec<String> = (0..variants).map(|i| format!("Variant {i} Trie")).collect();
    let mut rows = Vec::with_capacity(variants * sizes);
    for name in &names {
        for s in 0..sizes {
            let size = 1_000 * (s as u64 + 1);
            rows.push((name.as_str(), size, size as f64 / 8.0, 1.5, 0.5, 128.0));
        }
    }
    results_csv(&rows)
}

fn bench_load(c: &mut Criterion) {
    let csv = synthetic_csv(8, 250);
    c.bench_function("parse_table_2000_rows", |b| {
        b.iter(|| parse_table(black_box(&csv)).unwrap())
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let table = parse_table(&synthetic_csv(8, 250)).unwrap();
    c.bench_function("summary_by_variant", |b| {
        b.iter(|| summary_by_variant(black_box(&table)).map(|s| s.records.len()).sum::<usize>())
    });
    c.bench_function("at_size", |b| b.iter(|| at_size(black_box(&table), 50_000)));
    c.bench_function("series_memory", |b| {
        b.iter(|| series(black_box(&table), Metric::MemoryKb))
    });
}

criterion_group!(benches, bench_load, bench_aggregate);
criterion_main!(benches);
