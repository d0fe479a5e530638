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

//! Number and label formatting shared by the emitters.

/// Formats an integer with `,` thousands separators.
///
/// ```
/// use triebench_report::format::thousands;
///
/// assert_eq!(thousands(370105), "370,105");
/// assert_eq!(thousands(999), "999");
/// ```
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rounds a non-negative value to the nearest integer and groups thousands.
pub fn thousands_rounded(value: f64) -> String {
    thousands(value.max(0.0).round() as u64)
}

/// Short dataset-size label for axes and headings: `50K`, `1K`, `370105`.
pub fn size_label(size: u64) -> String {
    if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

/// Dataset-size label used in artifact file names: `50k`.
pub fn file_label(size: u64) -> String {
    size_label(size).to_lowercase()
}

/// Compact label for a tick value: trims trailing zeros.
pub fn tick_label(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{}M", trim_zeros(value / 1_000_000.0))
    } else if magnitude >= 10_000.0 {
        format!("{}K", trim_zeros(value / 1_000.0))
    } else {
        trim_zeros(value)
    }
}

fn trim_zeros(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
