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

//! Benchmark results loading.
//!
//! The input is a comma-separated file with a header row naming at least the
//! columns in [`REQUIRED_COLUMNS`]. Column order does not matter and unknown
//! columns are ignored. Loading is all-or-nothing: the first row that fails
//! to convert aborts the load with [`ReportError::MalformedRecord`].

use crate::error::{ReportError, Result};
use crate::record::{BenchmarkRecord, REQUIRED_COLUMNS};
use crate::table::BenchmarkTable;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Loads a benchmark table from `path`.
///
/// # Errors
///
/// - [`ReportError::InputNotFound`] if `path` does not exist
/// - [`ReportError::FileTooLarge`] if the file exceeds `max_file_size`
/// - [`ReportError::MalformedRecord`] on a missing column or bad row
/// - [`ReportError::Io`] if the file cannot be read
pub fn load_table(path: &Path, max_file_size: u64) -> Result<BenchmarkTable> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ReportError::InputNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(ReportError::io_error(path, e)),
    };

    if metadata.len() > max_file_size {
        return Err(ReportError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max: max_file_size,
        });
    }

    let file = File::open(path).map_err(|e| ReportError::io_error(path, e))?;
    let table = load_from_reader(file)?;

    info!(
        path = %path.display(),
        records = table.len(),
        variants = table.variant_count(),
        "loaded benchmark results"
    );
    Ok(table)
}

/// Parses a benchmark table from CSV text.
///
/// # Examples
///
/// ```
/// use triebench_core::parse_table;
///
/// let csv = "TrieType,DatasetSize,MemoryKB,InsertTimeMS,SearchTimeMS,BytesPerWord\n\
///            Compressed Trie,50000,6712,19.96,3.10,137\n";
/// let table = parse_table(csv).unwrap();
/// assert_eq!(table.len(), 1);
/// ```
pub fn parse_table(text: &str) -> Result<BenchmarkTable> {
    load_from_reader(text.as_bytes())
}

/// Parses a benchmark table from any reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<BenchmarkTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|&&column| !headers.iter().any(|h| h == column))
    {
        return Err(ReportError::malformed(
            1,
            format!("missing required column '{}'", missing),
        ));
    }

    let mut table = BenchmarkTable::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let record: BenchmarkRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| ReportError::malformed(line, deserialize_message(&e)))?;

        if record.variant.is_empty() {
            return Err(ReportError::malformed(line, "empty 'TrieType'"));
        }
        if let Some(field) = record.invalid_field() {
            return Err(ReportError::malformed(
                line,
                format!("'{}' must be a finite, non-negative number", field),
            ));
        }

        if let Some(previous) = table.insert(record) {
            debug!(
                line,
                variant = %previous.variant,
                size = previous.dataset_size,
                "duplicate measurement replaced"
            );
        }
    }

    Ok(table)
}

/// Strips csv's position prefix so the line is reported only once.
fn deserialize_message(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    }
}
