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

//! Structured error types for benchmark report generation.
//!
//! Every fallible operation in the workspace returns `Result<T, ReportError>`.
//! A report run is one-shot: any error is terminal for that run and the
//! binary maps it to a non-zero exit status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while loading, aggregating or exporting results.
///
/// # Examples
///
/// ```
/// use triebench_core::ReportError;
///
/// let err = ReportError::malformed(3, "missing field `MemoryKB`");
/// assert_eq!(
///     err.to_string(),
///     "Malformed record at line 3: missing field `MemoryKB`"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// The input resource does not exist.
    #[error("Input '{}' not found", .path.display())]
    InputNotFound {
        /// The path that was attempted
        path: PathBuf,
    },

    /// A row (or the header) could not be converted into a typed record.
    ///
    /// `line` is 1-based and counts the header as line 1.
    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord {
        /// Line of the offending row
        line: u64,
        /// What was wrong with it
        message: String,
    },

    /// Percentage reduction against a baseline with zero bytes per word.
    #[error("Reduction relative to '{variant}' is undefined: baseline bytes per word is zero")]
    UndefinedReduction {
        /// The baseline variant
        variant: String,
    },

    /// The input file exceeds the configured size limit.
    #[error("File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes", .path.display())]
    FileTooLarge {
        /// The input path
        path: PathBuf,
        /// Actual size in bytes
        actual: u64,
        /// Configured limit in bytes
        max: u64,
    },

    /// I/O operation failed while reading input or writing an artifact.
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// A configuration value was rejected.
    #[error("Invalid configuration for '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Rasterising a figure failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Writing CSV or JSON output failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ReportError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a malformed-record error for the given 1-based line.
    pub fn malformed(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid-configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caused by a missing input file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.kind() {
            csv::ErrorKind::Io(_) => Self::Serialization(err.to_string()),
            _ => Self::malformed(line, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ReportError::InputNotFound {
            path: PathBuf::from("benchmark_results.csv"),
        };
        assert_eq!(err.to_string(), "Input 'benchmark_results.csv' not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_undefined_reduction_display() {
        let err = ReportError::UndefinedReduction {
            variant: "Standard Trie".to_string(),
        };
        assert!(err.to_string().contains("Standard Trie"));
        assert!(err.to_string().contains("zero"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = ReportError::io_error(
            "out/memory_scaling.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        match err {
            ReportError::Io { path, message } => {
                assert_eq!(path, PathBuf::from("out/memory_scaling.csv"));
                assert!(message.contains("denied"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_config_display() {
        let err = ReportError::invalid_config("anchor_size", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'anchor_size': must be positive"
        );
    }
}
