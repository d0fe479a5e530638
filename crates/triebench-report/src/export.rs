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

//! Artifact writing.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use triebench_core::{ReportError, Result};

/// Creates `dir` (and parents) if it does not exist.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| ReportError::io_error(dir, e))
}

/// Writes one artifact into `dir`, returning its path.
///
/// The file is created (or truncated), written in full and closed before
/// returning.
pub fn write_artifact(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
    let path = dir.join(name);
    let bytes = contents.as_ref();
    fs::write(&path, bytes).map_err(|e| ReportError::io_error(&path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "artifact written");
    Ok(path)
}
