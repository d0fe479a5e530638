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

//! Chart data and figure export.
//!
//! [`ChartData`] is derived once from the table; each figure is composed as
//! an SVG document from it and rasterised to PNG by [`Rasterizer`].

pub mod data;
pub mod figures;
pub mod raster;
pub mod scale;
pub mod svg;

pub use data::{Bar, BarChart, ChartData, LineSeries, Point};
pub use figures::{render_all, variant_color, Figure};
pub use raster::Rasterizer;

use crate::export::{ensure_dir, write_artifact};
use std::path::PathBuf;
use tracing::info;
use triebench_core::{BenchmarkTable, ReportConfig, Result};

/// Chart data file name.
pub const CHART_DATA_JSON: &str = "chart_data.json";

/// Writes `chart_data.json` and every figure (`.svg` then `.png`) into
/// `config.figure_dir`.
///
/// # Errors
///
/// Fails with [`triebench_core::ReportError::UndefinedReduction`] when the
/// baseline's bytes per word is zero at the anchor size, or with an I/O or
/// render error.
pub fn export_figures(table: &BenchmarkTable, config: &ReportConfig) -> Result<Vec<PathBuf>> {
    let data = ChartData::build(table, config.anchor_size, &config.baseline)?;
    let dir = config.figure_dir.as_path();
    ensure_dir(dir)?;

    let mut written = vec![write_artifact(dir, CHART_DATA_JSON, data.to_json()?)?];

    let figures = render_all(&data);
    if !figures.is_empty() {
        let rasterizer = Rasterizer::new();
        for figure in &figures {
            let png = rasterizer.svg_to_png(&figure.svg)?;
            written.push(write_artifact(dir, &format!("{}.svg", figure.name), &figure.svg)?);
            written.push(write_artifact(dir, &format!("{}.png", figure.name), png)?);
        }
    }

    info!(dir = %dir.display(), figures = figures.len(), "figures exported");
    Ok(written)
}
