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

//! The four standard comparison figures, rendered as SVG.

use super::data::{BarChart, ChartData, LineSeries};
use super::scale::{LinearScale, LogScale, Scale};
use super::svg::{Anchor, SvgDocument, TextStyle};
use crate::format::{size_label, thousands, tick_label};
use tracing::warn;
use triebench_core::record::short_name;

const GRID: &str = "#b0b0b0";
const AXIS: &str = "#333333";
const FALLBACK_COLORS: &[&str] = &["#fbbc05", "#9c27b0", "#00acc1", "#ff7043", "#5c6bc0"];

/// A rendered figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// File stem, e.g. `fig1_memory_comparison`.
    pub name: &'static str,
    /// Complete SVG document.
    pub svg: String,
}

/// Colour for a variant. The three reference strategies have fixed colours;
/// others cycle through a fallback palette by their position.
pub fn variant_color(variant: &str, index: usize) -> &'static str {
    match short_name(variant) {
        "Standard" => "#4285f4",
        "Compressed" => "#34a853",
        "Double-Array" => "#ea4335",
        _ => FALLBACK_COLORS[index % FALLBACK_COLORS.len()],
    }
}

/// Renders every figure the data supports, in figure-number order.
pub fn render_all(data: &ChartData) -> Vec<Figure> {
    let mut figures = Vec::new();

    if data.dataset_sizes.is_empty() {
        warn!("no measurements loaded, skipping figures");
        return figures;
    }

    figures.push(Figure {
        name: "fig1_memory_comparison",
        svg: memory_comparison(data),
    });

    if data.bytes_per_word.bars.is_empty() {
        warn!(
            anchor_size = data.bytes_per_word.dataset_size,
            "no measurements at anchor size, skipping bytes-per-word figure"
        );
    } else {
        figures.push(Figure {
            name: "fig2_bytes_per_word",
            svg: bytes_per_word(data),
        });
    }

    figures.push(Figure {
        name: "fig3_scalability",
        svg: scalability(data),
    });

    match (&data.memory_at_largest, &data.insert_secs_at_largest) {
        (Some(memory), Some(insert)) => figures.push(Figure {
            name: "fig4_tradeoff",
            svg: tradeoff(data, memory, insert),
        }),
        _ => warn!("no dataset size shared by all variants, skipping trade-off figure"),
    }

    figures
}

#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl PlotArea {
    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

fn color_of(data: &ChartData, variant: &str) -> &'static str {
    let index = data
        .variants
        .iter()
        .position(|v| v == variant)
        .unwrap_or_default();
    variant_color(variant, index)
}

fn title(doc: &mut SvgDocument, x: f64, y: f64, text: &str, size: f64) {
    doc.text(x, y, text, TextStyle::sized(size).bold().anchored(Anchor::Middle));
}

fn axes(doc: &mut SvgDocument, area: PlotArea) {
    doc.line((area.left, area.top), (area.left, area.bottom), AXIS, 1.0, 1.0);
    doc.line((area.left, area.bottom), (area.right, area.bottom), AXIS, 1.0, 1.0);
}

/// Horizontal grid lines and labels for a vertical value axis.
fn y_grid(doc: &mut SvgDocument, area: PlotArea, scale: &dyn Scale) {
    for tick in scale.ticks() {
        let y = scale.map(tick);
        doc.line((area.left, y), (area.right, y), GRID, 0.8, 0.3);
        doc.text(
            area.left - 8.0,
            y + 4.0,
            &tick_label(tick),
            TextStyle::sized(11.0).anchored(Anchor::End),
        );
    }
}

/// Vertical grid lines and labels for a horizontal value axis.
fn x_grid(doc: &mut SvgDocument, area: PlotArea, scale: &dyn Scale) {
    for tick in scale.ticks() {
        let x = scale.map(tick);
        doc.line((x, area.top), (x, area.bottom), GRID, 0.8, 0.3);
        doc.text(
            x,
            area.bottom + 18.0,
            &tick_label(tick),
            TextStyle::sized(11.0).anchored(Anchor::Middle),
        );
    }
}

fn axis_titles(doc: &mut SvgDocument, area: PlotArea, x_title: &str, y_title: Option<&str>) {
    doc.text(
        area.center_x(),
        area.bottom + 42.0,
        x_title,
        TextStyle::sized(12.0).anchored(Anchor::Middle),
    );
    if let Some(y_title) = y_title {
        let y = (area.top + area.bottom) / 2.0;
        doc.text(
            area.left - 55.0,
            y,
            y_title,
            TextStyle::sized(12.0).anchored(Anchor::Middle).rotated(-90.0),
        );
    }
}

fn legend(doc: &mut SvgDocument, data: &ChartData, x: f64, y: f64) {
    let row = 20.0;
    let height = row * data.variants.len() as f64 + 8.0;
    doc.rect_outlined(x, y, 170.0, height, "#ffffff", "#cccccc");
    for (i, variant) in data.variants.iter().enumerate() {
        let ry = y + 6.0 + i as f64 * row;
        doc.rect(x + 8.0, ry, 14.0, 12.0, color_of(data, variant));
        doc.text(x + 28.0, ry + 11.0, variant, TextStyle::sized(11.0));
    }
}

fn value_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn memory_at(series: &LineSeries, size: u64) -> Option<f64> {
    series
        .points
        .iter()
        .find(|p| p.x == size as f64)
        .map(|p| p.y)
}

/// Figure 1: grouped bars of memory (MB) per dataset size.
fn memory_comparison(data: &ChartData) -> String {
    let mut doc = SvgDocument::new(1000, 600);
    let area = PlotArea {
        left: 90.0,
        top: 60.0,
        right: 970.0,
        bottom: 530.0,
    };

    let max = data
        .memory_mb
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.y))
        .fold(0.0, f64::max);
    let y = LinearScale::new(max, 5, area.bottom, area.top);

    title(&mut doc, area.center_x(), 34.0, "Memory Usage Comparison Across Dataset Sizes", 16.0);
    y_grid(&mut doc, area, &y);

    let groups = data.dataset_sizes.len() as f64;
    let group_width = area.width() / groups;
    let bar_width = group_width * 0.75 / data.memory_mb.len().max(1) as f64;

    for (gi, &size) in data.dataset_sizes.iter().enumerate() {
        let group_left = area.left + gi as f64 * group_width + group_width * 0.125;
        for (vi, series) in data.memory_mb.iter().enumerate() {
            if let Some(mb) = memory_at(series, size) {
                let top = y.map(mb);
                doc.rect(
                    group_left + vi as f64 * bar_width,
                    top,
                    bar_width,
                    area.bottom - top,
                    color_of(data, &series.variant),
                );
            }
        }
        doc.text(
            area.left + (gi as f64 + 0.5) * group_width,
            area.bottom + 18.0,
            &size_label(size),
            TextStyle::sized(11.0).anchored(Anchor::Middle),
        );
    }

    axes(&mut doc, area);
    axis_titles(&mut doc, area, "Dataset Size", Some("Memory Usage (MB)"));
    legend(&mut doc, data, area.left + 12.0, area.top + 12.0);
    doc.finish()
}

/// Figure 2: bytes per word at the anchor size with reduction annotations.
fn bytes_per_word(data: &ChartData) -> String {
    let chart = &data.bytes_per_word;
    let mut doc = SvgDocument::new(800, 600);
    let area = PlotArea {
        left: 90.0,
        top: 60.0,
        right: 770.0,
        bottom: 530.0,
    };

    let y = LinearScale::new(chart.max_value() * 1.2, 5, area.bottom, area.top);
    title(
        &mut doc,
        area.center_x(),
        34.0,
        &format!("Memory Efficiency on {} Words", thousands(chart.dataset_size)),
        16.0,
    );
    y_grid(&mut doc, area, &y);

    let slot = area.width() / chart.bars.len().max(1) as f64;
    for (i, bar) in chart.bars.iter().enumerate() {
        let color = color_of(data, &bar.variant);
        let center = area.left + (i as f64 + 0.5) * slot;
        let width = slot * 0.6;
        let top = y.map(bar.value);

        doc.rect_outlined(center - width / 2.0, top, width, area.bottom - top, color, "#000000");
        doc.text(
            center,
            top - 8.0,
            &value_label(bar.value),
            TextStyle::sized(14.0).bold().anchored(Anchor::Middle),
        );
        if let Some(pct) = data.reduction_for(&bar.variant) {
            let wording = if pct >= 0.0 { "reduction" } else { "increase" };
            doc.text(
                center,
                top - 28.0,
                &format!("{:.0}% {}", pct.abs(), wording),
                TextStyle::sized(11.0).anchored(Anchor::Middle).fill(color),
            );
        }
        doc.text(
            center,
            area.bottom + 18.0,
            &bar.variant,
            TextStyle::sized(12.0).anchored(Anchor::Middle),
        );
    }

    axes(&mut doc, area);
    doc.text(
        area.left - 55.0,
        (area.top + area.bottom) / 2.0,
        "Bytes per Word",
        TextStyle::sized(12.0).anchored(Anchor::Middle).rotated(-90.0),
    );
    doc.finish()
}

/// Figure 3: memory (MB) against words on a logarithmic x axis.
fn scalability(data: &ChartData) -> String {
    let mut doc = SvgDocument::new(1000, 600);
    let area = PlotArea {
        left: 90.0,
        top: 60.0,
        right: 970.0,
        bottom: 530.0,
    };

    let min_size = data.dataset_sizes.first().copied().unwrap_or(1) as f64;
    let max_size = data.dataset_sizes.last().copied().unwrap_or(1) as f64;
    let x = LogScale::new(min_size, max_size, area.left, area.right);
    let max = data
        .memory_mb
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.y))
        .fold(0.0, f64::max);
    let y = LinearScale::new(max, 5, area.bottom, area.top);

    title(&mut doc, area.center_x(), 34.0, "Memory Scalability", 16.0);
    y_grid(&mut doc, area, &y);
    x_grid(&mut doc, area, &x);

    for series in &data.memory_mb {
        let color = color_of(data, &series.variant);
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .map(|p| (x.map(p.x), y.map(p.y)))
            .collect();
        doc.polyline(&points, color, 2.0);
        for &point in &points {
            doc.circle(point, 4.5, color);
        }
    }

    axes(&mut doc, area);
    axis_titles(&mut doc, area, "Number of Words", Some("Memory Usage (MB)"));
    legend(&mut doc, data, area.left + 12.0, area.top + 12.0);
    doc.finish()
}

/// Figure 4: memory and construction time side by side at the largest
/// dataset size every variant was measured at.
fn tradeoff(data: &ChartData, memory: &BarChart, insert: &BarChart) -> String {
    let mut doc = SvgDocument::new(1200, 500);
    let words = size_label(memory.dataset_size);

    let left = PlotArea {
        left: 130.0,
        top: 60.0,
        right: 560.0,
        bottom: 430.0,
    };
    let right = PlotArea {
        left: 730.0,
        top: 60.0,
        right: 1160.0,
        bottom: 430.0,
    };

    let mem_scale = LinearScale::new(memory.max_value() * 1.15, 5, left.left, left.right);
    title(&mut doc, left.center_x(), 34.0, &format!("Memory Usage ({} words)", words), 14.0);
    x_grid(&mut doc, left, &mem_scale);
    horizontal_bars(&mut doc, data, left, memory, &mem_scale, |v| format!("{:.1} MB", v));
    axes(&mut doc, left);
    axis_titles(&mut doc, left, "Memory (MB)", None);

    let min_secs = insert
        .bars
        .iter()
        .map(|b| b.value)
        .filter(|v| *v > 0.0)
        .fold(f64::INFINITY, f64::min);
    let time_scale = LogScale::new(min_secs, insert.max_value(), right.left, right.right);
    title(
        &mut doc,
        right.center_x(),
        34.0,
        &format!("Construction Time ({} words)", words),
        14.0,
    );
    x_grid(&mut doc, right, &time_scale);
    horizontal_bars(&mut doc, data, right, insert, &time_scale, |v| format!("{:.1}s", v));
    axes(&mut doc, right);
    axis_titles(&mut doc, right, "Insert Time (seconds)", None);

    doc.finish()
}

fn horizontal_bars(
    doc: &mut SvgDocument,
    data: &ChartData,
    area: PlotArea,
    chart: &BarChart,
    scale: &dyn Scale,
    label: impl Fn(f64) -> String,
) {
    let slot = (area.bottom - area.top) / chart.bars.len().max(1) as f64;
    for (i, bar) in chart.bars.iter().enumerate() {
        let center = area.top + (i as f64 + 0.5) * slot;
        let height = slot * 0.6;
        let end = scale.map(bar.value).max(area.left);

        doc.rect(
            area.left,
            center - height / 2.0,
            end - area.left,
            height,
            color_of(data, &bar.variant),
        );
        doc.text(
            end + 6.0,
            center + 4.0,
            &label(bar.value),
            TextStyle::sized(11.0),
        );
        doc.text(
            area.left - 8.0,
            center + 4.0,
            short_name(&bar.variant),
            TextStyle::sized(12.0).anchored(Anchor::End),
        );
    }
}
