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

//! Minimal SVG document builder.
//!
//! Coordinates are written with two decimals so the same figure always
//! serializes to the same bytes.

use std::fmt::Write;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Left aligned.
    Start,
    /// Centered.
    Middle,
    /// Right aligned.
    End,
}

impl Anchor {
    fn as_str(&self) -> &str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Text appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle<'a> {
    /// Font size in px.
    pub size: f64,
    /// Alignment around `x`.
    pub anchor: Anchor,
    /// Bold weight.
    pub bold: bool,
    /// Fill colour.
    pub fill: &'a str,
    /// Rotation in degrees around the anchor point.
    pub rotate: f64,
}

impl Default for TextStyle<'_> {
    fn default() -> Self {
        Self {
            size: 12.0,
            anchor: Anchor::Start,
            bold: false,
            fill: "#222222",
            rotate: 0.0,
        }
    }
}

impl<'a> TextStyle<'a> {
    /// Default style at `size`.
    pub fn sized(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the alignment.
    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets the fill colour.
    pub fn fill(mut self, fill: &'a str) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the rotation.
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }
}

/// An SVG document under construction.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDocument {
    /// Starts a document with a white background.
    pub fn new(width: u32, height: u32) -> Self {
        let mut doc = Self {
            width,
            height,
            body: String::new(),
        };
        doc.rect(0.0, 0.0, width as f64, height as f64, "#ffffff");
        doc
    }

    /// Document width in px.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Document height in px.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Filled rectangle.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
            x,
            y,
            w.max(0.0),
            h.max(0.0),
            fill
        );
    }

    /// Filled rectangle with an outline.
    pub fn rect_outlined(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.2\"/>",
            x,
            y,
            w.max(0.0),
            h.max(0.0),
            fill,
            stroke
        );
    }

    /// Straight line.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64, opacity: f64) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\" stroke-opacity=\"{:.2}\"/>",
            from.0, from.1, to.0, to.1, stroke, width, opacity
        );
    }

    /// Open polyline through `points`.
    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64) {
        if points.is_empty() {
            return;
        }
        let coords: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect();
        let _ = writeln!(
            self.body,
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\"/>",
            coords.join(" "),
            stroke,
            width
        );
    }

    /// Filled circle.
    pub fn circle(&mut self, center: (f64, f64), radius: f64, fill: &str) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
            center.0, center.1, radius, fill
        );
    }

    /// Text at `(x, y)` (baseline position).
    pub fn text(&mut self, x: f64, y: f64, content: &str, style: TextStyle<'_>) {
        let weight = if style.bold { "bold" } else { "normal" };
        let transform = if style.rotate != 0.0 {
            format!(
                " transform=\"rotate({:.2} {:.2} {:.2})\"",
                style.rotate, x, y
            )
        } else {
            String::new()
        };
        let _ = writeln!(
            self.body,
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"Arial, Helvetica, sans-serif\" font-size=\"{:.1}\" font-weight=\"{}\" text-anchor=\"{}\" fill=\"{}\"{}>{}</text>",
            x,
            y,
            style.size,
            weight,
            style.anchor.as_str(),
            style.fill,
            transform,
            escape(content)
        );
    }

    /// Closes the document.
    pub fn finish(self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// Escapes XML special characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_envelope() {
        let svg = SvgDocument::new(100, 50).finish();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg"));
        assert!(svg.contains("viewBox=\"0 0 100 50\""));
        assert!(svg.contains("<rect x=\"0.00\" y=\"0.00\" width=\"100.00\" height=\"50.00\" fill=\"#ffffff\"/>"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = SvgDocument::new(10, 10);
        doc.text(1.0, 2.0, "A & <B>", TextStyle::default());
        let svg = doc.finish();
        assert!(svg.contains(">A &amp; &lt;B&gt;</text>"));
    }

    #[test]
    fn test_rotated_bold_text() {
        let mut doc = SvgDocument::new(10, 10);
        doc.text(
            5.0,
            6.0,
            "Memory",
            TextStyle::sized(14.0).bold().anchored(Anchor::Middle).rotated(-90.0),
        );
        let svg = doc.finish();
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("transform=\"rotate(-90.00 5.00 6.00)\""));
    }

    #[test]
    fn test_negative_sizes_clamped() {
        let mut doc = SvgDocument::new(10, 10);
        doc.rect(0.0, 0.0, -3.0, 2.0, "#000000");
        assert!(doc.finish().contains("width=\"0.00\" height=\"2.00\" fill=\"#000000\""));
    }

    #[test]
    fn test_empty_polyline_skipped() {
        let mut doc = SvgDocument::new(10, 10);
        doc.polyline(&[], "#000000", 1.0);
        assert!(!doc.finish().contains("polyline"));
    }
}
