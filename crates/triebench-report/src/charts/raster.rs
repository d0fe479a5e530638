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

//! SVG to PNG rasterisation.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use tracing::debug;
use triebench_core::{ReportError, Result};

/// Raster images are rendered at 1.5x the SVG's pixel size (150 dpi for a
/// 100 dpi layout).
pub const PNG_SCALE: f32 = 1.5;

/// Converts SVG documents to PNG, reusing one font database.
pub struct Rasterizer {
    options: usvg::Options<'static>,
    scale: f32,
}

impl Rasterizer {
    /// Creates a rasterizer with the system fonts loaded.
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        debug!(faces = options.fontdb.len(), "loaded system fonts");
        Self {
            options,
            scale: PNG_SCALE,
        }
    }

    /// Overrides the output scale factor.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Renders `svg` to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Render`] if the SVG cannot be parsed, the
    /// scaled size is empty, or PNG encoding fails.
    pub fn svg_to_png(&self, svg: &str) -> Result<Vec<u8>> {
        let tree = usvg::Tree::from_str(svg, &self.options)
            .map_err(|e| ReportError::Render(format!("Failed to parse SVG: {}", e)))?;

        let size = tree
            .size()
            .to_int_size()
            .scale_by(self.scale)
            .ok_or_else(|| ReportError::Render("Image size is zero".to_string()))?;
        let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
            ReportError::Render(format!(
                "Cannot allocate {}x{} pixmap",
                size.width(),
                size.height()
            ))
        })?;

        resvg::render(
            &tree,
            Transform::from_scale(self.scale, self.scale),
            &mut pixmap.as_mut(),
        );

        pixmap
            .encode_png()
            .map_err(|e| ReportError::Render(format!("Failed to encode PNG: {}", e)))
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::svg::SvgDocument;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_png_output() {
        let mut doc = SvgDocument::new(40, 20);
        doc.rect(5.0, 5.0, 10.0, 10.0, "#4285f4");
        let png = Rasterizer::new().svg_to_png(&doc.finish()).unwrap();
        assert!(png.starts_with(PNG_MAGIC));
    }

    #[test]
    fn test_scaled_dimensions() {
        let svg = SvgDocument::new(40, 20).finish();
        let png = Rasterizer::new().with_scale(2.0).svg_to_png(&svg).unwrap();
        // IHDR width and height follow the 8-byte signature and chunk header
        let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
        assert_eq!((width, height), (80, 40));
    }

    #[test]
    fn test_invalid_svg_is_render_error() {
        let err = Rasterizer::new().svg_to_png("<not-svg").unwrap_err();
        assert!(matches!(err, ReportError::Render(_)));
    }
}
