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

//! Value-to-pixel scales and tick generation.

/// Maps a value range onto a pixel range.
pub trait Scale {
    /// Pixel position of `value`.
    fn map(&self, value: f64) -> f64;

    /// Tick values covering the domain.
    fn ticks(&self) -> Vec<f64>;
}

/// Linear scale from `0..=max` (rounded up to a nice value).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    max: f64,
    step: f64,
    px_start: f64,
    px_end: f64,
}

impl LinearScale {
    /// Builds a scale whose domain starts at zero and ends at a nice value
    /// not below `max`, split into about `target_ticks` intervals.
    pub fn new(max: f64, target_ticks: usize, px_start: f64, px_end: f64) -> Self {
        let max = if max.is_finite() && max > 0.0 { max } else { 1.0 };
        let step = nice_step(max / target_ticks.max(1) as f64);
        let max = (max / step).ceil() * step;
        Self {
            max,
            step,
            px_start,
            px_end,
        }
    }

    /// Upper end of the domain.
    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Scale for LinearScale {
    fn map(&self, value: f64) -> f64 {
        self.px_start + (value / self.max) * (self.px_end - self.px_start)
    }

    fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }
}

/// Base-10 logarithmic scale spanning whole decades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    min_exp: i32,
    max_exp: i32,
    px_start: f64,
    px_end: f64,
}

impl LogScale {
    /// Builds a scale covering `min..=max`, widened to whole decades.
    /// Non-positive inputs are clamped to a tiny positive value.
    pub fn new(min: f64, max: f64, px_start: f64, px_end: f64) -> Self {
        let floor = 1e-6;
        let min = if min.is_finite() && min > floor { min } else { floor };
        let max = if max.is_finite() && max > min { max } else { min * 10.0 };
        let min_exp = min.log10().floor() as i32;
        let mut max_exp = max.log10().ceil() as i32;
        if max_exp <= min_exp {
            max_exp = min_exp + 1;
        }
        Self {
            min_exp,
            max_exp,
            px_start,
            px_end,
        }
    }
}

impl Scale for LogScale {
    fn map(&self, value: f64) -> f64 {
        let v = value.max(10f64.powi(self.min_exp)).log10();
        let span = (self.max_exp - self.min_exp) as f64;
        self.px_start + (v - self.min_exp as f64) / span * (self.px_end - self.px_start)
    }

    fn ticks(&self) -> Vec<f64> {
        (self.min_exp..=self.max_exp).map(|e| 10f64.powi(e)).collect()
    }
}

/// Rounds a raw step to 1, 2, 2.5 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}
