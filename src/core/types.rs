// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Geometry and color types shared by the rasterizer and its callers

use serde::{Deserialize, Serialize};

/// A triangle vertex in pixel coordinates
///
/// `x` is the canvas column and `y` the canvas row. Scene files write a
/// vertex as a two-element array `[x, y]`.
///
/// # Examples
///
/// ```
/// use scanfill::core::Vertex;
///
/// let v = Vertex::from([3, 7]);
/// assert_eq!(v, Vertex::new(3, 7));
/// assert_eq!(v.to_point().y, 7.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Vertex {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Vertex {
    /// Create a vertex at pixel (`x`, `y`)
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to a real-valued point
    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

impl From<[i32; 2]> for Vertex {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Vertex> for [i32; 2] {
    fn from(v: Vertex) -> Self {
        [v.x, v.y]
    }
}

/// A real-valued 2-D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An RGB color with components in the normalized range [0, 1]
///
/// Scene files write a color as a three-element array `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    /// Red channel (0.0-1.0)
    pub r: f64,
    /// Green channel (0.0-1.0)
    pub g: f64,
    /// Blue channel (0.0-1.0)
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    /// Create a color from components
    ///
    /// # Arguments
    ///
    /// * `r` - Red component (0.0-1.0)
    /// * `g` - Green component (0.0-1.0)
    /// * `b` - Blue component (0.0-1.0)
    ///
    /// Out-of-range components are accepted here and rejected by the rasterizer.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Per-component arithmetic mean of three colors
    ///
    /// # Examples
    ///
    /// ```
    /// use scanfill::core::Color;
    ///
    /// let mean = Color::mean(&[Color::RED, Color::GREEN, Color::BLUE]);
    /// assert_eq!(mean, Color::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0));
    /// ```
    pub fn mean(colors: &[Color; 3]) -> Self {
        let [a, b, c] = colors;
        Self {
            r: (a.r + b.r + c.r) / 3.0,
            g: (a.g + b.g + c.g) / 3.0,
            b: (a.b + b.b + c.b) / 3.0,
        }
    }

    /// Weighted blend `(1 - t) * self + t * other`
    ///
    /// `t` is not clamped; values outside [0, 1] extrapolate.
    pub fn lerp(self, other: Color, t: f64) -> Self {
        let s = 1.0 - t;
        Self {
            r: s * self.r + t * other.r,
            g: s * self.g + t * other.g,
            b: s * self.b + t * other.b,
        }
    }

    /// Component-wise absolute value
    pub fn abs(self) -> Self {
        Self {
            r: self.r.abs(),
            g: self.g.abs(),
            b: self.b.abs(),
        }
    }

    /// Check that every component is finite and within [0, 1]
    pub fn is_normalized(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Convert to 8 bits per channel, rounding and clamping each component
    pub fn to_rgb8(self) -> [u8; 3] {
        let quantize = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Pixel-color strategy used to fill a triangle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    /// One uniform color: the mean of the vertex colors
    Flat,
    /// Colors interpolated along the edges, then along each scanline
    #[default]
    Gouraud,
}
