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

//! Pixel-color strategies for the scanline fill
//!
//! The fill engine is shared by both shading modes; a [`SpanShader`] decides
//! the color of each pixel in a row's span.

use super::super::types::{Color, Point};
use super::edge::{Edge, EdgeTable};
use super::interpolate::{interpolate, Axis};
use super::sweep::{Anchor, BorderPoint};

/// Per-row pixel color source
pub trait SpanShader {
    /// Prepare for row `y`, bounded by `left` and `right`
    fn begin_row(&mut self, y: i32, left: &BorderPoint, right: &BorderPoint);

    /// Color of column `x` on the current row
    ///
    /// Only valid after [`SpanShader::begin_row`].
    fn shade(&self, x: i32) -> Color;
}

/// Constant color: the mean of the three vertex colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatShader {
    color: Color,
}

impl FlatShader {
    /// Create a shader for the mean of `colors`
    ///
    /// # Arguments
    ///
    /// * `colors` - Vertex colors, one per triangle vertex
    pub fn new(colors: &[Color; 3]) -> Self {
        Self {
            color: Color::mean(colors),
        }
    }

    /// The uniform fill color
    pub fn color(&self) -> Color {
        self.color
    }
}

impl SpanShader for FlatShader {
    fn begin_row(&mut self, _y: i32, _left: &BorderPoint, _right: &BorderPoint) {}

    #[inline(always)]
    fn shade(&self, _x: i32) -> Color {
        self.color
    }
}

/// Interpolated bounds of the current row
#[derive(Debug, Clone, Copy)]
struct RowGradient {
    left: Point,
    right: Point,
    color_left: Color,
    color_right: Color,
}

/// Gouraud shading
///
/// Each row first interpolates a border color on the two bounding edges at
/// the row's y, then interpolates between those along the row by x.
#[derive(Debug, Clone)]
pub struct GouraudShader<'a> {
    table: &'a EdgeTable,
    colors: [Color; 3],
    row: Option<RowGradient>,
}

impl<'a> GouraudShader<'a> {
    /// Create a shader over the edges of `table`
    ///
    /// # Arguments
    ///
    /// * `table` - Edge table of the triangle being filled
    /// * `colors` - Vertex colors, index-aligned with `table.vertices()`
    pub fn new(table: &'a EdgeTable, colors: [Color; 3]) -> Self {
        Self {
            table,
            colors,
            row: None,
        }
    }

    /// Color of the triangle boundary where `point` meets row `y`
    fn border_color(&self, y: i32, point: &BorderPoint) -> Color {
        match point.anchor {
            Anchor::Vertex(index) => self.colors[index],
            Anchor::Edge(ordinal) => self.edge_color(self.table.edge(ordinal), y),
        }
    }

    /// Color along `edge` at row `y`
    fn edge_color(&self, edge: &Edge, y: i32) -> Color {
        let [start, end] = Edge::endpoint_indices(edge.ordinal);
        interpolate(
            edge.vertices[0].to_point(),
            edge.vertices[1].to_point(),
            self.colors[start],
            self.colors[end],
            y as f64,
            Axis::Y,
        )
    }
}

impl SpanShader for GouraudShader<'_> {
    fn begin_row(&mut self, y: i32, left: &BorderPoint, right: &BorderPoint) {
        self.row = Some(RowGradient {
            left: Point::new(left.x, y as f64),
            right: Point::new(right.x, y as f64),
            color_left: self.border_color(y, left),
            color_right: self.border_color(y, right),
        });
    }

    fn shade(&self, x: i32) -> Color {
        let Some(row) = self.row else {
            unreachable!("shade() called before begin_row()");
        };
        interpolate(
            row.left,
            row.right,
            row.color_left,
            row.color_right,
            x as f64,
            Axis::X,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vertex;

    fn edge_point(x: f64, ordinal: usize) -> BorderPoint {
        BorderPoint {
            x,
            anchor: Anchor::Edge(ordinal),
        }
    }

    #[test]
    fn test_flat_shader_uses_mean() {
        let colors = [Color::RED, Color::GREEN, Color::new(0.0, 0.0, 0.5)];
        let mut shader = FlatShader::new(&colors);
        let p = edge_point(0.0, 0);

        shader.begin_row(4, &p, &p);
        assert_eq!(shader.shade(0), Color::mean(&colors));
        assert_eq!(shader.shade(17), shader.color());
    }

    #[test]
    fn test_gouraud_edge_colors() {
        // Right triangle with a vertical edge 0 and horizontal edge 1
        let table = EdgeTable::new([Vertex::new(0, 0), Vertex::new(0, 4), Vertex::new(4, 4)]);
        let shader = GouraudShader::new(&table, [Color::RED, Color::GREEN, Color::BLUE]);

        // Quarter of the way down edge 0
        let c = shader.edge_color(table.edge(0), 1);
        assert!((c.r - 0.75).abs() < 1e-12);
        assert!((c.g - 0.25).abs() < 1e-12);
        assert_eq!(c.b, 0.0);

        // Edge 2 runs from vertex 2 back to vertex 0
        let c = shader.edge_color(table.edge(2), 4);
        assert!((c.b - 1.0).abs() < 1e-12);
        assert!(c.r.abs() < 1e-12);
    }

    #[test]
    fn test_gouraud_row_gradient() {
        let table = EdgeTable::new([Vertex::new(0, 0), Vertex::new(0, 4), Vertex::new(4, 4)]);
        let mut shader = GouraudShader::new(&table, [Color::RED, Color::GREEN, Color::BLUE]);

        let left = BorderPoint {
            x: 0.0,
            anchor: Anchor::Vertex(1),
        };
        let right = BorderPoint {
            x: 4.0,
            anchor: Anchor::Vertex(2),
        };
        shader.begin_row(4, &left, &right);

        assert_eq!(shader.shade(0), Color::GREEN);
        assert_eq!(shader.shade(4), Color::BLUE);
        assert_eq!(shader.shade(2), Color::new(0.0, 0.5, 0.5));
    }

    #[test]
    #[should_panic(expected = "before begin_row")]
    fn test_gouraud_shade_requires_row() {
        let table = EdgeTable::new([Vertex::new(0, 0), Vertex::new(0, 4), Vertex::new(4, 4)]);
        let shader = GouraudShader::new(&table, [Color::RED, Color::GREEN, Color::BLUE]);

        shader.shade(0);
    }
}
