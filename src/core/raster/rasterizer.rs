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

//! Software Rasterizer
//!
//! This module implements the scanline fill that turns one triangle into
//! pixels on a [`Canvas`].
//!
//! # Algorithm
//!
//! 1. Build the edge table (edge `i` joins vertex `i` and vertex `(i + 1) % 3`)
//! 2. Start the sweep on the topmost row with the edges that begin there
//! 3. For each row, fill from `round(x_left)` to `round(x_right)` inclusive
//! 4. Advance the active edges and their border points to the next row
//!
//! The sweep itself lives in [`super::sweep`]; the pixel color of each span
//! comes from a [`SpanShader`], so flat and Gouraud fills share one engine.
//!
//! # Bounds
//!
//! There is no clipping. A triangle whose bounding box leaves the canvas is
//! rejected before any pixel is written.
//!
//! # References
//!
//! - [Scratchapixel: Rasterization](https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation)

use super::super::canvas::Canvas;
use super::super::error::{RasterError, Result};
use super::super::types::{Color, Shading, Vertex};
use super::edge::EdgeTable;
use super::shader::{FlatShader, GouraudShader, SpanShader};
use super::sweep::Sweep;

/// Summary of one triangle fill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Rows swept, first to last inclusive
    pub rows: usize,
    /// Pixels written (a pixel is counted once per write)
    pub pixels: usize,
    /// A horizontal edge lay on the first row
    pub horizontal_start: bool,
    /// Rows bounded by other than two border points
    ///
    /// Always zero for a sweep that keeps its invariants; debug builds assert
    /// on such a row instead of counting it.
    pub unresolved_rows: usize,
}

/// Triangle rasterizer with a selectable shading mode
///
/// # Examples
///
/// ```
/// use scanfill::core::{Canvas, Color, Rasterizer, Shading, Vertex};
///
/// let mut canvas = Canvas::new(8, 8);
/// let rasterizer = Rasterizer::new(Shading::Flat);
///
/// rasterizer
///     .draw_triangle(
///         &mut canvas,
///         &[Vertex::new(1, 1), Vertex::new(6, 1), Vertex::new(1, 6)],
///         &[Color::RED, Color::RED, Color::RED],
///     )
///     .unwrap();
///
/// assert_eq!(canvas.pixel(2, 2), Some(Color::RED));
/// assert_eq!(canvas.pixel(6, 6), Some(Color::BLACK));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rasterizer {
    shading: Shading,
}

impl Rasterizer {
    /// Create a rasterizer
    ///
    /// # Arguments
    ///
    /// * `shading` - Shading mode used by [`Rasterizer::draw_triangle`]
    pub fn new(shading: Shading) -> Self {
        Self { shading }
    }

    /// Current shading mode
    pub fn shading(&self) -> Shading {
        self.shading
    }

    /// Change the shading mode for subsequent draws
    pub fn set_shading(&mut self, shading: Shading) {
        self.shading = shading;
    }

    /// Fill one triangle with this rasterizer's shading
    ///
    /// # Arguments
    ///
    /// * `canvas` - Canvas to draw into
    /// * `vertices` - Exactly 3 vertices, inside the canvas
    /// * `colors` - Exactly 3 colors, one per vertex
    ///
    /// # Returns
    ///
    /// Statistics of the fill, or the [`RasterError`] that rejected the input
    pub fn draw_triangle(
        &self,
        canvas: &mut Canvas,
        vertices: &[Vertex],
        colors: &[Color],
    ) -> Result<FillStats> {
        rasterize(canvas, vertices, colors, self.shading)
    }
}

/// Fill a triangle with the mean of its vertex colors
///
/// # Arguments
///
/// * `canvas` - Canvas to draw into
/// * `vertices` - Exactly 3 vertices, inside the canvas
/// * `colors` - Exactly 3 colors, one per vertex, components in [0, 1]
///
/// # Errors
///
/// Returns a [`RasterError`] if the counts are wrong, a color is malformed,
/// or a vertex lies outside the canvas. The canvas is untouched on error.
pub fn fill_flat(canvas: &mut Canvas, vertices: &[Vertex], colors: &[Color]) -> Result<FillStats> {
    rasterize(canvas, vertices, colors, Shading::Flat)
}

/// Fill a triangle with Gouraud shading
///
/// Same arguments and errors as [`fill_flat`].
pub fn fill_gouraud(
    canvas: &mut Canvas,
    vertices: &[Vertex],
    colors: &[Color],
) -> Result<FillStats> {
    rasterize(canvas, vertices, colors, Shading::Gouraud)
}

/// Fill a triangle with the given shading
///
/// Validates the input, builds the edge table and runs the sweep with the
/// shader selected by `shading`. Same arguments and errors as [`fill_flat`].
pub fn rasterize(
    canvas: &mut Canvas,
    vertices: &[Vertex],
    colors: &[Color],
    shading: Shading,
) -> Result<FillStats> {
    let (vertices, colors) = validate(canvas, vertices, colors)?;

    log::trace!(
        "Rasterizing {:?} triangle: ({}, {}), ({}, {}), ({}, {}) colors=({:.3},{:.3},{:.3}), ({:.3},{:.3},{:.3}), ({:.3},{:.3},{:.3})",
        shading,
        vertices[0].x,
        vertices[0].y,
        vertices[1].x,
        vertices[1].y,
        vertices[2].x,
        vertices[2].y,
        colors[0].r,
        colors[0].g,
        colors[0].b,
        colors[1].r,
        colors[1].g,
        colors[1].b,
        colors[2].r,
        colors[2].g,
        colors[2].b
    );

    let table = EdgeTable::new(vertices);
    let stats = match shading {
        Shading::Flat => sweep_fill(canvas, &table, &mut FlatShader::new(&colors))?,
        Shading::Gouraud => sweep_fill(canvas, &table, &mut GouraudShader::new(&table, colors))?,
    };

    log::debug!(
        "Filled {} pixels over {} rows ({:?})",
        stats.pixels,
        stats.rows,
        shading
    );

    Ok(stats)
}

/// Run the scanline sweep over `table`, coloring pixels with `shader`
///
/// # Arguments
///
/// * `canvas` - Canvas to draw into; must contain every vertex of `table`
/// * `table` - Edge table of the triangle
/// * `shader` - Pixel color source for each row's span
///
/// # Returns
///
/// Statistics of the fill. Fails only if a pixel falls outside the canvas.
pub fn sweep_fill<S: SpanShader>(
    canvas: &mut Canvas,
    table: &EdgeTable,
    shader: &mut S,
) -> Result<FillStats> {
    let mut sweep = Sweep::start(table);
    let mut stats = FillStats {
        horizontal_start: sweep.horizontal_start(),
        ..FillStats::default()
    };

    loop {
        let y = sweep.y();
        let points = sweep.border_points();
        let points = points.as_slice();

        debug_assert_eq!(points.len(), 2, "row {} has border points {:?}", y, points);
        if points.len() != 2 {
            log::warn!(
                "Row {}: {} border points; filling between the two leftmost",
                y,
                points.len()
            );
            stats.unresolved_rows += 1;
        }

        // Two leftmost points; a lone point bounds the row on both sides
        if let (Some(&left), Some(&right)) = (points.first(), points.get(1).or(points.first())) {
            log::trace!("Row {}: span {}..={}", y, left.column(), right.column());
            shader.begin_row(y, &left, &right);
            for x in left.column()..=right.column() {
                canvas.set_pixel(x, y, shader.shade(x))?;
                stats.pixels += 1;
            }
            stats.rows += 1;
        }

        if !sweep.advance() {
            break;
        }
    }

    Ok(stats)
}

/// Check counts, colors and bounds before the sweep begins
fn validate(
    canvas: &Canvas,
    vertices: &[Vertex],
    colors: &[Color],
) -> std::result::Result<([Vertex; 3], [Color; 3]), RasterError> {
    let vertices: [Vertex; 3] = vertices
        .try_into()
        .map_err(|_| RasterError::InvalidVertexCount {
            got: vertices.len(),
        })?;
    let colors: [Color; 3] = colors
        .try_into()
        .map_err(|_| RasterError::InvalidColorCount { got: colors.len() })?;

    if let Some((index, c)) = colors.iter().enumerate().find(|(_, c)| !c.is_normalized()) {
        return Err(RasterError::InvalidColor {
            index,
            r: c.r,
            g: c.g,
            b: c.b,
        });
    }

    // The fill never leaves the vertices' bounding box
    if let Some(v) = vertices.iter().find(|v| !canvas.contains(v.x, v.y)) {
        return Err(RasterError::OutOfBounds {
            x: v.x,
            y: v.y,
            width: canvas.width(),
            height: canvas.height(),
        });
    }

    Ok((vertices, colors))
}
