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

//! Test fixtures for common test scenarios

use scanfill::core::{Canvas, Color, Vertex};

/// Marker color no fill can produce
#[allow(dead_code)]
pub const UNTOUCHED: Color = Color::new(-1.0, -1.0, -1.0);

/// Vertex colors used by most tests
#[allow(dead_code)]
pub const RGB: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// Create a canvas filled with [`UNTOUCHED`]
#[allow(dead_code)]
pub fn blank_canvas(width: usize, height: usize) -> Canvas {
    Canvas::filled(width, height, UNTOUCHED)
}

/// Build a triangle from coordinate pairs
#[allow(dead_code)]
pub fn triangle(points: [(i32, i32); 3]) -> [Vertex; 3] {
    points.map(Vertex::from)
}

/// Filled columns of row `y`
#[allow(dead_code)]
pub fn filled_columns(canvas: &Canvas, y: usize) -> Vec<i32> {
    canvas
        .rows()
        .nth(y)
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, &c)| c != UNTOUCHED)
                .map(|(x, _)| x as i32)
                .collect()
        })
        .unwrap_or_default()
}

/// Number of pixels that differ from [`UNTOUCHED`]
#[allow(dead_code)]
pub fn filled_count(canvas: &Canvas) -> usize {
    canvas.pixels().iter().filter(|&&c| c != UNTOUCHED).count()
}

/// Small mesh scene in TOML form: two triangles sharing an edge
#[allow(dead_code)]
pub const QUAD_SCENE_TOML: &str = r#"
width = 12
height = 12
shading = "flat"
background = [0.0, 0.0, 0.0]
vertices = [[1, 1], [10, 1], [10, 10], [1, 10]]
colors = [[1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0]]
faces = [[0, 1, 2], [0, 2, 3]]
"#;
