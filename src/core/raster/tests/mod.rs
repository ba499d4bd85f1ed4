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

//! Rasterizer tests
//!
//! Tests are organized into the following modules:
//! - `flat`: Flat fills and the span of every row
//! - `gouraud`: Color interpolation along edges and scanlines
//! - `validation`: Boundary checks (counts, colors, canvas bounds)


use std::collections::BTreeMap;

use crate::core::{Canvas, Color, Vertex};

/// Marker color no fill can produce
const UNTOUCHED: Color = Color::new(-1.0, -1.0, -1.0);

fn blank(width: usize, height: usize) -> Canvas {
    Canvas::filled(width, height, UNTOUCHED)
}

fn tri(points: [(i32, i32); 3]) -> [Vertex; 3] {
    points.map(Vertex::from)
}

/// Filled columns of each row that was touched
fn spans(canvas: &Canvas) -> BTreeMap<i32, Vec<i32>> {
    let mut rows = BTreeMap::new();
    for (y, row) in canvas.rows().enumerate() {
        let columns: Vec<i32> = row
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != UNTOUCHED)
            .map(|(x, _)| x as i32)
            .collect();
        if !columns.is_empty() {
            rows.insert(y as i32, columns);
        }
    }
    rows
}

/// Expected spans from inclusive (row, first, last) triples
fn expected(rows: &[(i32, i32, i32)]) -> BTreeMap<i32, Vec<i32>> {
    rows.iter()
        .map(|&(y, first, last)| (y, (first..=last).collect()))
        .collect()
}

fn filled_count(canvas: &Canvas) -> usize {
    canvas.pixels().iter().filter(|&&c| c != UNTOUCHED).count()
}

fn assert_color_near(actual: Option<Color>, expected: Color) {
    let actual = actual.expect("pixel inside the canvas");
    let close = (actual.r - expected.r).abs() < 1e-9
        && (actual.g - expected.g).abs() < 1e-9
        && (actual.b - expected.b).abs() < 1e-9;
    assert!(close, "expected {:?}, got {:?}", expected, actual);
}
