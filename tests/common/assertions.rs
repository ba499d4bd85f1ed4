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

//! Custom assertions for rasterizer testing

use scanfill::core::{Canvas, Color};

/// Assert two colors agree within `tolerance` per component
#[allow(dead_code)]
pub fn assert_color_close(actual: Color, expected: Color, tolerance: f64) {
    let close = (actual.r - expected.r).abs() <= tolerance
        && (actual.g - expected.g).abs() <= tolerance
        && (actual.b - expected.b).abs() <= tolerance;
    assert!(
        close,
        "Color mismatch: expected {:?}, got {:?} (tolerance {})",
        expected, actual, tolerance
    );
}

/// Assert pixel (x, y) has the expected color within `tolerance`
#[allow(dead_code)]
pub fn assert_pixel(canvas: &Canvas, x: i32, y: i32, expected: Color, tolerance: f64) {
    let actual = canvas
        .pixel(x, y)
        .unwrap_or_else(|| panic!("Pixel ({}, {}) is outside the canvas", x, y));
    assert_color_close(actual, expected, tolerance);
}

/// Assert row `y` is filled exactly over `first..=last`
#[allow(dead_code)]
pub fn assert_span(canvas: &Canvas, y: usize, first: i32, last: i32) {
    let actual = super::fixtures::filled_columns(canvas, y);
    let expected: Vec<i32> = (first..=last).collect();
    assert_eq!(
        actual, expected,
        "Row {} span mismatch: expected {}..={}",
        y, first, last
    );
}
