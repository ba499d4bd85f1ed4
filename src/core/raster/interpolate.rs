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

//! Linear color interpolation along a segment

use super::super::types::{Color, Point};

/// Which coordinate of the query point is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The query is an x coordinate (along a scanline)
    X,
    /// The query is a y coordinate (along an edge)
    Y,
}

/// Interpolate between `v1` at `p1` and `v2` at `p2`
///
/// The query point is the point of the line `p1`-`p2` whose `axis` coordinate
/// equals `coord`. The blend factor is its distance from `p1` divided by the
/// length of the segment; when `p1 == p2` the factor is 1 and `v2` is returned.
///
/// The result is taken component-wise in absolute value, which folds small
/// negative overshoots back into range.
///
/// # Examples
///
/// ```
/// use scanfill::core::raster::interpolate::{interpolate, Axis};
/// use scanfill::core::{Color, Point};
///
/// let c = interpolate(
///     Point::new(0.0, 3.0),
///     Point::new(4.0, 3.0),
///     Color::BLACK,
///     Color::WHITE,
///     1.0,
///     Axis::X,
/// );
/// assert_eq!(c, Color::new(0.25, 0.25, 0.25));
/// ```
pub fn interpolate(p1: Point, p2: Point, v1: Color, v2: Color, coord: f64, axis: Axis) -> Color {
    let p = if p1.y == p2.y {
        // Horizontal: the query can only be an x coordinate
        Point::new(coord, p1.y)
    } else if p1.x == p2.x {
        // Vertical: the query can only be a y coordinate
        Point::new(p1.x, coord)
    } else {
        let m = (p2.y - p1.y) / (p2.x - p1.x);
        let b = p1.y - m * p1.x;
        match axis {
            Axis::X => Point::new(coord, m * coord + b),
            Axis::Y => Point::new((coord - b) / m, coord),
        }
    };

    let d1 = p.distance(p1);
    let d2 = p1.distance(p2);
    let lambda = if d2 == 0.0 { 1.0 } else { d1 / d2 };

    v1.lerp(v2, lambda).abs()
}
