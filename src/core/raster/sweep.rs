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

//! Scanline advance state machine
//!
//! A [`Sweep`] walks the rows of one triangle from `y_min` to `y_max`. For
//! each row it yields the border points that bound the fill span, then
//! advances to the next row.
//!
//! # State
//!
//! - An [`EdgeSet`] of active edges, keyed by ordinal
//! - One x cursor per edge, valid while the edge is active
//!
//! Border points are rebuilt from this state for every row rather than
//! patched in place.
//!
//! # Advance
//!
//! Moving from row `y` to row `y + 1`:
//!
//! 1. Activate the edges whose lower endpoint sits on row `y + 1`
//! 2. Deactivate the edges whose upper endpoint sits on row `y`
//! 3. Step the cursors of the surviving edges by `1 / slope`
//! 4. Seed the cursors of the new edges at their lower endpoint
//! 5. With three active edges, drop the survivor whose rounded x coincides
//!    with the new edge (the vertex crossing)
//! 6. If a horizontal edge became active it closes the triangle: the last row
//!    is bounded by its two endpoints directly

use bitflags::bitflags;

use super::edge::EdgeTable;

bitflags! {
    /// Set of edges keyed by ordinal
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EdgeSet: u8 {
        const EDGE_0 = 1 << 0;
        const EDGE_1 = 1 << 1;
        const EDGE_2 = 1 << 2;
    }
}

impl EdgeSet {
    /// Singleton set holding edge `ordinal`
    pub fn of(ordinal: usize) -> Self {
        Self::from_bits_truncate(1u8 << ordinal)
    }

    /// Check whether edge `ordinal` is a member
    ///
    /// # Arguments
    ///
    /// * `ordinal` - Edge ordinal (0, 1 or 2)
    pub fn has(self, ordinal: usize) -> bool {
        self.contains(Self::of(ordinal))
    }

    /// Member ordinals in ascending order
    pub fn ordinals(self) -> impl Iterator<Item = usize> {
        (0..3).filter(move |&ordinal| self.has(ordinal))
    }

    /// Number of member edges (0 to 3)
    pub fn len(self) -> usize {
        self.bits().count_ones() as usize
    }
}

/// Round half up: `floor(v + 0.5)`
#[inline(always)]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// What a border point is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Intersection of an active edge with the row
    Edge(usize),
    /// A triangle vertex bounding the row directly
    Vertex(usize),
}

/// Intersection of the triangle boundary with the current row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderPoint {
    /// Real-valued column where the boundary meets the row
    pub x: f64,
    pub anchor: Anchor,
}

impl BorderPoint {
    /// Canvas column covered by this point
    pub fn column(&self) -> i32 {
        round_half_up(self.x)
    }
}

/// Border points of one row, sorted by x
///
/// Holds two points normally and three on a row where a vertex crossing could
/// not be resolved.
#[derive(Debug, Clone, Copy)]
pub struct BorderPoints {
    buf: [BorderPoint; Self::CAPACITY],
    len: usize,
}

impl BorderPoints {
    pub const CAPACITY: usize = 3;

    const UNSET: BorderPoint = BorderPoint {
        x: 0.0,
        anchor: Anchor::Vertex(0),
    };

    fn new() -> Self {
        Self {
            buf: [Self::UNSET; Self::CAPACITY],
            len: 0,
        }
    }

    fn push(&mut self, point: BorderPoint) {
        assert!(self.len < Self::CAPACITY, "more than three border points");
        self.buf[self.len] = point;
        self.len += 1;
    }

    /// Stable sort by x
    fn sort(&mut self) {
        self.buf[..self.len].sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    /// Live points, left to right
    pub fn as_slice(&self) -> &[BorderPoint] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Row-by-row walk over one triangle
#[derive(Debug, Clone)]
pub struct Sweep<'a> {
    table: &'a EdgeTable,
    active: EdgeSet,
    cursors: [f64; 3],
    y: i32,
    y_max: i32,
    horizontal_start: bool,
    /// Bounds of a first row that has no two sweeping edges
    pinned: Option<[BorderPoint; 2]>,
}

impl<'a> Sweep<'a> {
    /// Position the sweep on the first row of `table`
    ///
    /// # Arguments
    ///
    /// * `table` - Edge table of the triangle to walk
    ///
    /// # Returns
    ///
    /// A sweep on row `table.y_min()` with the edges that start there active
    pub fn start(table: &'a EdgeTable) -> Self {
        let y_min = table.y_min();
        let mut active = EdgeSet::empty();
        let mut cursors = [0.0; 3];
        let mut horizontal_start = false;

        for edge in table.edges().iter().filter(|e| e.y_min.y == y_min) {
            if edge.slope.is_horizontal() {
                horizontal_start = true;
            } else if edge.slope.sweeps() {
                active.insert(EdgeSet::of(edge.ordinal));
                cursors[edge.ordinal] = edge.y_min.x as f64;
            }
        }

        // Flat or collapsed triangles: bound the only row by its extreme vertices
        let pinned = (active.len() < 2).then(|| Self::extreme_vertices(table, y_min));

        log::trace!(
            "Sweep start: rows {}..={}, active {:?}, horizontal start: {}",
            y_min,
            table.y_max(),
            active,
            horizontal_start
        );

        Self {
            table,
            active,
            cursors,
            y: y_min,
            y_max: table.y_max(),
            horizontal_start,
            pinned,
        }
    }

    /// Current row
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Edges intersecting the current row
    pub fn active(&self) -> EdgeSet {
        self.active
    }

    /// Whether a horizontal edge lies on the first row
    pub fn horizontal_start(&self) -> bool {
        self.horizontal_start
    }

    /// Border points of the current row, sorted by x
    pub fn border_points(&self) -> BorderPoints {
        let mut points = BorderPoints::new();
        let edges = self.table.edges();

        if let Some(closing) = self
            .active
            .ordinals()
            .find(|&o| edges[o].slope.is_horizontal())
        {
            let edge = &edges[closing];
            for (x, index) in [
                (edge.y_min.x, edge.y_min_index),
                (edge.y_max.x, edge.y_max_index),
            ] {
                points.push(BorderPoint {
                    x: x as f64,
                    anchor: Anchor::Vertex(index),
                });
            }
        } else if let Some(pinned) = self.pinned {
            for point in pinned {
                points.push(point);
            }
        } else {
            for ordinal in self.active.ordinals() {
                points.push(BorderPoint {
                    x: self.cursors[ordinal],
                    anchor: Anchor::Edge(ordinal),
                });
            }
        }

        points.sort();
        points
    }

    /// Move to the next row
    ///
    /// Returns `false` once the last row has been reached.
    pub fn advance(&mut self) -> bool {
        if self.y >= self.y_max {
            return false;
        }

        let next = self.y + 1;
        let table = self.table;
        let edges = table.edges();

        let mut started = EdgeSet::empty();
        for edge in edges {
            if edge.y_min.y == next && !edge.slope.is_degenerate() && !self.active.has(edge.ordinal)
            {
                started.insert(EdgeSet::of(edge.ordinal));
            }
        }
        self.active |= started;

        for ordinal in self.active.ordinals() {
            if edges[ordinal].y_max.y == self.y {
                self.active.remove(EdgeSet::of(ordinal));
            }
        }

        for ordinal in self.active.difference(started).ordinals() {
            self.cursors[ordinal] += edges[ordinal].slope.x_step();
        }
        for ordinal in started.ordinals() {
            self.cursors[ordinal] = edges[ordinal].y_min.x as f64;
        }

        if self.active.len() == 3 {
            self.resolve_crossing(started, next);
        }

        if self
            .active
            .ordinals()
            .any(|o| edges[o].slope.is_horizontal())
        {
            self.active &= started;
        }

        self.pinned = None;
        self.y = next;
        true
    }

    /// Reduce three active edges to two at a vertex crossing
    ///
    /// Survivors are checked left to right against the new edge's column. Of
    /// the coincident survivors, one whose lower end sits on row `next` is
    /// preferred, falling back to the leftmost.
    fn resolve_crossing(&mut self, started: EdgeSet, next: i32) {
        let Some(incoming) = started.ordinals().next() else {
            return;
        };
        let column = round_half_up(self.cursors[incoming]);
        let table = self.table;
        let edges = table.edges();

        let mut survivors: Vec<usize> = self.active.difference(started).ordinals().collect();
        survivors.sort_by(|&a, &b| self.cursors[a].total_cmp(&self.cursors[b]));
        survivors.retain(|&o| round_half_up(self.cursors[o]) == column);

        if survivors.len() > 1 {
            log::warn!(
                "Row {}: edges {:?} all meet edge {} at column {}; dropping the one that ends here",
                next,
                survivors,
                incoming,
                column
            );
        }

        let outgoing = survivors
            .iter()
            .copied()
            .find(|&o| edges[o].y_max.y == next)
            .or_else(|| survivors.first().copied());

        if let Some(ordinal) = outgoing {
            log::trace!(
                "Row {}: edge {} hands over to edge {} at column {}",
                next,
                ordinal,
                incoming,
                column
            );
            self.active.remove(EdgeSet::of(ordinal));
        }
    }

    /// Leftmost and rightmost vertices on row `y`
    fn extreme_vertices(table: &EdgeTable, y: i32) -> [BorderPoint; 2] {
        let vertices = table.vertices();
        let on_row = move || (0..3).filter(move |&i| vertices[i].y == y);
        let left = on_row().min_by_key(|&i| vertices[i].x).unwrap_or(0);
        let right = on_row().max_by_key(|&i| vertices[i].x).unwrap_or(0);

        [left, right].map(|index| BorderPoint {
            x: vertices[index].x as f64,
            anchor: Anchor::Vertex(index),
        })
    }
}
