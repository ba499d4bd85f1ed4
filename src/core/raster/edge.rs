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

//! Triangle edges and the edge table
//!
//! Edge `i` joins vertex `i` and vertex `(i + 1) % 3`. The ordinal `i` is the
//! edge's identity for the rest of the sweep: the active set, border points and
//! Gouraud color lookups all refer to edges by ordinal.

use super::super::types::Vertex;

/// Slope `dy/dx` of an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    /// Finite slope; `Normal(0.0)` is a horizontal edge
    Normal(f64),
    /// Both endpoints share an x coordinate
    Vertical,
    /// Both endpoints coincide
    Degenerate,
}

impl Slope {
    /// Classify the line through `a` and `b`
    pub fn between(a: Vertex, b: Vertex) -> Self {
        if a.x != b.x {
            Slope::Normal((a.y - b.y) as f64 / (a.x - b.x) as f64)
        } else if a.y == b.y {
            Slope::Degenerate
        } else {
            Slope::Vertical
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Slope::Normal(m) if m == 0.0)
    }

    pub fn is_degenerate(self) -> bool {
        self == Slope::Degenerate
    }

    /// Check whether the edge moves its border point from row to row
    ///
    /// Horizontal edges bound a single row directly and degenerate edges span
    /// no rows at all, so neither takes part in the slope-advance path.
    pub fn sweeps(self) -> bool {
        !self.is_horizontal() && !self.is_degenerate()
    }

    /// Horizontal movement of the border point per row (`1 / slope`)
    ///
    /// # Panics
    ///
    /// Panics on a horizontal slope. Horizontal edges never reach the
    /// slope-advance path, so this is an invariant violation.
    pub fn x_step(self) -> f64 {
        match self {
            Slope::Normal(m) => {
                assert!(m != 0.0, "horizontal edge reached the slope-advance path");
                1.0 / m
            }
            Slope::Vertical | Slope::Degenerate => 0.0,
        }
    }
}

/// One side of the triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Identity of the edge (0, 1 or 2)
    pub ordinal: usize,

    /// Endpoints in triangle order: vertex `ordinal`, then vertex `(ordinal + 1) % 3`
    pub vertices: [Vertex; 2],

    /// Endpoint with the smaller y
    pub y_min: Vertex,

    /// Endpoint with the larger y
    pub y_max: Vertex,

    /// Triangle vertex index of `y_min`
    pub y_min_index: usize,

    /// Triangle vertex index of `y_max`
    pub y_max_index: usize,

    pub slope: Slope,
}

impl Edge {
    /// Build edge `ordinal` of the triangle `vertices`
    ///
    /// # Arguments
    ///
    /// * `ordinal` - Edge index (0, 1 or 2); edge `i` joins vertex `i` to vertex `(i + 1) % 3`
    /// * `vertices` - The triangle's vertices
    pub fn new(ordinal: usize, vertices: &[Vertex; 3]) -> Self {
        let [start, end] = Self::endpoint_indices(ordinal);
        let (a, b) = (vertices[start], vertices[end]);

        // Ties keep the second endpoint as y_min
        let ((y_min_index, y_min), (y_max_index, y_max)) = if a.y < b.y {
            ((start, a), (end, b))
        } else {
            ((end, b), (start, a))
        };

        Self {
            ordinal,
            vertices: [a, b],
            y_min,
            y_max,
            y_min_index,
            y_max_index,
            slope: Slope::between(a, b),
        }
    }

    /// Triangle vertex indices joined by edge `ordinal`
    pub const fn endpoint_indices(ordinal: usize) -> [usize; 2] {
        [ordinal, (ordinal + 1) % 3]
    }
}

/// The three edges of one triangle
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTable {
    vertices: [Vertex; 3],
    edges: [Edge; 3],
}

impl EdgeTable {
    /// Build the edge table of a triangle
    ///
    /// # Arguments
    ///
    /// * `vertices` - The triangle's vertices, in caller order
    ///
    /// # Returns
    ///
    /// A table holding edges 0, 1 and 2 in ordinal order
    pub fn new(vertices: [Vertex; 3]) -> Self {
        let edges = [0, 1, 2].map(|ordinal| Edge::new(ordinal, &vertices));
        Self { vertices, edges }
    }

    /// Triangle vertices the table was built from
    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }

    /// All three edges, indexed by ordinal
    pub fn edges(&self) -> &[Edge; 3] {
        &self.edges
    }

    /// Edge with the given ordinal
    ///
    /// # Panics
    ///
    /// Panics if `ordinal` is not 0, 1 or 2.
    pub fn edge(&self, ordinal: usize) -> &Edge {
        &self.edges[ordinal]
    }

    /// First row of the sweep
    pub fn y_min(&self) -> i32 {
        self.edges.iter().map(|e| e.y_min.y).min().unwrap_or_default()
    }

    /// Last row of the sweep
    pub fn y_max(&self) -> i32 {
        self.edges.iter().map(|e| e.y_max.y).max().unwrap_or_default()
    }
}
