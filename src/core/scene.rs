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

//! Scene files
//!
//! A scene is a shared vertex list with per-vertex colors and a list of
//! triangular faces indexing into it. It is the caller layer around the
//! single-triangle rasterizer: [`Scene::render`] orders the faces and fills
//! them one by one.
//!
//! # Format
//!
//! Scenes are read from TOML or JSON, chosen by file extension:
//!
//! ```toml
//! width = 64
//! height = 64
//! shading = "flat"          # optional, defaults to "gouraud"
//! background = [0.0, 0.0, 0.0] # optional, defaults to white
//! vertices = [[4, 4], [60, 10], [20, 58]]
//! colors = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
//! faces = [[0, 1, 2]]
//! depth = [1.0, 2.0, 3.0]   # optional, one value per vertex
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::error::{Error, Result};
use super::raster::{FillStats, Rasterizer};
use super::types::{Color, Shading, Vertex};

fn default_background() -> Color {
    Color::WHITE
}

/// Triangle mesh to rasterize onto one canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub shading: Shading,
    pub vertices: Vec<Vertex>,
    pub colors: Vec<Color>,
    pub faces: Vec<[usize; 3]>,
    /// Per-vertex depth; larger is farther away
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<Vec<f64>>,
}

impl Scene {
    /// Parse a scene from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Parse(format!("Invalid TOML scene: {}", e)))
    }

    /// Parse a scene from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Parse(format!("Invalid JSON scene: {}", e)))
    }

    /// Load and validate a scene file
    ///
    /// The format follows the extension: `.toml` or `.json`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading scene: {}", path.display());

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(Error::Scene(format!(
                    "Unsupported scene format: {} (expected .toml or .json)",
                    path.display()
                )))
            }
        };

        let scene = parse(&std::fs::read_to_string(path)?)?;
        scene.validate()?;

        log::info!(
            "Scene: {}x{}, {} vertices, {} faces, {:?} shading",
            scene.width,
            scene.height,
            scene.vertices.len(),
            scene.faces.len(),
            scene.shading
        );

        Ok(scene)
    }

    /// Check the cross-references between vertices, colors, depth and faces
    ///
    /// Vertex positions and color ranges are left to the rasterizer, which
    /// checks them per face.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Scene(format!(
                "Canvas must not be empty ({}x{})",
                self.width, self.height
            )));
        }

        if self.colors.len() != self.vertices.len() {
            return Err(Error::Scene(format!(
                "{} colors for {} vertices",
                self.colors.len(),
                self.vertices.len()
            )));
        }

        if let Some(depth) = &self.depth {
            if depth.len() != self.vertices.len() {
                return Err(Error::Scene(format!(
                    "{} depth values for {} vertices",
                    depth.len(),
                    self.vertices.len()
                )));
            }
        }

        for (face, indices) in self.faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= self.vertices.len()) {
                return Err(Error::Scene(format!(
                    "Face {} references vertex {} (only {} vertices)",
                    face,
                    index,
                    self.vertices.len()
                )));
            }
        }

        Ok(())
    }

    /// Face indices in drawing order
    ///
    /// With depth, faces are drawn back to front: largest mean vertex depth
    /// first, ties kept in file order. Without depth, file order.
    pub fn draw_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.faces.len()).collect();

        if let Some(depth) = &self.depth {
            let mean = |face: usize| self.faces[face].iter().map(|&i| depth[i]).sum::<f64>() / 3.0;
            order.sort_by(|&a, &b| mean(b).total_cmp(&mean(a)));
        }

        order
    }

    /// Render every face onto a fresh canvas
    pub fn render(&self) -> Result<Canvas> {
        self.validate()?;

        let mut canvas = Canvas::filled(self.width, self.height, self.background);
        let rasterizer = Rasterizer::new(self.shading);
        let mut total = FillStats::default();

        for face in self.draw_order() {
            let indices = self.faces[face];
            let vertices = indices.map(|i| self.vertices[i]);
            let colors = indices.map(|i| self.colors[i]);

            let stats = rasterizer
                .draw_triangle(&mut canvas, &vertices, &colors)
                .inspect_err(|e| log::error!("Face {} failed: {}", face, e))?;

            total.rows += stats.rows;
            total.pixels += stats.pixels;
            total.unresolved_rows += stats.unresolved_rows;
        }

        log::info!(
            "Rendered {} faces: {} pixels over {} rows",
            self.faces.len(),
            total.pixels,
            total.rows
        );
        if total.unresolved_rows > 0 {
            log::warn!(
                "{} rows were filled with an unresolved vertex crossing",
                total.unresolved_rows
            );
        }

        Ok(canvas)
    }
}
