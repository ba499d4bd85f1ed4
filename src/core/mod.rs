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

//! Core rasterization components
//!
//! This module contains:
//! - Geometry and color types
//! - The canvas the rasterizer writes into
//! - The scanline rasterizer (edge table, active edges, border points, shaders)
//! - Scene loading for callers that compose several triangles

pub mod canvas;
pub mod error;
pub mod raster;
pub mod scene;
pub mod types;

// Re-export commonly used types
pub use canvas::Canvas;
pub use error::{Error, RasterError, Result};
pub use raster::{fill_flat, fill_gouraud, rasterize, FillStats, Rasterizer};
pub use scene::Scene;
pub use types::{Color, Point, Shading, Vertex};
