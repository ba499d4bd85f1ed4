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

//! Scanline triangle rasterizer
//!
//! This library fills a single triangle on a pixel canvas using the classic
//! active-edge-table algorithm, with either a flat color or Gouraud shading
//! interpolated from the three vertex colors.
//!
//! # Example
//!
//! ```
//! use scanfill::core::{fill_gouraud, Canvas, Color, Vertex};
//!
//! let mut canvas = Canvas::new(16, 16);
//! let vertices = [Vertex::new(2, 2), Vertex::new(12, 4), Vertex::new(6, 12)];
//! let colors = [Color::RED, Color::GREEN, Color::BLUE];
//!
//! let stats = fill_gouraud(&mut canvas, &vertices, &colors).unwrap();
//! assert_eq!(stats.rows, 11);
//! assert_eq!(canvas.pixel(2, 2), Some(Color::RED));
//! ```

pub mod core;
