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

//! Scanline triangle rasterization
//!
//! Components, leaf-first:
//! - [`edge`]: edges and the per-triangle edge table
//! - [`sweep`]: active edge set, border points and the row-advance state machine
//! - [`interpolate`]: linear color interpolation along a segment
//! - [`shader`]: flat and Gouraud pixel-color strategies
//! - [`rasterizer`]: the fill engine and public entry points

pub mod edge;
pub mod interpolate;
pub mod rasterizer;
pub mod shader;
pub mod sweep;
#[cfg(test)]
mod tests;

// Public re-exports
pub use rasterizer::{fill_flat, fill_gouraud, rasterize, sweep_fill, FillStats, Rasterizer};
