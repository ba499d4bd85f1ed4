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

/// Rasterizer error types
use thiserror::Error;

/// Result type for rasterizer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors raised at the rasterizer boundary, before or during a fill
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    #[error("Invalid vertex count: {got} (expected 3)")]
    InvalidVertexCount { got: usize },

    #[error("Invalid color count: {got} (expected 3)")]
    InvalidColorCount { got: usize },

    #[error("Invalid color for vertex {index}: ({r}, {g}, {b}) (components must lie in [0, 1])")]
    InvalidColor { index: usize, r: f64, g: f64, b: f64 },

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}
