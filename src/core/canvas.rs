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

//! Pixel canvas
//!
//! A row-major grid of [`Color`] values addressed by (row, column) = (y, x).
//! The rasterizer only borrows a canvas for the duration of one fill; the
//! caller owns it.
//!
//! # Coordinate System
//!
//! The origin (0, 0) is the top-left pixel:
//! - X-axis: 0 to width - 1 (left to right)
//! - Y-axis: 0 to height - 1 (top to bottom)

use std::path::Path;

use super::error::{RasterError, Result};
use super::types::Color;

/// Owned 2-D grid of colors
///
/// # Examples
///
/// ```
/// use scanfill::core::{Canvas, Color};
///
/// let mut canvas = Canvas::new(4, 3);
/// canvas.set_pixel(1, 2, Color::RED).unwrap();
/// assert_eq!(canvas.pixel(1, 2), Some(Color::RED));
/// assert_eq!(canvas.pixel(4, 0), None);
/// assert!(canvas.set_pixel(-1, 0, Color::RED).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a black canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// Create a canvas with every pixel set to `color`
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks() rejects a zero chunk size
        self.pixels.chunks(self.width.max(1))
    }

    /// Check whether (x, y) addresses a pixel of this canvas
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Read the pixel at column `x`, row `y`
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write the pixel at column `x`, row `y`
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::OutOfBounds`] if the coordinate lies outside the
    /// canvas. Nothing is clipped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        let index = self.index(x, y).ok_or(RasterError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.pixels[index] = color;
        Ok(())
    }

    /// Convert to an 8-bit RGB image
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let color = self.pixels[y as usize * self.width + x as usize];
            image::Rgb(color.to_rgb8())
        })
    }

    /// Write the canvas to an image file
    ///
    /// The format follows the file extension (`.png`, `.ppm`, `.bmp`).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_rgb_image().save(path)?;
        Ok(())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}
