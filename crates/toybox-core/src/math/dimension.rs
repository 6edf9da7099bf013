// Copyright 2025 eraflo
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

//! Pixel-based sizes and viewport rectangles.

use glam::Vec2;

/// A two-dimensional pixel extent, used for window sizes, texture sizes,
/// and render resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

impl Size {
    /// Creates a new size from width and height.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns width / height, or `None` when either dimension is zero.
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.width as f32 / self.height as f32)
    }
}

/// A viewport rectangle: an origin offset plus a pixel extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// The top-left corner of the viewport.
    pub position: Vec2,
    /// The pixel extents of the viewport.
    pub extents: Size,
}

impl Viewport {
    /// Creates a viewport covering `extents` starting at the origin.
    #[inline]
    pub fn with_extents(extents: Size) -> Self {
        Self {
            position: Vec2::ZERO,
            extents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_of_valid_size() {
        let size = Size::new(1920, 1080);
        let aspect = size.aspect_ratio().expect("non-zero size");
        assert!((aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn aspect_ratio_rejects_zero_dimensions() {
        assert_eq!(Size::new(0, 600).aspect_ratio(), None);
        assert_eq!(Size::new(800, 0).aspect_ratio(), None);
    }
}
