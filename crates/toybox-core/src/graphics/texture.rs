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

use crate::math::Size;
use crate::uid::Uid;

/// The channel layout of a texture's pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// Three channels, no alpha.
    Rgb,
    /// Four channels including alpha.
    Rgba,
}

impl TextureFormat {
    /// Bytes per pixel in this format.
    pub const fn channel_count(self) -> usize {
        match self {
            TextureFormat::Rgb => 3,
            TextureFormat::Rgba => 4,
        }
    }
}

/// CPU-side texture data: dimensions, format, and tightly packed
/// row-major pixels.
#[derive(Debug, Clone)]
pub struct Texture {
    id: Uid,
    /// The texture's pixel dimensions.
    pub size: Size,
    /// The channel layout of `pixels`.
    pub format: TextureFormat,
    /// Row-major pixel bytes in the format's channel order.
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Creates a texture with a fresh id.
    pub fn new(size: Size, format: TextureFormat, pixels: Vec<u8>) -> Self {
        Self {
            id: Uid::generate(),
            size,
            format,
            pixels,
        }
    }

    /// The texture's process-unique id.
    pub fn id(&self) -> Uid {
        self.id
    }
}
