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

use crate::math::{RgbaColor, Size};

/// The graphics API a backend implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderingApi {
    /// No rendering; a headless placeholder.
    None,
    /// The OpenGL family.
    #[default]
    OpenGL,
    /// Vulkan.
    Vulkan,
    /// Apple Metal.
    Metal,
    /// An application-supplied backend outside the built-in set.
    Custom,
}

/// How presentation synchronises with the display's refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VsyncMode {
    /// Present immediately.
    Off,
    /// Wait for vertical blank.
    #[default]
    On,
    /// Tear only when running behind the refresh rate.
    Adaptive,
}

/// The application-controlled graphics configuration, delivered over the
/// event bus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphicsSettings {
    /// Which backend family to render with.
    pub rendering_api: RenderingApi,
    /// The presentation synchronisation mode.
    pub vsync: VsyncMode,
    /// The color frames are cleared to.
    pub clear_color: RgbaColor,
    /// The requested render resolution.
    pub resolution: Size,
}

impl Default for GraphicsSettings {
    fn default() -> Self {
        Self {
            rendering_api: RenderingApi::default(),
            vsync: VsyncMode::default(),
            clear_color: RgbaColor::BLACK,
            resolution: Size::new(1280, 720),
        }
    }
}
