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

use toybox_core::graphics::SharedContext;
use toybox_core::math::Viewport;
use toybox_core::window::SharedSurface;
use toybox_core::Uid;

/// A render target: one window surface plus the context currently bound
/// to it.
///
/// The context is optional so a display can outlive a lost context; the
/// manager re-provides one on the next tick.
pub struct Display {
    surface: SharedSurface,
    context: Option<SharedContext>,
}

impl Display {
    /// Creates a display with no context yet.
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            surface,
            context: None,
        }
    }

    /// The display's window surface.
    pub fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    /// The surface's id.
    pub fn id(&self) -> Uid {
        self.surface.id()
    }

    /// The bound context, if one is live.
    pub fn context(&self) -> Option<&SharedContext> {
        self.context.as_ref()
    }

    /// Binds a freshly provided context.
    pub fn set_context(&mut self, context: SharedContext) {
        self.context = Some(context);
    }

    /// Drops the bound context, e.g. after it was lost.
    pub fn clear_context(&mut self) {
        self.context = None;
    }

    /// The full-surface viewport for this display.
    pub fn viewport(&self) -> Viewport {
        Viewport::with_extents(self.surface.size())
    }
}

impl std::fmt::Debug for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Display")
            .field("surface", &self.surface.id())
            .field("has_context", &self.context.is_some())
            .finish()
    }
}
