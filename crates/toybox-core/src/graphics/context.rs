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

use crate::graphics::error::RenderError;
use crate::graphics::settings::{RenderingApi, VsyncMode};
use crate::memory::Shared;
use crate::window::SharedSurface;

/// A shared handle to a live graphics context.
pub type SharedContext = Shared<dyn GraphicsContext>;

/// A presentation context tied to one window surface.
pub trait GraphicsContext: Send + Sync {
    /// The API family this context belongs to.
    fn api(&self) -> RenderingApi;

    /// Makes the context current on the calling thread.
    ///
    /// ## Returns
    /// `Err(RenderError::ContextLost)` when the context is no longer
    /// usable and must be recreated.
    fn make_current(&self) -> Result<(), RenderError>;

    /// Presents the finished frame.
    fn swap_buffers(&self);

    /// Applies a presentation synchronisation mode.
    fn set_vsync(&self, mode: VsyncMode);
}

/// Creates contexts of one API family for window surfaces.
pub trait GraphicsContextProvider: Send + Sync {
    /// The API family of the contexts this provider creates.
    fn api(&self) -> RenderingApi;

    /// Creates a context for `surface`.
    fn provide(&self, surface: &SharedSurface) -> SharedContext;
}
