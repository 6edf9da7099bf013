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

//! The window-surface contract the render core draws to.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::math::Size;
use crate::memory::Shared;
use crate::uid::Uid;

/// A shared handle to a window surface owned by the platform layer.
pub type SharedSurface = Shared<dyn WindowSurface>;

/// An abstraction over a platform window the engine can render into.
///
/// The `raw-window-handle` supertraits let context providers reach the
/// native handles without depending on a specific windowing library.
pub trait WindowSurface: HasWindowHandle + HasDisplayHandle + Send + Sync {
    /// The surface's process-unique id.
    fn id(&self) -> Uid;

    /// The surface's current pixel size.
    fn size(&self) -> Size;
}
