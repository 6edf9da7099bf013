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

use crate::graphics::settings::GraphicsSettings;
use crate::stage::SharedStage;
use crate::window::SharedSurface;

/// The engine-level events the render core consumes and produces.
///
/// Window and stage events carry shared handles so handlers can take
/// ownership stakes without copying the underlying data.
#[derive(Clone)]
pub enum EngineEvent {
    /// A window surface became available for rendering.
    WindowOpened(SharedSurface),
    /// A window surface is going away and must stop being drawn to.
    WindowClosed(SharedSurface),
    /// A stage should be included in subsequent frames.
    StageOpened(SharedStage),
    /// A stage should no longer be drawn.
    StageClosed(SharedStage),
    /// The application changed its graphics settings.
    AppSettingsChanged(GraphicsSettings),
    /// Published by the graphics manager after every completed tick.
    FrameRendered,
}

impl std::fmt::Debug for EngineEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowOpened(surface) => {
                write!(f, "WindowOpened({})", surface.id())
            }
            Self::WindowClosed(surface) => {
                write!(f, "WindowClosed({})", surface.id())
            }
            Self::StageOpened(stage) => write!(f, "StageOpened({})", stage.id()),
            Self::StageClosed(stage) => write!(f, "StageClosed({})", stage.id()),
            Self::AppSettingsChanged(settings) => {
                write!(f, "AppSettingsChanged({settings:?})")
            }
            Self::FrameRendered => write!(f, "FrameRendered"),
        }
    }
}
