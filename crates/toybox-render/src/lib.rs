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

//! # Toybox Render
//!
//! The render core: builds draw command buffers from open stages, routes
//! them through render passes, and drives backend-neutral graphics
//! traits to put frames on screen.
//!
//! The types this crate renders are defined in `toybox-core`; nothing
//! here depends on a concrete graphics API.

pub mod cache;
pub mod display;
pub mod frame_builder;
pub mod manager;
pub mod passes;
pub mod pipeline;

pub use cache::ResourceCache;
pub use display::Display;
pub use frame_builder::FrameBuilder;
pub use manager::{GraphicsManager, Renderer};
pub use passes::{default_passes, MaterialFilter, RenderPass};
pub use pipeline::GraphicsPipeline;
