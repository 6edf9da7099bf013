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

//! Math types used across the engine.
//!
//! Generic linear algebra comes from `glam`; this module only adds the
//! engine-domain pieces (colors, pixel dimensions, culling geometry) and
//! re-exports the `glam` types the public API uses.

pub mod color;
pub mod dimension;
pub mod geometry;

pub use color::RgbaColor;
pub use dimension::{Size, Viewport};
pub use geometry::{Frustum, Plane, Sphere};

pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
