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

//! Graphics contracts and CPU-side resource types.
//!
//! Everything here is backend-neutral: value types describing what to
//! draw, command streams describing how, and the traits backends and
//! contexts implement to execute them.

pub mod backend;
pub mod camera;
pub mod command;
pub mod context;
pub mod error;
pub mod material;
pub mod mesh;
pub mod resource;
pub mod settings;
pub mod shader;
pub mod texture;
pub mod transform;
pub mod vertex;

pub use backend::GraphicsBackend;
pub use camera::{Camera, Projection};
pub use command::{DrawCommand, DrawCommandBuffer, MaterialRef, MeshRef};
pub use context::{GraphicsContext, GraphicsContextProvider, SharedContext};
pub use error::{RenderError, ResourceError};
pub use material::{Material, Model};
pub use mesh::Mesh;
pub use resource::{
    GpuResource, MeshResource, ResourceScope, ShaderProgramResource, ShaderResource,
    TextureResource,
};
pub use settings::{GraphicsSettings, RenderingApi, VsyncMode};
pub use shader::{
    Shader, ShaderProgram, ShaderStage, ShaderUniform, UniformValue, TRANSFORM_UNIFORM,
    VIEW_PROJECTION_UNIFORM,
};
pub use texture::{Texture, TextureFormat};
pub use transform::Transform;
pub use vertex::{AttributeType, BufferElement, BufferLayout, VertexBuffer};
