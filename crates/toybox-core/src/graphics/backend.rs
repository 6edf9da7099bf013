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

use crate::graphics::error::ResourceError;
use crate::graphics::mesh::Mesh;
use crate::graphics::resource::{
    MeshResource, ShaderProgramResource, ShaderResource, TextureResource,
};
use crate::graphics::settings::RenderingApi;
use crate::graphics::shader::{Shader, ShaderProgram};
use crate::graphics::texture::Texture;
use crate::math::{RgbaColor, Size, Viewport};
use crate::memory::Shared;

/// The contract every rendering backend implements.
///
/// A backend executes draw state changes and turns CPU-side resource
/// descriptions into GPU residents. Implementations are driven from the
/// render thread only, but handles they produce may be dropped anywhere,
/// hence `Send + Sync`.
pub trait GraphicsBackend: Send + Sync {
    /// The API family this backend implements.
    fn api(&self) -> RenderingApi;

    /// Starts a frame targeting `viewport`.
    fn begin_draw(&self, viewport: &Viewport);

    /// Finishes the frame. `clear` is the color used for any final
    /// resolve the backend performs.
    fn end_draw(&self, clear: &RgbaColor);

    /// Clears the current target to `color`.
    fn clear(&self, color: &RgbaColor);

    /// Sets the active viewport.
    fn set_viewport(&self, viewport: &Viewport);

    /// Sets the render resolution.
    fn set_resolution(&self, resolution: &Size);

    /// Enables or disables depth testing.
    fn enable_depth_testing(&self, enabled: bool);

    /// Compiles a shader stage. Compiling the same shader id twice
    /// returns an equivalent resource.
    fn compile_shader(&self, shader: &Shader) -> Result<Shared<dyn ShaderResource>, ResourceError>;

    /// Links previously compiled stages into a program.
    fn create_shader_program(
        &self,
        program: &ShaderProgram,
        shaders: &[Shared<dyn ShaderResource>],
    ) -> Result<Shared<dyn ShaderProgramResource>, ResourceError>;

    /// Uploads texture pixel data to the GPU.
    fn upload_texture(&self, texture: &Texture) -> Result<Shared<dyn TextureResource>, ResourceError>;

    /// Uploads mesh vertex and index data to the GPU.
    fn upload_mesh(&self, mesh: &Mesh) -> Result<Shared<dyn MeshResource>, ResourceError>;

    /// Draws an uploaded mesh with the currently bound state.
    fn draw_mesh(&self, mesh: &dyn MeshResource) -> Result<(), ResourceError>;
}
