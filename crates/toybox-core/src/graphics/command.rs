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

//! The backend-neutral draw command stream produced by frame building.

use crate::graphics::material::Material;
use crate::graphics::mesh::Mesh;
use crate::graphics::shader::{ShaderProgram, ShaderUniform};
use crate::graphics::texture::Texture;
use crate::math::{RgbaColor, Size, Viewport};
use crate::memory::Shared;
use crate::uid::Uid;

/// Everything a backend needs to use a material: its id plus shared
/// handles to the program and textures, so first use can upload them.
#[derive(Debug, Clone)]
pub struct MaterialRef {
    /// The originating material's id.
    pub id: Uid,
    /// The program to bind.
    pub shader_program: Shared<ShaderProgram>,
    /// Textures to bind to slots `0..n`.
    pub textures: Vec<Shared<Texture>>,
}

impl From<&Material> for MaterialRef {
    fn from(material: &Material) -> Self {
        Self {
            id: material.id(),
            shader_program: material.shader_program.clone(),
            textures: material.textures.clone(),
        }
    }
}

impl MaterialRef {
    /// Returns `true` when any referenced texture carries an alpha
    /// channel.
    pub fn has_alpha_texture(&self) -> bool {
        self.textures
            .iter()
            .any(|texture| texture.format == crate::graphics::texture::TextureFormat::Rgba)
    }
}

/// A shared handle to the mesh a draw command targets.
#[derive(Debug, Clone)]
pub struct MeshRef {
    /// The geometry to draw, id and data together.
    pub mesh: Shared<Mesh>,
}

impl MeshRef {
    /// Creates a mesh reference.
    pub fn new(mesh: Shared<Mesh>) -> Self {
        Self { mesh }
    }

    /// The referenced mesh's id.
    pub fn id(&self) -> Uid {
        self.mesh.id()
    }
}

/// One backend-neutral rendering instruction.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Clear the current target to a color.
    Clear(RgbaColor),
    /// Set the active viewport rectangle.
    SetViewport(Viewport),
    /// Set the render resolution.
    SetResolution(Size),
    /// Make a material's program and textures current.
    SetMaterial(MaterialRef),
    /// Upload a uniform to the currently bound program.
    SetUniform(ShaderUniform),
    /// Draw an indexed mesh with the current state.
    DrawMesh(MeshRef),
}

/// An ordered sequence of draw commands making up one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawCommandBuffer {
    commands: Vec<DrawCommand>,
}

impl DrawCommandBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// The commands in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` when no commands were recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl IntoIterator for DrawCommandBuffer {
    type Item = DrawCommand;
    type IntoIter = std::vec::IntoIter<DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a DrawCommandBuffer {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
