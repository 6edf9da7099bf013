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

use crate::graphics::mesh::Mesh;
use crate::graphics::shader::ShaderProgram;
use crate::graphics::texture::{Texture, TextureFormat};
use crate::memory::Shared;
use crate::uid::Uid;

/// A surface description: a shader program plus the textures it samples.
///
/// Materials reference their resources through shared handles; they do
/// not own the underlying data.
#[derive(Debug, Clone)]
pub struct Material {
    id: Uid,
    /// The program used to draw surfaces with this material.
    pub shader_program: Shared<ShaderProgram>,
    /// Textures bound in slot order when the material is used.
    pub textures: Vec<Shared<Texture>>,
}

impl Material {
    /// Creates a material with a fresh id.
    pub fn new(shader_program: Shared<ShaderProgram>, textures: Vec<Shared<Texture>>) -> Self {
        Self {
            id: Uid::generate(),
            shader_program,
            textures,
        }
    }

    /// The material's process-unique id.
    pub fn id(&self) -> Uid {
        self.id
    }

    /// Returns `true` when any of the material's textures carries an
    /// alpha channel.
    pub fn has_alpha_texture(&self) -> bool {
        self.textures
            .iter()
            .any(|texture| texture.format == TextureFormat::Rgba)
    }
}

/// A mesh paired with the material to draw it with.
#[derive(Debug, Clone)]
pub struct Model {
    /// The geometry to draw.
    pub mesh: Shared<Mesh>,
    /// The surface description to draw it with.
    pub material: Material,
}

impl Model {
    /// Creates a model from shared geometry and a material.
    pub fn new(mesh: Shared<Mesh>, material: Material) -> Self {
        Self { mesh, material }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::shader::{Shader, ShaderStage};
    use crate::math::Size;

    fn empty_program() -> Shared<ShaderProgram> {
        Shared::new(ShaderProgram::new(vec![Shared::new(Shader::new(
            ShaderStage::Vertex,
            "",
        ))]))
    }

    #[test]
    fn alpha_detection_depends_on_texture_formats() {
        let opaque = Material::new(
            empty_program(),
            vec![Shared::new(Texture::new(
                Size::new(1, 1),
                TextureFormat::Rgb,
                vec![0; 3],
            ))],
        );
        assert!(!opaque.has_alpha_texture());

        let translucent = Material::new(
            empty_program(),
            vec![
                Shared::new(Texture::new(Size::new(1, 1), TextureFormat::Rgb, vec![0; 3])),
                Shared::new(Texture::new(Size::new(1, 1), TextureFormat::Rgba, vec![0; 4])),
            ],
        );
        assert!(translucent.has_alpha_texture());

        let untextured = Material::new(empty_program(), Vec::new());
        assert!(!untextured.has_alpha_texture());
    }
}
