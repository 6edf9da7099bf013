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

//! Render passes: named, ordered groups of materials with shared depth
//! state.

use toybox_core::graphics::MaterialRef;
use toybox_core::Shared;

/// Decides whether a pass takes ownership of a material's draws.
pub type MaterialFilter = Shared<dyn Fn(&MaterialRef) -> bool + Send + Sync>;

/// One render pass: a name for logs, the depth-test state it runs with,
/// and the filter that claims materials.
#[derive(Clone)]
pub struct RenderPass {
    name: String,
    depth_test: bool,
    filter: MaterialFilter,
}

impl RenderPass {
    /// Creates a pass.
    ///
    /// ## Arguments
    /// * `name` - Label used in logs.
    /// * `depth_test` - Whether depth testing is enabled while the pass
    ///   runs.
    /// * `filter` - Claims the materials this pass draws.
    pub fn new(
        name: impl Into<String>,
        depth_test: bool,
        filter: impl Fn(&MaterialRef) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            depth_test,
            filter: Shared::new(filter),
        }
    }

    /// The pass's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether depth testing is enabled during this pass.
    pub fn depth_test(&self) -> bool {
        self.depth_test
    }

    /// Returns `true` when this pass claims `material`.
    pub fn accepts(&self, material: &MaterialRef) -> bool {
        (self.filter)(material)
    }
}

impl std::fmt::Debug for RenderPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderPass")
            .field("name", &self.name)
            .field("depth_test", &self.depth_test)
            .finish()
    }
}

/// The default pass list: depth-tested `Opaque` geometry first, then
/// `Transparent` geometry with depth testing off.
///
/// Transparency is inferred from texture formats: a material with at
/// least one alpha-carrying texture goes to the transparent pass.
pub fn default_passes() -> Vec<RenderPass> {
    vec![
        RenderPass::new("Opaque", true, |material: &MaterialRef| {
            !material.has_alpha_texture()
        }),
        RenderPass::new("Transparent", false, |material: &MaterialRef| {
            material.has_alpha_texture()
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use toybox_core::graphics::{
        Material, Shader, ShaderProgram, ShaderStage, Texture, TextureFormat,
    };
    use toybox_core::math::Size;

    fn material_with(format: Option<TextureFormat>) -> MaterialRef {
        let program = Shared::new(ShaderProgram::new(vec![Shared::new(Shader::new(
            ShaderStage::Vertex,
            "",
        ))]));
        let textures = match format {
            Some(format) => {
                let bytes = vec![0; format.channel_count()];
                vec![Shared::new(Texture::new(Size::new(1, 1), format, bytes))]
            }
            None => Vec::new(),
        };
        MaterialRef::from(&Material::new(program, textures))
    }

    #[test]
    fn default_passes_split_on_alpha_textures() {
        let passes = default_passes();
        assert_eq!(passes.len(), 2);

        let opaque = material_with(Some(TextureFormat::Rgb));
        let transparent = material_with(Some(TextureFormat::Rgba));
        let untextured = material_with(None);

        assert!(passes[0].accepts(&opaque));
        assert!(!passes[0].accepts(&transparent));
        assert!(passes[0].accepts(&untextured));

        assert!(passes[1].accepts(&transparent));
        assert!(!passes[1].accepts(&opaque));
    }

    #[test]
    fn default_depth_states() {
        let passes = default_passes();
        assert!(passes[0].depth_test());
        assert!(!passes[1].depth_test());
    }
}
