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

//! Per-renderer cache of GPU resources, keyed by source ids.

use std::collections::HashMap;

use toybox_core::graphics::{
    GraphicsBackend, Mesh, MeshResource, ResourceError, Shader, ShaderProgram,
    ShaderProgramResource, ShaderResource, Texture, TextureResource,
};
use toybox_core::{Shared, Uid};

/// Caches the GPU residents a backend has created, so each CPU resource
/// is uploaded at most once per renderer.
///
/// The cache is owned by its renderer and mutated only on the render
/// thread; `&mut self` on the ensure methods makes the at-most-one
/// upload guarantee structural.
#[derive(Default)]
pub struct ResourceCache {
    shaders: HashMap<Uid, Shared<dyn ShaderResource>>,
    programs: HashMap<Uid, Shared<dyn ShaderProgramResource>>,
    textures: HashMap<Uid, Shared<dyn TextureResource>>,
    meshes: HashMap<Uid, Shared<dyn MeshResource>>,
}

impl ResourceCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled form of `shader`, compiling on first use.
    pub fn ensure_shader(
        &mut self,
        backend: &dyn GraphicsBackend,
        shader: &Shader,
    ) -> Result<Shared<dyn ShaderResource>, ResourceError> {
        if let Some(found) = self.shaders.get(&shader.id()) {
            return Ok(found.clone());
        }
        let resource = backend.compile_shader(shader)?;
        self.shaders.insert(shader.id(), resource.clone());
        Ok(resource)
    }

    /// Returns the linked form of `program`, compiling its shaders and
    /// linking on first use.
    pub fn ensure_program(
        &mut self,
        backend: &dyn GraphicsBackend,
        program: &ShaderProgram,
    ) -> Result<Shared<dyn ShaderProgramResource>, ResourceError> {
        if let Some(found) = self.programs.get(&program.id()) {
            return Ok(found.clone());
        }
        let mut compiled = Vec::with_capacity(program.shaders.len());
        for shader in &program.shaders {
            compiled.push(self.ensure_shader(backend, shader)?);
        }
        let resource = backend.create_shader_program(program, &compiled)?;
        self.programs.insert(program.id(), resource.clone());
        Ok(resource)
    }

    /// Returns the uploaded form of `texture`, uploading on first use.
    pub fn ensure_texture(
        &mut self,
        backend: &dyn GraphicsBackend,
        texture: &Texture,
    ) -> Result<Shared<dyn TextureResource>, ResourceError> {
        if let Some(found) = self.textures.get(&texture.id()) {
            return Ok(found.clone());
        }
        let resource = backend.upload_texture(texture)?;
        self.textures.insert(texture.id(), resource.clone());
        Ok(resource)
    }

    /// Returns the uploaded form of `mesh`, uploading on first use.
    pub fn ensure_mesh(
        &mut self,
        backend: &dyn GraphicsBackend,
        mesh: &Mesh,
    ) -> Result<Shared<dyn MeshResource>, ResourceError> {
        if let Some(found) = self.meshes.get(&mesh.id()) {
            return Ok(found.clone());
        }
        let resource = backend.upload_mesh(mesh)?;
        self.meshes.insert(mesh.id(), resource.clone());
        Ok(resource)
    }

    /// Releases every cached resource. Idempotent.
    pub fn clear(&mut self) {
        self.shaders.clear();
        self.programs.clear();
        self.textures.clear();
        self.meshes.clear();
    }

    /// The total number of cached resources across all kinds.
    pub fn len(&self) -> usize {
        self.shaders.len() + self.programs.len() + self.textures.len() + self.meshes.len()
    }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ResourceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceCache")
            .field("shaders", &self.shaders.len())
            .field("programs", &self.programs.len())
            .field("textures", &self.textures.len())
            .field("meshes", &self.meshes.len())
            .finish()
    }
}
