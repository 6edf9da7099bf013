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

//! Executes a frame: builds commands, routes them through the render
//! passes, and drives the backend.

use toybox_core::graphics::{
    DrawCommand, DrawCommandBuffer, GraphicsBackend, MaterialRef, MeshRef, RenderError,
    ResourceScope, ShaderProgramResource, ShaderUniform, UniformValue,
};
use toybox_core::math::RgbaColor;
use toybox_core::stage::SharedStage;
use toybox_core::Shared;

use crate::cache::ResourceCache;
use crate::display::Display;
use crate::frame_builder::FrameBuilder;
use crate::passes::{default_passes, RenderPass};

/// The render pipeline: an ordered pass list and the frame execution
/// logic.
pub struct GraphicsPipeline {
    passes: Vec<RenderPass>,
}

impl GraphicsPipeline {
    /// Creates a pipeline over an ordered pass list.
    ///
    /// ## Returns
    /// `InvalidArgument` when `passes` is empty; a pipeline with no
    /// passes could never draw anything.
    pub fn new(passes: Vec<RenderPass>) -> Result<Self, RenderError> {
        if passes.is_empty() {
            return Err(RenderError::InvalidArgument(
                "render pass list is empty".to_string(),
            ));
        }
        Ok(Self { passes })
    }

    /// Creates a pipeline with the default opaque and transparent passes.
    pub fn with_default_passes() -> Self {
        Self {
            passes: default_passes(),
        }
    }

    /// The passes, in execution order.
    pub fn passes(&self) -> &[RenderPass] {
        &self.passes
    }

    /// Draws one frame for `display`.
    ///
    /// A material segment whose program cannot be prepared is skipped
    /// whole, as is a single draw whose mesh fails to upload; a backend
    /// draw failure or a lost context aborts the display's frame.
    pub fn draw(
        &self,
        backend: &dyn GraphicsBackend,
        cache: &mut ResourceCache,
        display: &Display,
        stages: &[SharedStage],
        clear_color: RgbaColor,
    ) -> Result<(), RenderError> {
        let context = display.context().ok_or(RenderError::ContextLost)?;
        context.make_current()?;

        let viewport = display.viewport();
        let buffer = FrameBuilder::build(stages, viewport.extents, clear_color)?;
        let (preamble, buckets) = self.partition(buffer);

        backend.begin_draw(&viewport);
        self.run_loose_commands(backend, cache, &preamble)?;

        for (pass, bucket) in self.passes.iter().zip(&buckets) {
            if bucket.is_empty() {
                continue;
            }
            log::trace!("Running pass '{}' with {} commands.", pass.name(), bucket.len());
            backend.enable_depth_testing(pass.depth_test());
            self.run_bucket(backend, cache, bucket)?;
        }
        // Passes may have turned depth testing off; leave it on for the
        // next frame's preamble.
        backend.enable_depth_testing(true);

        backend.end_draw(&clear_color);
        context.swap_buffers();
        Ok(())
    }

    /// Splits a frame's commands into the preamble (everything before
    /// the first material) and one bucket per pass.
    ///
    /// Each `SetMaterial` is claimed by the first pass accepting it;
    /// commands up to the next material follow it into that bucket. A
    /// material no pass accepts is dropped, along with its commands,
    /// with a warning.
    fn partition(
        &self,
        buffer: DrawCommandBuffer,
    ) -> (Vec<DrawCommand>, Vec<Vec<DrawCommand>>) {
        let mut preamble = Vec::new();
        let mut buckets = vec![Vec::new(); self.passes.len()];
        let mut current: Option<usize> = None;
        let mut seen_material = false;

        for command in buffer {
            if let DrawCommand::SetMaterial(material) = &command {
                seen_material = true;
                current = self.passes.iter().position(|pass| pass.accepts(material));
                match current {
                    Some(index) => buckets[index].push(command),
                    None => log::warn!(
                        "No render pass accepts material {}; dropping its draws.",
                        material.id
                    ),
                }
                continue;
            }

            match current {
                Some(index) => buckets[index].push(command),
                None if !seen_material => preamble.push(command),
                None => {}
            }
        }

        (preamble, buckets)
    }

    /// Runs one pass's bucket: material segments in order.
    fn run_bucket(
        &self,
        backend: &dyn GraphicsBackend,
        cache: &mut ResourceCache,
        commands: &[DrawCommand],
    ) -> Result<(), RenderError> {
        let mut index = 0;
        while index < commands.len() {
            if let DrawCommand::SetMaterial(material) = &commands[index] {
                let end = commands[index + 1..]
                    .iter()
                    .position(|command| matches!(command, DrawCommand::SetMaterial(_)))
                    .map(|offset| index + 1 + offset)
                    .unwrap_or(commands.len());
                self.run_material_segment(backend, cache, material, &commands[index + 1..end])?;
                index = end;
            } else {
                self.run_loose_commands(
                    backend,
                    cache,
                    std::slice::from_ref(&commands[index]),
                )?;
                index += 1;
            }
        }
        Ok(())
    }

    /// Binds a material, then runs the commands recorded under it.
    ///
    /// The program stays bound for the whole segment; textures occupy
    /// slots `0..n` with matching `Texture{slot}` sampler uniforms.
    fn run_material_segment(
        &self,
        backend: &dyn GraphicsBackend,
        cache: &mut ResourceCache,
        material: &MaterialRef,
        commands: &[DrawCommand],
    ) -> Result<(), RenderError> {
        let program = match cache.ensure_program(backend, &material.shader_program) {
            Ok(program) => program,
            Err(err) => {
                log::error!(
                    "Failed to prepare shader program for material {}: {err}; skipping its draws.",
                    material.id
                );
                return Ok(());
            }
        };
        let _program_scope = ResourceScope::bind(program.as_ref());

        let mut bound_textures = Vec::with_capacity(material.textures.len());
        for (slot, texture) in material.textures.iter().enumerate() {
            match cache.ensure_texture(backend, texture) {
                Ok(resource) => {
                    resource.set_slot(slot as u32);
                    resource.bind();
                    program.upload_uniform(&ShaderUniform::new(
                        format!("Texture{slot}"),
                        UniformValue::Sampler(slot as i32),
                    ));
                    bound_textures.push(resource);
                }
                Err(err) => log::error!(
                    "Failed to upload texture {} for material {}: {err}",
                    texture.id(),
                    material.id
                ),
            }
        }

        let result = self.run_segment_commands(backend, cache, program.as_ref(), commands);

        for texture in bound_textures.iter().rev() {
            texture.unbind();
        }
        result
    }

    fn run_segment_commands(
        &self,
        backend: &dyn GraphicsBackend,
        cache: &mut ResourceCache,
        program: &dyn ShaderProgramResource,
        commands: &[DrawCommand],
    ) -> Result<(), RenderError> {
        for command in commands {
            match command {
                DrawCommand::SetUniform(uniform) => program.upload_uniform(uniform),
                DrawCommand::DrawMesh(mesh_ref) => {
                    self.draw_mesh(backend, cache, mesh_ref)?;
                }
                DrawCommand::Clear(color) => backend.clear(color),
                DrawCommand::SetViewport(viewport) => backend.set_viewport(viewport),
                DrawCommand::SetResolution(size) => backend.set_resolution(size),
                // Segments are delimited by SetMaterial and never
                // contain one.
                DrawCommand::SetMaterial(_) => {}
            }
        }
        Ok(())
    }

    /// Runs commands recorded outside any material segment.
    fn run_loose_commands(
        &self,
        backend: &dyn GraphicsBackend,
        cache: &mut ResourceCache,
        commands: &[DrawCommand],
    ) -> Result<(), RenderError> {
        for command in commands {
            match command {
                DrawCommand::Clear(color) => backend.clear(color),
                DrawCommand::SetViewport(viewport) => backend.set_viewport(viewport),
                DrawCommand::SetResolution(size) => backend.set_resolution(size),
                DrawCommand::SetUniform(uniform) => log::warn!(
                    "Uniform '{}' issued with no material bound; ignoring.",
                    uniform.name
                ),
                DrawCommand::DrawMesh(mesh_ref) => {
                    self.draw_mesh(backend, cache, mesh_ref)?;
                }
                DrawCommand::SetMaterial(_) => {}
            }
        }
        Ok(())
    }

    /// Ensures a mesh is resident, then binds and draws it.
    fn draw_mesh(
        &self,
        backend: &dyn GraphicsBackend,
        cache: &mut ResourceCache,
        mesh_ref: &MeshRef,
    ) -> Result<(), RenderError> {
        let resource: Shared<_> = match cache.ensure_mesh(backend, &mesh_ref.mesh) {
            Ok(resource) => resource,
            Err(err) => {
                log::error!("Failed to upload mesh {}: {err}; dropping draw.", mesh_ref.id());
                return Ok(());
            }
        };
        let _scope = ResourceScope::bind(resource.as_ref());
        backend.draw_mesh(resource.as_ref())?;
        Ok(())
    }
}

impl std::fmt::Debug for GraphicsPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsPipeline")
            .field("passes", &self.passes)
            .finish()
    }
}
