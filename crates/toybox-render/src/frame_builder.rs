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

//! Turns open stages into an ordered, backend-neutral command buffer.

use toybox_core::graphics::{
    Camera, DrawCommand, DrawCommandBuffer, Material, Mesh, MeshRef, Model, RenderError,
    ShaderUniform, Transform, UniformValue, TRANSFORM_UNIFORM, VIEW_PROJECTION_UNIFORM,
};
use toybox_core::math::{Frustum, RgbaColor, Size, Sphere, Viewport};
use toybox_core::stage::{SharedStage, StageView, ToyRef};
use toybox_core::Shared;

/// Builds one frame's draw commands from the open stages.
pub struct FrameBuilder;

impl FrameBuilder {
    /// Produces the command buffer for one frame.
    ///
    /// The buffer always starts with a viewport set and a clear. When no
    /// stage contains a camera, those two commands are the whole frame.
    /// Toys whose bounding sphere lies strictly outside every camera's
    /// frustum emit nothing; spheres touching a frustum boundary draw.
    ///
    /// ## Arguments
    /// * `stages` - The open stages, traversed in input order.
    /// * `viewport_size` - Target size; zero in either dimension is
    ///   rejected with `InvalidArgument`.
    /// * `clear_color` - The frame's clear color.
    pub fn build(
        stages: &[SharedStage],
        viewport_size: Size,
        clear_color: RgbaColor,
    ) -> Result<DrawCommandBuffer, RenderError> {
        let aspect = viewport_size.aspect_ratio().ok_or_else(|| {
            RenderError::InvalidArgument(format!(
                "viewport size {}x{} has a zero dimension",
                viewport_size.width, viewport_size.height
            ))
        })?;

        let mut buffer = DrawCommandBuffer::new();
        buffer.push(DrawCommand::SetViewport(Viewport::with_extents(
            viewport_size,
        )));
        buffer.push(DrawCommand::Clear(clear_color));

        let frusta = Self::collect_frusta(stages, aspect);
        if frusta.is_empty() {
            log::trace!("No camera in any open stage; frame is clear-only.");
            return Ok(buffer);
        }

        for stage in stages {
            for toy in StageView::of::<()>(&stage.root()) {
                Self::emit_toy(&toy, &frusta, &mut buffer);
            }
        }

        Ok(buffer)
    }

    /// First traversal: update every camera's aspect and build its
    /// world-space frustum.
    fn collect_frusta(stages: &[SharedStage], aspect: f32) -> Vec<Frustum> {
        let mut frusta = Vec::new();
        for stage in stages {
            for toy in StageView::of::<(Camera,)>(&stage.root()) {
                let toy = toy.read();
                let Some(camera) = toy.blocks.get::<Camera>() else {
                    continue;
                };
                let transform = toy
                    .blocks
                    .get::<Transform>()
                    .map(|handle| *handle.read())
                    .unwrap_or_default();

                let mut camera = camera.write();
                camera.set_aspect(aspect);
                frusta.push(camera.frustum(transform.position, transform.rotation));
            }
        }
        frusta
    }

    /// Second traversal: cull non-camera toys against the frusta and
    /// emit the surviving toys' command sequences.
    fn emit_toy(toy_ref: &ToyRef, frusta: &[Frustum], buffer: &mut DrawCommandBuffer) {
        let toy = toy_ref.read();
        let blocks = &toy.blocks;

        let transform = blocks.get::<Transform>().map(|handle| *handle.read());
        let camera = blocks.get::<Camera>();

        // Cameras are never culled; everything else is tested against
        // every camera's frustum.
        if camera.is_none() {
            let sphere = match &transform {
                Some(transform) => Sphere::new(
                    transform.position,
                    transform
                        .scale
                        .abs()
                        .max_element()
                        * 0.5,
                ),
                None => Sphere::new(glam::Vec3::ZERO, 0.5),
            };
            if !frusta.iter().any(|frustum| frustum.intersects(&sphere)) {
                return;
            }
        }

        if let Some(material) = blocks.get::<Material>() {
            buffer.push(DrawCommand::SetMaterial((&*material.read()).into()));
        }

        if let Some(camera) = camera {
            let pose = transform.unwrap_or_default();
            let view_projection = camera
                .read()
                .view_projection(pose.position, pose.rotation);
            buffer.push(DrawCommand::SetUniform(ShaderUniform::new(
                VIEW_PROJECTION_UNIFORM,
                UniformValue::Mat4(view_projection),
            )));
        } else if let Some(transform) = transform {
            buffer.push(DrawCommand::SetUniform(ShaderUniform::new(
                TRANSFORM_UNIFORM,
                UniformValue::Mat4(transform.matrix()),
            )));
        }

        if let Some(model) = blocks.get::<Model>() {
            let model = model.read();
            buffer.push(DrawCommand::SetMaterial((&model.material).into()));
            buffer.push(DrawCommand::DrawMesh(MeshRef::new(model.mesh.clone())));
        }

        if let Some(mesh) = blocks.get::<Mesh>() {
            // Mesh blocks are plain values; the command carries its own
            // copy, keyed by the mesh's stable id for caching.
            buffer.push(DrawCommand::DrawMesh(MeshRef::new(Shared::new(
                mesh.read().clone(),
            ))));
        }
    }
}
