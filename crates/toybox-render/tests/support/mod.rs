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

//! Recording mocks for driving the render core without a GPU.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, WindowHandle,
};

use toybox_core::graphics::{
    Camera, GraphicsBackend, GraphicsContext, GraphicsContextProvider, Material, Mesh,
    MeshResource, RenderError, RenderingApi, ResourceError, Shader, ShaderProgram,
    ShaderProgramResource, ShaderResource, ShaderStage, ShaderUniform, Texture, TextureFormat,
    TextureResource, Transform, VsyncMode,
};
use toybox_core::graphics::{AttributeType, BufferElement, BufferLayout, VertexBuffer};
use toybox_core::math::{RgbaColor, Size, Viewport};
use toybox_core::stage::{SharedStage, Stage, Toy};
use toybox_core::window::{SharedSurface, WindowSurface};
use toybox_core::{Shared, Uid};

/// Routes `log` output from the code under test into the captured
/// output of the owning test. Safe to call from every test; only the
/// first call installs the logger.
pub fn capture_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A shared, ordered record of every backend and context call.
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Shared<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        capture_logs();
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn count_of(&self, prefix: &str) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.starts_with(prefix))
            .count()
    }
}

pub struct MockSurface {
    id: Uid,
    size: Size,
}

impl MockSurface {
    pub fn new(size: Size) -> SharedSurface {
        Shared::new(Self {
            id: Uid::generate(),
            size,
        })
    }
}

impl HasWindowHandle for MockSurface {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        Err(HandleError::Unavailable)
    }
}

impl HasDisplayHandle for MockSurface {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        Err(HandleError::Unavailable)
    }
}

impl WindowSurface for MockSurface {
    fn id(&self) -> Uid {
        self.id
    }

    fn size(&self) -> Size {
        self.size
    }
}

struct MockShaderResource {
    id: Uid,
    log: CallLog,
}

impl toybox_core::graphics::GpuResource for MockShaderResource {
    fn bind(&self) {
        self.log.record(format!("bind_shader:{}", self.id));
    }

    fn unbind(&self) {
        self.log.record(format!("unbind_shader:{}", self.id));
    }
}

impl ShaderResource for MockShaderResource {}

struct MockProgramResource {
    id: Uid,
    log: CallLog,
}

impl toybox_core::graphics::GpuResource for MockProgramResource {
    fn bind(&self) {
        self.log.record(format!("bind_program:{}", self.id));
    }

    fn unbind(&self) {
        self.log.record(format!("unbind_program:{}", self.id));
    }
}

impl ShaderProgramResource for MockProgramResource {
    fn upload_uniform(&self, uniform: &ShaderUniform) {
        self.log.record(format!("uniform:{}", uniform.name));
    }
}

struct MockTextureResource {
    id: Uid,
    log: CallLog,
}

impl toybox_core::graphics::GpuResource for MockTextureResource {
    fn bind(&self) {
        self.log.record(format!("bind_texture:{}", self.id));
    }

    fn unbind(&self) {
        self.log.record(format!("unbind_texture:{}", self.id));
    }
}

impl TextureResource for MockTextureResource {
    fn set_slot(&self, slot: u32) {
        self.log.record(format!("set_slot:{}:{slot}", self.id));
    }
}

struct MockMeshResource {
    id: Uid,
    index_count: u32,
    log: CallLog,
}

impl toybox_core::graphics::GpuResource for MockMeshResource {
    fn bind(&self) {
        self.log.record(format!("bind_mesh:{}", self.id));
    }

    fn unbind(&self) {
        self.log.record(format!("unbind_mesh:{}", self.id));
    }
}

impl MeshResource for MockMeshResource {
    fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// A backend that records every call and can be told to fail uploads.
pub struct MockBackend {
    api: RenderingApi,
    pub log: CallLog,
    pub fail_mesh_uploads: AtomicBool,
}

impl MockBackend {
    pub fn new(api: RenderingApi, log: CallLog) -> Shared<Self> {
        Shared::new(Self {
            api,
            log,
            fail_mesh_uploads: AtomicBool::new(false),
        })
    }
}

impl GraphicsBackend for MockBackend {
    fn api(&self) -> RenderingApi {
        self.api
    }

    fn begin_draw(&self, _viewport: &Viewport) {
        self.log.record("begin_draw");
    }

    fn end_draw(&self, _clear: &RgbaColor) {
        self.log.record("end_draw");
    }

    fn clear(&self, _color: &RgbaColor) {
        self.log.record("clear");
    }

    fn set_viewport(&self, _viewport: &Viewport) {
        self.log.record("set_viewport");
    }

    fn set_resolution(&self, _resolution: &Size) {
        self.log.record("set_resolution");
    }

    fn enable_depth_testing(&self, enabled: bool) {
        self.log
            .record(if enabled { "depth_test:on" } else { "depth_test:off" });
    }

    fn compile_shader(&self, shader: &Shader) -> Result<Shared<dyn ShaderResource>, ResourceError> {
        self.log.record(format!("compile_shader:{}", shader.id()));
        Ok(Shared::new(MockShaderResource {
            id: shader.id(),
            log: self.log.clone(),
        }))
    }

    fn create_shader_program(
        &self,
        program: &ShaderProgram,
        _shaders: &[Shared<dyn ShaderResource>],
    ) -> Result<Shared<dyn ShaderProgramResource>, ResourceError> {
        self.log.record(format!("create_program:{}", program.id()));
        Ok(Shared::new(MockProgramResource {
            id: program.id(),
            log: self.log.clone(),
        }))
    }

    fn upload_texture(
        &self,
        texture: &Texture,
    ) -> Result<Shared<dyn TextureResource>, ResourceError> {
        self.log.record(format!("upload_texture:{}", texture.id()));
        Ok(Shared::new(MockTextureResource {
            id: texture.id(),
            log: self.log.clone(),
        }))
    }

    fn upload_mesh(&self, mesh: &Mesh) -> Result<Shared<dyn MeshResource>, ResourceError> {
        if self.fail_mesh_uploads.load(Ordering::SeqCst) {
            return Err(ResourceError::Backend("mesh upload disabled".to_string()));
        }
        self.log.record(format!("upload_mesh:{}", mesh.id()));
        Ok(Shared::new(MockMeshResource {
            id: mesh.id(),
            index_count: mesh.indices.len() as u32,
            log: self.log.clone(),
        }))
    }

    fn draw_mesh(&self, mesh: &dyn MeshResource) -> Result<(), ResourceError> {
        self.log.record(format!("draw_mesh:{}", mesh.index_count()));
        Ok(())
    }
}

/// A context that records calls and can be flagged as lost.
pub struct MockContext {
    api: RenderingApi,
    log: CallLog,
    pub lost: AtomicBool,
}

impl GraphicsContext for MockContext {
    fn api(&self) -> RenderingApi {
        self.api
    }

    fn make_current(&self) -> Result<(), RenderError> {
        if self.lost.load(Ordering::SeqCst) {
            return Err(RenderError::ContextLost);
        }
        self.log.record("make_current");
        Ok(())
    }

    fn swap_buffers(&self) {
        self.log.record("swap_buffers");
    }

    fn set_vsync(&self, mode: VsyncMode) {
        self.log.record(format!("set_vsync:{mode:?}"));
    }
}

/// A provider that counts its provisions and remembers the last context
/// it handed out.
pub struct MockContextProvider {
    api: RenderingApi,
    log: CallLog,
    pub provided: AtomicUsize,
    pub last_context: Mutex<Option<Shared<MockContext>>>,
}

impl MockContextProvider {
    pub fn new(api: RenderingApi, log: CallLog) -> Shared<Self> {
        Shared::new(Self {
            api,
            log,
            provided: AtomicUsize::new(0),
            last_context: Mutex::new(None),
        })
    }
}

impl GraphicsContextProvider for MockContextProvider {
    fn api(&self) -> RenderingApi {
        self.api
    }

    fn provide(&self, surface: &SharedSurface) -> toybox_core::graphics::SharedContext {
        self.provided.fetch_add(1, Ordering::SeqCst);
        self.log
            .record(format!("provide:{:?}:{}", self.api, surface.id()));
        let context = Shared::new(MockContext {
            api: self.api,
            log: self.log.clone(),
            lost: AtomicBool::new(false),
        });
        *self.last_context.lock() = Some(context.clone());
        context
    }
}

/// A unit quad mesh with positions and texture coordinates.
pub fn quad_mesh() -> Mesh {
    let layout = BufferLayout::new(vec![
        BufferElement::new(AttributeType::Float3, "position"),
        BufferElement::new(AttributeType::Float2, "uv"),
    ]);
    #[rustfmt::skip]
    let data = vec![
        -0.5, -0.5, 0.0, 0.0, 0.0,
         0.5, -0.5, 0.0, 1.0, 0.0,
         0.5,  0.5, 0.0, 1.0, 1.0,
        -0.5,  0.5, 0.0, 0.0, 1.0,
    ];
    Mesh::new(VertexBuffer::new(data, layout), vec![0, 1, 2, 2, 3, 0])
}

/// A minimal vertex+fragment shader program.
pub fn simple_program() -> Shared<ShaderProgram> {
    Shared::new(ShaderProgram::new(vec![
        Shared::new(Shader::new(ShaderStage::Vertex, "void main() {}")),
        Shared::new(Shader::new(ShaderStage::Fragment, "void main() {}")),
    ]))
}

/// A material with one texture of the given format.
pub fn textured_material(format: TextureFormat) -> Material {
    let pixels = vec![255u8; format.channel_count()];
    Material::new(
        simple_program(),
        vec![Shared::new(Texture::new(Size::new(1, 1), format, pixels))],
    )
}

/// A toy holding a default camera at the origin, looking down `+Z`.
pub fn camera_toy() -> Toy {
    let mut toy = Toy::named("camera");
    toy.blocks.insert(Camera::default());
    toy.blocks.insert(Transform::default());
    toy
}

/// A toy with a transform, mesh, and material, placed at `position`.
pub fn quad_toy(name: &str, position: glam::Vec3, format: TextureFormat) -> Toy {
    let mut toy = Toy::named(name);
    toy.blocks.insert(Transform::at(position));
    toy.blocks.insert(quad_mesh());
    toy.blocks.insert(textured_material(format));
    toy
}

/// A stage with the given toys under the root.
pub fn stage_with(toys: Vec<Toy>) -> SharedStage {
    capture_logs();
    let stage = Stage::new_shared();
    for toy in toys {
        stage.add_toy(toy);
    }
    stage
}
