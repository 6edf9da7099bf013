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

//! Backend-neutral handles to resources living on the GPU.

use crate::graphics::shader::ShaderUniform;

/// A resource uploaded to the GPU that can be made current and released.
pub trait GpuResource: Send + Sync {
    /// Makes the resource current on the backend.
    fn bind(&self);
    /// Releases the resource from the current state.
    fn unbind(&self);
}

/// A compiled shader stage.
pub trait ShaderResource: GpuResource {}

/// A linked shader program.
pub trait ShaderProgramResource: GpuResource {
    /// Uploads a uniform value to the program.
    ///
    /// Unknown uniform names are ignored; implementations log a debug
    /// warning so shader mismatches stay visible during development.
    fn upload_uniform(&self, uniform: &ShaderUniform);
}

/// A texture uploaded to the GPU.
pub trait TextureResource: GpuResource {
    /// Selects the texture unit the next bind targets.
    fn set_slot(&self, slot: u32);
}

/// An uploaded mesh (vertex and index buffers).
pub trait MeshResource: GpuResource {
    /// The number of indices to draw.
    fn index_count(&self) -> u32;
}

/// Binds a resource for the duration of a scope.
///
/// The resource is bound on construction and unbound when the scope
/// drops, on every exit path including error propagation.
pub struct ResourceScope<'a, R: GpuResource + ?Sized> {
    resource: &'a R,
}

impl<'a, R: GpuResource + ?Sized> ResourceScope<'a, R> {
    /// Binds `resource` until the returned scope drops.
    pub fn bind(resource: &'a R) -> Self {
        resource.bind();
        Self { resource }
    }
}

impl<R: GpuResource + ?Sized> Drop for ResourceScope<'_, R> {
    fn drop(&mut self) {
        self.resource.unbind();
    }
}
