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

use crate::graphics::vertex::VertexBuffer;
use crate::uid::Uid;

/// CPU-side mesh geometry: vertex data plus a `u32` index buffer.
#[derive(Debug, Clone)]
pub struct Mesh {
    id: Uid,
    /// The mesh's vertex data and layout.
    pub vertices: VertexBuffer,
    /// Tightly packed triangle indices.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Creates a mesh with a fresh id.
    pub fn new(vertices: VertexBuffer, indices: Vec<u32>) -> Self {
        Self {
            id: Uid::generate(),
            vertices,
            indices,
        }
    }

    /// The mesh's process-unique id.
    pub fn id(&self) -> Uid {
        self.id
    }

    /// The index data as raw bytes, for backend upload.
    pub fn indices_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
