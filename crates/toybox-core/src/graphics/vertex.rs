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

//! Vertex data and its layout description.

/// The closed set of vertex attribute types backends must understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Float,
    Float2,
    Float3,
    Float4,
    Mat3,
    Mat4,
    Int,
    Int2,
    Int3,
    Int4,
    Bool,
}

impl AttributeType {
    /// The attribute's size in bytes.
    pub const fn size_bytes(self) -> u32 {
        match self {
            AttributeType::Float => 4,
            AttributeType::Float2 => 8,
            AttributeType::Float3 => 12,
            AttributeType::Float4 => 16,
            AttributeType::Mat3 => 36,
            AttributeType::Mat4 => 64,
            AttributeType::Int => 4,
            AttributeType::Int2 => 8,
            AttributeType::Int3 => 12,
            AttributeType::Int4 => 16,
            AttributeType::Bool => 1,
        }
    }
}

/// One attribute in a vertex layout.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferElement {
    /// The attribute's data type.
    pub attribute: AttributeType,
    /// The attribute's name as referenced by shaders.
    pub name: String,
    /// Whether integer data should be normalized when read as floats.
    pub normalized: bool,
    /// Byte offset from the start of a vertex, filled in by
    /// [`BufferLayout::new`].
    pub offset: u32,
}

impl BufferElement {
    /// Creates an element with an unresolved offset.
    pub fn new(attribute: AttributeType, name: impl Into<String>) -> Self {
        Self {
            attribute,
            name: name.into(),
            normalized: false,
            offset: 0,
        }
    }
}

/// The byte layout of one vertex: an ordered list of elements with
/// resolved offsets, plus the total stride.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BufferLayout {
    elements: Vec<BufferElement>,
    stride: u32,
}

impl BufferLayout {
    /// Resolves offsets as a running prefix sum over `elements` and the
    /// stride as the total size.
    pub fn new(mut elements: Vec<BufferElement>) -> Self {
        let mut offset = 0;
        for element in &mut elements {
            element.offset = offset;
            offset += element.attribute.size_bytes();
        }
        Self {
            elements,
            stride: offset,
        }
    }

    /// The layout's elements, in declaration order.
    pub fn elements(&self) -> &[BufferElement] {
        &self.elements
    }

    /// The size of one vertex in bytes.
    pub fn stride(&self) -> u32 {
        self.stride
    }
}

/// CPU-side vertex data plus the layout describing it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexBuffer {
    /// The raw vertex components, tightly packed per the layout.
    pub data: Vec<f32>,
    /// The per-vertex layout of `data`.
    pub layout: BufferLayout,
}

impl VertexBuffer {
    /// Creates a vertex buffer from raw components and their layout.
    pub fn new(data: Vec<f32>, layout: BufferLayout) -> Self {
        Self { data, layout }
    }

    /// The vertex data as raw bytes, for backend upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}
