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

//! CPU-side shader sources, programs, and uniform values.

use glam::{Mat4, Vec3, Vec4};

use crate::math::RgbaColor;
use crate::memory::Shared;
use crate::uid::Uid;

/// Name of the built-in uniform carrying the camera's combined
/// view-projection matrix.
pub const VIEW_PROJECTION_UNIFORM: &str = "ViewProjectionUniform";

/// Name of the built-in uniform carrying a toy's world transform matrix.
pub const TRANSFORM_UNIFORM: &str = "TransformUniform";

/// The pipeline stage a shader source targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// A single shader source, not yet compiled for any backend.
#[derive(Debug, Clone)]
pub struct Shader {
    id: Uid,
    /// The stage this source targets.
    pub stage: ShaderStage,
    /// The backend-language source text.
    pub source: String,
}

impl Shader {
    /// Creates a shader with a fresh id.
    pub fn new(stage: ShaderStage, source: impl Into<String>) -> Self {
        Self {
            id: Uid::generate(),
            stage,
            source: source.into(),
        }
    }

    /// The shader's process-unique id.
    pub fn id(&self) -> Uid {
        self.id
    }
}

/// An ordered set of shaders that link into one program.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    id: Uid,
    /// The shaders to link, typically one vertex and one fragment stage.
    pub shaders: Vec<Shared<Shader>>,
}

impl ShaderProgram {
    /// Creates a program with a fresh id over the given shaders.
    pub fn new(shaders: Vec<Shared<Shader>>) -> Self {
        Self {
            id: Uid::generate(),
            shaders,
        }
    }

    /// The program's process-unique id.
    pub fn id(&self) -> Uid {
        self.id
    }
}

/// A value that can be uploaded to a shader uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
    Color(RgbaColor),
    /// A texture unit index for a sampler uniform.
    Sampler(i32),
}

/// A named uniform upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderUniform {
    /// The uniform's name as declared in the shader.
    pub name: String,
    /// The value to upload.
    pub value: UniformValue,
}

impl ShaderUniform {
    /// Creates a named uniform upload.
    pub fn new(name: impl Into<String>, value: UniformValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
