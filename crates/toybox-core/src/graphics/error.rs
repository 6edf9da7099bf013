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

//! Defines the hierarchy of error types for the rendering subsystem.

use std::fmt;

use crate::uid::Uid;

/// An error related to the creation or use of a GPU resource.
#[derive(Debug)]
pub enum ResourceError {
    /// A resource referenced by id was not present where it was expected.
    NotFound(Uid),
    /// An error originating from the specific graphics backend implementation.
    Backend(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::NotFound(id) => {
                write!(f, "Resource not found for ID: {id}")
            }
            ResourceError::Backend(msg) => {
                write!(f, "Backend-specific resource error: {msg}")
            }
        }
    }
}

impl std::error::Error for ResourceError {}

/// A high-level error that can occur within the render core.
#[derive(Debug)]
pub enum RenderError {
    /// The graphics stack was assembled from invalid parts (e.g. no usable
    /// backend/context pairs).
    Configuration(String),
    /// A caller-supplied value was rejected (e.g. a zero-sized viewport or
    /// an empty render pass list).
    InvalidArgument(String),
    /// An error occurred while managing a GPU resource.
    Resource(ResourceError),
    /// A backend draw or state operation failed.
    Backend(String),
    /// The graphics context could not be made current. The owning display
    /// must recreate its context before drawing again.
    ContextLost,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Configuration(msg) => {
                write!(f, "Invalid graphics configuration: {msg}")
            }
            RenderError::InvalidArgument(msg) => {
                write!(f, "Invalid argument: {msg}")
            }
            RenderError::Resource(err) => {
                write!(f, "Graphics resource operation failed: {err}")
            }
            RenderError::Backend(msg) => {
                write!(f, "Backend operation failed: {msg}")
            }
            RenderError::ContextLost => {
                write!(f, "The graphics context was lost and must be recreated.")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Resource(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResourceError> for RenderError {
    fn from(err: ResourceError) -> Self {
        RenderError::Resource(err)
    }
}
