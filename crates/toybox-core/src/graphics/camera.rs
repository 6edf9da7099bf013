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

//! The camera block: projection state and view math.
//!
//! Cameras use a left-handed space with depth in `[0, 1]`; a camera with
//! an identity rotation looks down `+Z`.

use glam::{Mat4, Quat, Vec3};

use crate::math::Frustum;

const DEFAULT_FOV_DEGREES: f32 = 60.0;
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;
const DEFAULT_Z_NEAR: f32 = 0.1;
const DEFAULT_Z_FAR: f32 = 1000.0;

/// The projection family a camera uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection with a vertical field of view in radians.
    Perspective { fov_y: f32 },
    /// Orthographic projection with a vertical extent in world units.
    Orthographic { size: f32 },
}

/// A camera block: projection parameters plus the cached projection
/// matrix.
///
/// The camera's pose comes from the owning toy's `Transform` block; the
/// camera itself only owns projection state.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    projection: Projection,
    aspect: f32,
    z_near: f32,
    z_far: f32,
    projection_matrix: Mat4,
}

impl Camera {
    /// Creates a perspective camera.
    ///
    /// ## Arguments
    /// * `fov_y` - Vertical field of view in radians.
    /// * `aspect` - Width over height of the target viewport.
    /// * `z_near` / `z_far` - Clip plane distances.
    pub fn perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let mut camera = Self {
            projection: Projection::Perspective { fov_y },
            aspect,
            z_near,
            z_far,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.rebuild_projection();
        camera
    }

    /// Creates an orthographic camera with a vertical extent of `size`
    /// world units.
    pub fn orthographic(size: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let mut camera = Self {
            projection: Projection::Orthographic { size },
            aspect,
            z_near,
            z_far,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.rebuild_projection();
        camera
    }

    /// The current projection family and parameters.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// The current aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// The cached projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Updates the aspect ratio, rebuilding the projection only when the
    /// value actually changed.
    pub fn set_aspect(&mut self, aspect: f32) {
        if self.aspect == aspect {
            return;
        }
        self.aspect = aspect;
        self.rebuild_projection();
    }

    /// Switches to a perspective projection.
    pub fn set_perspective(&mut self, fov_y: f32, z_near: f32, z_far: f32) {
        self.projection = Projection::Perspective { fov_y };
        self.z_near = z_near;
        self.z_far = z_far;
        self.rebuild_projection();
    }

    /// Switches to an orthographic projection.
    pub fn set_orthographic(&mut self, size: f32, z_near: f32, z_far: f32) {
        self.projection = Projection::Orthographic { size };
        self.z_near = z_near;
        self.z_far = z_far;
        self.rebuild_projection();
    }

    fn rebuild_projection(&mut self) {
        self.projection_matrix = match self.projection {
            Projection::Perspective { fov_y } => {
                Mat4::perspective_lh(fov_y, self.aspect, self.z_near, self.z_far)
            }
            Projection::Orthographic { size } => {
                let half_height = size * 0.5;
                let half_width = half_height * self.aspect;
                Mat4::orthographic_lh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.z_near,
                    self.z_far,
                )
            }
        };
    }

    /// Builds the view matrix for a camera posed at `position` with
    /// `rotation`: the inverse of the camera's world placement.
    pub fn view_matrix(position: Vec3, rotation: Quat) -> Mat4 {
        Mat4::from_quat(rotation).inverse() * Mat4::from_translation(-position)
    }

    /// The combined view-projection matrix for the given pose.
    pub fn view_projection(&self, position: Vec3, rotation: Quat) -> Mat4 {
        self.projection_matrix * Self::view_matrix(position, rotation)
    }

    /// The world-space frustum for the given pose.
    pub fn frustum(&self, position: Vec3, rotation: Quat) -> Frustum {
        Frustum::from_view_projection(&self.view_projection(position, rotation))
    }
}

impl Default for Camera {
    /// A perspective camera with a 60° vertical field of view, 16:9
    /// aspect, and clip planes at 0.1 and 1000.
    fn default() -> Self {
        Self::perspective(
            DEFAULT_FOV_DEGREES.to_radians(),
            DEFAULT_ASPECT,
            DEFAULT_Z_NEAR,
            DEFAULT_Z_FAR,
        )
    }
}
