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

//! Culling geometry: bounding spheres, planes, and view frustums.

use glam::{Mat4, Vec3, Vec4};

/// A bounding sphere in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// The sphere's centre.
    pub center: Vec3,
    /// The sphere's radius.
    pub radius: f32,
}

impl Sphere {
    /// Creates a sphere from a centre point and radius.
    #[inline]
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// A plane in the form `normal · p + distance = 0`, with the normal pointing
/// towards the inside half-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// The (normalized) plane normal.
    pub normal: Vec3,
    /// The plane's signed distance term.
    pub distance: f32,
}

impl Plane {
    /// Builds a normalized plane from raw `(a, b, c, d)` coefficients.
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = Vec3::new(coefficients.x, coefficients.y, coefficients.z);
        let length = normal.length();
        if length <= f32::EPSILON {
            return Self {
                normal: Vec3::ZERO,
                distance: coefficients.w,
            };
        }
        Self {
            normal: normal / length,
            distance: coefficients.w / length,
        }
    }

    /// The signed distance from `point` to the plane. Positive means the
    /// point lies in the inside half-space.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// A camera view frustum as six inward-facing planes, extracted from a
/// combined view-projection matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Extracts the frustum planes from a view-projection matrix.
    ///
    /// Uses the row-combination method for a clip space with depth in
    /// `[0, 1]`: a point is inside when every clip-space inequality
    /// `-w <= x <= w`, `-w <= y <= w`, `0 <= z <= w` holds.
    pub fn from_view_projection(view_projection: &Mat4) -> Self {
        let row0 = view_projection.row(0);
        let row1 = view_projection.row(1);
        let row2 = view_projection.row(2);
        let row3 = view_projection.row(3);

        Self {
            planes: [
                Plane::from_coefficients(row3 + row0), // left
                Plane::from_coefficients(row3 - row0), // right
                Plane::from_coefficients(row3 + row1), // bottom
                Plane::from_coefficients(row3 - row1), // top
                Plane::from_coefficients(row2),        // near
                Plane::from_coefficients(row3 - row2), // far
            ],
        }
    }

    /// Returns the six inward-facing planes.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Returns `true` when any part of `sphere` lies inside the frustum.
    ///
    /// Boundary contact counts as intersecting, so ties resolve in favour
    /// of drawing.
    pub fn intersects(&self, sphere: &Sphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(sphere.center) >= -sphere.radius)
    }

    /// Returns `true` when `point` lies inside or on the frustum boundary.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(point) >= 0.0)
    }
}
