//! View frustum for culling.
//!
//! Extracts frustum planes from a view-projection matrix and provides
//! intersection tests for points and spheres.

use crate::math::matrix::Matrix4;
use crate::math::vector::Vector3;

/// A plane `n · p + d = 0` with the normal pointing into the positive
/// half-space.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vector3,
    /// Signed distance from the origin.
    pub distance: f64,
}

impl Plane {
    /// Create a plane from raw coefficients, normalizing the normal.
    #[must_use]
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64) -> Self {
        let length = (a * a + b * b + c * c).sqrt();
        if length > 0.0 {
            Self {
                normal: Vector3::new(a / length, b / length, c / length),
                distance: d / length,
            }
        } else {
            Self {
                normal: Vector3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from a point to the plane: positive in front,
    /// negative behind.
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vector3) -> f64 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum of six planes pointing inward.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix using the
    /// Gribb/Hartmann method. Assumes the [0, 1] depth convention of
    /// [`Camera::projection_matrix`](super::core::Camera).
    #[must_use]
    pub fn from_view_projection(vp: &Matrix4) -> Self {
        // Row-major storage hands the plane rows out directly.
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let combine = |sign: f64, row: [f64; 4]| {
            Plane::from_coefficients(
                row3[0] + sign * row[0],
                row3[1] + sign * row[1],
                row3[2] + sign * row[2],
                row3[3] + sign * row[3],
            )
        };

        let left = combine(1.0, row0);
        let right = combine(-1.0, row0);
        let bottom = combine(1.0, row1);
        let top = combine(-1.0, row1);
        // [0, 1] depth: the near plane is row2 alone.
        let near =
            Plane::from_coefficients(row2[0], row2[1], row2[2], row2[3]);
        let far = combine(-1.0, row2);

        Self {
            planes: [left, right, bottom, top, near, far],
        }
    }

    /// Whether a point lies inside the frustum.
    #[must_use]
    pub fn contains_point(&self, point: Vector3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Whether a sphere intersects or lies inside the frustum.
    #[must_use]
    pub fn intersects_sphere(&self, center: Vector3, radius: f64) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }

    /// Whether a sphere lies entirely inside the frustum.
    #[must_use]
    pub fn contains_sphere(&self, center: Vector3, radius: f64) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= radius)
    }
}
