//! Position/orientation holder shared by cameras and scene nodes.

use crate::math::matrix::Matrix4;
use crate::math::rotation::Rotation;
use crate::math::vector::Vector3;

/// A placeable object: one position and one orientation, each
/// independently settable. No invariants couple the two fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Object3D {
    position: Vector3,
    orientation: Rotation,
}

impl Object3D {
    /// Create an object at the given pose.
    #[must_use]
    pub fn new(position: Vector3, orientation: Rotation) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// World position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// World orientation.
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> Rotation {
        self.orientation
    }

    /// Replace the position.
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Replace the orientation.
    pub fn set_orientation(&mut self, orientation: Rotation) {
        self.orientation = orientation;
    }

    /// Local-to-world transform: translation times rotation.
    #[must_use]
    pub fn to_world_matrix(&self) -> Matrix4 {
        Matrix4::from_translation(self.position)
            * self.orientation.to_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_default_is_origin_identity() {
        let object = Object3D::default();
        assert_eq!(object.position(), Vector3::ZERO);
        assert_eq!(object.orientation(), Rotation::IDENTITY);
    }

    #[test]
    fn test_fields_set_independently() {
        let mut object = Object3D::default();
        object.set_position(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(object.orientation(), Rotation::IDENTITY);
        let turn =
            Rotation::from_axis_angle(Vector3::Y, FRAC_PI_2).unwrap();
        object.set_orientation(turn);
        assert_eq!(object.position(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_world_matrix_rotates_then_translates() {
        let turn =
            Rotation::from_axis_angle(Vector3::Y, FRAC_PI_2).unwrap();
        let object =
            Object3D::new(Vector3::new(10.0, 0.0, 0.0), turn);
        let m = object.to_world_matrix();
        // Local +x maps through the rotation (to -z), then the
        // translation moves it with the object.
        let p = m.transform_point(Vector3::X);
        assert!(
            (p - Vector3::new(10.0, 0.0, -1.0)).magnitude() < 1e-9
        );
    }
}
