//! Conversions between rotation representations.
//!
//! Stateless functions mapping among Euler angles, axis/angle,
//! quaternion, and 4x4 matrix forms. Euler angles follow the fixed
//! y, z, x application order (yaw, then roll, then pitch); composed
//! rotations only match across representations because every function
//! here agrees on that order.

use std::f64::consts::FRAC_PI_2;

use crate::math::matrix::Matrix4;
use crate::math::quaternion::Quaternion;
use crate::math::vector::Vector3;

/// Euler angle triple in radians: pitch about x, yaw about y, roll
/// about z. Applied yaw first, then roll, then pitch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    /// Rotation about the x axis.
    pub pitch: f64,
    /// Rotation about the y axis.
    pub yaw: f64,
    /// Rotation about the z axis.
    pub roll: f64,
}

impl EulerAngles {
    /// Create an angle triple.
    #[must_use]
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }
}

/// Pole detection threshold for `x*y + z*w`, just under the exact
/// pole value of 0.5 so that near-singular inputs take the degenerate
/// branch instead of feeding unstable atan2 arguments.
const POLE_THRESHOLD: f64 = 0.499_999;

/// Euler angles to quaternion via half-angle products in y, z, x
/// order.
#[must_use]
pub fn euler_to_quaternion(angles: EulerAngles) -> Quaternion {
    let (sy, cy) = (angles.yaw / 2.0).sin_cos();
    let (sz, cz) = (angles.roll / 2.0).sin_cos();
    let (sx, cx) = (angles.pitch / 2.0).sin_cos();

    Quaternion::new(
        sy * sz * cx + cy * cz * sx,
        sy * cz * cx + cy * sz * sx,
        cy * sz * cx - sy * cz * sx,
        cy * cz * cx - sy * sz * sx,
    )
}

/// Euler angles to rotation matrix, through the quaternion form.
#[must_use]
pub fn euler_to_matrix(angles: EulerAngles) -> Matrix4 {
    quaternion_to_matrix(euler_to_quaternion(angles))
}

/// Quaternion to Euler angles. At the gimbal-lock poles
/// (`x*y + z*w` at ±0.5) one rotational degree of freedom is lost and
/// the degenerate set `pitch = 0`, computed yaw, `roll = ±π/2` is
/// returned.
#[must_use]
pub fn quaternion_to_euler(q: Quaternion) -> EulerAngles {
    let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
    let test = x * y + z * w;

    if test > POLE_THRESHOLD {
        return EulerAngles::new(0.0, 2.0 * x.atan2(w), FRAC_PI_2);
    }
    if test < -POLE_THRESHOLD {
        return EulerAngles::new(0.0, -2.0 * x.atan2(w), -FRAC_PI_2);
    }

    let yaw = (2.0 * y * w - 2.0 * x * z)
        .atan2(1.0 - 2.0 * y * y - 2.0 * z * z);
    let roll = (2.0 * test).asin();
    let pitch = (2.0 * x * w - 2.0 * y * z)
        .atan2(1.0 - 2.0 * x * x - 2.0 * z * z);
    EulerAngles::new(pitch, yaw, roll)
}

/// Quaternion to row-major rotation matrix (column-vector
/// convention).
#[must_use]
pub fn quaternion_to_matrix(q: Quaternion) -> Matrix4 {
    let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
    let (x2, y2, z2) = (x + x, y + y, z + z);
    let (xx, xy, xz) = (x * x2, x * y2, x * z2);
    let (yy, yz, zz) = (y * y2, y * z2, z * z2);
    let (wx, wy, wz) = (w * x2, w * y2, w * z2);

    Matrix4::from_rows([
        [1.0 - (yy + zz), xy - wz, xz + wy, 0.0],
        [xy + wz, 1.0 - (xx + zz), yz - wx, 0.0],
        [xz - wy, yz + wx, 1.0 - (xx + yy), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation matrix to quaternion by Shepperd's method: positive-trace
/// fast path, otherwise branch on the largest diagonal element for
/// numerical stability. The matrix is assumed orthonormal.
#[must_use]
pub fn matrix_to_quaternion(m: &Matrix4) -> Quaternion {
    let m00 = m.get(0, 0);
    let m11 = m.get(1, 1);
    let m22 = m.get(2, 2);
    let trace = m00 + m11 + m22;

    if trace > 0.0 {
        let s = (trace + 1.0).sqrt() * 2.0; // 4w
        Quaternion::new(
            (m.get(2, 1) - m.get(1, 2)) / s,
            (m.get(0, 2) - m.get(2, 0)) / s,
            (m.get(1, 0) - m.get(0, 1)) / s,
            0.25 * s,
        )
    } else if m00 > m11 && m00 > m22 {
        let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0; // 4x
        Quaternion::new(
            0.25 * s,
            (m.get(0, 1) + m.get(1, 0)) / s,
            (m.get(0, 2) + m.get(2, 0)) / s,
            (m.get(2, 1) - m.get(1, 2)) / s,
        )
    } else if m11 > m22 {
        let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0; // 4y
        Quaternion::new(
            (m.get(0, 1) + m.get(1, 0)) / s,
            0.25 * s,
            (m.get(1, 2) + m.get(2, 1)) / s,
            (m.get(0, 2) - m.get(2, 0)) / s,
        )
    } else {
        let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0; // 4z
        Quaternion::new(
            (m.get(0, 2) + m.get(2, 0)) / s,
            (m.get(1, 2) + m.get(2, 1)) / s,
            0.25 * s,
            (m.get(1, 0) - m.get(0, 1)) / s,
        )
    }
}

/// Axis/angle to quaternion. The axis is normalized first; a zero
/// axis leaves the vector part empty, so normalization collapses the
/// result to the identity-equivalent quaternion (no rotation).
#[must_use]
pub fn axis_angle_to_quaternion(axis: Vector3, angle: f64) -> Quaternion {
    let unit = axis.unit();
    let (s, c) = (angle / 2.0).sin_cos();
    Quaternion::from_parts(unit * s, c)
}

/// Rotation angle encoded in a quaternion, in radians.
#[must_use]
pub fn quaternion_to_angle(q: Quaternion) -> f64 {
    2.0 * q.w().clamp(-1.0, 1.0).acos()
}

/// Rotation axis encoded in a quaternion. A zero rotation has no
/// defined axis; the zero vector is returned and callers must treat
/// it as "no rotation" rather than feed it back into rotation math.
#[must_use]
pub fn quaternion_to_axis(q: Quaternion) -> Vector3 {
    let w = q.w().clamp(-1.0, 1.0);
    let sin_half = (1.0 - w * w).sqrt();
    if sin_half == 0.0 {
        Vector3::ZERO
    } else {
        Vector3::new(
            q.x() / sin_half,
            q.y() / sin_half,
            q.z() / sin_half,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    fn assert_angle_eq(a: f64, b: f64, tolerance: f64) {
        let diff = (a - b).abs();
        assert!(diff < tolerance, "angles differ: {a} vs {b}");
    }

    #[test]
    fn test_identity_euler_roundtrip() {
        let q = euler_to_quaternion(EulerAngles::default());
        assert!(q.is_identity());
        let angles = quaternion_to_euler(q);
        assert_eq!(angles, EulerAngles::default());
    }

    #[test]
    fn test_euler_roundtrip_away_from_poles() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let angles = EulerAngles::new(
                rng.random_range(-PI..PI),
                rng.random_range(-PI..PI),
                // Keep roll clear of the ±π/2 poles.
                rng.random_range(-1.3..1.3),
            );
            let back = quaternion_to_euler(euler_to_quaternion(angles));
            // atan2 may flip pitch/yaw by 2π at the range edges; compare
            // through the quaternion to stay representation-agnostic.
            let q1 = euler_to_quaternion(angles);
            let q2 = euler_to_quaternion(back);
            assert!(
                (q1.dot(q2).abs() - 1.0).abs() < 1e-9,
                "round trip changed the rotation for {angles:?}"
            );
        }
    }

    #[test]
    fn test_gimbal_pole_degenerate_sets() {
        let north = euler_to_quaternion(EulerAngles::new(
            0.4,
            0.9,
            FRAC_PI_2,
        ));
        let angles = quaternion_to_euler(north);
        assert_eq!(angles.pitch, 0.0);
        assert_angle_eq(angles.roll, FRAC_PI_2, 1e-9);

        let south = euler_to_quaternion(EulerAngles::new(
            0.0,
            -0.3,
            -FRAC_PI_2,
        ));
        let angles = quaternion_to_euler(south);
        assert_eq!(angles.pitch, 0.0);
        assert_angle_eq(angles.roll, -FRAC_PI_2, 1e-9);
    }

    #[test]
    fn test_matrix_quaternion_roundtrip() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let q = euler_to_quaternion(EulerAngles::new(
                rng.random_range(-PI..PI),
                rng.random_range(-PI..PI),
                rng.random_range(-PI..PI),
            ));
            let back = matrix_to_quaternion(&quaternion_to_matrix(q));
            // q and -q encode the same rotation.
            assert!((q.dot(back).abs() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_negative_trace_branches() {
        // 180 degree rotations exercise each largest-diagonal branch.
        for axis in [Vector3::X, Vector3::Y, Vector3::Z] {
            let q = axis_angle_to_quaternion(axis, PI);
            let back = matrix_to_quaternion(&quaternion_to_matrix(q));
            assert!((q.dot(back).abs() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_axis_angle_roundtrip() {
        let axis = Vector3::new(1.0, 2.0, -0.5).unit();
        let angle = 1.2;
        let q = axis_angle_to_quaternion(axis, angle);
        assert_angle_eq(quaternion_to_angle(q), angle, 1e-9);
        let back = quaternion_to_axis(q);
        assert!((back - axis).magnitude() < 1e-9);
    }

    #[test]
    fn test_axis_normalized_before_use() {
        let q1 = axis_angle_to_quaternion(Vector3::new(0.0, 10.0, 0.0), 0.8);
        let q2 = axis_angle_to_quaternion(Vector3::Y, 0.8);
        assert!((q1.dot(q2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_rotation_axis_is_zero_vector() {
        assert_eq!(quaternion_to_axis(Quaternion::IDENTITY), Vector3::ZERO);
        assert_eq!(quaternion_to_angle(Quaternion::IDENTITY), 0.0);
    }

    #[test]
    fn test_zero_axis_means_no_rotation() {
        let q = axis_angle_to_quaternion(Vector3::ZERO, PI);
        assert_eq!(q.vector(), Vector3::ZERO);
        // Normalization rescales the residual scalar part to a unit.
        assert!((q.w().abs() - 1.0).abs() < 1e-12);
        assert_eq!(quaternion_to_axis(q), Vector3::ZERO);
    }

    #[test]
    fn test_matrix_rotates_like_quaternion() {
        // 90 degrees about y carries +x to -z.
        let q = axis_angle_to_quaternion(Vector3::Y, FRAC_PI_2);
        let m = quaternion_to_matrix(q);
        let moved = m.transform(Vector3::X);
        assert!((moved - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-9);
    }
}
