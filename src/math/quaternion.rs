//! Unit quaternions.
//!
//! Every constructed quaternion is normalized to unit magnitude, with
//! one exception: the zero quaternion (all components zero) is kept
//! as-is and serves as the sentinel for "undefined rotation". It must
//! never be handed to [`Rotation`](crate::math::rotation::Rotation).
//!
//! The `is_*` predicates compare exactly, with no epsilon. Components
//! are deliberately not rounded the way vector components are, so the
//! predicates are brittle under accumulated arithmetic; they are meant
//! for freshly constructed values.

use crate::math::vector::Vector3;

/// Immutable quaternion `(x, y, z, w)` with `w` the scalar part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Quaternion {
    /// The identity quaternion (no rotation).
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
    /// The zero quaternion sentinel.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };

    /// Create a quaternion, normalizing to unit magnitude. A
    /// zero-magnitude input is preserved untouched as the zero
    /// quaternion rather than divided by zero.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        let magnitude = (x * x + y * y + z * z + w * w).sqrt();
        if magnitude == 0.0 {
            Self::ZERO
        } else {
            Self {
                x: x / magnitude,
                y: y / magnitude,
                z: z / magnitude,
                w: w / magnitude,
            }
        }
    }

    /// Create from a vector part and scalar part.
    #[must_use]
    pub fn from_parts(vector: Vector3, w: f64) -> Self {
        Self::new(vector.x(), vector.y(), vector.z(), w)
    }

    /// X component of the vector part.
    #[inline]
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component of the vector part.
    #[inline]
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z component of the vector part.
    #[inline]
    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Scalar part.
    #[inline]
    #[must_use]
    pub fn w(&self) -> f64 {
        self.w
    }

    /// Vector part.
    #[must_use]
    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Magnitude. Unit for every non-sentinel value.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Squared magnitude.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
            + self.w * self.w
    }

    /// Hamilton product. Non-commutative: when composing rotations,
    /// `a.multiply(b)` applies `b` first and then `a`, matching the
    /// matrix convention `a * b`.
    #[must_use]
    pub fn multiply(&self, other: Self) -> Self {
        let (ax, ay, az, aw) = (self.x, self.y, self.z, self.w);
        let (bx, by, bz, bw) = (other.x, other.y, other.z, other.w);
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Conjugate; equal to the true inverse for unit quaternions.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Four-component dot product.
    #[must_use]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
            + self.w * other.w
    }

    /// Exactly the identity quaternion.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Exactly the zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Exactly unit magnitude.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.magnitude() == 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_normalizes() {
        let q = Quaternion::new(0.0, 0.0, 0.0, 2.0);
        assert!(q.is_identity());
        let q = Quaternion::new(3.0, 0.0, 4.0, 0.0);
        assert!((q.magnitude() - 1.0).abs() < 1e-15);
        assert_eq!(q.x(), 0.6);
        assert_eq!(q.z(), 0.8);
    }

    #[test]
    fn test_zero_sentinel_preserved() {
        let q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert!(q.is_zero());
        assert_eq!(q.magnitude(), 0.0);
        assert!(!q.is_unit());
    }

    #[test]
    fn test_multiply_identity() {
        // Construction renormalizes, so compare through the dot
        // product rather than bitwise.
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        assert!((q.multiply(Quaternion::IDENTITY).dot(q) - 1.0).abs() < 1e-12);
        assert!((Quaternion::IDENTITY.multiply(q).dot(q) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_multiply_inverse_is_identity() {
        let q = Quaternion::new(0.3, -0.4, 0.5, 0.7);
        let product = q.multiply(q.inverse());
        assert!((product.w() - 1.0).abs() < 1e-12);
        assert!(product.vector().magnitude() < 1e-12);
    }

    #[test]
    fn test_hamilton_product_is_non_commutative() {
        // 90 degree rotations about x and y.
        let half = std::f64::consts::FRAC_PI_4;
        let qx = Quaternion::new(half.sin(), 0.0, 0.0, half.cos());
        let qy = Quaternion::new(0.0, half.sin(), 0.0, half.cos());
        let xy = qx.multiply(qy);
        let yx = qy.multiply(qx);
        assert!((xy.dot(yx).abs() - 1.0).abs() > 1e-3);
    }

    #[test]
    fn test_from_parts() {
        let q = Quaternion::from_parts(Vector3::new(1.0, 0.0, 0.0), 0.0);
        assert_eq!(q.x(), 1.0);
        assert_eq!(q.w(), 0.0);
    }
}
