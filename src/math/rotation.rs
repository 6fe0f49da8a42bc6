//! The public rotation abstraction.
//!
//! A [`Rotation`] wraps exactly one non-zero quaternion. Euler,
//! axis/angle, and matrix projections are derived on demand and never
//! cached.

use crate::error::VantageError;
use crate::math::convert::{self, EulerAngles};
use crate::math::matrix::Matrix4;
use crate::math::quaternion::Quaternion;
use crate::math::vector::Vector3;

/// Angular separation below which slerp falls back to a linear
/// component blend to avoid dividing by a vanishing sine.
const SLERP_LINEAR_THRESHOLD: f64 = 0.001;

/// Immutable rotation backed by a unit quaternion. Never wraps the
/// zero quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    quaternion: Quaternion,
}

impl Rotation {
    /// The no-op rotation.
    pub const IDENTITY: Self = Self {
        quaternion: Quaternion::IDENTITY,
    };

    /// Wrap a quaternion. The zero sentinel is rejected.
    pub fn new(quaternion: Quaternion) -> Result<Self, VantageError> {
        if quaternion.is_zero() {
            return Err(VantageError::ZeroQuaternion);
        }
        Ok(Self { quaternion })
    }

    /// Rotation from Euler angles.
    #[must_use]
    pub fn from_euler(angles: EulerAngles) -> Self {
        Self {
            quaternion: convert::euler_to_quaternion(angles),
        }
    }

    /// Rotation about `axis` by `angle` radians. A zero axis leaves
    /// no rotation (the identity); the error arm only fires in the
    /// degenerate case where the inputs collapse all the way to the
    /// zero quaternion.
    pub fn from_axis_angle(
        axis: Vector3,
        angle: f64,
    ) -> Result<Self, VantageError> {
        Self::new(convert::axis_angle_to_quaternion(axis, angle))
    }

    /// Rotation whose local y and z axes land on the given world
    /// directions. X is derived as Y×Z and Y re-derived as Z×X so
    /// non-perpendicular inputs still yield an orthonormal basis.
    /// Parallel or zero inputs fail.
    pub fn from_basis(
        y_axis: Vector3,
        z_axis: Vector3,
    ) -> Result<Self, VantageError> {
        let z = z_axis.unit();
        let x = y_axis.cross(z_axis).unit();
        if x == Vector3::ZERO || z == Vector3::ZERO {
            return Err(VantageError::DegenerateBasis);
        }
        let y = z.cross(x);
        let basis = Matrix4::from_rows([
            [x.x(), y.x(), z.x(), 0.0],
            [x.y(), y.y(), z.y(), 0.0],
            [x.z(), y.z(), z.z(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        Self::new(convert::matrix_to_quaternion(&basis))
    }

    /// Backing quaternion.
    #[inline]
    #[must_use]
    pub fn quaternion(&self) -> Quaternion {
        self.quaternion
    }

    /// Matrix projection.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4 {
        convert::quaternion_to_matrix(self.quaternion)
    }

    /// Euler angle projection.
    #[must_use]
    pub fn euler(&self) -> EulerAngles {
        convert::quaternion_to_euler(self.quaternion)
    }

    /// Rotation axis; the zero vector for the identity rotation.
    #[must_use]
    pub fn axis(&self) -> Vector3 {
        convert::quaternion_to_axis(self.quaternion)
    }

    /// Rotation angle in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        convert::quaternion_to_angle(self.quaternion)
    }

    /// Compose with another rotation: `other` is applied in this
    /// rotation's post-rotated frame, matching the matrix convention
    /// `self * other`.
    #[must_use]
    pub fn append(&self, other: Self) -> Self {
        Self {
            quaternion: self.quaternion.multiply(other.quaternion),
        }
    }

    /// Inverse rotation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            quaternion: self.quaternion.inverse(),
        }
    }

    /// Spherical interpolation toward `target`. Identical or
    /// antipodal targets return `self` unchanged (the antipodal case
    /// is ambiguous and not specially resolved). Separations whose
    /// half-angle sine falls below 0.001 use a factor-weighted linear
    /// blend of components instead of the spherical weights.
    #[must_use]
    pub fn slerp(&self, target: Self, factor: f64) -> Self {
        let a = self.quaternion;
        let b = target.quaternion;
        let cos_half = a.dot(b);
        if cos_half.abs() >= 1.0 {
            return *self;
        }

        let half_angle = cos_half.acos();
        let sin_half = (1.0 - cos_half * cos_half).sqrt();

        let blended = if sin_half < SLERP_LINEAR_THRESHOLD {
            let wa = 1.0 - factor;
            Quaternion::new(
                a.x() * wa + b.x() * factor,
                a.y() * wa + b.y() * factor,
                a.z() * wa + b.z() * factor,
                a.w() * wa + b.w() * factor,
            )
        } else {
            let wa = ((1.0 - factor) * half_angle).sin() / sin_half;
            let wb = (factor * half_angle).sin() / sin_half;
            Quaternion::new(
                a.x() * wa + b.x() * wb,
                a.y() * wa + b.y() * wb,
                a.z() * wa + b.z() * wb,
                a.w() * wa + b.w() * wb,
            )
        };

        // A blend of near-antipodal quaternions can vanish; keep the
        // current rotation rather than wrap the sentinel.
        Self::new(blended).unwrap_or(*self)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
