//! Directional lighting rig.
//!
//! Two directional lights plus an ambient term, with a headlamp mode
//! that re-expresses the light directions in world space from the
//! camera's basis each frame. Pure data and math; uploading to a
//! renderer is the caller's concern.

use crate::math::vector::Vector3;

// Camera-space directions for headlamp mode: key light upper-left,
// fill light upper-right-front. Negative z keeps surfaces facing the
// camera lit.
const KEY_CAMERA_DIR: (f64, f64, f64) = (-0.3, 0.9, -0.3);
const FILL_CAMERA_DIR: (f64, f64, f64) = (0.3, 0.6, -0.4);

/// A directional light: unit direction and scalar intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vector3,
    intensity: f64,
}

impl DirectionalLight {
    /// Create a light; the direction is normalized.
    #[must_use]
    pub fn new(direction: Vector3, intensity: f64) -> Self {
        Self {
            direction: direction.unit(),
            intensity,
        }
    }

    /// Unit direction the light travels in.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Scalar intensity.
    #[inline]
    #[must_use]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }
}

/// Key/fill/ambient lighting rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    /// Primary light for directional contrast.
    pub key: DirectionalLight,
    /// Secondary fill light.
    pub fill: DirectionalLight,
    /// Ambient intensity floor.
    pub ambient: f64,
}

impl Default for LightRig {
    fn default() -> Self {
        let (kx, ky, kz) = KEY_CAMERA_DIR;
        let (fx, fy, fz) = FILL_CAMERA_DIR;
        Self {
            key: DirectionalLight::new(Vector3::new(kx, ky, kz), 0.7),
            fill: DirectionalLight::new(Vector3::new(fx, fy, fz), 0.3),
            ambient: 0.12,
        }
    }
}

impl LightRig {
    /// Re-express the headlamp light directions in world space from
    /// the camera basis. Call each frame after camera updates.
    pub fn update_headlamp(
        &mut self,
        camera_right: Vector3,
        camera_up: Vector3,
        camera_forward: Vector3,
    ) {
        let to_world = |dir: (f64, f64, f64), intensity: f64| {
            let camera_space = Vector3::new(dir.0, dir.1, dir.2).unit();
            let world = camera_right * camera_space.x()
                + camera_up * camera_space.y()
                + camera_forward * camera_space.z();
            DirectionalLight::new(world, intensity)
        };
        self.key = to_world(KEY_CAMERA_DIR, self.key.intensity());
        self.fill = to_world(FILL_CAMERA_DIR, self.fill.intensity());
    }

    /// Apply preset options, normalizing the configured directions.
    pub fn apply_options(
        &mut self,
        options: &crate::options::LightingOptions,
    ) {
        let [kx, ky, kz] = options.key_direction;
        let [fx, fy, fz] = options.fill_direction;
        self.key = DirectionalLight::new(
            Vector3::new(kx, ky, kz),
            options.key_intensity,
        );
        self.fill = DirectionalLight::new(
            Vector3::new(fx, fy, fz),
            options.fill_intensity,
        );
        self.ambient = options.ambient;
    }

    /// Lambert shading of a surface normal under this rig: ambient
    /// plus each light's contribution, facing contributions only.
    #[must_use]
    pub fn illumination(&self, normal: Vector3) -> f64 {
        let unit = normal.unit();
        let lambert = |light: &DirectionalLight| {
            unit.dot(-light.direction()).max(0.0) * light.intensity()
        };
        self.ambient + lambert(&self.key) + lambert(&self.fill)
    }
}
