//! The camera state machine.
//!
//! A [`Camera`] is an [`Object3D`] pose plus viewing state: focus
//! depth, focus lock, field of view, and clip planes. The camera
//! looks down its local -z axis; the focus point sits `focus_depth`
//! along that axis.
//!
//! While the focus is locked, every mutator other than an explicit
//! look-at or follow preserves the focus point: translations become
//! orbital swings around it and orientation changes are re-aimed at
//! it, so only the roll/up component of a rotation survives.

use crate::error::VantageError;
use crate::math::matrix::Matrix4;
use crate::math::rotation::Rotation;
use crate::math::vector::Vector3;
use crate::scene::object::Object3D;

/// Lower bound on focus depth; assignments below it are clamped,
/// never rejected.
pub const MIN_FOCUS_DEPTH: f64 = 0.001;

/// Stateful 3D camera with focus-locked orbital control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    object: Object3D,
    focus_depth: f64,
    focus_locked: bool,
    field_of_view: f64,
    near_clip: f64,
    far_clip: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vector3::ZERO, Rotation::IDENTITY)
    }
}

impl Camera {
    /// Create a camera at the given pose with default viewing state:
    /// focus depth 1, focus unlocked, 35 degree field of view, near
    /// clip 0.01 and an unbounded far clip.
    #[must_use]
    pub fn new(position: Vector3, orientation: Rotation) -> Self {
        Self {
            object: Object3D::new(position, orientation),
            focus_depth: 1.0,
            focus_locked: false,
            field_of_view: 35.0_f64.to_radians(),
            near_clip: 0.01,
            far_clip: f64::MAX,
        }
    }

    // -- Pose and viewing-state accessors ---------------------------------

    /// World position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vector3 {
        self.object.position()
    }

    /// World orientation.
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> Rotation {
        self.object.orientation()
    }

    /// Local +x axis in world space.
    #[must_use]
    pub fn right(&self) -> Vector3 {
        Vector3::X.rotated(self.orientation())
    }

    /// Local +y axis in world space.
    #[must_use]
    pub fn up(&self) -> Vector3 {
        Vector3::Y.rotated(self.orientation())
    }

    /// Viewing direction: local -z in world space.
    #[must_use]
    pub fn forward(&self) -> Vector3 {
        (-Vector3::Z).rotated(self.orientation())
    }

    /// The point `focus_depth` along the viewing direction.
    #[must_use]
    pub fn focus_point(&self) -> Vector3 {
        self.position() + self.forward() * self.focus_depth
    }

    /// Distance from the camera to its focus point.
    #[inline]
    #[must_use]
    pub fn focus_depth(&self) -> f64 {
        self.focus_depth
    }

    /// Assign the focus depth, clamped to [`MIN_FOCUS_DEPTH`]. This
    /// redefines where the focus point sits; the camera does not
    /// move.
    pub fn set_focus_depth(&mut self, depth: f64) {
        self.focus_depth = depth.max(MIN_FOCUS_DEPTH);
    }

    /// Whether translations and rotations orbit the focus point.
    #[inline]
    #[must_use]
    pub fn is_focus_locked(&self) -> bool {
        self.focus_locked
    }

    /// Engage or release the focus lock.
    pub fn set_focus_locked(&mut self, locked: bool) {
        self.focus_locked = locked;
    }

    /// Field of view in radians.
    #[inline]
    #[must_use]
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// Assign the field of view, clamped to [0, π] radians.
    pub fn set_field_of_view(&mut self, radians: f64) {
        self.field_of_view = radians.clamp(0.0, std::f64::consts::PI);
    }

    /// Near clip plane distance.
    #[inline]
    #[must_use]
    pub fn near_clip(&self) -> f64 {
        self.near_clip
    }

    /// Far clip plane distance.
    #[inline]
    #[must_use]
    pub fn far_clip(&self) -> f64 {
        self.far_clip
    }

    /// Assign both clip planes.
    pub fn set_clip_planes(&mut self, near: f64, far: f64) {
        self.near_clip = near;
        self.far_clip = far;
    }

    // -- Mutators ---------------------------------------------------------

    /// Move the camera. Free cameras translate in the world frame, or
    /// in the local frame when `relative` is set. A focus-locked
    /// camera instead treats the local x/y displacement as an arc
    /// length and orbits the focus point by `|xy| / focus_depth`
    /// radians about an axis perpendicular to the displacement and
    /// the sightline; the local z component zooms by adjusting the
    /// focus depth with the focus point pinned.
    pub fn translate(&mut self, displacement: Vector3, relative: bool) {
        if self.focus_locked {
            self.orbit(displacement, relative);
        } else if relative {
            let world = displacement.rotated(self.orientation());
            self.object.set_position(self.position() + world);
        } else {
            self.object.set_position(self.position() + displacement);
        }
    }

    fn orbit(&mut self, displacement: Vector3, relative: bool) {
        let local = if relative {
            displacement
        } else {
            displacement.rotated(self.orientation().inverse())
        };
        let focus = self.focus_point();

        let planar = Vector3::new(local.x(), local.y(), 0.0);
        let arc = planar.magnitude();
        if arc > 0.0 {
            let world_planar = planar.rotated(self.orientation());
            let axis = world_planar.cross(focus - self.position());
            let angle = arc / self.focus_depth;
            // The planar displacement is perpendicular to the
            // sightline, so the axis only degenerates if rounding
            // collapses it; skip the swing in that case.
            if let Ok(swing) = Rotation::from_axis_angle(axis, angle) {
                let position =
                    self.position().rotated_about(swing, focus);
                let orientation = swing.append(self.orientation());
                self.object.set_position(position);
                self.object.set_orientation(orientation);
            }
        }

        if local.z() != 0.0 {
            self.focus_depth =
                (self.focus_depth + local.z()).max(MIN_FOCUS_DEPTH);
            let position = focus - self.forward() * self.focus_depth;
            self.object.set_position(position);
        }
    }

    /// Rotate the camera. `relative` composes the rotation in the
    /// local frame (after the current orientation), otherwise in the
    /// world frame (before it). A focus-locked camera re-aims at the
    /// saved focus point afterwards, so only the roll/up component of
    /// the rotation survives; a degenerate re-aim rolls back and
    /// fails.
    pub fn rotate(
        &mut self,
        rotation: Rotation,
        relative: bool,
    ) -> Result<(), VantageError> {
        let composed = if relative {
            self.orientation().append(rotation)
        } else {
            rotation.append(self.orientation())
        };
        if self.focus_locked {
            let focus = self.focus_point();
            let previous = self.orientation();
            self.object.set_orientation(composed);
            if let Err(e) = self.look_at(focus) {
                log::warn!(
                    "rotate under focus lock left no valid re-aim; \
                     rolling back"
                );
                self.object.set_orientation(previous);
                return Err(e);
            }
        } else {
            self.object.set_orientation(composed);
        }
        Ok(())
    }

    /// Rotate the camera about an arbitrary world point, optionally
    /// reorienting its facing as well. A focus-locked camera re-aims
    /// at the saved focus point afterwards.
    pub fn rotate_about(
        &mut self,
        rotation: Rotation,
        point: Vector3,
        reorient: bool,
    ) -> Result<(), VantageError> {
        let focus = self.focus_point();
        let previous_position = self.position();
        let previous_orientation = self.orientation();

        let position = self.position().rotated_about(rotation, point);
        self.object.set_position(position);
        if reorient {
            let orientation = rotation.append(self.orientation());
            self.object.set_orientation(orientation);
        }

        if self.focus_locked {
            if let Err(e) = self.look_at(focus) {
                log::warn!(
                    "rotate_about under focus lock left no valid \
                     re-aim; rolling back"
                );
                self.object.set_position(previous_position);
                self.object.set_orientation(previous_orientation);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Aim the camera at a world point, keeping the current up
    /// direction. The focus depth becomes the distance to the point.
    pub fn look_at(&mut self, point: Vector3) -> Result<(), VantageError> {
        let up = self.up();
        self.look_at_with_up(point, up)
    }

    /// Aim the camera at a world point with an explicit up direction.
    /// Fails without mutating when the sightline or basis is
    /// degenerate.
    pub fn look_at_with_up(
        &mut self,
        point: Vector3,
        up: Vector3,
    ) -> Result<(), VantageError> {
        let focus_vector = point - self.position();
        // The camera looks down local -z: feed the inverse so that
        // local +z points away from the target.
        let orientation = Rotation::from_basis(up, -focus_vector)?;
        self.object.set_orientation(orientation);
        self.focus_depth = focus_vector.magnitude().max(MIN_FOCUS_DEPTH);
        Ok(())
    }

    /// Aim at a point and close to within `distance` of it: if the
    /// point is farther than that, the camera is pulled forward along
    /// the sightline until exactly `distance` away.
    pub fn follow(
        &mut self,
        point: Vector3,
        distance: f64,
        up: Vector3,
    ) -> Result<(), VantageError> {
        self.look_at_with_up(point, up)?;
        if self.focus_depth > distance {
            let pull = self.focus_depth - distance;
            let position = self.position() + self.forward() * pull;
            self.object.set_position(position);
            self.focus_depth = distance.max(MIN_FOCUS_DEPTH);
        }
        Ok(())
    }

    /// Third-person framing: reposition so that `point` lies between
    /// the camera and `secondary` on the sightline, exactly
    /// `distance` from the camera, then aim at `point`. Fails when
    /// the two points coincide.
    pub fn follow_past(
        &mut self,
        point: Vector3,
        secondary: Vector3,
        distance: f64,
        up: Vector3,
    ) -> Result<(), VantageError> {
        let sight = point - secondary;
        if sight.magnitude() == 0.0 {
            return Err(VantageError::DegenerateDirection);
        }
        let position = point + sight.unit() * distance;
        self.object.set_position(position);
        self.look_at_with_up(point, up)
    }

    /// Place the camera. A focus-locked camera re-aims at the saved
    /// focus point from the new position; a degenerate re-aim (for
    /// instance placing the camera on the focus point) rolls back and
    /// fails.
    pub fn set_position(
        &mut self,
        position: Vector3,
    ) -> Result<(), VantageError> {
        if self.focus_locked {
            let focus = self.focus_point();
            let previous = self.position();
            self.object.set_position(position);
            if let Err(e) = self.look_at(focus) {
                log::warn!(
                    "set_position under focus lock left no valid \
                     re-aim; rolling back"
                );
                self.object.set_position(previous);
                return Err(e);
            }
        } else {
            self.object.set_position(position);
        }
        Ok(())
    }

    /// Orient the camera. Under focus lock the forward axis is
    /// re-derived from the saved focus point, so only the new up
    /// direction survives; a degenerate re-aim rolls back and fails.
    pub fn set_orientation(
        &mut self,
        orientation: Rotation,
    ) -> Result<(), VantageError> {
        if self.focus_locked {
            let focus = self.focus_point();
            let previous = self.orientation();
            self.object.set_orientation(orientation);
            if let Err(e) = self.look_at(focus) {
                log::warn!(
                    "set_orientation under focus lock left no valid \
                     re-aim; rolling back"
                );
                self.object.set_orientation(previous);
                return Err(e);
            }
        } else {
            self.object.set_orientation(orientation);
        }
        Ok(())
    }

    /// Apply preset options: field of view (degrees in the preset),
    /// clip planes, focus depth and lock. The usual clamps apply.
    pub fn apply_options(&mut self, options: &crate::options::CameraOptions) {
        self.set_field_of_view(options.field_of_view.to_radians());
        self.set_clip_planes(options.near_clip, options.far_clip);
        self.set_focus_depth(options.focus_depth);
        self.set_focus_locked(options.focus_locked);
    }

    // -- Renderer-facing projections --------------------------------------

    /// World-to-camera view transform: inverse orientation times
    /// translation by the negated position.
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4 {
        self.orientation().inverse().to_matrix()
            * Matrix4::from_translation(-self.position())
    }

    /// Right-handed perspective projection with [0, 1] depth range,
    /// from the camera's field of view and clip planes.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f64) -> Matrix4 {
        let f = 1.0 / (self.field_of_view / 2.0).tan();
        let a = self.far_clip / (self.near_clip - self.far_clip);
        let b =
            self.near_clip * self.far_clip / (self.near_clip - self.far_clip);
        Matrix4::from_rows([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, a, b],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }
}
