//! Orbit pose math: where the camera wants to be, and which way it faces.
//!
//! Yaw is a compass angle (clockwise seen from above) and positive pitch
//! lifts the camera above the focus, so `(pitch, yaw) = (0, 0)` places the
//! camera straight behind a subject facing +Z. Increasing yaw swings the
//! camera toward its own left.

use glam::{Mat3, Quat, Vec3};

/// Rotation taking the unrotated "behind" offset to the orbit offset.
#[inline]
#[must_use]
pub fn orbit_rotation(pitch: f32, yaw: f32) -> Quat {
    Quat::from_rotation_y(-yaw.to_radians())
        * Quat::from_rotation_x(pitch.to_radians())
}

/// Rotation about world up by a yaw offset, in the same sense as
/// [`orbit_rotation`].
#[inline]
#[must_use]
pub fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(-degrees.to_radians())
}

/// World position `distance` units behind `focus` along the orbit direction.
#[inline]
#[must_use]
pub fn desired_position(
    focus: Vec3,
    pitch: f32,
    yaw: f32,
    distance: f32,
) -> Vec3 {
    focus + orbit_rotation(pitch, yaw) * Vec3::new(0.0, 0.0, -distance)
}

/// Orthonormal camera frame looking from an eye toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    /// Unit direction toward the target.
    pub forward: Vec3,
    /// Unit screen-right direction.
    pub right: Vec3,
    /// Unit screen-up direction.
    pub up: Vec3,
}

impl ViewBasis {
    /// Frame at `eye` looking at `target` with world up as the up hint.
    ///
    /// Returns `None` when the eye sits on the target or straight above or
    /// below it, where no frame can be derived.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3) -> Option<Self> {
        let forward = (target - eye).try_normalize()?;
        let right = forward.cross(Vec3::Y).try_normalize()?;
        let up = right.cross(forward);
        Some(Self { forward, right, up })
    }

    /// World orientation whose local -Z is `forward` and local +Y is `up`.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_mat3(&Mat3::from_cols(self.right, self.up, -self.forward))
            .normalize()
    }
}
