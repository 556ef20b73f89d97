//! Near-clip-plane corners in world space.
//!
//! Occlusion tests cast from the focus to each corner so that nothing can
//! slip between the focus and the visible near plane.

use glam::Vec3;

use super::pose::ViewBasis;

/// The four corners of the near clip plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlanePoints {
    /// Top-left corner.
    pub upper_left: Vec3,
    /// Top-right corner.
    pub upper_right: Vec3,
    /// Bottom-left corner.
    pub lower_left: Vec3,
    /// Bottom-right corner.
    pub lower_right: Vec3,
}

impl ClipPlanePoints {
    /// Corners for a camera at `eye` with the given frame and projection.
    ///
    /// `fovy` is the vertical field of view in degrees.
    #[must_use]
    pub fn new(
        eye: Vec3,
        basis: &ViewBasis,
        fovy: f32,
        aspect: f32,
        znear: f32,
    ) -> Self {
        let half_height = (fovy.to_radians() * 0.5).tan() * znear;
        let half_width = half_height * aspect;
        let center = eye + basis.forward * znear;
        let up = basis.up * half_height;
        let right = basis.right * half_width;

        Self {
            upper_left: center + up - right,
            upper_right: center + up + right,
            lower_left: center - up - right,
            lower_right: center - up + right,
        }
    }

    /// Corners as an array, clockwise from upper-left.
    #[must_use]
    pub fn to_array(&self) -> [Vec3; 4] {
        [
            self.upper_left,
            self.upper_right,
            self.lower_right,
            self.lower_left,
        ]
    }

    /// Iterate over the four corners.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = Vec3> {
        self.to_array().into_iter()
    }
}
