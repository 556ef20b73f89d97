//! Pitch-driven field-of-view modulation.

use crate::options::{CameraOptions, LimitOptions};
use crate::util::inverse_lerp;

/// Vertical field of view for the current pitch.
///
/// Widens from `fov_default` toward `fov_skyward` as pitch drops from
/// `fov_blend_pitch` down to `pitch_min`. With a degenerate blend range the
/// default applies everywhere.
#[must_use]
pub fn modulated_fov(
    pitch: f32,
    camera: &CameraOptions,
    limits: &LimitOptions,
) -> f32 {
    let t = inverse_lerp(limits.pitch_min, camera.fov_blend_pitch, pitch);
    camera.fov_skyward + (camera.fov_default - camera.fov_skyward) * t
}
