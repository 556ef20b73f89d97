//! Angle helpers working in degrees.
//!
//! Orbit angles are kept in degrees throughout the rig because every tunable
//! (pitch limits, whisker offsets, wall band) is authored in degrees.

/// Fold `angle` back into `[-360, 360]` without changing the orientation it
/// describes.
#[inline]
#[must_use]
pub fn wrap_degrees(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    if (-360.0..=360.0).contains(&angle) {
        return angle;
    }
    // `%` keeps the sign of the dividend, so the result already lies in
    // (-360, 360).
    angle % 360.0
}

/// Wrap `angle` into `[-360, 360]`, then clamp it into `[min, max]`.
#[inline]
#[must_use]
pub fn clamp_angle(angle: f32, min: f32, max: f32) -> f32 {
    wrap_degrees(angle).clamp(min, max)
}

/// Shortest signed difference from `current` to `target`, in `(-180, 180]`.
#[inline]
#[must_use]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Inverse linear interpolation, clamped to `[0, 1]`. A degenerate range
/// yields `1.0`.
#[inline]
#[must_use]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    let span = b - a;
    if span.abs() <= f32::EPSILON {
        return 1.0;
    }
    ((value - a) / span).clamp(0.0, 1.0)
}
