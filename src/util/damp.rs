//! Critically-damped smoothing filters.
//!
//! [`smooth_damp`] is the spring-damper approximation popularised by Game
//! Programming Gems 4 (ch. 1.10): a critically-damped spring whose
//! exponential term is replaced by a cubic Padé-style approximation so that
//! it stays stable for large time steps. It carries a velocity between calls,
//! so every smoothed quantity in the rig owns a velocity slot in
//! [`OrbitState`](crate::camera::OrbitState).

use super::angle::delta_angle;

/// Time constants below this are treated as this value to keep `2 / T`
/// finite.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Advance `current` toward `target`, reaching it in roughly `smooth_time`
/// seconds without overshooting.
///
/// `velocity` is read and written; keep one slot per smoothed value. A
/// non-positive `dt` leaves everything untouched.
#[must_use]
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 || !dt.is_finite() {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Never pass the target.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    if !output.is_finite() || !velocity.is_finite() {
        *velocity = 0.0;
        return target;
    }
    output
}

/// [`smooth_damp`] for angles in degrees: takes the short way round and
/// returns an angle continuous with `current` (not wrapped).
#[must_use]
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

/// Frame-rate independent blend factor `1 - e^(-sharpness * dt)` in `[0, 1)`.
#[inline]
#[must_use]
pub fn exp_blend(sharpness: f32, dt: f32) -> f32 {
    if sharpness <= 0.0 || dt <= 0.0 {
        return 0.0;
    }
    1.0 - (-sharpness * dt).exp()
}
