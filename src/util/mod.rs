//! Shared math utilities for the rig.
//!
//! Angle folding and clamping in degrees, and the critically-damped
//! smoothing filters used by every smoothed quantity.

pub mod angle;
pub mod damp;

pub use angle::{clamp_angle, delta_angle, inverse_lerp, wrap_degrees};
pub use damp::{exp_blend, smooth_damp, smooth_damp_angle};
