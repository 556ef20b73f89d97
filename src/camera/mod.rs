//! Third-person orbit camera.
//!
//! Turns look/zoom input and a moving focus into a smoothed, occlusion-aware
//! camera pose, field of view and GPU uniform.

/// Near-clip-plane corner geometry.
pub mod clip_plane;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Pitch-driven field-of-view modulation.
pub mod fov;
/// Per-tick input samples and how they steer the orbit.
pub mod input;
/// Orbit pose math.
pub mod pose;
/// The rig that ties input, occlusion and smoothing together.
pub mod rig;
/// Persistent orbit state.
pub mod state;

pub use self::core::{Camera, CameraUniform};
pub use input::{InputIntent, InputSample};
pub use rig::OrbitRig;
pub use state::{OrbitState, SmoothVelocities};
