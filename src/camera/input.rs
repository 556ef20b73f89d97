use glam::Vec2;

use super::state::OrbitState;
use crate::focus::FocusTarget;
use crate::options::Options;
use crate::util::{clamp_angle, smooth_damp_angle, wrap_degrees};

/// One tick of already-debounced player and locomotion input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Look delta; +x turns right, +y looks up.
    pub look: Vec2,
    /// Zoom delta; positive zooms in.
    pub zoom: f32,
    /// Locomotion reports sustained movement that should pull the camera
    /// around behind the subject.
    pub advancing: bool,
}

impl InputSample {
    /// No input at all.
    pub const IDLE: Self = Self {
        look: Vec2::ZERO,
        zoom: 0.0,
        advancing: false,
    };

    /// Sample carrying only a look delta.
    #[must_use]
    pub fn look(look: Vec2) -> Self {
        Self {
            look,
            ..Self::IDLE
        }
    }

    /// Sample carrying only a zoom delta.
    #[must_use]
    pub fn zoom(zoom: f32) -> Self {
        Self {
            zoom,
            ..Self::IDLE
        }
    }

    /// Same sample with the advancing flag set.
    #[must_use]
    pub fn advancing(self, advancing: bool) -> Self {
        Self { advancing, ..self }
    }
}

/// What the input stage decided this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
    /// Look input was above the dead zone.
    pub looking: bool,
    /// Zoom input was above the dead zone.
    pub zooming: bool,
}

/// Fold one input sample into the orbit angles and zoom targets.
pub(crate) fn apply_input(
    state: &mut OrbitState,
    sample: &InputSample,
    focus: &FocusTarget,
    options: &Options,
    dt: f32,
) -> InputIntent {
    let input = &options.input;
    let limits = &options.limits;
    let mut intent = InputIntent::default();

    let look = if sample.look.is_finite() {
        sample.look
    } else {
        Vec2::ZERO
    };
    if look.length_squared() > input.look_dead_zone * input.look_dead_zone {
        state.yaw += look.x * input.lateral_sensitivity;
        // Upward input tilts the view up, which lowers the camera.
        state.pitch -= look.y * input.vertical_sensitivity;
        intent.looking = true;
    } else if sample.advancing {
        state.yaw = smooth_damp_angle(
            state.yaw,
            focus.heading,
            &mut state.velocity.forward_correction,
            options.smoothing.forward_correction,
            dt,
        );
    }

    state.yaw = wrap_degrees(state.yaw);
    state.pitch = clamp_angle(state.pitch, limits.pitch_min, limits.pitch_max);

    let zoom = if sample.zoom.is_finite() { sample.zoom } else { 0.0 };
    if zoom.abs() > input.zoom_dead_zone {
        let desired = limits.clamp_distance(
            state.current_distance - zoom * input.zoom_sensitivity,
        );
        state.desired_distance = desired;
        state.pre_adjusted_distance = desired;
        state.distance_smooth_time = options.smoothing.distance;
        intent.zooming = true;
    }

    intent
}
