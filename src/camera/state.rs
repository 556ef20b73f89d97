use glam::Vec3;

use crate::options::Options;

/// Velocity slots carried between ticks by each critically-damped filter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothVelocities {
    /// Position x.
    pub x: f32,
    /// Position y.
    pub y: f32,
    /// Position z.
    pub z: f32,
    /// Orbit distance.
    pub distance: f32,
    /// Yaw forward correction, in degrees per second.
    pub forward_correction: f32,
}

/// Persistent orbit state, owned and mutated only by the rig.
///
/// Outside the rig this is read-only; occlusion resolvers receive it
/// mutably for the duration of a single resolve call.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    /// Compass yaw in degrees, folded into [-360, 360].
    pub yaw: f32,
    /// Pitch in degrees, kept inside the configured pitch range.
    pub pitch: f32,
    /// Distance the camera is currently placed at.
    pub current_distance: f32,
    /// Distance the smoothing stage is heading toward.
    pub desired_distance: f32,
    /// Last distance the user chose (or recovered to) before occlusion
    /// pulled the camera in.
    pub pre_adjusted_distance: f32,
    /// Time constant the distance filter currently uses.
    pub distance_smooth_time: f32,
    /// Smoothed camera position.
    pub position: Vec3,
    /// Whether `position` has been placed by a tick yet.
    pub placed: bool,
    /// Filter velocities.
    pub velocity: SmoothVelocities,
}

impl OrbitState {
    /// Initial state: behind the subject, slightly raised, at the midpoint
    /// of the zoom range.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let start = options.limits.start_distance();
        Self {
            yaw: 0.0,
            pitch: options
                .limits
                .initial_pitch
                .clamp(options.limits.pitch_min, options.limits.pitch_max),
            current_distance: start,
            desired_distance: start,
            pre_adjusted_distance: start,
            distance_smooth_time: options.smoothing.distance,
            position: Vec3::ZERO,
            placed: false,
            velocity: SmoothVelocities::default(),
        }
    }

    /// Re-center behind the subject at the start distance. The camera
    /// position keeps its current value and smooths to the new pose.
    pub fn reset(&mut self, options: &Options) {
        let position = self.position;
        let placed = self.placed;
        *self = Self::new(options);
        self.position = position;
        self.placed = placed;
    }

    /// Whether occlusion is currently holding the camera in front of the
    /// distance the user chose.
    #[must_use]
    pub fn is_pulled_in(&self) -> bool {
        self.desired_distance < self.pre_adjusted_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_midpoint() {
        let state = OrbitState::new(&Options::default());
        assert_eq!(state.current_distance, 6.5);
        assert_eq!(state.desired_distance, 6.5);
        assert_eq!(state.pre_adjusted_distance, 6.5);
        assert_eq!(state.pitch, 10.0);
        assert!(!state.placed);
        assert!(!state.is_pulled_in());
    }

    #[test]
    fn initial_pitch_respects_limits() {
        let mut options = Options::default();
        options.limits.initial_pitch = 120.0;
        assert_eq!(OrbitState::new(&options).pitch, 80.0);
    }

    #[test]
    fn reset_keeps_position() {
        let options = Options::default();
        let mut state = OrbitState::new(&options);
        state.yaw = 140.0;
        state.current_distance = 1.0;
        state.position = Vec3::new(4.0, 5.0, 6.0);
        state.placed = true;

        state.reset(&options);
        assert_eq!(state.yaw, 0.0);
        assert_eq!(state.current_distance, 6.5);
        assert_eq!(state.position, Vec3::new(4.0, 5.0, 6.0));
        assert!(state.placed);
    }
}
