//! The tracked subject: its focus transform and the "advancing" heuristic.
//!
//! Both belong to the locomotion side of the game; the rig only reads them.
//! [`AdvanceDetector`] is provided so a locomotion controller can produce the
//! advancing signal the same way for every subject.

use glam::{Quat, Vec2, Vec3};

use crate::options::AdvanceOptions;

/// World transform the camera orbits and looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTarget {
    /// Focus point, usually a little above the subject's origin.
    pub position: Vec3,
    /// Compass heading in degrees (clockwise seen from above, 0 = +Z).
    pub heading: f32,
}

impl FocusTarget {
    /// Focus at `position` facing `heading` degrees.
    #[must_use]
    pub fn new(position: Vec3, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Focus facing along `forward`, projected onto the ground plane.
    ///
    /// Vertical or zero-length directions carry no heading, so they fall
    /// back to 0°.
    #[must_use]
    pub fn from_forward(position: Vec3, forward: Vec3) -> Self {
        let flat = Vec2::new(forward.x, forward.z);
        let heading = if flat.length_squared() > 1e-8 {
            (-flat.x).atan2(flat.y).to_degrees()
        } else {
            0.0
        };
        Self { position, heading }
    }

    /// Unit direction the subject faces.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(-self.heading.to_radians()) * Vec3::Z
    }
}

/// Decides when a moving subject should pull the camera around behind it.
///
/// The subject counts as advancing once move input has been held for longer
/// than [`AdvanceOptions::hold_time`] *and* its horizontal speed exceeds
/// [`AdvanceOptions::min_speed`].
#[derive(Debug, Clone)]
pub struct AdvanceDetector {
    options: AdvanceOptions,
    held_for: f32,
    speed: f32,
}

impl AdvanceDetector {
    /// New detector with no input history.
    #[must_use]
    pub fn new(options: AdvanceOptions) -> Self {
        Self {
            options,
            held_for: 0.0,
            speed: 0.0,
        }
    }

    /// Feed one frame of move input and subject velocity.
    pub fn update(&mut self, move_input: Vec2, velocity: Vec3, dt: f32) {
        let dead_zone = self.options.move_dead_zone;
        if move_input.length_squared() > dead_zone * dead_zone {
            self.held_for += dt.max(0.0);
        } else {
            self.held_for = 0.0;
        }
        self.speed = Vec2::new(velocity.x, velocity.z).length();
    }

    /// Seconds of continuous move input so far.
    #[must_use]
    pub fn held_for(&self) -> f32 {
        self.held_for
    }

    /// Whether both thresholds are currently exceeded.
    #[must_use]
    pub fn is_advancing(&self) -> bool {
        self.held_for > self.options.hold_time
            && self.speed > self.options.min_speed
    }

    /// Forget accumulated input time.
    pub fn reset(&mut self) {
        self.held_for = 0.0;
        self.speed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exactly representable, so eight steps sum to exactly one second.
    const DT: f32 = 0.125;

    #[test]
    fn heading_round_trips_through_forward() {
        for heading in [0.0_f32, 45.0, 90.0, -135.0, 180.0] {
            let focus = FocusTarget::new(Vec3::ZERO, heading);
            let back = FocusTarget::from_forward(Vec3::ZERO, focus.forward());
            let diff = crate::util::delta_angle(heading, back.heading);
            assert!(diff.abs() < 1e-3, "{heading} -> {}", back.heading);
        }
    }

    #[test]
    fn zero_heading_faces_positive_z() {
        let focus = FocusTarget::new(Vec3::ZERO, 0.0);
        assert!((focus.forward() - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn vertical_forward_has_no_heading() {
        let focus = FocusTarget::from_forward(Vec3::ONE, Vec3::Y);
        assert_eq!(focus.heading, 0.0);
        assert_eq!(focus.position, Vec3::ONE);
    }

    #[test]
    fn needs_both_hold_time_and_speed() {
        let mut detector = AdvanceDetector::new(AdvanceOptions::default());
        let moving = Vec3::new(0.0, 0.0, 4.0);

        for _ in 0..8 {
            detector.update(Vec2::Y, moving, DT);
        }
        // Exactly one second held is not "more than" the hold time.
        assert!(!detector.is_advancing());

        detector.update(Vec2::Y, moving, DT);
        assert!(detector.is_advancing());

        // Pushing into a wall: input held, no speed.
        detector.update(Vec2::Y, Vec3::ZERO, DT);
        assert!(!detector.is_advancing());
    }

    #[test]
    fn releasing_input_resets_hold() {
        let mut detector = AdvanceDetector::new(AdvanceOptions::default());
        for _ in 0..20 {
            detector.update(Vec2::X, Vec3::X, DT);
        }
        assert!(detector.is_advancing());
        detector.update(Vec2::ZERO, Vec3::X, DT);
        assert_eq!(detector.held_for(), 0.0);
        assert!(!detector.is_advancing());
    }

    #[test]
    fn vertical_velocity_is_not_speed() {
        let mut detector = AdvanceDetector::new(AdvanceOptions::default());
        for _ in 0..20 {
            detector.update(Vec2::Y, Vec3::new(0.0, -9.0, 0.0), DT);
        }
        assert!(!detector.is_advancing());
    }
}
