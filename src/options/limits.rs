use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Orbit distance and pitch bounds.
///
/// Angles are in degrees, distances in world units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Limits", inline)]
#[serde(default)]
pub struct LimitOptions {
    /// Closest the user may zoom in.
    #[schemars(title = "Min Distance", range(min = 0.5, max = 20.0), extend("step" = 0.1))]
    pub distance_min: f32,
    /// Farthest the user may zoom out.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 50.0), extend("step" = 0.1))]
    pub distance_max: f32,
    /// Lowest pitch (camera below the focus when negative).
    #[schemars(title = "Min Pitch", range(min = -89.0, max = 0.0), extend("step" = 1.0))]
    pub pitch_min: f32,
    /// Highest pitch (camera looking down on the focus).
    #[schemars(title = "Max Pitch", range(min = 0.0, max = 89.0), extend("step" = 1.0))]
    pub pitch_max: f32,
    /// Pitch applied at construction and on reset.
    #[schemars(skip)]
    pub initial_pitch: f32,
    /// Occlusion may pull the camera in as far as this, even below
    /// `distance_min`.
    #[schemars(skip)]
    pub jitter_floor: f32,
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            distance_min: 3.0,
            distance_max: 10.0,
            pitch_min: -20.0,
            pitch_max: 80.0,
            initial_pitch: 10.0,
            jitter_floor: 0.25,
        }
    }
}

impl LimitOptions {
    /// Midpoint of the zoom range; the rig starts here.
    #[must_use]
    pub fn start_distance(&self) -> f32 {
        (self.distance_min + self.distance_max) * 0.5
    }

    /// Clamp a user-facing distance into `[distance_min, distance_max]`.
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.distance_min, self.distance_max)
    }

    /// Clamp a distance into the occlusion range
    /// `[jitter_floor, distance_max]`.
    #[must_use]
    pub fn clamp_occluded(&self, distance: f32) -> f32 {
        distance.clamp(self.jitter_floor, self.distance_max)
    }
}
