use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Thresholds for deciding that the subject is advancing far enough to pull
/// the camera around behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Advance", inline)]
#[serde(default)]
pub struct AdvanceOptions {
    /// Move input at or below this magnitude counts as no input.
    #[schemars(title = "Move Dead Zone", range(min = 0.0, max = 1.0), extend("step" = 0.005))]
    pub move_dead_zone: f32,
    /// Seconds of continuous move input required.
    #[schemars(title = "Hold Time", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub hold_time: f32,
    /// Horizontal speed the subject must exceed.
    #[schemars(title = "Min Speed", range(min = 0.0, max = 10.0), extend("step" = 0.01))]
    pub min_speed: f32,
}

impl Default for AdvanceOptions {
    fn default() -> Self {
        Self {
            move_dead_zone: 0.01,
            hold_time: 1.0,
            min_speed: 0.01,
        }
    }
}
