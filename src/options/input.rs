use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Dead zones and sensitivities applied to the per-tick input sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
pub struct InputOptions {
    /// Look deltas with a magnitude at or below this are ignored.
    #[schemars(title = "Look Dead Zone", range(min = 0.0, max = 1.0), extend("step" = 0.005))]
    pub look_dead_zone: f32,
    /// Zoom deltas with a magnitude at or below this are ignored.
    #[schemars(title = "Zoom Dead Zone", range(min = 0.0, max = 1.0), extend("step" = 0.005))]
    pub zoom_dead_zone: f32,
    /// Degrees of yaw per unit of horizontal look input.
    #[schemars(title = "Lateral Sensitivity", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub lateral_sensitivity: f32,
    /// Degrees of pitch per unit of vertical look input.
    #[schemars(title = "Vertical Sensitivity", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub vertical_sensitivity: f32,
    /// World units of distance per unit of zoom input.
    #[schemars(title = "Zoom Sensitivity", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub zoom_sensitivity: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            look_dead_zone: 0.01,
            zoom_dead_zone: 0.01,
            lateral_sensitivity: 1.0,
            vertical_sensitivity: 1.0,
            zoom_sensitivity: 1.0,
        }
    }
}
