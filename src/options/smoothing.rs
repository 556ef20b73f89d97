use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smoothing time constants, in seconds: roughly how long each quantity
/// takes to reach its target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Smoothing", inline)]
#[serde(default)]
pub struct SmoothingOptions {
    /// Horizontal (x/z) position lag.
    #[schemars(title = "Lateral", range(min = 0.05, max = 3.0), extend("step" = 0.05))]
    pub lateral: f32,
    /// Vertical (y) position lag.
    #[schemars(title = "Vertical", range(min = 0.05, max = 3.0), extend("step" = 0.05))]
    pub vertical: f32,
    /// Distance change after a manual zoom.
    #[schemars(title = "Zoom", range(min = 0.05, max = 3.0), extend("step" = 0.05))]
    pub distance: f32,
    /// Distance change while pulling in for, or returning from, occlusion.
    #[schemars(title = "Occlusion Return", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub distance_return: f32,
    /// How long the camera takes to swing behind an advancing subject.
    #[schemars(title = "Forward Correction", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub forward_correction: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            lateral: 0.5,
            vertical: 1.0,
            distance: 0.3,
            distance_return: 1.0,
            forward_correction: 2.0,
        }
    }
}
