use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which occlusion resolver the rig is built with.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OcclusionStrategy {
    /// Cast to the four near-clip-plane corners plus a probe behind the
    /// camera, stepping in until clear.
    ClipPlane,
    /// Fan of six wall-filtered probes around the desired position, with
    /// steering around corners.
    #[default]
    Whisker,
}

/// Occlusion search and whisker fan parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Occlusion", inline)]
#[serde(default)]
pub struct OcclusionOptions {
    /// Resolver selected at construction.
    pub strategy: OcclusionStrategy,
    /// Distance removed per occluded check.
    #[schemars(title = "Step", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub occlusion_step: f32,
    /// Clip-plane checks per tick before forcing placement.
    #[schemars(title = "Max Checks", range(min = 1, max = 50))]
    pub max_occlusion_checks: u32,
    /// Whisker yaw offsets in degrees; each is cast to both sides.
    #[schemars(skip)]
    pub whisker_offsets: Vec<f32>,
    /// Smallest normal-to-up angle (degrees) that counts as a wall.
    #[schemars(title = "Min Wall Angle", range(min = 0.0, max = 180.0), extend("step" = 1.0))]
    pub min_wall_angle: f32,
    /// Largest normal-to-up angle (degrees) that counts as a wall.
    #[schemars(title = "Max Wall Angle", range(min = 0.0, max = 180.0), extend("step" = 1.0))]
    pub max_wall_angle: f32,
    /// Yaw nudge in degrees per unit of whisker hit margin, at full blend.
    #[schemars(title = "Steer Amount", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub steer_degrees: f32,
    /// Responsiveness of the steering blend (`1 - e^(-k·dt)`).
    #[schemars(title = "Steer Sharpness", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub steer_sharpness: f32,
}

impl Default for OcclusionOptions {
    fn default() -> Self {
        Self {
            strategy: OcclusionStrategy::default(),
            occlusion_step: 0.4,
            max_occlusion_checks: 10,
            whisker_offsets: vec![16.0, 32.0, 48.0],
            min_wall_angle: 80.0,
            max_wall_angle: 100.0,
            steer_degrees: 2.0,
            steer_sharpness: 5.0,
        }
    }
}
