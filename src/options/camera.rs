use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and field-of-view modulation parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees at normal pitch.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fov_default: f32,
    /// Vertical field of view in degrees when pitched all the way to the
    /// minimum.
    #[schemars(title = "Skyward Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fov_skyward: f32,
    /// Pitch at and above which `fov_default` applies.
    #[schemars(title = "Skyward Blend Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub fov_blend_pitch: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov_default: 60.0,
            fov_skyward: 70.0,
            fov_blend_pitch: 10.0,
            aspect: 16.0 / 9.0,
            znear: 0.3,
            zfar: 1000.0,
        }
    }
}
