//! Centralized rig options with TOML preset support.
//!
//! Every tunable (limits, input shaping, smoothing constants, occlusion
//! search, projection, advance detection) is consolidated here. Options
//! serialize to/from TOML so a tuned rig can be stored as a preset.
//!
//! Options are static per session: the rig reads them at construction and
//! never expects them to change underneath it.

mod advance;
mod camera;
mod input;
mod limits;
mod occlusion;
mod smoothing;

use std::path::Path;

pub use advance::AdvanceOptions;
pub use camera::CameraOptions;
pub use input::InputOptions;
pub use limits::LimitOptions;
pub use occlusion::{OcclusionOptions, OcclusionStrategy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use smoothing::SmoothingOptions;

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[limits]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Distance and pitch bounds.
    pub limits: LimitOptions,
    /// Dead zones and sensitivities.
    pub input: InputOptions,
    /// Smoothing time constants.
    pub smoothing: SmoothingOptions,
    /// Occlusion resolver selection and tuning.
    pub occlusion: OcclusionOptions,
    /// Projection and field-of-view modulation.
    pub camera: CameraOptions,
    /// Advancing-subject heuristic thresholds.
    pub advance: AdvanceOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        toml::from_str(&content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject option sets that would leave the rig without a valid range
    /// to clamp into, or that carry a non-finite tunable.
    pub fn validate(&self) -> Result<(), RigError> {
        if let Some((name, value)) =
            self.scalars().into_iter().find(|(_, v)| !v.is_finite())
        {
            return Err(invalid(format!(
                "`{name}` must be finite, got {value}"
            )));
        }
        if let Some(offset) = self
            .occlusion
            .whisker_offsets
            .iter()
            .find(|offset| !offset.is_finite())
        {
            return Err(invalid(format!(
                "whisker offset must be finite, got {offset}"
            )));
        }

        let limits = &self.limits;
        if !(limits.distance_min > 0.0
            && limits.distance_min <= limits.distance_max)
        {
            return Err(invalid(format!(
                "distance range [{}, {}] is empty or non-positive",
                limits.distance_min, limits.distance_max
            )));
        }
        if !(limits.jitter_floor > 0.0
            && limits.jitter_floor <= limits.distance_min)
        {
            return Err(invalid(format!(
                "jitter floor {} must lie in (0, {}]",
                limits.jitter_floor, limits.distance_min
            )));
        }
        if !(limits.pitch_min <= limits.pitch_max
            && limits.pitch_min > -90.0
            && limits.pitch_max < 90.0)
        {
            return Err(invalid(format!(
                "pitch range [{}, {}] must be ordered and inside (-90, 90)",
                limits.pitch_min, limits.pitch_max
            )));
        }

        let smoothing = &self.smoothing;
        let times = [
            ("lateral", smoothing.lateral),
            ("vertical", smoothing.vertical),
            ("distance", smoothing.distance),
            ("distance_return", smoothing.distance_return),
            ("forward_correction", smoothing.forward_correction),
        ];
        if let Some((name, value)) =
            times.iter().find(|(_, t)| !(t.is_finite() && *t > 0.0))
        {
            return Err(invalid(format!(
                "smoothing time `{name}` must be positive, got {value}"
            )));
        }

        let occlusion = &self.occlusion;
        if !(occlusion.occlusion_step > 0.0) {
            return Err(invalid(format!(
                "occlusion step must be positive, got {}",
                occlusion.occlusion_step
            )));
        }
        if occlusion.max_occlusion_checks == 0 {
            return Err(invalid("max_occlusion_checks must be at least 1"));
        }
        if occlusion.whisker_offsets.is_empty() {
            return Err(invalid("whisker fan needs at least one offset"));
        }
        if occlusion.min_wall_angle > occlusion.max_wall_angle {
            return Err(invalid(format!(
                "wall band [{}, {}] is inverted",
                occlusion.min_wall_angle, occlusion.max_wall_angle
            )));
        }

        let input = &self.input;
        if input.look_dead_zone < 0.0 || input.zoom_dead_zone < 0.0 {
            return Err(invalid(format!(
                "dead zones must not be negative, got look {} zoom {}",
                input.look_dead_zone, input.zoom_dead_zone
            )));
        }

        let camera = &self.camera;
        let fovs = [
            ("fov_default", camera.fov_default),
            ("fov_skyward", camera.fov_skyward),
        ];
        if let Some((name, value)) =
            fovs.iter().find(|(_, fov)| !(*fov > 0.0 && *fov < 180.0))
        {
            return Err(invalid(format!(
                "`{name}` must lie in (0, 180) degrees, got {value}"
            )));
        }
        if !(camera.znear > 0.0 && camera.znear < camera.zfar) {
            return Err(invalid(format!(
                "clip planes [{}, {}] must satisfy 0 < near < far",
                camera.znear, camera.zfar
            )));
        }
        if !(camera.aspect > 0.0) {
            return Err(invalid(format!(
                "aspect ratio must be positive, got {}",
                camera.aspect
            )));
        }
        Ok(())
    }

    /// Every scalar tunable, named for error messages.
    fn scalars(&self) -> [(&'static str, f32); 30] {
        let Self {
            limits,
            input,
            smoothing,
            occlusion,
            camera,
            advance,
        } = self;
        [
            ("distance_min", limits.distance_min),
            ("distance_max", limits.distance_max),
            ("pitch_min", limits.pitch_min),
            ("pitch_max", limits.pitch_max),
            ("initial_pitch", limits.initial_pitch),
            ("jitter_floor", limits.jitter_floor),
            ("look_dead_zone", input.look_dead_zone),
            ("zoom_dead_zone", input.zoom_dead_zone),
            ("lateral_sensitivity", input.lateral_sensitivity),
            ("vertical_sensitivity", input.vertical_sensitivity),
            ("zoom_sensitivity", input.zoom_sensitivity),
            ("lateral", smoothing.lateral),
            ("vertical", smoothing.vertical),
            ("distance", smoothing.distance),
            ("distance_return", smoothing.distance_return),
            ("forward_correction", smoothing.forward_correction),
            ("occlusion_step", occlusion.occlusion_step),
            ("min_wall_angle", occlusion.min_wall_angle),
            ("max_wall_angle", occlusion.max_wall_angle),
            ("steer_degrees", occlusion.steer_degrees),
            ("steer_sharpness", occlusion.steer_sharpness),
            ("fov_default", camera.fov_default),
            ("fov_skyward", camera.fov_skyward),
            ("fov_blend_pitch", camera.fov_blend_pitch),
            ("aspect", camera.aspect),
            ("znear", camera.znear),
            ("zfar", camera.zfar),
            ("move_dead_zone", advance.move_dead_zone),
            ("hold_time", advance.hold_time),
            ("min_speed", advance.min_speed),
        ]
    }
}

fn invalid(msg: impl Into<String>) -> RigError {
    RigError::InvalidOptions(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[limits]
distance_max = 14.0

[occlusion]
strategy = "clip_plane"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.limits.distance_max, 14.0);
        assert_eq!(opts.occlusion.strategy, OcclusionStrategy::ClipPlane);
        // Everything else should be default
        assert_eq!(opts.limits.distance_min, 3.0);
        assert_eq!(opts.occlusion.whisker_offsets, vec![16.0, 32.0, 48.0]);
        assert_eq!(opts.smoothing.distance_return, 1.0);
    }

    #[test]
    fn defaults_validate() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn start_distance_is_midpoint() {
        assert_eq!(LimitOptions::default().start_distance(), 6.5);
    }

    #[test]
    fn inverted_distance_range_is_rejected() {
        let mut opts = Options::default();
        opts.limits.distance_min = 12.0;
        let err = opts.validate().unwrap_err();
        assert!(matches!(err, RigError::InvalidOptions(_)));
    }

    #[test]
    fn jitter_floor_above_min_is_rejected() {
        let mut opts = Options::default();
        opts.limits.jitter_floor = 4.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn empty_whisker_fan_is_rejected() {
        let mut opts = Options::default();
        opts.occlusion.whisker_offsets.clear();
        assert!(opts.validate().is_err());
    }

    #[test]
    fn negative_smoothing_is_rejected() {
        let mut opts = Options::default();
        opts.smoothing.vertical = -1.0;
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("vertical"));
    }

    #[test]
    fn non_finite_blend_pitch_is_rejected() {
        let mut opts = Options::default();
        opts.camera.fov_blend_pitch = f32::NAN;
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("fov_blend_pitch"));
    }

    #[test]
    fn infinite_scalars_are_rejected() {
        let cases: [fn(&mut Options); 6] = [
            |o| o.limits.distance_max = f32::INFINITY,
            |o| o.input.lateral_sensitivity = f32::NAN,
            |o| o.input.zoom_dead_zone = f32::INFINITY,
            |o| o.occlusion.steer_degrees = f32::NEG_INFINITY,
            |o| o.occlusion.steer_sharpness = f32::NAN,
            |o| o.advance.min_speed = f32::NAN,
        ];
        for (i, case) in cases.iter().enumerate() {
            let mut opts = Options::default();
            case(&mut opts);
            assert!(opts.validate().is_err(), "case {i}");
        }
    }

    #[test]
    fn non_finite_whisker_offset_is_rejected() {
        let mut opts = Options::default();
        opts.occlusion.whisker_offsets.push(f32::NAN);
        assert!(opts.validate().is_err());
    }

    #[test]
    fn fov_outside_open_range_is_rejected() {
        for fov in [0.0, -10.0, 180.0, 200.0] {
            let mut opts = Options::default();
            opts.camera.fov_default = fov;
            assert!(opts.validate().is_err(), "fov_default {fov}");
            let mut opts = Options::default();
            opts.camera.fov_skyward = fov;
            assert!(opts.validate().is_err(), "fov_skyward {fov}");
        }
    }

    #[test]
    fn nan_from_toml_is_rejected() {
        let opts: Options =
            toml::from_str("[camera]\nfov_blend_pitch = nan\n").unwrap();
        assert!(opts.camera.fov_blend_pitch.is_nan());
        assert!(opts.validate().is_err());
    }

    #[test]
    fn negative_dead_zone_is_rejected() {
        let mut opts = Options::default();
        opts.input.look_dead_zone = -0.1;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir().join("orbit_rig_options_parse");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[limits\ndistance_min = ").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, RigError::OptionsParse(_)));
    }

    #[test]
    fn save_then_list_presets() {
        let dir = std::env::temp_dir().join("orbit_rig_presets_list");
        let _ = std::fs::remove_dir_all(&dir);
        let mut opts = Options::default();
        opts.camera.fov_default = 55.0;
        opts.save(&dir.join("tight.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["default", "tight"]);
        let loaded = Options::load(&dir.join("tight.toml")).unwrap();
        assert_eq!(loaded, opts);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("limits"));
        assert!(props.contains_key("smoothing"));
        assert!(props.contains_key("occlusion"));
        assert!(props.contains_key("camera"));

        // Skipped fields should be absent
        let limits = &props["limits"]["properties"];
        assert!(limits.get("distance_min").is_some());
        assert!(limits.get("jitter_floor").is_none());
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fov_skyward").is_some());
        assert!(camera.get("znear").is_none());
    }
}
