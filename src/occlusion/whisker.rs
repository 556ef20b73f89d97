//! Whisker fan casting with wall filtering and steering.

use glam::Vec3;

use super::traits::{OcclusionPass, OcclusionResolver, Resolution};
use crate::camera::pose::yaw_rotation;
use crate::geometry::{angle_from_up, nearer, Hit};
use crate::options::OcclusionOptions;
use crate::util::{exp_blend, wrap_degrees};

/// What one fan of whiskers found.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FanReport {
    /// Nearest counted hit over the whole fan.
    pub nearest: Option<Hit>,
    /// Counted hits among the left whiskers.
    pub left: u32,
    /// Counted hits among the right whiskers.
    pub right: u32,
}

impl FanReport {
    /// Whether any whisker counted a wall.
    #[must_use]
    pub fn any(&self) -> bool {
        self.nearest.is_some()
    }
}

/// Whether a hit normal falls inside the configured wall band.
#[must_use]
pub fn is_wall(normal: Vec3, options: &OcclusionOptions) -> bool {
    (options.min_wall_angle..=options.max_wall_angle)
        .contains(&angle_from_up(normal))
}

/// Cast every whisker around `candidate` and tally the wall hits.
///
/// Each configured offset is swept to both sides of `candidate` about the
/// vertical axis through the focus; positive offsets are the left side.
/// Floors, ceilings and slopes outside the wall band are ignored.
#[must_use]
pub fn cast_fan(pass: &OcclusionPass<'_>, candidate: Vec3) -> FanReport {
    let occlusion = &pass.options.occlusion;
    let arm = candidate - pass.focus;
    let mut report = FanReport::default();

    for &offset in &occlusion.whisker_offsets {
        for (degrees, left) in [(offset, true), (-offset, false)] {
            let whisker = pass.focus + yaw_rotation(degrees) * arm;
            let Some(hit) = pass
                .cast(whisker)
                .filter(|hit| is_wall(hit.normal, occlusion))
            else {
                continue;
            };
            if left {
                report.left += 1;
            } else {
                report.right += 1;
            }
            report.nearest = nearer(report.nearest, Some(hit));
        }
    }
    report
}

/// Fan of wall-filtered whiskers around the desired position.
///
/// * While the player looks around, a counted hit pulls the desired
///   distance in to the nearest wall.
/// * Otherwise, while the subject advances, an uneven fan nudges yaw away
///   from the busier side so the camera slides around corners.
/// * When no whisker counts a wall, a probe behind the camera steps it in.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiskerResolver;

impl OcclusionResolver for WhiskerResolver {
    #[allow(clippy::cast_precision_loss)]
    fn resolve(&self, pass: &mut OcclusionPass<'_>) -> Resolution {
        pass.recover(|pass, pose| {
            nearer(cast_fan(pass, pose).nearest, pass.cast_back(pose))
        });

        let candidate = pass.candidate(pass.state.desired_distance);
        let _ = pass.count_check();
        let fan = cast_fan(pass, candidate);

        match fan.nearest {
            Some(nearest) if pass.looking => {
                let limits = &pass.options.limits;
                pass.state.desired_distance = limits.clamp_distance(
                    pass.state.desired_distance.min(nearest.distance),
                );
                pass.mark_returning();
            }
            _ => {
                if pass.advancing && fan.left != fan.right {
                    let occlusion = &pass.options.occlusion;
                    let margin = fan.right as f32 - fan.left as f32;
                    let blend = exp_blend(occlusion.steer_sharpness, pass.dt);
                    let steer = margin * occlusion.steer_degrees * blend;
                    pass.state.yaw = wrap_degrees(pass.state.yaw + steer);
                    pass.mark_returning();
                }
                if !fan.any() && pass.cast_back(candidate).is_some() {
                    pass.shrink();
                }
            }
        }

        pass.resolution()
    }

    fn name(&self) -> &'static str {
        "whisker"
    }
}
