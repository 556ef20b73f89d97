//! Near-clip-plane corner casting with a bounded step-in search.

use super::traits::{OcclusionPass, OcclusionResolver, Resolution};

/// Casts from the focus to the four near-plane corners and to a point just
/// behind the camera, stepping the camera in until every probe is clear.
///
/// The search runs at most `max_occlusion_checks` times per tick. If the
/// camera is still occluded on the last check it is placed directly in
/// front of the nearest hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipPlaneResolver;

impl OcclusionResolver for ClipPlaneResolver {
    fn resolve(&self, pass: &mut OcclusionPass<'_>) -> Resolution {
        pass.recover(|pass, pose| pass.cast_clip_plane(pose));

        let max_checks = pass.options.occlusion.max_occlusion_checks.max(1);
        loop {
            let candidate = pass.candidate(pass.state.current_distance);
            let checks = pass.count_check();
            let Some(hit) = pass.cast_clip_plane(candidate) else {
                break;
            };
            if checks < max_checks {
                pass.shrink();
            } else {
                pass.force(hit.distance);
                break;
            }
        }

        pass.resolution()
    }

    fn name(&self) -> &'static str {
        "clip_plane"
    }
}
