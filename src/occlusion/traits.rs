//! Core trait for occlusion resolvers and the per-tick pass they work on.

use std::sync::Arc;

use glam::Vec3;

use crate::camera::clip_plane::ClipPlanePoints;
use crate::camera::pose::{desired_position, ViewBasis};
use crate::camera::state::OrbitState;
use crate::geometry::{nearer, GeometryQuery, Hit};
use crate::options::Options;

/// Outcome of one resolve call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Distance the smoothing stage should head toward.
    pub target_distance: f32,
    /// Time constant the smoothing stage should use.
    pub smooth_time: f32,
    /// Occlusion was detected and acted upon, is still holding the camera
    /// in, or the camera has not yet returned inside the zoom range.
    pub occluded: bool,
    /// The recovery gate returned the camera to the user's chosen distance.
    pub recovered: bool,
    /// Number of pose checks performed.
    pub checks: u32,
}

/// Everything a resolver may read or adjust during one tick.
///
/// Built fresh by the rig every tick; the orbit state is only borrowed
/// mutably for the lifetime of the pass.
pub struct OcclusionPass<'a> {
    /// Focus point the camera orbits.
    pub focus: Vec3,
    /// Orbit state the resolver adjusts.
    pub state: &'a mut OrbitState,
    /// Rig configuration.
    pub options: &'a Options,
    /// World the probes are cast against.
    pub geometry: &'a dyn GeometryQuery,
    /// Look input was above the dead zone this tick.
    pub looking: bool,
    /// The subject is advancing.
    pub advancing: bool,
    /// Vertical field of view in degrees for near-plane corners.
    pub fov: f32,
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Tick duration in seconds.
    pub dt: f32,
    occluded: bool,
    recovered: bool,
    checks: u32,
}

impl<'a> OcclusionPass<'a> {
    /// Pass with no input flags, a zero tick and the configured projection.
    #[must_use]
    pub fn new(
        focus: Vec3,
        state: &'a mut OrbitState,
        options: &'a Options,
        geometry: &'a dyn GeometryQuery,
    ) -> Self {
        Self {
            focus,
            state,
            options,
            geometry,
            looking: false,
            advancing: false,
            fov: options.camera.fov_default,
            aspect: options.camera.aspect,
            dt: 0.0,
            occluded: false,
            recovered: false,
            checks: 0,
        }
    }

    /// Orbit position at `distance` for the current yaw and pitch.
    #[must_use]
    pub fn candidate(&self, distance: f32) -> Vec3 {
        desired_position(self.focus, self.state.pitch, self.state.yaw, distance)
    }

    /// Cast from the focus to `to`.
    #[must_use]
    pub fn cast(&self, to: Vec3) -> Option<Hit> {
        self.geometry.line_of_sight(self.focus, to)
    }

    /// Cast from the focus to a point one near-plane distance behind
    /// `candidate`.
    #[must_use]
    pub fn cast_back(&self, candidate: Vec3) -> Option<Hit> {
        let away = (candidate - self.focus).normalize_or_zero();
        self.cast(candidate + away * self.options.camera.znear)
    }

    /// Near-clip corners for a camera at `candidate` looking at the focus.
    ///
    /// `None` when the camera sits straight above or below the focus.
    #[must_use]
    pub fn clip_corners(&self, candidate: Vec3) -> Option<ClipPlanePoints> {
        let basis = ViewBasis::looking_at(candidate, self.focus)?;
        Some(ClipPlanePoints::new(
            candidate,
            &basis,
            self.fov,
            self.aspect,
            self.options.camera.znear,
        ))
    }

    /// Nearest hit over the clip corners and the back probe at `candidate`.
    #[must_use]
    pub fn cast_clip_plane(&self, candidate: Vec3) -> Option<Hit> {
        let corners = self
            .clip_corners(candidate)
            .into_iter()
            .flat_map(|points| points.to_array())
            .fold(None, |nearest, corner| nearer(nearest, self.cast(corner)));
        nearer(corners, self.cast_back(candidate))
    }

    /// Record one pose check and return the running count.
    pub fn count_check(&mut self) -> u32 {
        self.checks += 1;
        self.checks
    }

    /// Pose checks performed so far.
    #[must_use]
    pub fn checks(&self) -> u32 {
        self.checks
    }

    /// Switch the distance filter to the slow return constant and flag the
    /// tick as occluded.
    pub fn mark_returning(&mut self) {
        self.state.distance_smooth_time =
            self.options.smoothing.distance_return;
        self.occluded = true;
    }

    /// Step the current distance in by one occlusion step.
    pub fn shrink(&mut self) {
        let limits = &self.options.limits;
        let step = self.options.occlusion.occlusion_step;
        self.state.current_distance =
            (self.state.current_distance - step).max(limits.jitter_floor);
        self.state.desired_distance = self.state.current_distance;
        self.mark_returning();
    }

    /// Place the camera just in front of a hit `hit_distance` from the
    /// focus.
    pub fn force(&mut self, hit_distance: f32) {
        let near = self.options.camera.znear;
        self.state.current_distance =
            self.options.limits.clamp_occluded(hit_distance - near);
        self.state.desired_distance = self.state.current_distance;
        self.mark_returning();
    }

    /// Recovery gate shared by every resolver.
    ///
    /// While occlusion holds the camera in front of the user's chosen
    /// distance, `probe` is run at the pose for that distance. The camera
    /// is released back out only when the probe is clear or its nearest
    /// hit lies beyond that distance.
    pub fn recover<F>(&mut self, probe: F)
    where
        F: FnOnce(&Self, Vec3) -> Option<Hit>,
    {
        if !self.state.is_pulled_in() {
            return;
        }
        let target = self.state.pre_adjusted_distance;
        let pose = self.candidate(target);
        match probe(self, pose) {
            Some(hit) if hit.distance <= target => self.occluded = true,
            _ => {
                self.state.desired_distance = target;
                self.recovered = true;
            }
        }
    }

    /// Summarise the pass for the smoothing stage.
    ///
    /// A camera still below `distance_min` on its way back out counts as
    /// occluded.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        let returning =
            self.state.current_distance < self.options.limits.distance_min;
        Resolution {
            target_distance: self.state.desired_distance,
            smooth_time: self.state.distance_smooth_time,
            occluded: self.occluded || returning,
            recovered: self.recovered,
            checks: self.checks,
        }
    }
}

/// Decides how far the camera may sit from the focus this tick.
///
/// Implementations adjust the orbit state through the pass and report the
/// distance the smoothing stage should head toward.
/// See [`ClipPlaneResolver`](super::ClipPlaneResolver) and
/// [`WhiskerResolver`](super::WhiskerResolver).
pub trait OcclusionResolver: Send + Sync {
    /// Run one occlusion pass.
    fn resolve(&self, pass: &mut OcclusionPass<'_>) -> Resolution;

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Type alias for shared resolver references.
pub type SharedResolver = Arc<dyn OcclusionResolver>;

/// Create a shared resolver from any [`OcclusionResolver`] implementation.
#[must_use]
pub fn shared<R: OcclusionResolver + 'static>(resolver: R) -> SharedResolver {
    Arc::new(resolver)
}
