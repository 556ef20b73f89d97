use glam::{Quat, Vec3};

use super::core::{Camera, CameraUniform};
use super::fov::modulated_fov;
use super::input::{apply_input, InputSample};
use super::pose::{desired_position, ViewBasis};
use super::state::OrbitState;
use crate::error::RigError;
use crate::focus::FocusTarget;
use crate::geometry::GeometryQuery;
use crate::occlusion::{
    self, OcclusionPass, OcclusionResolver, Resolution, SharedResolver,
};
use crate::options::Options;
use crate::util::smooth_damp;

/// Third-person orbit camera rig.
///
/// Owns the orbit state, the occlusion resolver, and the geometry it
/// queries. Call [`tick`](Self::tick) once per rendered frame, after the
/// subject has moved, then read the pose back through the accessors or
/// the [`Camera`] / [`CameraUniform`] it keeps up to date.
pub struct OrbitRig<G> {
    options: Options,
    geometry: G,
    resolver: SharedResolver,
    state: OrbitState,
    camera: Camera,
    uniform: CameraUniform,
    last_resolution: Option<Resolution>,
}

impl<G: GeometryQuery> OrbitRig<G> {
    /// Build a rig with the resolver named by `options.occlusion.strategy`.
    pub fn new(options: Options, geometry: G) -> Result<Self, RigError> {
        let resolver = occlusion::for_strategy(options.occlusion.strategy);
        Self::with_resolver(options, geometry, resolver)
    }

    /// Build a rig with a caller-supplied resolver. The configured strategy
    /// is ignored.
    pub fn with_resolver(
        options: Options,
        geometry: G,
        resolver: SharedResolver,
    ) -> Result<Self, RigError> {
        options.validate()?;
        let state = OrbitState::new(&options);
        let camera = Camera::from_options(&options.camera);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        log::debug!(
            "orbit rig ready: resolver={}, distance={:.2}",
            resolver.name(),
            state.current_distance
        );
        Ok(Self {
            options,
            geometry,
            resolver,
            state,
            camera,
            uniform,
            last_resolution: None,
        })
    }

    /// Advance the rig by `dt` seconds.
    ///
    /// Returns `false` and leaves every piece of state untouched when there
    /// is no (finite) focus to track.
    pub fn tick(
        &mut self,
        focus: Option<&FocusTarget>,
        input: &InputSample,
        dt: f32,
    ) -> bool {
        let Some(focus) = focus.filter(|f| f.position.is_finite()) else {
            return false;
        };
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let intent =
            apply_input(&mut self.state, input, focus, &self.options, dt);
        let fov = modulated_fov(
            self.state.pitch,
            &self.options.camera,
            &self.options.limits,
        );

        let resolution = {
            let mut pass = OcclusionPass::new(
                focus.position,
                &mut self.state,
                &self.options,
                &self.geometry,
            );
            pass.looking = intent.looking;
            pass.advancing = input.advancing;
            pass.fov = fov;
            pass.aspect = self.camera.aspect;
            pass.dt = dt;
            self.resolver.resolve(&mut pass)
        };

        self.smooth_distance(&resolution, dt);
        self.smooth_position(focus.position, dt);
        self.update_camera(focus.position, fov);
        self.log_transition(&resolution);
        self.last_resolution = Some(resolution);
        true
    }

    fn smooth_distance(&mut self, resolution: &Resolution, dt: f32) {
        let state = &mut self.state;
        let smoothed = smooth_damp(
            state.current_distance,
            resolution.target_distance,
            &mut state.velocity.distance,
            resolution.smooth_time,
            dt,
        );
        if smoothed.is_finite() {
            let limits = &self.options.limits;
            // Leftover velocity must not carry an unoccluded camera below
            // the zoom range.
            let floor = if resolution.occluded {
                limits.jitter_floor
            } else {
                limits.distance_min.min(state.current_distance)
            };
            state.current_distance = limits
                .clamp_occluded(smoothed)
                .max(floor.max(limits.jitter_floor));
        } else {
            state.velocity.distance = 0.0;
        }
    }

    fn smooth_position(&mut self, focus: Vec3, dt: f32) {
        let state = &mut self.state;
        let desired = desired_position(
            focus,
            state.pitch,
            state.yaw,
            state.current_distance,
        );
        if !state.placed {
            state.position = desired;
            state.placed = true;
            return;
        }

        let smoothing = &self.options.smoothing;
        let from = state.position;
        let velocity = &mut state.velocity;
        let (lateral, vertical) = (smoothing.lateral, smoothing.vertical);
        let next = Vec3::new(
            smooth_damp(from.x, desired.x, &mut velocity.x, lateral, dt),
            smooth_damp(from.y, desired.y, &mut velocity.y, vertical, dt),
            smooth_damp(from.z, desired.z, &mut velocity.z, lateral, dt),
        );
        if next.is_finite() {
            state.position = next;
        } else {
            state.position = desired;
            velocity.x = 0.0;
            velocity.y = 0.0;
            velocity.z = 0.0;
        }
    }

    fn update_camera(&mut self, focus: Vec3, fov: f32) {
        let camera = &mut self.camera;
        camera.eye = self.state.position;
        camera.target = focus;
        camera.fovy = fov;
        // Straight above or on top of the focus: keep the last orientation.
        if let Some(basis) = ViewBasis::looking_at(camera.eye, focus) {
            camera.orientation = basis.rotation();
        }
        camera.up = camera.orientation * Vec3::Y;
        self.uniform.update_view_proj(camera);
    }

    fn log_transition(&self, resolution: &Resolution) {
        let was_occluded = self.last_resolution.is_some_and(|r| r.occluded);
        if resolution.occluded && !was_occluded {
            log::debug!(
                "{}: occluded, pulling in to {:.2}",
                self.resolver.name(),
                resolution.target_distance
            );
        } else if !resolution.occluded && was_occluded {
            log::debug!(
                "{}: clear, heading to {:.2}",
                self.resolver.name(),
                resolution.target_distance
            );
        }
    }

    /// Re-center behind the subject at the start distance and pitch.
    pub fn reset(&mut self) {
        self.state.reset(&self.options);
        self.last_resolution = None;
    }

    /// Update the projection aspect ratio. Zero-sized viewports are
    /// ignored.
    #[allow(clippy::cast_precision_loss)]
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
        self.uniform.update_view_proj(&self.camera);
    }

    /// Orbit state after the last tick.
    #[must_use]
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    /// Camera after the last tick.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// GPU uniform after the last tick.
    #[must_use]
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// World position of the camera.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.camera.eye
    }

    /// Point the camera looks at.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.camera.target
    }

    /// World orientation; local -Z looks at the target.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.camera.orientation
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.camera.fovy
    }

    /// Options the rig was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Geometry the rig casts against.
    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Name of the active occlusion resolver.
    #[must_use]
    pub fn resolver_name(&self) -> &'static str {
        self.resolver.name()
    }

    /// What the resolver decided on the last tick, if any tick has run since
    /// construction or reset.
    #[must_use]
    pub fn last_resolution(&self) -> Option<&Resolution> {
        self.last_resolution.as_ref()
    }
}
