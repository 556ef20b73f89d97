//! End-to-end rig behaviour in small hand-built scenes.

use std::cell::Cell;

use glam::{Vec2, Vec3};
use orbit_rig::geometry::{Aabb, Hit};
use orbit_rig::{
    FocusTarget, GeometryQuery, InputSample, NoGeometry, OcclusionStrategy,
    Options, OrbitRig, StaticScene,
};

const DT: f32 = 1.0 / 60.0;

fn level_options(strategy: OcclusionStrategy) -> Options {
    let mut options = Options::default();
    options.limits.initial_pitch = 0.0;
    options.occlusion.strategy = strategy;
    options
}

fn origin_focus() -> FocusTarget {
    FocusTarget::new(Vec3::ZERO, 0.0)
}

#[test]
fn zoom_in_past_minimum_targets_minimum() {
    let mut rig = OrbitRig::new(Options::default(), NoGeometry).unwrap();
    assert_eq!(rig.state().current_distance, 6.5);

    assert!(rig.tick(Some(&origin_focus()), &InputSample::zoom(4.0), DT));
    assert_eq!(rig.state().desired_distance, 3.0);
    assert_eq!(rig.state().pre_adjusted_distance, 3.0);
}

#[test]
fn clip_plane_steps_in_to_clear_wall() {
    let scene = StaticScene::new().with_box(Aabb::new(
        Vec3::new(-5.0, -5.0, -6.0),
        Vec3::new(5.0, 5.0, -5.0),
    ));
    let options = level_options(OcclusionStrategy::ClipPlane);
    let mut rig = OrbitRig::new(options, scene).unwrap();

    assert!(rig.tick(Some(&origin_focus()), &InputSample::IDLE, DT));
    let resolution = rig.last_resolution().copied().unwrap();
    assert!(resolution.occluded);
    assert_eq!(resolution.checks, 6);
    assert!((rig.state().current_distance - 4.5).abs() < 1e-4);
    assert!((rig.position().z + 4.5).abs() < 1e-4);
}

#[test]
fn clip_plane_stops_early_once_clear() {
    // Only the first step is needed: the wall face sits just past 6.1 + near.
    let scene = StaticScene::new().with_box(Aabb::new(
        Vec3::new(-5.0, -5.0, -8.0),
        Vec3::new(5.0, 5.0, -6.5),
    ));
    let options = level_options(OcclusionStrategy::ClipPlane);
    let mut rig = OrbitRig::new(options, scene).unwrap();

    let _ = rig.tick(Some(&origin_focus()), &InputSample::IDLE, DT);
    assert_eq!(rig.last_resolution().map(|r| r.checks), Some(2));
    assert!((rig.state().current_distance - 6.1).abs() < 1e-4);
}

#[test]
fn whisker_steers_away_from_left_wall() {
    let scene = StaticScene::new().with_box(Aabb::new(
        Vec3::new(1.5, -5.0, -20.0),
        Vec3::new(2.5, 5.0, 20.0),
    ));
    let options = level_options(OcclusionStrategy::Whisker);
    let mut rig = OrbitRig::new(options, scene).unwrap();

    let input = InputSample::IDLE.advancing(true);
    assert!(rig.tick(Some(&origin_focus()), &input, DT));

    let expected = -3.0 * 2.0 * (1.0 - (-5.0 * DT).exp());
    assert!((rig.state().yaw - expected).abs() < 1e-4, "{}", rig.state().yaw);

    // Keeps sliding away while the fan stays lopsided.
    let first = rig.state().yaw;
    let _ = rig.tick(Some(&origin_focus()), &input, DT);
    assert!(rig.state().yaw < first);
}

#[test]
fn missing_focus_freezes_everything() {
    let mut rig = OrbitRig::new(Options::default(), NoGeometry).unwrap();
    let focus = FocusTarget::new(Vec3::new(3.0, 1.0, -2.0), 45.0);
    for _ in 0..10 {
        let _ = rig.tick(
            Some(&focus),
            &InputSample::look(Vec2::new(2.0, 1.0)),
            DT,
        );
    }
    let state = rig.state().clone();
    let position = rig.position();

    for _ in 0..10 {
        assert!(!rig.tick(None, &InputSample::look(Vec2::ONE), DT));
    }
    assert_eq!(rig.state(), &state);
    assert_eq!(rig.position(), position);
}

/// Geometry with a single wall hit at a fixed distance that can be switched
/// on and off between ticks.
struct Switchable {
    blocked: Cell<bool>,
    at: f32,
}

impl GeometryQuery for Switchable {
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> Option<Hit> {
        let length = (to - from).length();
        (self.blocked.get() && length > self.at).then_some(Hit {
            distance: self.at,
            normal: Vec3::X,
        })
    }
}

#[test]
fn held_in_until_blocker_clears() {
    for strategy in [OcclusionStrategy::ClipPlane, OcclusionStrategy::Whisker] {
        let world = Switchable {
            blocked: Cell::new(true),
            at: 2.0,
        };
        let mut rig =
            OrbitRig::new(level_options(strategy), &world).unwrap();
        let looking = InputSample::look(Vec2::new(0.5, 0.0));

        for _ in 0..120 {
            let _ = rig.tick(Some(&origin_focus()), &looking, DT);
            // Clip plane parks in front of the blocker; the whisker look
            // clamp bottoms out at the minimum zoom distance.
            let state = rig.state();
            assert!(state.desired_distance <= 3.0, "{strategy:?}: {state:?}");
            assert_eq!(state.pre_adjusted_distance, 6.5);
        }

        world.blocked.set(false);
        let _ = rig.tick(Some(&origin_focus()), &InputSample::IDLE, DT);
        assert!(rig.last_resolution().is_some_and(|r| r.recovered));
        assert_eq!(rig.state().desired_distance, 6.5);
        for _ in 0..600 {
            let _ = rig.tick(Some(&origin_focus()), &InputSample::IDLE, DT);
        }
        assert!((rig.state().current_distance - 6.5).abs() < 1e-3);
    }
}

#[test]
fn returning_camera_reports_occluded_until_back_in_range() {
    let world = Switchable {
        blocked: Cell::new(true),
        at: 2.0,
    };
    let options = level_options(OcclusionStrategy::ClipPlane);
    let limits = options.limits.clone();
    let mut rig = OrbitRig::new(options, &world).unwrap();
    for _ in 0..60 {
        let _ = rig.tick(Some(&origin_focus()), &InputSample::IDLE, DT);
    }
    assert!(rig.state().current_distance < limits.distance_min);

    world.blocked.set(false);
    let _ = rig.tick(Some(&origin_focus()), &InputSample::IDLE, DT);
    let released = rig.last_resolution().copied().unwrap();
    assert!(released.recovered);
    assert!(released.occluded);

    for tick in 0..600 {
        let _ = rig.tick(Some(&origin_focus()), &InputSample::IDLE, DT);
        let occluded = rig.last_resolution().is_some_and(|r| r.occluded);
        let distance = rig.state().current_distance;
        assert!(
            occluded
                || (limits.distance_min..=limits.distance_max)
                    .contains(&distance),
            "tick {tick}: unoccluded distance {distance}"
        );
    }
    assert!(!rig.last_resolution().is_some_and(|r| r.occluded));
}

#[test]
fn floor_never_counts_as_a_wall() {
    let mut options = Options::default();
    options.limits.initial_pitch = -15.0;
    let scene = StaticScene::new().with_floor(-0.5);
    let mut rig = OrbitRig::new(options, scene).unwrap();

    let looking = InputSample::look(Vec2::new(0.5, 0.0));
    let _ = rig.tick(Some(&origin_focus()), &looking, DT);
    // A counted whisker hit would have clamped the look to the minimum
    // distance in one tick; only the back probe may step in.
    assert!(rig.state().desired_distance > 6.0);
}

#[test]
fn custom_resolver_is_used() {
    use orbit_rig::occlusion::{shared, OcclusionPass};
    use orbit_rig::{OcclusionResolver, Resolution};

    struct AlwaysMin;

    impl OcclusionResolver for AlwaysMin {
        fn resolve(&self, pass: &mut OcclusionPass<'_>) -> Resolution {
            pass.state.desired_distance = pass.options.limits.distance_min;
            pass.resolution()
        }

        fn name(&self) -> &'static str {
            "always_min"
        }
    }

    let resolver = shared(AlwaysMin);
    let mut rig =
        OrbitRig::with_resolver(Options::default(), NoGeometry, resolver)
            .unwrap();
    assert_eq!(rig.resolver_name(), "always_min");
    let _ = rig.tick(Some(&origin_focus()), &InputSample::IDLE, DT);
    assert_eq!(rig.last_resolution().map(|r| r.target_distance), Some(3.0));
}
