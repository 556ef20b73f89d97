//! Headless demo: walks a subject down an L-shaped corridor and logs what
//! the camera does.
//!
//! Usage: `orbit-rig [options.toml]`. Set `RUST_LOG=debug` to see occlusion
//! transitions as they happen.

use std::path::Path;
use std::process;

use glam::{Vec2, Vec3};
use orbit_rig::geometry::{Aabb, StaticScene};
use orbit_rig::{AdvanceDetector, FocusTarget, InputSample, Options, OrbitRig};

const DT: f32 = 1.0 / 60.0;
const WALK_SPEED: f32 = 3.0;
const FOCUS_HEIGHT: f32 = 1.6;

fn corridor() -> StaticScene {
    StaticScene::new()
        .with_floor(0.0)
        // Side walls of the straight leg, running along +Z.
        .with_box(Aabb::new(
            Vec3::new(2.0, 0.0, -10.0),
            Vec3::new(3.0, 4.0, 20.0),
        ))
        .with_box(Aabb::new(
            Vec3::new(-3.0, 0.0, -10.0),
            Vec3::new(-2.0, 4.0, 16.0),
        ))
        // Back wall; the corridor turns toward -X at the far end.
        .with_box(Aabb::new(
            Vec3::new(-40.0, 0.0, 20.0),
            Vec3::new(3.0, 4.0, 21.0),
        ))
        .with_box(Aabb::new(
            Vec3::new(-40.0, 0.0, 15.0),
            Vec3::new(-2.0, 4.0, 16.0),
        ))
}

fn load_options() -> Options {
    let Some(path) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => {
            log::info!("Loaded options from '{path}'");
            options
        }
        Err(e) => {
            log::error!("Failed to load options from '{path}': {e}");
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let options = load_options();
    let mut detector = AdvanceDetector::new(options.advance.clone());
    let mut rig = match OrbitRig::new(options, corridor()) {
        Ok(rig) => rig,
        Err(e) => {
            log::error!("Failed to build rig: {e}");
            process::exit(1);
        }
    };

    let mut subject = Vec3::ZERO;
    let mut heading = 0.0_f32;

    for frame in 0..900_u32 {
        // Walk up the corridor, then turn left into the side leg.
        if subject.z > 17.5 && heading < 90.0 {
            heading = (heading + 90.0 * DT).min(90.0);
        }
        let focus = FocusTarget::new(subject + Vec3::Y * FOCUS_HEIGHT, heading);
        let velocity = focus.forward() * WALK_SPEED;
        subject += velocity * DT;

        detector.update(Vec2::Y, velocity, DT);
        // Nudge the view around a little now and then.
        let look = if frame % 240 < 20 {
            Vec2::new(1.5, 0.0)
        } else {
            Vec2::ZERO
        };
        let input = InputSample::look(look).advancing(detector.is_advancing());
        let _ = rig.tick(Some(&focus), &input, DT);

        if frame % 30 == 0 {
            let state = rig.state();
            let occluded =
                rig.last_resolution().is_some_and(|r| r.occluded);
            log::info!(
                "frame {frame:>3}: yaw {:>7.2} pitch {:>6.2} distance {:>5.2} \
                 fov {:>5.2} occluded {occluded} eye {:?}",
                state.yaw,
                state.pitch,
                state.current_distance,
                rig.fov(),
                rig.position(),
            );
        }
    }
}
