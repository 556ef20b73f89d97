//! Occlusion resolvers keep the focus visible when geometry gets between
//! it and the camera.
//!
//! A resolver is chosen once, at construction, from
//! [`OcclusionOptions::strategy`](crate::options::OcclusionOptions). Custom
//! resolvers can be plugged in through
//! [`OrbitRig::with_resolver`](crate::OrbitRig::with_resolver).

mod clip_plane;
mod traits;
mod whisker;

pub use clip_plane::ClipPlaneResolver;
pub use traits::{
    shared, OcclusionPass, OcclusionResolver, Resolution, SharedResolver,
};
pub use whisker::{cast_fan, is_wall, FanReport, WhiskerResolver};

use crate::options::OcclusionStrategy;

/// Resolver for a configured strategy.
#[must_use]
pub fn for_strategy(strategy: OcclusionStrategy) -> SharedResolver {
    match strategy {
        OcclusionStrategy::ClipPlane => shared(ClipPlaneResolver),
        OcclusionStrategy::Whisker => shared(WhiskerResolver),
    }
}
