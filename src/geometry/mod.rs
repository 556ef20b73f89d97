//! Line-of-sight queries against static level geometry.
//!
//! The rig only ever asks one question of the world: "walking from `from`
//! to `to`, what do I bump into first?". [`GeometryQuery`] is that seam;
//! [`StaticScene`] is a small in-crate implementation over analytic shapes.

mod scene;

use std::sync::Arc;

use glam::Vec3;
pub use scene::{Aabb, HalfSpace, Sphere, StaticScene};

/// Nearest blocking surface along a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance from the segment start to the surface.
    pub distance: f32,
    /// Unit surface normal at the hit, facing back toward the segment start.
    pub normal: Vec3,
}

/// Synchronous segment test against static geometry.
///
/// `None` means the segment is clear. A hit at distance `0.0` is a real hit
/// (the start point is already inside geometry), never "no hit".
pub trait GeometryQuery {
    /// Cast from `from` to `to` and report the nearest blocking surface.
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> Option<Hit>;
}

impl<T: GeometryQuery + ?Sized> GeometryQuery for &T {
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> Option<Hit> {
        (**self).line_of_sight(from, to)
    }
}

impl<T: GeometryQuery + ?Sized> GeometryQuery for Box<T> {
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> Option<Hit> {
        (**self).line_of_sight(from, to)
    }
}

impl<T: GeometryQuery + ?Sized> GeometryQuery for Arc<T> {
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> Option<Hit> {
        (**self).line_of_sight(from, to)
    }
}

/// Open space: nothing ever blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeometry;

impl GeometryQuery for NoGeometry {
    fn line_of_sight(&self, _from: Vec3, _to: Vec3) -> Option<Hit> {
        None
    }
}

/// Keep whichever of two hits is nearer.
#[inline]
#[must_use]
pub fn nearer(a: Option<Hit>, b: Option<Hit>) -> Option<Hit> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b.distance < a.distance { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Angle in degrees between a surface normal and world up.
///
/// A floor reads 0°, a vertical wall 90°, a ceiling 180°. Zero-length
/// normals read 0° so that they are never mistaken for walls.
#[inline]
#[must_use]
pub fn angle_from_up(normal: Vec3) -> f32 {
    let Some(n) = normal.try_normalize() else {
        return 0.0;
    };
    n.dot(Vec3::Y).clamp(-1.0, 1.0).acos().to_degrees()
}
