//! Analytic static geometry: half-spaces, axis-aligned boxes, spheres.

use glam::Vec3;

use super::{nearer, GeometryQuery, Hit};

/// Segments shorter than this never hit anything.
const MIN_SEGMENT_LENGTH: f32 = 1e-5;

/// Solid half-space bounded by the plane `normal · p = offset`.
///
/// Everything on the side opposite `normal` is solid, so a floor at height
/// `h` is `HalfSpace::new(Vec3::Y, h)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfSpace {
    /// Unit normal pointing out of the solid side.
    pub normal: Vec3,
    /// Plane offset along `normal`.
    pub offset: f32,
}

impl HalfSpace {
    /// Build a half-space, normalizing `normal`. A zero normal yields a
    /// plane that never blocks.
    #[must_use]
    pub fn new(normal: Vec3, offset: f32) -> Self {
        let (normal, offset) = normal.try_normalize().map_or(
            (Vec3::ZERO, 0.0),
            |n| (n, offset / normal.length()),
        );
        Self { normal, offset }
    }

    /// Signed distance from the plane (positive = open side).
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.offset
    }

    fn intersect(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
    ) -> Option<Hit> {
        if self.normal == Vec3::ZERO {
            return None;
        }
        let start = self.signed_distance(origin);
        if start < 0.0 {
            return Some(Hit {
                distance: 0.0,
                normal: self.normal,
            });
        }
        let approach = self.normal.dot(dir);
        if approach >= 0.0 {
            return None;
        }
        let t = -start / approach;
        (t <= max_distance).then_some(Hit {
            distance: t,
            normal: self.normal,
        })
    }
}

/// Axis-aligned solid box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning two corners given in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box centered on `center` with the given half extents.
    #[must_use]
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Check if this box contains a point (boundary inclusive).
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Slab test along a unit direction, reporting the entry face normal.
    fn intersect(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
    ) -> Option<Hit> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < f32::EPSILON {
                // Parallel to this slab: must already be between its faces.
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let (t0, t1) = {
                let a = (lo - o) * inv;
                let b = (hi - o) * inv;
                if a <= b { (a, b) } else { (b, a) }
            };
            if t0 > t_enter {
                t_enter = t0;
                normal = Vec3::ZERO;
                normal[axis] = -d.signum();
            }
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        if t_exit < 0.0 || t_enter > max_distance {
            return None;
        }
        if t_enter < 0.0 {
            return Some(Hit {
                distance: 0.0,
                normal: -dir,
            });
        }
        Some(Hit {
            distance: t_enter,
            normal,
        })
    }
}

/// Solid sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center in world space.
    pub center: Vec3,
    /// Radius.
    pub radius: f32,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius.
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    fn intersect(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
    ) -> Option<Hit> {
        // |origin + t*dir - center|^2 = r^2 with |dir| = 1
        let oc = origin - self.center;
        let b = oc.dot(dir);
        let c = oc.length_squared() - self.radius * self.radius;
        if c < 0.0 {
            return Some(Hit {
                distance: 0.0,
                normal: -dir,
            });
        }
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let t = -b - discriminant.sqrt();
        if t < 0.0 || t > max_distance {
            return None;
        }
        let normal = (origin + dir * t - self.center).normalize_or_zero();
        Some(Hit {
            distance: t,
            normal,
        })
    }
}

/// A fixed set of solid shapes answering line-of-sight queries.
///
/// Shapes are tested exhaustively; this is meant for small test levels and
/// demos, not for large worlds.
#[derive(Debug, Clone, Default)]
pub struct StaticScene {
    half_spaces: Vec<HalfSpace>,
    boxes: Vec<Aabb>,
    spheres: Vec<Sphere>,
}

impl StaticScene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a horizontal floor at height `y`.
    #[must_use]
    pub fn with_floor(mut self, y: f32) -> Self {
        self.half_spaces.push(HalfSpace::new(Vec3::Y, y));
        self
    }

    /// Add a half-space.
    #[must_use]
    pub fn with_half_space(mut self, half_space: HalfSpace) -> Self {
        self.half_spaces.push(half_space);
        self
    }

    /// Add a box.
    #[must_use]
    pub fn with_box(mut self, aabb: Aabb) -> Self {
        self.boxes.push(aabb);
        self
    }

    /// Add a sphere.
    #[must_use]
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Number of shapes in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.half_spaces.len() + self.boxes.len() + self.spheres.len()
    }

    /// Whether the scene has no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GeometryQuery for StaticScene {
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> Option<Hit> {
        let delta = to - from;
        let length = delta.length();
        if !(length > MIN_SEGMENT_LENGTH) {
            return None;
        }
        let dir = delta / length;

        let planes = self
            .half_spaces
            .iter()
            .map(|h| h.intersect(from, dir, length));
        let boxes = self.boxes.iter().map(|b| b.intersect(from, dir, length));
        let spheres =
            self.spheres.iter().map(|s| s.intersect(from, dir, length));

        planes.chain(boxes).chain(spheres).fold(None, nearer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_blocks_downward_segment() {
        let scene = StaticScene::new().with_floor(0.0);
        let hit = scene
            .line_of_sight(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -2.0, 0.0))
            .unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn floor_ignores_segment_that_stops_short() {
        let scene = StaticScene::new().with_floor(0.0);
        let hit = scene
            .line_of_sight(Vec3::new(0.0, 2.0, 0.0), Vec3::new(3.0, 0.5, 0.0));
        assert!(hit.is_none());
    }

    #[test]
    fn box_reports_entry_face() {
        let wall =
            Aabb::new(Vec3::new(-5.0, 0.0, -4.0), Vec3::new(5.0, 5.0, -3.0));
        let scene = StaticScene::new().with_box(wall);
        let hit = scene
            .line_of_sight(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, -10.0))
            .unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn box_missed_by_parallel_segment() {
        let wall =
            Aabb::new(Vec3::new(2.0, 0.0, -5.0), Vec3::new(3.0, 5.0, 5.0));
        let scene = StaticScene::new().with_box(wall);
        assert!(scene
            .line_of_sight(Vec3::new(0.0, 1.0, -4.0), Vec3::new(0.0, 1.0, 4.0))
            .is_none());
    }

    #[test]
    fn start_inside_box_hits_at_zero() {
        let block = Aabb::from_center(Vec3::ZERO, Vec3::ONE);
        assert!(block.contains_point(Vec3::ZERO));
        let scene = StaticScene::new().with_box(block);
        let hit = scene
            .line_of_sight(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0))
            .unwrap();
        assert_eq!(hit.distance, 0.0);
        assert_eq!(hit.normal, -Vec3::X);
    }

    #[test]
    fn sphere_hit_normal_points_outward() {
        let ball = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let scene = StaticScene::new().with_sphere(ball);
        let hit = scene
            .line_of_sight(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0))
            .unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn nearest_shape_wins() {
        let scene = StaticScene::new()
            .with_box(Aabb::new(
                Vec3::new(-1.0, -1.0, -8.0),
                Vec3::new(1.0, 1.0, -7.0),
            ))
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -4.0), 0.5));
        assert_eq!(scene.len(), 2);
        let hit = scene
            .line_of_sight(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0))
            .unwrap();
        assert!((hit.distance - 3.5).abs() < 1e-4);
    }

    #[test]
    fn degenerate_segment_never_hits() {
        let scene = StaticScene::new()
            .with_box(Aabb::from_center(Vec3::ZERO, Vec3::ONE));
        assert!(scene.line_of_sight(Vec3::ZERO, Vec3::ZERO).is_none());
    }
}
