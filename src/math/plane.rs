//! Half-space representation used by the frustum clipper.

use super::vec3::Vec3;

/// A plane `normal · p + d = 0`.
///
/// The half-space `normal · p + d >= 0` is "inside". The normal is expected to
/// be unit length so that [`Plane::signed_distance`] is a true distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    /// Creates a plane, normalizing `normal` and scaling `d` to match.
    pub fn new(normal: Vec3, d: f32) -> Self {
        let length = normal.length();
        Self {
            normal: normal / length,
            d: d / length,
        }
    }

    /// A plane through `point` whose normal points into the inside half-space.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            d: -normal.dot(point),
        }
    }

    /// Positive = inside, negative = outside.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }

    pub fn is_inside(&self, point: Vec3) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// Parameter `t` where the segment `a + t * (b - a)` crosses the plane.
    ///
    /// Solves `normal · (a + t(b - a)) + d = 0`. Only meaningful when `a` and
    /// `b` lie on opposite sides.
    pub fn intersection_t(&self, a: Vec3, b: Vec3) -> f32 {
        (-self.d - self.normal.dot(a)) / self.normal.dot(b - a)
    }
}
