//! Sutherland-Hodgman clipping of convex polygons carrying vertex attributes.

use crate::color::Color;
use crate::math::{Plane, Vec3};

/// Per-vertex payload that can be blended where an edge crosses a plane.
pub trait Attributes: Copy {
    /// Value at `t` along the way from `self` to `other`.
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Attributes for () {
    fn lerp(&self, _other: &Self, _t: f32) -> Self {}
}

impl Attributes for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Attributes for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::lerp(*self, *other, t)
    }
}

impl Attributes for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        *self * (1.0 - t) + *other * t
    }
}

/// A vertex with all attributes needed for clipping interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipVertex<A = ()> {
    pub position: Vec3,
    pub attributes: A,
}

impl<A: Attributes> ClipVertex<A> {
    pub fn new(position: Vec3, attributes: A) -> Self {
        Self {
            position,
            attributes,
        }
    }

    /// Linearly interpolate position and attributes together.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            attributes: self.attributes.lerp(&other.attributes, t),
        }
    }
}

impl From<Vec3> for ClipVertex<()> {
    fn from(position: Vec3) -> Self {
        Self {
            position,
            attributes: (),
        }
    }
}

/// A convex polygon as an ordered vertex loop.
///
/// Every clip builds a fresh polygon; the input is never modified.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipPolygon<A = ()> {
    pub vertices: Vec<ClipVertex<A>>,
}

impl<A: Attributes> ClipPolygon<A> {
    pub fn new(vertices: Vec<ClipVertex<A>>) -> Self {
        Self { vertices }
    }

    pub fn from_triangle(v0: ClipVertex<A>, v1: ClipVertex<A>, v2: ClipVertex<A>) -> Self {
        Self {
            vertices: vec![v0, v1, v2],
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when clipping left fewer than three vertices; nothing to draw.
    pub fn is_culled(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Keeps the part of the polygon on the inside of `plane`.
    ///
    /// Walks each edge `a -> b` and classifies `b`. Entering the inside emits
    /// the crossing point and then `b`; staying inside emits `b`; leaving emits
    /// only the crossing point. A convex input with `n` vertices yields 0, `n`
    /// or `n + 1` vertices.
    pub fn clip_against_plane(&self, plane: &Plane) -> Self {
        let count = self.vertices.len();
        let mut output = Vec::with_capacity(count + 1);

        for i in 0..count {
            let a = &self.vertices[(i + count - 1) % count];
            let b = &self.vertices[i];

            let a_inside = plane.is_inside(a.position);
            let b_inside = plane.is_inside(b.position);

            if b_inside {
                if !a_inside {
                    let t = plane.intersection_t(a.position, b.position);
                    output.push(a.lerp(b, t));
                }
                output.push(*b);
            } else if a_inside {
                let t = plane.intersection_t(a.position, b.position);
                output.push(a.lerp(b, t));
            }
        }

        Self { vertices: output }
    }

    /// Fans a convex polygon into triangles around its first vertex.
    pub fn triangulate(&self) -> impl Iterator<Item = [&ClipVertex<A>; 3]> + '_ {
        (1..self.vertices.len().saturating_sub(1))
            .map(move |i| [&self.vertices[0], &self.vertices[i], &self.vertices[i + 1]])
    }
}
