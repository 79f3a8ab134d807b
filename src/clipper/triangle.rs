//! Index-tracking triangle clipping.
//!
//! Instead of carrying full vertex payloads around like
//! [`ClipPolygon`](super::ClipPolygon), this variant works on a [`Triangle`]'s
//! indices into a shared vertex pool. Crossing points are appended to the
//! pool and get fresh indices; vertices already in the pool never move, so
//! every triangle that still references them stays valid.

use crate::math::{Plane, Vec3};
use crate::mesh::Triangle;

/// Clips one triangle against one plane, pushing the survivors to `output`.
///
/// - all three vertices inside: the triangle is pushed unchanged;
/// - none inside: nothing is pushed;
/// - one inside: one smaller triangle;
/// - two inside: the remaining quad, split into two triangles.
///
/// Output triangles keep the input winding and color.
pub fn clip_triangle(
    triangle: &Triangle,
    plane: &Plane,
    vertices: &mut Vec<Vec3>,
    output: &mut Vec<Triangle>,
) {
    let [a, b, c] = triangle.indices;
    let inside = [a, b, c].map(|i| plane.is_inside(vertices[i]));

    match inside.iter().filter(|&&is_in| is_in).count() {
        3 => output.push(*triangle),
        0 => {}
        1 => {
            // Rotate so the lone inside vertex comes first; winding is preserved.
            let k = inside.iter().position(|&is_in| is_in).unwrap_or(0);
            let [p, q, r] = rotated(triangle.indices, k);
            let pq = push_intersection(plane, vertices, p, q);
            let pr = push_intersection(plane, vertices, p, r);
            output.push(Triangle::new(p, pq, pr, triangle.color));
        }
        _ => {
            // Rotate so the lone outside vertex comes first.
            let k = inside.iter().position(|&is_in| !is_in).unwrap_or(0);
            let [out, in0, in1] = rotated(triangle.indices, k);
            let a0 = push_intersection(plane, vertices, in0, out);
            let a1 = push_intersection(plane, vertices, in1, out);
            output.push(Triangle::new(in0, in1, a0, triangle.color));
            output.push(Triangle::new(a0, in1, a1, triangle.color));
        }
    }
}

/// Clips one triangle against a sequence of planes.
///
/// Each plane's output is the next plane's input. Surviving pieces are
/// appended to `output`; the return value is how many there were, so zero
/// means the triangle lies entirely outside.
pub fn clip_to_planes(
    triangle: &Triangle,
    planes: &[Plane],
    vertices: &mut Vec<Vec3>,
    output: &mut Vec<Triangle>,
) -> usize {
    let start = output.len();
    output.push(*triangle);

    let mut pieces = Vec::new();
    for plane in planes {
        if output.len() == start {
            break;
        }
        pieces.extend(output.drain(start..));
        for piece in &pieces {
            clip_triangle(piece, plane, vertices, output);
        }
        pieces.clear();
    }

    output.len() - start
}

/// Clips every triangle of a mesh against every plane.
///
/// `vertices` grows with the crossing points created along the way.
pub fn clip_mesh(triangles: &[Triangle], planes: &[Plane], vertices: &mut Vec<Vec3>) -> Vec<Triangle> {
    let mut output = Vec::with_capacity(triangles.len());
    for triangle in triangles {
        clip_to_planes(triangle, planes, vertices, &mut output);
    }
    output
}

fn rotated(indices: [usize; 3], k: usize) -> [usize; 3] {
    [indices[k % 3], indices[(k + 1) % 3], indices[(k + 2) % 3]]
}

/// Appends the point where edge `from -> to` crosses `plane`; returns its index.
fn push_intersection(plane: &Plane, vertices: &mut Vec<Vec3>, from: usize, to: usize) -> usize {
    let (a, b) = (vertices[from], vertices[to]);
    let t = plane.intersection_t(a, b);
    vertices.push(a.lerp(b, t));
    vertices.len() - 1
}
