//! Camera-space view frustum.

use crate::camera::Camera;
use crate::math::{Plane, Vec3};
use crate::mesh::Triangle;

use super::polygon::{Attributes, ClipPolygon};
use super::triangle::{clip_mesh, clip_to_planes};

/// Convex camera-space volume defined by 5 or 6 inward-facing planes.
///
/// The near plane sits on the viewport (`z = viewport_distance`). The four
/// side planes pass through the camera and the viewport edges. A far plane is
/// optional.
#[derive(Clone, Debug, PartialEq)]
pub struct Frustum {
    planes: Vec<Plane>,
}

impl Frustum {
    pub fn new(planes: Vec<Plane>) -> Self {
        Self { planes }
    }

    pub fn from_camera(camera: &Camera, far: Option<f32>) -> Self {
        let d = camera.viewport_distance();
        let viewport = camera.viewport();
        let half_w = viewport.width / 2.0;
        let half_h = viewport.height / 2.0;

        let mut planes = vec![
            // Near
            Plane::new(Vec3::FORWARD, -d),
            // Left, right: x = ±half_w * z / d
            Plane::new(Vec3::new(d, 0.0, half_w), 0.0),
            Plane::new(Vec3::new(-d, 0.0, half_w), 0.0),
            // Bottom, top
            Plane::new(Vec3::new(0.0, d, half_h), 0.0),
            Plane::new(Vec3::new(0.0, -d, half_h), 0.0),
        ];

        if let Some(far) = far {
            planes.push(Plane::new(-Vec3::FORWARD, far));
        }

        Self { planes }
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Clip a polygon against all frustum planes.
    /// Returns the clipped polygon, which is culled if fully outside.
    pub fn clip_polygon<A: Attributes>(&self, polygon: &ClipPolygon<A>) -> ClipPolygon<A> {
        let mut result = polygon.clone();

        for plane in &self.planes {
            if result.is_culled() {
                return ClipPolygon::new(Vec::new());
            }
            result = result.clip_against_plane(plane);
        }

        result
    }

    /// Index-tracking clip of a whole triangle list; see [`clip_mesh`].
    pub fn clip_triangles(&self, triangles: &[Triangle], vertices: &mut Vec<Vec3>) -> Vec<Triangle> {
        clip_mesh(triangles, &self.planes, vertices)
    }

    /// Clips a single triangle; returns how many pieces were appended.
    pub fn clip_triangle(
        &self,
        triangle: &Triangle,
        vertices: &mut Vec<Vec3>,
        output: &mut Vec<Triangle>,
    ) -> usize {
        clip_to_planes(triangle, &self.planes, vertices, output)
    }

    /// False when a bounding sphere lies entirely outside some plane.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(center) >= -radius)
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.is_inside(point))
    }
}
