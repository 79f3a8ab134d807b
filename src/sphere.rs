//! Spheres, the only primitive the ray tracer understands.

use crate::color::Color;
use crate::math::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: Color,
    /// Phong shininess. `None` disables the specular term.
    pub specular: Option<f32>,
    /// Fraction of the final color taken from the mirror reflection, in `[0, 1]`.
    pub reflective: f32,
}

impl Sphere {
    /// A matte, non-reflective sphere.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
            specular: None,
            reflective: 0.0,
        }
    }

    /// Sets the shininess; `-1` is the conventional "no specular" marker.
    pub fn with_specular_exponent(mut self, exponent: f32) -> Self {
        self.specular = (exponent != -1.0).then_some(exponent);
        self
    }

    pub fn with_reflective(mut self, reflective: f32) -> Self {
        self.reflective = reflective.clamp(0.0, 1.0);
        self
    }

    /// Both roots of `|origin + t*direction - center|² = radius²`, nearer first.
    ///
    /// `None` when the ray misses (negative discriminant). A tangent ray
    /// returns the same root twice.
    pub fn intersect_ray(&self, origin: Vec3, direction: Vec3) -> Option<(f32, f32)> {
        let oc = origin - self.center;

        let a = direction.dot(direction);
        let b = 2.0 * oc.dot(direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        Some(((-b - root) / (2.0 * a), (-b + root) / (2.0 * a)))
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ray_through_center_hits_at_distance_minus_and_plus_radius() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 2.0, Color::WHITE);
        let (t1, t2) = sphere.intersect_ray(Vec3::ZERO, Vec3::FORWARD).unwrap();
        assert_relative_eq!(t1, 8.0);
        assert_relative_eq!(t2, 12.0);
    }

    #[test]
    fn roots_scale_with_direction_length() {
        let sphere = Sphere::new(Vec3::new(3.0, 4.0, 0.0), 1.0, Color::WHITE);
        // Unnormalized direction of length 5 towards the center, distance 5.
        let (t1, t2) = sphere
            .intersect_ray(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0))
            .unwrap();
        assert_relative_eq!(t1, 0.8, epsilon = 1e-6);
        assert_relative_eq!(t2, 1.2, epsilon = 1e-6);
    }

    #[test]
    fn miss_returns_none() {
        let sphere = Sphere::new(Vec3::new(0.0, 5.0, 10.0), 1.0, Color::WHITE);
        assert!(sphere.intersect_ray(Vec3::ZERO, Vec3::FORWARD).is_none());
    }

    #[test]
    fn minus_one_disables_specular() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Color::RED).with_specular_exponent(-1.0);
        assert_eq!(sphere.specular, None);
        let shiny = sphere.with_specular_exponent(500.0);
        assert_eq!(shiny.specular, Some(500.0));
    }

    #[test]
    fn normal_points_outward() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, Color::RED);
        assert_eq!(sphere.normal_at(Vec3::new(0.0, 0.0, 2.0)), -Vec3::FORWARD);
    }
}
