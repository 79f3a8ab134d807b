//! Lighting types shared by both engines.

use crate::math::{Mat4, Vec3};

/// A light source. Each variant carries only the fields it needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    /// Uniform light reaching every surface regardless of orientation or occlusion.
    Ambient { intensity: f32 },
    /// Light radiating from a position.
    Point { intensity: f32, position: Vec3 },
    /// Parallel light. `direction` points from the surface *towards* the light.
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }

    /// Vector from `point` towards the light and the shadow-ray limit for it.
    ///
    /// For a point light the vector spans exactly the distance to the light,
    /// so a shadow ray stops at `t = 1`. A directional light is infinitely far
    /// away. Ambient lights have no direction and return `None`.
    pub fn towards(&self, point: Vec3) -> Option<(Vec3, f32)> {
        match *self {
            Light::Ambient { .. } => None,
            Light::Point { position, .. } => Some((position - point, 1.0)),
            Light::Directional { direction, .. } => Some((direction, f32::INFINITY)),
        }
    }

    /// Re-express the light in another space (e.g. world to camera).
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        match *self {
            Light::Ambient { .. } => *self,
            Light::Point {
                intensity,
                position,
            } => Light::Point {
                intensity,
                position: matrix.transform_point(position),
            },
            Light::Directional {
                intensity,
                direction,
            } => Light::Directional {
                intensity,
                direction: matrix.transform_direction(direction),
            },
        }
    }

    /// Unshadowed ambient + diffuse intensity at a surface point.
    ///
    /// `normal` need not be unit length. Used for flat-shaded rasterization,
    /// where no occlusion test is performed.
    pub fn diffuse_at(&self, point: Vec3, normal: Vec3) -> f32 {
        match self.towards(point) {
            None => self.intensity(),
            Some((to_light, _)) => {
                let n_dot_l = normal.dot(to_light);
                if n_dot_l > 0.0 {
                    self.intensity() * n_dot_l / (normal.length() * to_light.length())
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_illumination() {
        // Light above the surface, normal facing it
        let light = Light::Directional {
            intensity: 0.8,
            direction: Vec3::new(0.0, 1.0, 0.0),
        };
        assert_relative_eq!(light.diffuse_at(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0)), 0.8);
    }

    #[test]
    fn test_no_illumination_from_behind() {
        let light = Light::Point {
            intensity: 1.0,
            position: Vec3::new(0.0, 0.0, -5.0),
        };
        assert_eq!(light.diffuse_at(Vec3::ZERO, Vec3::FORWARD), 0.0);
    }

    #[test]
    fn test_angled_illumination() {
        let light = Light::Directional {
            intensity: 1.0,
            direction: Vec3::UP,
        };
        let normal = Vec3::new(0.0, 1.0, 1.0);
        // cos(45) ≈ 0.707
        assert_relative_eq!(light.diffuse_at(Vec3::ZERO, normal), 0.70710677, epsilon = 1e-5);
    }

    #[test]
    fn test_ambient_ignores_orientation() {
        let light = Light::Ambient { intensity: 0.2 };
        assert_eq!(light.towards(Vec3::ONE), None);
        assert_eq!(light.diffuse_at(Vec3::ZERO, -Vec3::UP), 0.2);
    }

    #[test]
    fn test_point_light_vector_spans_distance() {
        let light = Light::Point {
            intensity: 0.6,
            position: Vec3::new(2.0, 1.0, 0.0),
        };
        let (to_light, t_max) = light.towards(Vec3::new(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(to_light, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(t_max, 1.0);
    }

    #[test]
    fn test_transformed_moves_points_only() {
        let shift = Mat4::translation(Vec3::new(0.0, 0.0, -3.0));
        let point = Light::Point {
            intensity: 1.0,
            position: Vec3::ZERO,
        };
        let directional = Light::Directional {
            intensity: 1.0,
            direction: Vec3::UP,
        };
        assert_eq!(
            point.transformed(&shift),
            Light::Point {
                intensity: 1.0,
                position: Vec3::new(0.0, 0.0, -3.0)
            }
        );
        assert_eq!(directional.transformed(&shift), directional);
    }
}
