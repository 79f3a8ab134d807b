//! Placement of a mesh in the world.
//!
//! A [`Transform`] holds position, Euler rotation and scale. Setters return
//! `&mut Self` so calls can be chained, and the `with_*` constructors cover
//! the common case of building a transform in one expression:
//!
//! ```ignore
//! let t = Transform::at(Vec3::new(-1.5, 0.0, 7.0)).with_scale_uniform(0.75);
//! ```

use crate::math::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3, // Euler angles in radians, applied X, then Y, then Z
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity rotation and scale, placed at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_scale_uniform(self, s: f32) -> Self {
        self.with_scale(Vec3::new(s, s, s))
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Add a delta to the Euler angles (radians).
    pub fn rotate(&mut self, delta: Vec3) -> &mut Self {
        self.rotation = self.rotation + delta;
        self
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Generate the model-to-world matrix.
    ///
    /// Order (row vectors): Rotation * Scale * Translation, so a vertex is
    /// rotated first, then scaled, then moved into place. The matrix is built
    /// on every call; nothing is cached.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::rotation_xyz(self.rotation)
            * Mat4::scaling(self.scale)
            * Mat4::translation(self.position)
    }

    /// Largest absolute scale factor, for growing bounding spheres.
    pub fn max_scale(&self) -> f32 {
        self.scale.x.abs().max(self.scale.y.abs()).max(self.scale.z.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default() {
        let t = Transform::default();
        assert_eq!(t.position(), Vec3::ZERO);
        assert_eq!(t.rotation(), Vec3::ZERO);
        assert_eq!(t.scale(), Vec3::ONE);
        assert_eq!(t.to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_chained_setters() {
        let mut t = Transform::new();
        t.set_position(Vec3::new(1.0, 2.0, 3.0))
            .translate(Vec3::new(2.0, 0.0, 0.0))
            .rotate(Vec3::new(0.0, 0.5, 0.0));

        assert_eq!(t.position(), Vec3::new(3.0, 2.0, 3.0));
        assert_relative_eq!(t.rotation().y, 0.5);
    }

    #[test]
    fn test_builders() {
        let t = Transform::at(Vec3::FORWARD).with_scale_uniform(-3.0);
        assert_eq!(t.position(), Vec3::FORWARD);
        assert_eq!(t.scale(), Vec3::new(-3.0, -3.0, -3.0));
        assert_relative_eq!(t.max_scale(), 3.0);
    }

    #[test]
    fn test_to_matrix_rotates_then_scales_then_translates() {
        let t = Transform::at(Vec3::new(0.0, 0.0, 10.0))
            .with_rotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0))
            .with_scale(Vec3::new(2.0, 1.0, 1.0));

        // +Z rotates onto +X, is stretched to 2 on X, then moved 10 along Z.
        let p = t.to_matrix().transform_point(Vec3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 10.0, epsilon = 1e-5);
    }
}
