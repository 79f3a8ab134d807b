//! 4x4 transformation matrix using the row-vector convention.
//!
//! # Convention
//! - Vectors are **row vectors** on the left: `v * M`
//! - Translation is stored in the **last row**
//! - Transforms chain **left-to-right**: `v * A * B` applies A first, then B
//!
//! # Example
//! ```ignore
//! let world = rotation * scale * translation; // rotate, then scale, then move
//! let p = world.transform_point(vertex);
//! ```

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix. Translation lives in the last row.
    pub fn translation(offset: Vec3) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [offset.x, offset.y, offset.z, 1.0],
        ])
    }

    pub fn scaling(factor: Vec3) -> Self {
        Mat4::new([
            [factor.x, 0.0, 0.0, 0.0],
            [0.0, factor.y, 0.0, 0.0],
            [0.0, 0.0, factor.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the X axis. Positive angles turn +Y towards +Z.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the Y axis. Positive angles turn +Z towards +X.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the Z axis. Positive angles turn +X towards +Y.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Euler rotation applied X first, then Y, then Z.
    pub fn rotation_xyz(angles: Vec3) -> Self {
        Mat4::rotation_x(angles.x) * Mat4::rotation_y(angles.y) * Mat4::rotation_z(angles.z)
    }

    pub fn transpose(&self) -> Self {
        let mut data = [[0.0f32; 4]; 4];
        for (row, values) in data.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[col][row];
            }
        }
        Mat4::new(data)
    }

    /// Transforms a point (w = 1), so translation applies.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        (Vec4::point(point) * *self).to_vec3()
    }

    /// Transforms a direction (w = 0), so translation is ignored.
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        (Vec4::direction(direction) * *self).to_vec3()
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// With row vectors, `v * (A * B)` applies A first, then B.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a row vector: Vec4 * Mat4.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, m: Mat4) -> Self::Output {
        let column = |col: usize| {
            self.x * m.data[0][col]
                + self.y * m.data[1][col]
                + self.z * m.data[2][col]
                + self.w * m.data[3][col]
        };
        Vec4::new(column(0), column(1), column(2), column(3))
    }
}
