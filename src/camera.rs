//! Camera pose and viewport geometry.
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! # Orientation
//!
//! Orientation is stored as yaw/pitch angles and converted to a rotation
//! matrix when needed.
//!
//! - **Yaw**: Rotation around Y-axis (positive = look right)
//! - **Pitch**: Rotation around X-axis (positive = look up)
//!
//! # Viewport
//!
//! Both engines project through a virtual [`Viewport`] rectangle placed
//! [`Camera::viewport_distance`] units in front of the camera. The distance
//! follows from the horizontal field of view:
//! `distance = (viewport.width / 2) / tan(fov / 2)`.

use crate::math::{Mat4, Vec3};

/// Size of the virtual projection rectangle, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    yaw: f32,   // Rotation around Y-axis (radians)
    pitch: f32, // Rotation around X-axis (radians)
    fov_degrees: f32,
    viewport: Viewport,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Field of view that puts a 1x1 viewport exactly one unit from the camera.
    pub const DEFAULT_FOV_DEGREES: f32 = 53.130_1;

    /// Creates a camera at the given position, looking along +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            fov_degrees: Self::DEFAULT_FOV_DEGREES,
            viewport: Viewport::default(),
        }
    }

    /// Creates a camera at `position` looking toward `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self::new(position);
        camera.look_at(target);
        camera
    }

    pub fn with_fov_degrees(mut self, fov_degrees: f32) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Points the camera at a world position.
    pub fn look_at(&mut self, target: Vec3) {
        let direction = target - self.position;
        let horizontal_len = (direction.x * direction.x + direction.z * direction.z).sqrt();

        if horizontal_len > f32::EPSILON {
            self.yaw = direction.x.atan2(direction.z);
        }
        if direction.length() > f32::EPSILON {
            self.pitch = direction.y.atan2(horizontal_len);
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Rotates the camera by yaw (horizontal) and pitch (vertical) deltas.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw = (self.yaw + yaw_delta).rem_euclid(std::f32::consts::TAU);
        self.pitch += pitch_delta;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Distance from the camera to the viewport plane.
    pub fn viewport_distance(&self) -> f32 {
        self.viewport.width / 2.0 / (self.fov_degrees.to_radians() / 2.0).tan()
    }

    /// Camera-to-world rotation: pitch first, then yaw.
    pub fn orientation(&self) -> Mat4 {
        Mat4::rotation_x(-self.pitch) * Mat4::rotation_y(self.yaw)
    }

    /// The camera's forward direction in world space.
    pub fn forward(&self) -> Vec3 {
        self.orientation().transform_direction(Vec3::FORWARD)
    }

    /// World-to-camera transform (the inverse of the camera pose).
    ///
    /// For a camera with rotation R and position P the pose is `R * T(P)`
    /// (row vectors), so the inverse is `T(-P) * Rᵀ`.
    pub fn transform(&self) -> Mat4 {
        Mat4::translation(-self.position) * self.orientation().transpose()
    }
}
