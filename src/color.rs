//! Floating-point RGB color.
//!
//! Channels use the 0–255 scale but are not clamped while shading. Lighting
//! can push a channel above 255 or blending can leave it fractional; the
//! value is only clamped and truncated when it is written to a pixel.

use std::ops::{Add, Mul};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);
    pub const RED: Self = Self::new(255.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 255.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 255.0);
    pub const YELLOW: Self = Self::new(255.0, 255.0, 0.0);
    pub const PURPLE: Self = Self::new(255.0, 0.0, 255.0);
    pub const CYAN: Self = Self::new(0.0, 255.0, 255.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32, g as f32, b as f32)
    }

    /// Clamps every channel to `[0, 255]` and truncates to a byte.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            self.r.clamp(0.0, 255.0) as u8,
            self.g.clamp(0.0, 255.0) as u8,
            self.b.clamp(0.0, 255.0) as u8,
        ]
    }
}

/// Scale all channels by an intensity.
impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, intensity: f32) -> Self::Output {
        Self::new(self.r * intensity, self.g * intensity, self.b * intensity)
    }
}

/// Additive blending.
impl Add<Color> for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Self::Output {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}
