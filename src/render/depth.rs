//! Per-pixel depth buffer for hidden surface removal.
//!
//! Stores `1/z` (camera-space depth reciprocal) for each pixel. `1/z` varies
//! linearly across a projected triangle, so it can be interpolated in screen
//! space. Larger values are closer to the camera.

/// Value of a pixel no surface has covered yet this frame.
///
/// Every drawable point lies in front of the near plane (`z > 0`), so any
/// real `1/z` is strictly greater than this sentinel.
pub const UNWRITTEN: f32 = 0.0;

#[derive(Debug, Clone)]
pub struct DepthBuffer {
    values: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            values: vec![UNWRITTEN; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Marks every pixel unwritten, reallocating if the frame size changed.
    pub fn reset(&mut self, width: u32, height: u32) {
        if self.width != width || self.height != height {
            *self = Self::new(width, height);
        } else {
            self.values.fill(UNWRITTEN);
        }
    }

    /// Records `inv_z` at (x, y) if it is strictly closer than what is stored.
    ///
    /// Returns `true` when the caller should write the pixel. Equal or farther
    /// depths and out-of-bounds coordinates return `false`.
    #[inline]
    pub fn test_and_set(&mut self, x: i32, y: i32, inv_z: f32) -> bool {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return false;
        }

        let idx = y as usize * self.width as usize + x as usize;
        if inv_z > self.values[idx] {
            self.values[idx] = inv_z;
            true
        } else {
            false
        }
    }

    /// Stored value at (x, y), or None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(self.values[y as usize * self.width as usize + x as usize])
    }
}
