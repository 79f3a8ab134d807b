//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into a caller-owned RGB byte buffer with
//! bounds-checked writes. Both engines draw through this type.

use crate::color::Color;
use crate::error::{Error, Result};

/// Bytes per pixel: R, G, B.
pub const CHANNELS: usize = 3;

/// A mutable view into an RGB pixel buffer.
///
/// The buffer is row-major, top row first, three bytes per pixel in R, G, B
/// order. This is a borrowed view, not an owning type: the windowing layer
/// (or a [`Canvas`](super::Canvas)) owns the bytes and lends them out for the
/// duration of one render call.
///
/// # Canvas coordinates
///
/// Engines think in centered canvas coordinates with Y pointing up. The
/// mapping to pixels is `column = width/2 + cx`, `row = height/2 - cy`, so
/// `(0, 0)` is the center of the image.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Wrap a caller-provided buffer.
    ///
    /// # Errors
    /// Returns [`Error::BufferSize`] when the slice is not exactly
    /// `width * height * 3` bytes long, and [`Error::InvalidDimensions`] when
    /// that size does not fit in memory.
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        let expected = byte_len(width, height).ok_or(Error::InvalidDimensions { width, height })?;
        if pixels.len() != expected {
            return Err(Error::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self::from_parts(pixels, width, height))
    }

    /// Skips the length check; callers guarantee the size.
    pub(crate) fn from_parts(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(Some(pixels.len()), byte_len(width, height));
        Self {
            pixels,
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

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as usize * self.width as usize + x as usize) * CHANNELS)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y). Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + CHANNELS].copy_from_slice(&color.to_rgb8());
        }
    }

    /// Get the bytes at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        self.index(x, y)
            .map(|i| [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    /// Maps centered, Y-up canvas coordinates to a pixel position.
    #[inline]
    pub fn canvas_to_screen(&self, cx: i32, cy: i32) -> (i32, i32) {
        (self.width as i32 / 2 + cx, self.height as i32 / 2 - cy)
    }

    /// Inverse of [`canvas_to_screen`](Self::canvas_to_screen).
    #[inline]
    pub fn screen_to_canvas(&self, x: i32, y: i32) -> (i32, i32) {
        (x - self.width as i32 / 2, self.height as i32 / 2 - y)
    }

    /// Set a pixel given canvas coordinates. Off-canvas writes are dropped.
    #[inline]
    pub fn put_canvas_pixel(&mut self, cx: i32, cy: i32, color: Color) {
        let (x, y) = self.canvas_to_screen(cx, cy);
        self.set_pixel(x, y, color);
    }

    /// Overwrite every pixel with one color.
    pub fn fill(&mut self, color: Color) {
        let rgb = color.to_rgb8();
        for pixel in self.pixels.chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&rgb);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.pixels
    }
}

/// `width * height * 3`, or `None` on overflow.
pub(crate) fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}
