//! Owned RGB pixel storage.
//!
//! [`Canvas`] plays the windowing layer's part when there is no window: it
//! owns the bytes, lends a [`FrameBuffer`] to an engine for one frame, and
//! afterwards hands the result to a presenter or writes it to disk.

use std::path::Path;

use image::RgbImage;
use log::info;

use super::framebuffer::{byte_len, FrameBuffer, CHANNELS};
use crate::color::Color;
use crate::error::{Error, Result};

pub struct Canvas {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Allocates a black canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = byte_len(width, height).ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self {
            pixels: vec![0; len],
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.as_framebuffer().fill(color);
    }

    /// Raw RGB bytes, row-major, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row, for presenters that need a pitch.
    pub fn pitch(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Get a mutable FrameBuffer view into the pixel bytes.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::from_parts(&mut self.pixels, self.width, self.height)
    }

    /// Copies the pixels into an `image` buffer.
    pub fn to_image(&self) -> Result<RgbImage> {
        RgbImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            Error::BufferSize {
                width: self.width,
                height: self.height,
                expected: self.pitch() * self.height as usize,
                actual: self.pixels.len(),
            },
        )
    }

    /// Writes the canvas to a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        info!("wrote {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }
}
