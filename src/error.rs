//! Crate-wide error type.

use thiserror::Error;

/// Errors raised by scene construction, buffer setup and asset I/O.
///
/// Rendering itself never fails: off-screen pixels are dropped and
/// fully clipped primitives are skipped.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-provided pixel buffer does not hold `width * height * 3` bytes.
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("invalid frame dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A triangle references a vertex the mesh does not have.
    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    InvalidTriangleIndex {
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("failed to load OBJ file: {0}")]
    ObjLoad(#[from] tobj::LoadError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
