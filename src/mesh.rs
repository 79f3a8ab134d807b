//! Indexed triangle meshes.
//!
//! A [`Mesh`] is immutable model-space geometry. It is shared between any
//! number of [`ModelInstance`](crate::model::ModelInstance)s through an `Rc`,
//! so building a mesh once and placing it many times costs no copies.

use std::path::Path;

use log::warn;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::math::Vec3;

/// A triangle: three indices into the owning mesh's vertex list plus a flat color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub indices: [usize; 3],
    pub color: Color,
}

impl Triangle {
    pub const fn new(a: usize, b: usize, c: usize, color: Color) -> Self {
        Self {
            indices: [a, b, c],
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

// Unit cube, corners at ±1. Winding is chosen so that
// (v1 - v0) x (v2 - v0) points out of the cube.
const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
];

const CUBE_TRIANGLES: [Triangle; 12] = [
    // +Z
    Triangle::new(0, 1, 2, Color::RED),
    Triangle::new(0, 2, 3, Color::RED),
    // +X
    Triangle::new(4, 0, 3, Color::GREEN),
    Triangle::new(4, 3, 7, Color::GREEN),
    // -Z
    Triangle::new(5, 4, 7, Color::BLUE),
    Triangle::new(5, 7, 6, Color::BLUE),
    // -X
    Triangle::new(1, 5, 6, Color::YELLOW),
    Triangle::new(1, 6, 2, Color::YELLOW),
    // +Y
    Triangle::new(4, 5, 1, Color::PURPLE),
    Triangle::new(4, 1, 0, Color::PURPLE),
    // -Y
    Triangle::new(2, 6, 7, Color::CYAN),
    Triangle::new(2, 7, 3, Color::CYAN),
];

impl Mesh {
    /// Builds a mesh, checking that every triangle index is in range.
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<Triangle>) -> Result<Self> {
        let vertex_count = vertices.len();
        for (triangle_index, triangle) in triangles.iter().enumerate() {
            if let Some(&index) = triangle.indices.iter().find(|&&i| i >= vertex_count) {
                return Err(Error::InvalidTriangleIndex {
                    triangle: triangle_index,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// The 12-triangle cube spanning `[-1, 1]` on every axis, one color per face.
    pub fn cube() -> Self {
        Self {
            vertices: CUBE_VERTICES.to_vec(),
            triangles: CUBE_TRIANGLES.to_vec(),
        }
    }

    /// Load every model in an OBJ file into a single mesh with a uniform color.
    ///
    /// Faces are triangulated on load. Z is negated to move from OBJ's
    /// right-handed space into this crate's left-handed one, and the winding is
    /// reversed with it so face normals keep pointing outward.
    pub fn from_obj<P: AsRef<Path>>(path: P, color: Color) -> Result<Self> {
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };
        let (models, _materials) = tobj::load_obj(path.as_ref(), &options)?;

        let mut vertices = Vec::new();
        let mut triangles = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let base = vertices.len();

            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], -p[2])),
            );

            let faces = mesh.indices.chunks_exact(3);
            let leftover = faces.remainder().len();
            if leftover != 0 {
                warn!(
                    "model '{}' has {} trailing indices that do not form a triangle",
                    model.name, leftover
                );
            }

            triangles.extend(faces.map(|f| {
                Triangle::new(
                    base + f[0] as usize,
                    base + f[2] as usize,
                    base + f[1] as usize,
                    color,
                )
            }));
        }

        Self::new(vertices, triangles)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Radius of the sphere around the model-space origin enclosing every vertex.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }
}
