//! Placed copies of a shared mesh.

use std::rc::Rc;

use crate::math::Mat4;
use crate::mesh::Mesh;
use crate::transform::Transform;

/// A [`Mesh`] placed in the world.
///
/// Instances hold an `Rc` handle to the mesh, never a copy; the mesh lives as
/// long as the longest-lived instance referencing it.
#[derive(Clone, Debug)]
pub struct ModelInstance {
    mesh: Rc<Mesh>,
    transform: Transform,
}

impl ModelInstance {
    pub fn new(mesh: Rc<Mesh>, transform: Transform) -> Self {
        Self { mesh, transform }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The shared handle, for placing the same mesh again.
    pub fn mesh_handle(&self) -> &Rc<Mesh> {
        &self.mesh
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Model-to-world matrix, derived from the transform on every call.
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }
}
