//! Frustum clipping with the Sutherland-Hodgman algorithm.
//!
//! Two flavours share the same plane math:
//!
//! - [`ClipPolygon`]: general convex polygons whose vertices carry any
//!   [`Attributes`] payload, interpolated at each crossing.
//! - [`clip_triangle`], [`clip_to_planes`] and [`clip_mesh`]: mesh triangles
//!   clipped by index against a growable vertex pool. The rasterizer uses
//!   this one.

mod frustum;
mod polygon;
mod triangle;

pub use frustum::Frustum;
pub use polygon::{Attributes, ClipPolygon, ClipVertex};
pub use triangle::{clip_mesh, clip_to_planes, clip_triangle};
