//! A CPU-based 3D rendering pipeline with two engines sharing one pixel sink.
//!
//! - [`Rasterizer`]: camera-space transform, frustum clipping, perspective
//!   projection, back-face culling and scanline filling with a depth buffer.
//! - [`RayTracer`]: ray/sphere intersection, Phong lighting with shadow rays
//!   and recursive mirror reflection.
//!
//! Both draw into a [`FrameBuffer`], a bounds-checked view over a caller-owned
//! RGB byte buffer. SDL2 is used only by [`window`] for display.
//!
//! # Quick Start
//!
//! ```no_run
//! use scanray::prelude::*;
//!
//! let scene = scanray::demo::sphere_scene();
//! let mut canvas = Canvas::new(320, 320)?;
//! RayTracer::default().render_scene(&scene, &Camera::default(), &mut canvas.as_framebuffer());
//! canvas.save_png("spheres.png")?;
//! # Ok::<(), scanray::Error>(())
//! ```

pub mod camera;
pub mod clipper;
pub mod color;
pub mod demo;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod model;
pub mod raster;
pub mod raytrace;
pub mod render;
pub mod scene;
pub mod sphere;
pub mod transform;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::{Camera, Viewport};
pub use color::Color;
pub use error::{Error, Result};
pub use light::Light;
pub use mesh::{Mesh, Triangle};
pub use model::ModelInstance;
pub use raster::{RasterOptions, RasterStats, Rasterizer, ShadingMode};
pub use raytrace::{RayTracer, TraceOptions};
pub use render::{Canvas, FrameBuffer};
pub use scene::{RasterScene, TraceScene};
pub use sphere::Sphere;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use scanray::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, Viewport};

    // Engines
    pub use crate::raster::{RasterOptions, RasterStats, Rasterizer, ShadingMode};
    pub use crate::raytrace::{RayTracer, TraceOptions};

    // Scene
    pub use crate::color::Color;
    pub use crate::light::Light;
    pub use crate::mesh::{Mesh, Triangle};
    pub use crate::model::ModelInstance;
    pub use crate::scene::{RasterScene, TraceScene};
    pub use crate::sphere::Sphere;
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::{Mat4, Plane, Vec3, Vec4};

    // Rendering
    pub use crate::render::{Canvas, DepthBuffer, FrameBuffer};
}
