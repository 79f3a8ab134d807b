//! Rasterizer engine.
//!
//! Per frame: reset the depth buffer, then for every instance transform its
//! mesh into camera space, clip against the view frustum, project, cull back
//! faces and scanline-fill what is left.

mod scanline;

pub use scanline::{fill_triangle, ScreenPoint};

use std::fmt;

use log::{debug, trace};

use crate::camera::Camera;
use crate::clipper::Frustum;
use crate::color::Color;
use crate::light::Light;
use crate::math::Vec3;
use crate::mesh::Triangle;
use crate::render::{DepthBuffer, FrameBuffer};
use crate::scene::RasterScene;

/// How triangle colors are turned into pixel colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// The triangle's own color, untouched by lights.
    #[default]
    Unlit,
    /// Triangle color scaled by ambient + diffuse light at the centroid.
    Flat,
}

impl fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadingMode::Unlit => write!(f, "Unlit"),
            ShadingMode::Flat => write!(f, "Flat"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RasterOptions {
    /// Adds a sixth clipping plane at this camera-space depth.
    pub far_plane: Option<f32>,
    pub shading: ShadingMode,
}

/// What happened to the geometry of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterStats {
    /// Instances whose bounding sphere lies outside the frustum.
    pub instances_skipped: usize,
    /// Source triangles with nothing left after clipping.
    pub triangles_clipped_away: usize,
    /// Triangles discarded as back-facing.
    pub triangles_culled: usize,
    /// Triangles handed to the scanline filler.
    pub triangles_drawn: usize,
}

pub struct Rasterizer {
    depth: DepthBuffer,
    options: RasterOptions,
    // Per-instance scratch, kept to avoid reallocating every frame.
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(RasterOptions::default())
    }
}

impl Rasterizer {
    pub fn new(options: RasterOptions) -> Self {
        Self {
            depth: DepthBuffer::new(0, 0),
            options,
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn options(&self) -> &RasterOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RasterOptions) {
        self.options = options;
    }

    pub fn set_shading(&mut self, shading: ShadingMode) {
        self.options.shading = shading;
    }

    /// The depth buffer as left by the last frame.
    pub fn depth_buffer(&self) -> &DepthBuffer {
        &self.depth
    }

    /// Renders every instance of `scene` into `buffer`.
    ///
    /// Only covered pixels are written; the caller clears the buffer first if
    /// it wants a background.
    pub fn render_scene(
        &mut self,
        scene: &RasterScene,
        camera: &Camera,
        buffer: &mut FrameBuffer,
    ) -> RasterStats {
        self.depth.reset(buffer.width(), buffer.height());

        let mut stats = RasterStats::default();
        let frustum = Frustum::from_camera(camera, self.options.far_plane);
        let camera_matrix = camera.transform();

        let lights: Vec<Light> = match self.options.shading {
            ShadingMode::Unlit => Vec::new(),
            ShadingMode::Flat => scene
                .lights
                .iter()
                .map(|light| light.transformed(&camera_matrix))
                .collect(),
        };

        let projection = Projection::new(camera, buffer);

        for (i, instance) in scene.instances.iter().enumerate() {
            let transform = instance.world_matrix() * camera_matrix;
            let mesh = instance.mesh();

            // Whole-instance rejection before touching any vertex.
            let center = transform.transform_point(Vec3::ZERO);
            let radius = mesh.bounding_radius() * instance.transform().max_scale();
            if !frustum.intersects_sphere(center, radius) {
                trace!("instance {i} outside frustum, skipped");
                stats.instances_skipped += 1;
                continue;
            }

            self.vertices.clear();
            self.vertices
                .extend(mesh.vertices().iter().map(|&v| transform.transform_point(v)));

            self.triangles.clear();
            for triangle in mesh.triangles() {
                if frustum.clip_triangle(triangle, &mut self.vertices, &mut self.triangles) == 0 {
                    stats.triangles_clipped_away += 1;
                }
            }

            for triangle in &self.triangles {
                let [a, b, c] = triangle.indices.map(|idx| self.vertices[idx]);

                let normal = (b - a).cross(c - a);
                if normal.dot(-a) <= 0.0 {
                    stats.triangles_culled += 1;
                    continue;
                }

                let color = match self.options.shading {
                    ShadingMode::Unlit => triangle.color,
                    ShadingMode::Flat => shade_flat(triangle.color, &lights, (a + b + c) / 3.0, normal),
                };

                let points = [a, b, c].map(|v| projection.project(v));
                fill_triangle(points, color, &mut self.depth, buffer);
                stats.triangles_drawn += 1;
            }
        }

        debug!(
            "rasterized {}x{} frame: {} instances, {:?}",
            buffer.width(),
            buffer.height(),
            scene.instances.len(),
            stats
        );

        stats
    }
}

/// Camera-space point to integer canvas coordinates.
struct Projection {
    distance: f32,
    scale_x: f32,
    scale_y: f32,
}

impl Projection {
    fn new(camera: &Camera, buffer: &FrameBuffer) -> Self {
        let viewport = camera.viewport();
        Self {
            distance: camera.viewport_distance(),
            scale_x: buffer.width() as f32 / viewport.width,
            scale_y: buffer.height() as f32 / viewport.height,
        }
    }

    /// Perspective divide onto the viewport, then viewport to canvas.
    #[inline]
    fn project(&self, v: Vec3) -> ScreenPoint {
        let vx = v.x * self.distance / v.z;
        let vy = v.y * self.distance / v.z;
        ScreenPoint::new((vx * self.scale_x) as i32, (vy * self.scale_y) as i32, v.z)
    }
}

/// Lights a flat color the way [`ShadingMode::Flat`] does; for callers
/// shading their own geometry.
pub fn shade_flat(color: Color, lights: &[Light], point: Vec3, normal: Vec3) -> Color {
    let intensity: f32 = lights.iter().map(|light| light.diffuse_at(point, normal)).sum();
    color * intensity
}
