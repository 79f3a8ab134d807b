//! Recursive ray tracer for sphere scenes.
//!
//! Every pixel gets one primary ray from the camera through the matching
//! point on the viewport. A hit is shaded with ambient, diffuse and specular
//! terms, each non-ambient light gated by a shadow ray, and reflective
//! surfaces blend in the color seen along the mirrored ray.

use log::debug;

use crate::camera::Camera;
use crate::color::Color;
use crate::light::Light;
use crate::math::Vec3;
use crate::render::FrameBuffer;
use crate::scene::TraceScene;
use crate::sphere::Sphere;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceOptions {
    /// Reflection bounces after the primary hit.
    pub recursion_depth: u32,
    /// Minimum `t` for shadow and reflection rays, so a surface does not
    /// shadow or reflect itself.
    pub epsilon: f32,
    /// Minimum `t` for primary rays. `t = 1` is the viewport plane.
    pub primary_t_min: f32,
    /// Color of rays that hit nothing.
    pub background: Color,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            recursion_depth: 3,
            epsilon: 0.001,
            primary_t_min: 1.0,
            background: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RayTracer {
    options: TraceOptions,
}

impl RayTracer {
    pub fn new(options: TraceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    pub fn set_recursion_depth(&mut self, depth: u32) {
        self.options.recursion_depth = depth;
    }

    /// Traces one primary ray per pixel; every pixel of `buffer` is written.
    pub fn render_scene(&self, scene: &TraceScene, camera: &Camera, buffer: &mut FrameBuffer) {
        let (width, height) = (buffer.width(), buffer.height());
        let viewport = camera.viewport();
        let distance = camera.viewport_distance();
        let orientation = camera.orientation();
        let origin = camera.position();

        let scale_x = viewport.width / width as f32;
        let scale_y = viewport.height / height as f32;

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let (cx, cy) = buffer.screen_to_canvas(x, y);
                let direction = orientation.transform_direction(Vec3::new(
                    cx as f32 * scale_x,
                    cy as f32 * scale_y,
                    distance,
                ));

                let color = self.trace_ray(
                    scene,
                    origin,
                    direction,
                    self.options.primary_t_min,
                    f32::INFINITY,
                    self.options.recursion_depth,
                );
                buffer.set_pixel(x, y, color);
            }
        }

        debug!(
            "traced {}x{} frame: {} spheres, {} lights, depth {}",
            width,
            height,
            scene.spheres.len(),
            scene.lights.len(),
            self.options.recursion_depth
        );
    }

    /// Color seen along `origin + t * direction` for `t` in `(t_min, t_max)`.
    ///
    /// `depth` is the number of reflection bounces still allowed.
    pub fn trace_ray(
        &self,
        scene: &TraceScene,
        origin: Vec3,
        direction: Vec3,
        t_min: f32,
        t_max: f32,
        depth: u32,
    ) -> Color {
        let Some((sphere, t)) = closest_intersection(&scene.spheres, origin, direction, t_min, t_max)
        else {
            return self.options.background;
        };

        let point = origin + direction * t;
        let normal = sphere.normal_at(point);
        let view = -direction;

        let intensity = compute_lighting(
            &scene.lights,
            &scene.spheres,
            point,
            normal,
            view,
            sphere.specular,
            self.options.epsilon,
        );
        let local = sphere.color * intensity;

        let r = sphere.reflective;
        if depth == 0 || r <= 0.0 {
            return local;
        }

        let reflected = self.trace_ray(
            scene,
            point,
            view.reflect(normal),
            self.options.epsilon,
            f32::INFINITY,
            depth - 1,
        );
        local * (1.0 - r) + reflected * r
    }
}

/// Nearest sphere hit with `t` strictly inside `(t_min, t_max)`.
///
/// On an exact tie the sphere found first is kept.
pub fn closest_intersection(
    spheres: &[Sphere],
    origin: Vec3,
    direction: Vec3,
    t_min: f32,
    t_max: f32,
) -> Option<(&Sphere, f32)> {
    let mut closest: Option<(&Sphere, f32)> = None;

    for sphere in spheres {
        let Some((t1, t2)) = sphere.intersect_ray(origin, direction) else {
            continue;
        };
        for t in [t1, t2] {
            let in_range = t_min < t && t < t_max;
            if in_range && closest.map_or(true, |(_, best)| t < best) {
                closest = Some((sphere, t));
            }
        }
    }

    closest
}

/// Total light intensity reaching `point`.
///
/// Ambient lights always count. Point and directional lights count only if a
/// shadow ray towards them (starting at `epsilon`) hits no sphere; they then
/// add a diffuse term and, when `specular` is set, a Phong highlight. `view`
/// points from the surface back towards the viewer.
pub fn compute_lighting(
    lights: &[Light],
    spheres: &[Sphere],
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    specular: Option<f32>,
    epsilon: f32,
) -> f32 {
    let mut total = 0.0;

    for light in lights {
        let Some((to_light, t_max)) = light.towards(point) else {
            total += light.intensity();
            continue;
        };

        if is_occluded(spheres, point, to_light, epsilon, t_max) {
            continue;
        }

        total += light.diffuse_at(point, normal);

        if let Some(exponent) = specular {
            let reflected = to_light.reflect(normal);
            let r_dot_v = reflected.dot(view);
            if r_dot_v > 0.0 {
                total += light.intensity()
                    * (r_dot_v / (reflected.length() * view.length())).powf(exponent);
            }
        }
    }

    total
}

/// True when any sphere blocks the segment `(t_min, t_max)` of the ray.
fn is_occluded(spheres: &[Sphere], origin: Vec3, direction: Vec3, t_min: f32, t_max: f32) -> bool {
    spheres.iter().any(|sphere| {
        sphere
            .intersect_ray(origin, direction)
            .is_some_and(|(t1, t2)| (t_min < t1 && t1 < t_max) || (t_min < t2 && t2 < t_max))
    })
}
