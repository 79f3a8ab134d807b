//! Built-in scenes for the binary, the benchmarks and the tests.

use std::rc::Rc;

use crate::camera::Camera;
use crate::color::Color;
use crate::light::Light;
use crate::math::Vec3;
use crate::mesh::Mesh;
use crate::model::ModelInstance;
use crate::scene::{RasterScene, TraceScene};
use crate::sphere::Sphere;
use crate::transform::Transform;

/// Two instances of one shared cube, slightly to the camera's right.
pub fn cube_scene() -> RasterScene {
    let cube = Rc::new(Mesh::cube());

    let instances = vec![
        ModelInstance::new(
            Rc::clone(&cube),
            Transform::at(Vec3::new(-1.5, 0.0, 7.0)).with_scale_uniform(0.75),
        ),
        ModelInstance::new(
            Rc::clone(&cube),
            Transform::at(Vec3::new(1.25, 2.5, 7.5))
                .with_rotation(Vec3::new(0.0, 195f32.to_radians(), 0.0)),
        ),
    ];

    RasterScene::new(instances, default_lights())
}

/// Camera for [`cube_scene`]: off to the left, turned towards the cubes.
pub fn cube_camera() -> Camera {
    let mut camera = Camera::new(Vec3::new(-3.0, 1.0, 2.0));
    camera.rotate(30f32.to_radians(), 0.0);
    camera
}

/// Three shiny spheres resting on a huge yellow "floor" sphere.
pub fn sphere_scene() -> TraceScene {
    let spheres = vec![
        Sphere::new(Vec3::new(0.0, -1.0, 3.0), 1.0, Color::RED)
            .with_specular_exponent(500.0)
            .with_reflective(0.2),
        Sphere::new(Vec3::new(2.0, 0.0, 4.0), 1.0, Color::BLUE)
            .with_specular_exponent(500.0)
            .with_reflective(0.3),
        Sphere::new(Vec3::new(-2.0, 0.0, 4.0), 1.0, Color::GREEN)
            .with_specular_exponent(10.0)
            .with_reflective(0.4),
        Sphere::new(Vec3::new(0.0, -5001.0, 0.0), 5000.0, Color::YELLOW)
            .with_specular_exponent(1000.0)
            .with_reflective(0.5),
    ];

    TraceScene::new(spheres, default_lights())
}

fn default_lights() -> Vec<Light> {
    vec![
        Light::Ambient { intensity: 0.2 },
        Light::Point {
            intensity: 0.6,
            position: Vec3::new(2.0, 1.0, 0.0),
        },
        Light::Directional {
            intensity: 0.2,
            direction: Vec3::new(1.0, 4.0, 4.0),
        },
    ]
}
