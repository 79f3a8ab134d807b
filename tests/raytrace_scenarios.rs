use scanray::math::Vec3;
use scanray::prelude::*;

const SIZE: u32 = 64;

#[test]
fn ambient_only_sphere_fills_its_silhouette_and_nothing_else() {
    let color = Color::new(200.0, 150.0, 100.0);
    let scene = TraceScene::new(
        vec![Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, color)],
        vec![Light::Ambient { intensity: 0.2 }],
    );
    let mut canvas = Canvas::new(SIZE, SIZE).unwrap();
    RayTracer::default().render_scene(&scene, &Camera::default(), &mut canvas.as_framebuffer());

    let expected = (color * 0.2).to_rgb8();
    let fb = canvas.as_framebuffer();
    assert_eq!(fb.get_pixel(SIZE as i32 / 2, SIZE as i32 / 2), Some(expected));

    // Angular radius of the sphere seen from the origin.
    let silhouette = (1.0f32 / 3.0).asin();
    for y in 0..SIZE as i32 {
        for x in 0..SIZE as i32 {
            let (cx, cy) = fb.screen_to_canvas(x, y);
            let ray = Vec3::new(cx as f32 / SIZE as f32, cy as f32 / SIZE as f32, 1.0);
            let angle = ray.normalize().dot(Vec3::FORWARD).acos();

            let pixel = fb.get_pixel(x, y).unwrap();
            if angle > silhouette + 0.01 {
                assert_eq!(pixel, [0, 0, 0], "pixel ({x}, {y}) outside the sphere");
            } else if angle < silhouette - 0.01 {
                assert_eq!(pixel, expected, "pixel ({x}, {y}) inside the sphere");
            }
        }
    }
}

#[test]
fn every_pixel_is_overwritten() {
    let mut canvas = Canvas::new(16, 8).unwrap();
    canvas.clear(Color::PURPLE);
    RayTracer::default().render_scene(&TraceScene::default(), &Camera::default(), &mut canvas.as_framebuffer());
    assert!(canvas.as_bytes().iter().all(|&b| b == 0));
}

fn shadow_scene() -> TraceScene {
    let floor = Sphere::new(Vec3::new(0.0, -1001.0, 5.0), 1000.0, Color::WHITE).with_specular_exponent(10.0);
    let blocker = Sphere::new(Vec3::new(0.0, 1.0, 5.0), 0.5, Color::RED);
    TraceScene::new(
        vec![floor, blocker],
        vec![
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                intensity: 0.8,
                position: Vec3::new(0.0, 3.0, 5.0),
            },
        ],
    )
}

#[test]
fn occluded_point_light_leaves_only_ambient() {
    let scene = shadow_scene();
    let tracer = RayTracer::default();

    // Straight below the blocker: the light is hidden.
    let shadowed = tracer.trace_ray(&scene, Vec3::ZERO, Vec3::new(0.0, -1.0, 5.0), 0.001, f32::INFINITY, 0);
    assert_eq!(shadowed.to_rgb8(), (Color::WHITE * 0.2).to_rgb8());

    // Off to the side the light reaches the floor.
    let lit = tracer.trace_ray(&scene, Vec3::ZERO, Vec3::new(3.0, -1.0, 5.0), 0.001, f32::INFINITY, 0);
    assert!(lit.r > shadowed.r + 100.0);
}

#[test]
fn removing_the_blocker_lifts_the_shadow() {
    let mut scene = shadow_scene();
    scene.spheres.truncate(1);
    let color = RayTracer::default().trace_ray(
        &scene,
        Vec3::ZERO,
        Vec3::new(0.0, -1.0, 5.0),
        0.001,
        f32::INFINITY,
        0,
    );
    assert!(color.r > 255.0 * 0.9);
}

#[test]
fn rotated_camera_sees_what_it_faces() {
    // A sphere on the +X axis, invisible to the default camera.
    let scene = TraceScene::new(
        vec![Sphere::new(Vec3::new(5.0, 0.0, 0.0), 1.0, Color::GREEN)],
        vec![Light::Ambient { intensity: 1.0 }],
    );
    let tracer = RayTracer::default();

    let mut canvas = Canvas::new(9, 9).unwrap();
    tracer.render_scene(&scene, &Camera::default(), &mut canvas.as_framebuffer());
    assert_eq!(canvas.as_framebuffer().get_pixel(4, 4), Some([0, 0, 0]));

    let camera = Camera::looking_at(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0));
    tracer.render_scene(&scene, &camera, &mut canvas.as_framebuffer());
    assert_eq!(canvas.as_framebuffer().get_pixel(4, 4), Some([0, 255, 0]));
}

#[test]
fn demo_scene_renders_something_everywhere_it_should() {
    let scene = scanray::demo::sphere_scene();
    let mut canvas = Canvas::new(32, 32).unwrap();
    RayTracer::default().render_scene(&scene, &Camera::default(), &mut canvas.as_framebuffer());

    let fb = canvas.as_framebuffer();
    // Sky above is black, the floor below is not.
    assert_eq!(fb.get_pixel(16, 0), Some([0, 0, 0]));
    assert_ne!(fb.get_pixel(0, 31), Some([0, 0, 0]));
}
