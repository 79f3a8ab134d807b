use std::rc::Rc;

use scanray::math::Vec3;
use scanray::prelude::*;

fn render(scene: &RasterScene, camera: &Camera, canvas: &mut Canvas) -> RasterStats {
    Rasterizer::default().render_scene(scene, camera, &mut canvas.as_framebuffer())
}

#[test]
fn corner_on_cube_shows_exactly_three_faces() {
    let scene = RasterScene::new(
        vec![ModelInstance::new(Rc::new(Mesh::cube()), Transform::default())],
        Vec::new(),
    );
    let eye = Vec3::new(1.0, 1.0, -1.0).normalize() * 7.0;
    let camera = Camera::looking_at(eye, Vec3::ZERO);

    let mut canvas = Canvas::new(64, 64).unwrap();
    let stats = render(&scene, &camera, &mut canvas);

    assert_eq!(stats.triangles_drawn, 6);
    assert_eq!(stats.triangles_culled, 6);
    assert_eq!(stats.triangles_clipped_away, 0);
}

#[test]
fn cube_never_shows_more_than_three_faces() {
    let cube = Rc::new(Mesh::cube());
    let camera = Camera::new(Vec3::new(0.0, 0.0, -7.0));
    let mut canvas = Canvas::new(48, 48).unwrap();

    for i in 0..32 {
        let rotation = Vec3::new(i as f32 * 0.37, i as f32 * 0.53, i as f32 * 0.29);
        let instance = ModelInstance::new(Rc::clone(&cube), Transform::new().with_rotation(rotation));
        let scene = RasterScene::new(vec![instance], Vec::new());

        let stats = render(&scene, &camera, &mut canvas);
        assert!(stats.triangles_drawn <= 6, "rotation {i}: {stats:?}");
        assert!(stats.triangles_drawn >= 2, "rotation {i}: {stats:?}");
        assert_eq!(stats.triangles_drawn + stats.triangles_culled, 12);
    }
}

fn facing_triangle(color: Color) -> Rc<Mesh> {
    let vertices = vec![
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
    ];
    Rc::new(Mesh::new(vertices, vec![Triangle::new(0, 1, 2, color)]).unwrap())
}

#[test]
fn nearer_triangle_wins_regardless_of_submission_order() {
    let near = ModelInstance::new(facing_triangle(Color::RED), Transform::at(Vec3::new(0.0, 0.0, 4.0)));
    let far = ModelInstance::new(
        facing_triangle(Color::GREEN),
        Transform::at(Vec3::new(0.0, 0.0, 8.0)).with_scale_uniform(3.0),
    );

    let mut near_first = Canvas::new(40, 40).unwrap();
    let mut far_first = Canvas::new(40, 40).unwrap();
    render(
        &RasterScene::new(vec![near.clone(), far.clone()], Vec::new()),
        &Camera::default(),
        &mut near_first,
    );
    render(&RasterScene::new(vec![far, near], Vec::new()), &Camera::default(), &mut far_first);

    assert_eq!(near_first.as_bytes(), far_first.as_bytes());
    assert_eq!(near_first.as_framebuffer().get_pixel(20, 20), Some([255, 0, 0]));
    // The larger, farther triangle still shows around the nearer one.
    assert!(near_first.as_bytes().chunks_exact(3).any(|p| p == [0, 255, 0]));
}

#[test]
fn uncovered_pixels_keep_the_caller_background() {
    let scene = RasterScene::new(
        vec![ModelInstance::new(
            Rc::new(Mesh::cube()),
            Transform::at(Vec3::new(0.0, 0.0, 7.0)),
        )],
        Vec::new(),
    );
    let mut canvas = Canvas::new(32, 32).unwrap();
    canvas.clear(Color::CYAN);
    render(&scene, &Camera::default(), &mut canvas);

    let fb = canvas.as_framebuffer();
    assert_eq!(fb.get_pixel(0, 0), Some([0, 255, 255]));
    assert_eq!(fb.get_pixel(16, 16), Some([0, 0, 255]));
}

#[test]
fn rasterizer_writes_into_caller_owned_bytes() {
    let scene = scanray::demo::cube_scene();
    let mut bytes = vec![0u8; 80 * 60 * 3];
    let mut fb = FrameBuffer::new(&mut bytes, 80, 60).unwrap();
    let stats = Rasterizer::default().render_scene(&scene, &scanray::demo::cube_camera(), &mut fb);

    assert!(stats.triangles_drawn > 0);
    assert!(bytes.iter().any(|&b| b != 0));
}

#[test]
fn mismatched_buffer_is_rejected() {
    let mut bytes = vec![0u8; 10];
    assert!(matches!(
        FrameBuffer::new(&mut bytes, 2, 2),
        Err(scanray::Error::BufferSize { expected: 12, actual: 10, .. })
    ));
}
