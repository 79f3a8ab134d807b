use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scanray::demo;
use scanray::raster::{fill_triangle, ScreenPoint};
use scanray::render::DepthBuffer;
use scanray::{Camera, Canvas, Color, RayTracer, Rasterizer, ShadingMode};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn small_triangle() -> [ScreenPoint; 3] {
    [
        ScreenPoint::new(-10, -10, 2.0),
        ScreenPoint::new(10, -10, 2.0),
        ScreenPoint::new(0, 10, 2.0),
    ]
}

fn large_triangle() -> [ScreenPoint; 3] {
    [
        ScreenPoint::new(-350, -250, 2.0),
        ScreenPoint::new(350, -200, 3.0),
        ScreenPoint::new(0, 280, 4.0),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for (name, points) in [("small", small_triangle()), ("large", large_triangle())] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &points, |b, points| {
            let mut canvas = Canvas::new(BUFFER_WIDTH, BUFFER_HEIGHT).unwrap();
            let mut depth = DepthBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                depth.reset(BUFFER_WIDTH, BUFFER_HEIGHT);
                fill_triangle(
                    black_box(*points),
                    Color::RED,
                    &mut depth,
                    &mut canvas.as_framebuffer(),
                )
            });
        });
    }

    group.finish();
}

fn benchmark_raster_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster_frame");
    let scene = demo::cube_scene();
    let camera = demo::cube_camera();

    for shading in [ShadingMode::Unlit, ShadingMode::Flat] {
        group.bench_function(BenchmarkId::new("cubes", shading), |b| {
            let mut canvas = Canvas::new(BUFFER_WIDTH, BUFFER_HEIGHT).unwrap();
            let mut rasterizer = Rasterizer::default();
            rasterizer.set_shading(shading);
            b.iter(|| {
                canvas.clear(Color::BLACK);
                rasterizer.render_scene(black_box(&scene), &camera, &mut canvas.as_framebuffer())
            });
        });
    }

    group.finish();
}

fn benchmark_trace_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_frame");
    group.sample_size(10);
    let scene = demo::sphere_scene();
    let camera = Camera::default();

    for depth in [0, 3] {
        group.bench_with_input(BenchmarkId::new("spheres_320", depth), &depth, |b, &depth| {
            let mut canvas = Canvas::new(320, 320).unwrap();
            let mut tracer = RayTracer::default();
            tracer.set_recursion_depth(depth);
            b.iter(|| tracer.render_scene(black_box(&scene), &camera, &mut canvas.as_framebuffer()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_raster_frame,
    benchmark_trace_frame
);
criterion_main!(benches);
