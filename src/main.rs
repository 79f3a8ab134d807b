use std::path::PathBuf;

use clap::Parser as _;
use log::info;

use scanray::camera::{Camera, Viewport};
use scanray::color::Color;
use scanray::demo;
use scanray::math::Vec3;
use scanray::raster::{RasterOptions, Rasterizer, ShadingMode};
use scanray::raytrace::{RayTracer, TraceOptions};
use scanray::render::Canvas;
use scanray::window::{FrameLimiter, Window, WindowEvent};

/// Degrees per second the raster demo spins its cubes.
const SPIN_SPEED: f32 = 30.0;

#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "CPU rasterizer and ray tracer demos")]
struct ProgramArgs {
    #[command(subcommand)]
    subcommand: ProgramSubcommand,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum ProgramSubcommand {
    /// Scanline-rasterized cubes.
    Raster(RenderArgs),
    /// Ray-traced spheres with shadows and reflections.
    Trace(RenderArgs),
}

#[derive(Debug, Clone, clap::Parser)]
struct RenderArgs {
    /// Frame width in pixels.
    #[clap(short = 'W', long = "width", default_value_t = 600)]
    width: u32,
    /// Frame height in pixels.
    #[clap(short = 'H', long = "height", default_value_t = 600)]
    height: u32,
    /// Horizontal field of view in degrees.
    #[clap(long = "fov", default_value_t = Camera::DEFAULT_FOV_DEGREES)]
    fov: f32,
    /// Reflection bounces (trace only).
    #[clap(short = 'd', long = "depth", default_value_t = 3)]
    depth: u32,
    /// Render a single frame to this PNG instead of opening a window.
    #[clap(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Raster,
    Trace,
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (mode, args) = match ProgramArgs::parse().subcommand {
        ProgramSubcommand::Raster(args) => (Mode::Raster, args),
        ProgramSubcommand::Trace(args) => (Mode::Trace, args),
    };
    info!("{mode:?} demo at {}x{}", args.width, args.height);

    let mut demo = Demo::new(mode, &args);
    let mut canvas = Canvas::new(args.width, args.height).map_err(|e| e.to_string())?;

    if let Some(path) = &args.output {
        demo.render(&mut canvas);
        return canvas.save_png(path).map_err(|e| e.to_string());
    }

    run_window(&mut demo, &mut canvas)
}

fn run_window(demo: &mut Demo, canvas: &mut Canvas) -> Result<(), String> {
    let title = match demo.mode {
        Mode::Raster => "scanray - raster",
        Mode::Trace => "scanray - trace",
    };
    let mut window = Window::new(title, canvas.width(), canvas.height())?;
    let mut limiter = FrameLimiter::new(&window);
    // The traced scene is static; only redraw it when something changed.
    let mut dirty = true;

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(width, height) => {
                window.resize(width, height)?;
                canvas.resize(width, height).map_err(|e| e.to_string())?;
                demo.camera = demo.camera.clone().with_viewport(viewport_for(width, height));
                dirty = true;
            }
            WindowEvent::Toggle => {
                demo.toggle();
                dirty = true;
            }
            WindowEvent::None => {}
        }

        let delta_ms = limiter.wait_and_get_delta(&window);
        if demo.mode == Mode::Raster {
            demo.spin(delta_ms as f32 / 1000.0);
            dirty = true;
        }

        if dirty {
            demo.render(canvas);
            dirty = false;
        }
        window.present(canvas.as_bytes())?;
    }

    Ok(())
}

/// Keeps square pixels: the viewport is one unit tall and as wide as the
/// frame's aspect ratio.
fn viewport_for(width: u32, height: u32) -> Viewport {
    Viewport {
        width: width as f32 / height.max(1) as f32,
        height: 1.0,
    }
}

struct Demo {
    mode: Mode,
    camera: Camera,
    raster_scene: scanray::RasterScene,
    trace_scene: scanray::TraceScene,
    rasterizer: Rasterizer,
    tracer: RayTracer,
}

impl Demo {
    fn new(mode: Mode, args: &RenderArgs) -> Self {
        let viewport = viewport_for(args.width, args.height);
        let camera = match mode {
            Mode::Raster => demo::cube_camera(),
            Mode::Trace => Camera::new(Vec3::ZERO),
        }
        .with_fov_degrees(args.fov)
        .with_viewport(viewport);

        Self {
            mode,
            camera,
            raster_scene: demo::cube_scene(),
            trace_scene: demo::sphere_scene(),
            rasterizer: Rasterizer::new(RasterOptions::default()),
            tracer: RayTracer::new(TraceOptions {
                recursion_depth: args.depth,
                ..TraceOptions::default()
            }),
        }
    }

    fn render(&mut self, canvas: &mut Canvas) {
        match self.mode {
            Mode::Raster => {
                canvas.clear(Color::BLACK);
                self.rasterizer
                    .render_scene(&self.raster_scene, &self.camera, &mut canvas.as_framebuffer());
            }
            Mode::Trace => {
                self.tracer
                    .render_scene(&self.trace_scene, &self.camera, &mut canvas.as_framebuffer());
            }
        }
    }

    fn spin(&mut self, seconds: f32) {
        let step = (SPIN_SPEED * seconds).to_radians();
        for instance in &mut self.raster_scene.instances {
            instance.transform_mut().rotate(Vec3::new(0.0, step, 0.0));
        }
    }

    /// Raster: unlit/flat shading. Trace: reflections on/off.
    fn toggle(&mut self) {
        match self.mode {
            Mode::Raster => {
                let shading = match self.rasterizer.options().shading {
                    ShadingMode::Unlit => ShadingMode::Flat,
                    ShadingMode::Flat => ShadingMode::Unlit,
                };
                info!("shading: {shading}");
                self.rasterizer.set_shading(shading);
            }
            Mode::Trace => {
                let depth = if self.tracer.options().recursion_depth == 0 {
                    TraceOptions::default().recursion_depth
                } else {
                    0
                };
                info!("reflection depth: {depth}");
                self.tracer.set_recursion_depth(depth);
            }
        }
    }
}
