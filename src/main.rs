mod logger;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use trifill::prelude::*;

/// Rasterise a triangle, or a mesh, with the fixed-point edge-function
/// rasterizer.
#[derive(Parser, Debug)]
#[command(name = "trifill", version, about)]
struct Args {
    /// Mesh to draw (.tri or .obj). Without one the reference triangle
    /// (50,100) (100,220) (200,70) is drawn.
    #[arg(long)]
    mesh: Option<PathBuf>,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Camera distance along -z for meshes.
    #[arg(long, default_value_t = -3.0, allow_hyphen_values = true)]
    view_z: f32,

    /// Where to write the frame.
    #[arg(long, short, default_value = "trifill.png")]
    output: PathBuf,

    /// Show the frame in a window instead of writing it (needs the `window`
    /// feature).
    #[arg(long)]
    window: bool,

    /// Fill triangles on all cores.
    #[arg(long)]
    parallel: bool,

    /// More log output; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logger::init(args.verbose).map_err(|e| e.to_string())?;

    let mut engine = Engine::new(args.width, args.height);
    engine.set_parallel(args.parallel);
    if let Some(path) = &args.mesh {
        let mesh = Mesh::from_path(path)?;
        info!("loaded {} triangles from {}", mesh.len(), path.display());
        engine.set_mesh(mesh);
        engine.set_view_offset(Vec3::new(0.0, 0.0, args.view_z));
    }

    if args.window {
        return run_window(&mut engine, &args);
    }

    let frame = draw(&mut engine, &args);
    frame.save_png(&args.output)?;
    info!("wrote {}", args.output.display());
    Ok(())
}

/// Renders one frame and returns the renderer holding it.
fn draw<'a>(engine: &'a mut Engine, args: &Args) -> &'a Renderer {
    let stats = engine.render(colors::BACKGROUND);
    if args.mesh.is_none() {
        let triangle = Triangle::new(
            [
                Vec2::new(50.0, 100.0),
                Vec2::new(100.0, 220.0),
                Vec2::new(200.0, 70.0),
            ],
            colors::RED,
        );
        let pixels = engine.fill_triangle(&triangle);
        info!("reference triangle: {pixels} pixels");
    } else {
        info!(
            "{} of {} triangles rasterised, {} pixels",
            stats.rasterised, stats.submitted, stats.pixels
        );
    }
    engine.renderer()
}

#[cfg(feature = "window")]
fn run_window(engine: &mut Engine, args: &Args) -> Result<(), Box<dyn Error>> {
    use trifill::window::{Window, WindowEvent};

    let mut window = Window::new("trifill", args.width, args.height)?;
    loop {
        match window.poll_events() {
            WindowEvent::Quit => return Ok(()),
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                engine.resize(w, h);
            }
            WindowEvent::None => {}
        }
        let frame = draw(engine, args);
        window.present(frame.as_bytes())?;
    }
}

#[cfg(not(feature = "window"))]
fn run_window(_engine: &mut Engine, _args: &Args) -> Result<(), Box<dyn Error>> {
    Err("built without the `window` feature".into())
}
