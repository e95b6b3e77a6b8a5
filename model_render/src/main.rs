mod error;
mod obj;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use renderer::math_prelude::*;
use renderer::{Color, Light, Renderer, Shading, Texture};

/// Render a Wavefront OBJ model into a bitmap image.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Mesh to render
    model: PathBuf,

    /// Diffuse texture, desaturated at load; rendered flat white when absent
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Where to write the finished image
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Draw face edges instead of filled triangles
    #[arg(long)]
    wireframe: bool,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let model = obj::load_model(&args.model)
        .with_context(|| format!("loading model {}", args.model.display()))?;

    let mut renderer = Renderer::new(args.width, args.height);
    if args.wireframe {
        renderer.render_wireframe(&model, Color::WHITE)?;
    } else {
        let shading = match &args.texture {
            Some(path) if model.texcoords().is_empty() => {
                eprintln!(
                    "{}: model carries no texture coordinates, rendering flat",
                    path.display()
                );
                Shading::Flat(Color::WHITE)
            }
            Some(path) => {
                let img = image::open(path)
                    .with_context(|| format!("loading texture {}", path.display()))?
                    .to_rgba8();
                Shading::Textured(Texture::from_rgba8(img.width(), img.height(), img.as_raw()))
            }
            None => Shading::Flat(Color::WHITE),
        };
        let light = Light::new(Vec3::new(0.0, 0.0, -1.0), Color::new(1.0, 1.0, 1.0, 1.0)?);
        let stats = renderer.render(&model, &shading, &light)?;
        println!("{:?}", stats);
    }

    output::write_image(renderer.framebuffer(), &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {:#}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
