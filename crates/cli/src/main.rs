#![deny(unsafe_code)]
//! CLI binary for glyph-render.
//!
//! Subcommands:
//! - `render` — rasterize one frame of the "I" glyph on the CPU, write PNG
//! - `info` — print geometry and projection details

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use glyph_render_core::{RenderConfig, VertexData};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "glyph-render", about = "Draws the multi-colored capital I")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log setup steps (overrides RUST_LOG with `debug`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one frame and write a PNG snapshot.
    Render {
        /// Surface width in pixels (overrides the config file).
        #[arg(short = 'W', long)]
        width: Option<u32>,

        /// Surface height in pixels (overrides the config file).
        #[arg(short = 'H', long)]
        height: Option<u32>,

        /// JSON config file (width, height, clear_color, depth_test, bounds).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = "glyph.png")]
        output: PathBuf,
    },
    /// Print vertex count, bounds, and the projection matrix.
    Info {
        /// JSON config file to read bounds from.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig, CliError> {
    match path {
        None => Ok(RenderConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
            Ok(RenderConfig::from_json_str(&text)?)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            width,
            height,
            config,
            output,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(w) = width {
                config.width = w;
            }
            if let Some(h) = height {
                config.height = h;
            }
            if config.width == 0 || config.height == 0 {
                return Err(CliError::Input(
                    "width and height must be non-zero".to_string(),
                ));
            }

            let framebuffer = glyph_render_raster::render_glyph(&config)?;
            glyph_render_raster::snapshot::write_png(&framebuffer, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": config.width,
                    "height": config.height,
                    "vertices": VertexData::glyph().vertex_count(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered glyph ({}x{}) -> {}",
                    config.width,
                    config.height,
                    output.display()
                );
            }
        }
        Command::Info { config } => {
            let config = load_config(config.as_deref())?;
            let data = VertexData::glyph();
            let matrix = config.bounds.matrix().to_cols_array();

            if cli.json {
                let info = serde_json::json!({
                    "vertices": data.vertex_count(),
                    "triangles": data.triangle_count(),
                    "bounds": config.bounds,
                    "projection": matrix,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                let b = config.bounds;
                println!("Vertices:  {}", data.vertex_count());
                println!("Triangles: {}", data.triangle_count());
                println!(
                    "Bounds:    x [{}, {}], y [{}, {}], z [{}, {}]",
                    b.left, b.right, b.bottom, b.top, b.near, b.far
                );
                println!("Projection (column-major):");
                for column in matrix.chunks(4) {
                    println!("  {column:?}");
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            eprintln!("{}", serde_json::to_string_pretty(&e.to_json()).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
