//! Motif CLI
//!
//! Mount the components of a scene file, run a number of animation frames,
//! and print the generated styles.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use motif_theme::Theme;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod scene;

use scene::{Scene, Stage};

#[derive(Parser)]
#[command(name = "motif")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run a Motif animation scene and print its styles", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Scene file (TOML)
    scene: PathBuf,

    /// Number of frames to run after the initial one
    #[arg(short, long, default_value = "0")]
    frames: u32,

    /// Step advance applied to every component per frame
    #[arg(short = 'd', long, default_value = "0.25")]
    step_delta: f64,

    /// Built-in theme supplying the animators (standard, empty)
    #[arg(short, long, default_value = "standard")]
    theme: String,

    /// Output format
    #[arg(long, value_enum, default_value = "css")]
    format: Format,

    /// Print the styles after every frame instead of only the last one
    #[arg(long)]
    every_frame: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Contents of every style element in the document head
    Css,
    /// Style maps per component, by source
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let theme = Theme::by_name(&cli.theme)
        .with_context(|| format!("Unknown theme '{}'. Valid themes: standard, empty", cli.theme))?;
    let scene = Scene::load(&cli.scene)?;

    info!(
        "Running {} for {} frame(s) with theme {}",
        cli.scene.display(),
        cli.frames + 1,
        theme.name()
    );

    let mut stage = scene.build(theme);
    debug!(defaults = ?stage.store.keys(), "store seeded");
    for frame in 0..=cli.frames {
        if frame > 0 {
            stage.advance(cli.step_delta);
        }
        let report = stage.tick()?;
        debug!(
            frame,
            applied = report.applied,
            rule_blocks = report.rule_blocks,
            skipped = report.skipped,
            "frame flushed"
        );

        if cli.every_frame || frame == cli.frames {
            print_frame(&stage, frame, cli.format, cli.every_frame)?;
        }
    }

    stage.teardown();
    Ok(())
}

fn print_frame(stage: &Stage, frame: u32, format: Format, label: bool) -> Result<()> {
    match format {
        Format::Css => {
            if label {
                println!("/* frame {frame} */");
            }
            print!("{}", stage.document.head_css());
        }
        Format::Json => {
            let styles = stage.styles()?;
            let json = if label {
                serde_json::json!({ "frame": frame, "components": styles })
            } else {
                serde_json::to_value(&styles)?
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
