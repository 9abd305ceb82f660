#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the lock funnel visualization.

mod headless;
mod scene;
mod settings;

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use lockfunnel_core::Command;
use lockfunnel_rendering::{palette, Presentation, RenderingBackend};
use lockfunnel_rendering_macroquad::MacroquadBackend;
use lockfunnel_world::{self as world, World};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use self::settings::Settings;

/// Command-line arguments accepted by the `lockfunnel` binary.
#[derive(Debug, Parser)]
#[command(name = "lockfunnel", about = "Gun lock suicide prevention funnel")]
struct Args {
    /// TOML file overriding capacity, timing, parameters and canvas size.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
    /// Seed for spawn positions; overrides the settings file.
    #[arg(long)]
    seed: Option<u64>,
    /// Enables debug logging and the grid and crosshair overlay.
    #[arg(long)]
    debug: bool,
    /// Synchronises presentation with the display refresh rate.
    #[arg(long)]
    vsync: bool,
    /// Logs the frame rate once per second.
    #[arg(long)]
    show_fps: bool,
    /// Runs the given number of frames without opening a window.
    #[arg(long, value_name = "N")]
    headless_frames: Option<u32>,
    /// Frame duration used by the headless driver.
    #[arg(long, value_name = "MS", default_value_t = 16)]
    frame_ms: u64,
}

/// Entry point for the lock funnel command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug)?;

    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    }
    .with_seed(args.seed);

    let mut world = World::with_config(settings.world_config());
    info!(
        capacity = settings.capacity,
        seed = settings.seed,
        "world initialised"
    );

    if let Some(frames) = args.headless_frames {
        headless::run(&mut world, frames, Duration::from_millis(args.frame_ms)).log();
        return Ok(());
    }

    let scene = scene::build_scene(&world, args.debug).context("failed to build scene")?;
    let presentation = Presentation::new("Gun lock funnel", palette::BACKGROUND, scene);

    let backend = MacroquadBackend::new().with_show_fps(args.show_fps);
    let backend = if args.vsync {
        backend.with_vsync(true)
    } else {
        backend
    };

    let mut events = Vec::new();
    backend.run(presentation, move |dt, input, scene| {
        for event in input.pointer_events {
            world::apply(&mut world, Command::Pointer { event }, &mut events);
        }
        world::apply(&mut world, Command::Tick { dt }, &mut events);
        events.clear();
        scene::refresh_scene(&world, scene);
    })
}

fn init_tracing(debug: bool) -> Result<()> {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    Ok(())
}
