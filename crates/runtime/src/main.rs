//! # Brick-Breaker Demo
//!
//! Loads a scene, then runs the game loop headless with scripted input and
//! logs progress. Run with `--verbose` to see per-contact logging.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use runtime::{Game, GameConfig, ScriptedInput, DEFAULT_SCENE};
use scene::SceneFile;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Scene description (JSON). Defaults to the bundled breakout scene.
    #[clap(short, long)]
    scene: Option<PathBuf>,

    /// Number of ticks to simulate
    #[clap(short, long, default_value_t = 600)]
    ticks: u64,

    /// Log contacts and removals
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let json = match &args.scene {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?,
        None => DEFAULT_SCENE.to_owned(),
    };
    let scene = json.parse::<SceneFile>()?.into_scene()?;
    info!(
        entities = scene.entities.len(),
        bodies = scene.sim.store().len(),
        "scene loaded"
    );

    let mut game = Game::new(scene, GameConfig::default())?;
    let mut input = ScriptedInput::default();

    info!("Starting simulation loop for {} ticks...", args.ticks);
    for (i, state) in (0..args.ticks).zip(&mut input) {
        let events = game.tick(&state)?;
        if (i + 1) % 50 == 0 {
            info!(
                tick = events.tick,
                score = game.score(),
                bricks_left = game.bricks_left(),
                "progress"
            );
        }
        if game.is_cleared() {
            info!(tick = events.tick, "all bricks destroyed");
            break;
        }
    }

    info!(
        score = game.score(),
        bricks_left = game.bricks_left(),
        instances = game.render_instances().len(),
        "simulation finished"
    );
    println!("score={} bricks_left={}", game.score(), game.bricks_left());
    Ok(())
}
