//! # Brick-Breaker Runtime
//!
//! Headless driver for the physics core. [`game::Game`] applies the rules on
//! top of a [`scene::Scene`]; [`input::InputState`] carries one tick of player
//! input. The `brickbreak` binary wires these to a scripted input source and
//! logs progress.

pub mod game;
pub mod input;

pub use game::{Game, GameConfig, TickEvents};
pub use input::{InputState, ScriptedInput};

/// The scene used when no `--scene` file is given.
pub const DEFAULT_SCENE: &str = include_str!("../../../scenes/breakout.json");
