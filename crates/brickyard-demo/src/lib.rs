//! Brick-breaking demo built on the brickyard engine.
//!
//! A paddle, a ball and a row of enemies. Clearing every enemy wins; letting
//! the ball reach the bottom edge loses.

pub mod game;
pub mod systems;
pub mod world_setup;

pub use brickyard_engine as engine;
pub use game::{build_game, Controls};
pub use systems::snapshot::{build_snapshot, SceneSnapshot};
