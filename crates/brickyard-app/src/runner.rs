//! Headless run of the demo game.

use anyhow::{Context, Result};

use brickyard_demo::{build_game, build_snapshot, Controls, SceneSnapshot};
use brickyard_engine::{GameConfig, HeadlessBackend, Termination};

/// What a finished run produced.
#[derive(Debug)]
pub struct RunReport {
    pub termination: Termination,
    pub frames: u64,
    pub snapshot: Option<SceneSnapshot>,
}

/// Build the demo from `config`, run it to completion on a headless
/// backend, and snapshot the final scene.
pub fn run(config: GameConfig, controls: Controls) -> Result<RunReport> {
    let width = u32::try_from(config.width).context("window width")?;
    let height = u32::try_from(config.height).context("window height")?;
    let mut backend = HeadlessBackend::new(width, height);

    let mut game = build_game(config, controls);
    let termination = game.run(&mut backend)?;
    let frames = game.frame();
    log::info!(
        "{termination:?} after {frames} frames ({} presented)",
        backend.presented_frames()
    );

    let snapshot = game.scene().map(|scene| build_snapshot(scene, frames));
    Ok(RunReport {
        termination,
        frames,
        snapshot,
    })
}
