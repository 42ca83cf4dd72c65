//! Command-line arguments and how they override the loaded config.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use brickyard_demo::Controls;
use brickyard_engine::GameConfig;

#[derive(Debug, Parser)]
#[command(author, version, about = "Run the brickyard demo headless")]
pub struct Cli {
    /// TOML config file (defaults apply when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Seed for the ball's starting speed; 0 keeps the classic start
    #[arg(long)]
    pub seed: Option<u64>,

    /// Leave the paddle to keyboard input instead of the autopilot
    #[arg(long)]
    pub manual: bool,

    /// Print the final scene snapshot as JSON
    #[arg(long)]
    pub dump_snapshot: bool,
}

impl Cli {
    /// Load the config file, if any, and apply command-line overrides.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(frames) = self.frames {
            config.max_frames = Some(frames);
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn controls(&self) -> Controls {
        if self.manual {
            Controls::Keyboard
        } else {
            Controls::Autopilot
        }
    }
}
