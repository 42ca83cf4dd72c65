//! Game configuration, loadable from TOML.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides:
//!
//! ```toml
//! title = "breakout"
//! max_frames = 3600
//!
//! [timing]
//! mode = "measured"
//! target_fps = 60
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use brickyard_core::constants::{DT, HEIGHT, MAX_DT, TITLE, WIDTH};
use brickyard_core::enums::TimingMode;

use crate::error::ConfigError;

/// Window/display and loop configuration for a `Game`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub timing: TimingConfig,
    /// Stop with `Termination::Closed` after this many frames.
    pub max_frames: Option<u64>,
    /// RNG seed for games that want seeded variation. 0 = no variation.
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub mode: TimingMode,
    /// Delta reported every frame in `Fixed` mode (seconds).
    pub fixed_dt: f32,
    /// Upper clamp for `Measured` deltas (seconds).
    pub max_dt: f32,
    /// Sleep between frames to hold this rate. `None` runs unpaced.
    pub target_fps: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            width: WIDTH,
            height: HEIGHT,
            timing: TimingConfig::default(),
            max_frames: None,
            seed: 0,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            mode: TimingMode::Fixed,
            fixed_dt: DT,
            max_dt: MAX_DT,
            target_fps: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let timing = &self.timing;
        if !(timing.fixed_dt.is_finite() && timing.fixed_dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "timing.fixed_dt must be a positive number, got {}",
                timing.fixed_dt
            )));
        }
        if !(timing.max_dt.is_finite() && timing.max_dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "timing.max_dt must be a positive number, got {}",
                timing.max_dt
            )));
        }
        if timing.target_fps == Some(0) {
            return Err(ConfigError::Invalid("timing.target_fps must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert_eq!(config.title, "SAMPLE");
    }

    #[test]
    fn partial_override() {
        let config = GameConfig::from_toml_str(
            r#"
            title = "custom"
            max_frames = 10

            [timing]
            mode = "measured"
            target_fps = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "custom");
        assert_eq!(config.max_frames, Some(10));
        assert_eq!(config.timing.mode, TimingMode::Measured);
        assert_eq!(config.timing.target_fps, Some(30));
        assert_eq!(config.timing.fixed_dt, DT);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_toml_str("width = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("[timing]\nfixed_dt = -1.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("[timing]\ntarget_fps = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            GameConfig::from_toml_str("width = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
