//! Error types for the engine layer.
//!
//! Game outcomes (`Won`/`Lost`) are not errors and never appear here.

use thiserror::Error;

use crate::scene::SceneId;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no active scene; call Game::set_scene before running")]
    NoActiveScene,

    #[error("entity {entity:?} is no longer alive in scene {scene}")]
    StaleEntity { scene: SceneId, entity: hecs::Entity },

    #[error("entity from scene {owner} used against scene {scene}")]
    ForeignEntity { owner: SceneId, scene: SceneId },

    #[error("setup system `{system}` failed: {reason}")]
    Setup { system: String, reason: String },

    #[error("backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl EngineError {
    /// Convenience for setup systems reporting a broken precondition.
    pub fn setup(system: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::Setup {
            system: system.into(),
            reason: reason.into(),
        }
    }
}
