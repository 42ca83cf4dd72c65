//! Scene, entity and system scheduling layer for brickyard.
//!
//! A `Game` owns one active `Scene` (a hecs world) and ordered lists of
//! Setup, Event, Update and Render systems. Backends plug in through the
//! `Backend` and `Surface` traits; `HeadlessBackend` runs without a display.

pub mod backend;
pub mod config;
pub mod entity;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod scene;
pub mod system;
pub mod time;

pub use brickyard_core as core;
pub use backend::{Backend, HeadlessBackend};
pub use config::{GameConfig, TimingConfig};
pub use entity::Entity;
pub use error::{ConfigError, EngineError};
pub use game::{Game, Termination};
pub use input::InputState;
pub use render::{FrameBuffer, Surface};
pub use scene::{Scene, SceneId};
pub use system::{EventSystem, RenderSystem, SetupSystem, UpdateSystem};
