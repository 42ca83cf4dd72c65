//! Enumeration types shared by the engine and games built on it.

use serde::{Deserialize, Serialize};

/// Result of a single Update system run.
///
/// `Won` and `Lost` are terminal: the game loop stops after the Update phase
/// in which one of them is first reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    Continue,
    Won,
    Lost,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Continue)
    }
}

/// The four scheduling phases. Declaration order is execution order within a
/// frame; `Setup` runs once before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Event,
    Update,
    Render,
}

/// Keys the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
}

/// How the frame clock produces delta time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingMode {
    /// Constant delta every frame. Deterministic.
    #[default]
    Fixed,
    /// Wall-clock time since the previous frame.
    Measured,
}
