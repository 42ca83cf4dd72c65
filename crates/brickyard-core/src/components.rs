//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Human-readable label given at creation time. Not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

/// Solid rectangle drawn at the entity's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

/// Collider for the bouncing ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallCollider {
    pub width: i32,
    pub height: i32,
    /// Set once the ball has been reflected by a collision this frame.
    /// Cleared at the start of every frame.
    pub hit: bool,
    /// Inactive colliders are ignored by every collision system.
    pub active: bool,
}

/// Collider for the player's paddle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleCollider {
    pub width: i32,
    pub height: i32,
}

/// Marks an entity as steerable by the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub enabled: bool,
    /// Horizontal speed while a direction key is held (pixels/s).
    pub speed: f32,
}

/// A brick the ball has to clear to win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyCollider {
    pub destroyed: bool,
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Sprite {
    pub fn new(width: i32, height: i32, color: Color) -> Self {
        Self {
            width,
            height,
            color,
        }
    }
}

impl BallCollider {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            hit: false,
            active: true,
        }
    }
}

impl PaddleCollider {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Player {
    pub fn new(enabled: bool, speed: f32) -> Self {
        Self { enabled, speed }
    }
}
