//! Read-only view of a scene for logging, tests and `--dump-snapshot`.
//!
//! This system never modifies the world.

use hecs::World;
use serde::Serialize;

use brickyard_core::components::{EnemyCollider, Name, Sprite};
use brickyard_core::types::{Color, Position, Rect};
use brickyard_engine::Scene;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub scene: String,
    pub frame: u64,
    pub entities: Vec<EntitySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySnapshot {
    /// hecs slot id; stable for the life of the entity.
    pub id: u32,
    pub name: String,
    /// `None` when the entity has no position or no sprite.
    pub rect: Option<Rect>,
    pub color: Option<Color>,
    pub destroyed: bool,
}

pub fn build_snapshot(scene: &Scene, frame: u64) -> SceneSnapshot {
    SceneSnapshot {
        scene: scene.name().to_string(),
        frame,
        entities: build_entities(scene.world()),
    }
}

fn build_entities(world: &World) -> Vec<EntitySnapshot> {
    let mut entities: Vec<EntitySnapshot> = world
        .query::<(
            Option<&Name>,
            Option<&Position>,
            Option<&Sprite>,
            Option<&EnemyCollider>,
        )>()
        .iter()
        .map(|(entity, (name, pos, sprite, enemy))| EntitySnapshot {
            id: entity.id(),
            name: name.map(|n| n.as_str().to_string()).unwrap_or_default(),
            rect: pos
                .zip(sprite)
                .map(|(pos, sprite)| Rect::at(pos, sprite.width as f32, sprite.height as f32)),
            color: sprite.map(|s| s.color),
            destroyed: enemy.is_some_and(|e| e.destroyed),
        })
        .collect();
    entities.sort_by_key(|e| e.id);
    entities
}
