//! Kinematic integration system.
//!
//! Updates Position from Velocity each frame: position += velocity * dt.

use hecs::World;

use brickyard_core::enums::GameOutcome;
use brickyard_core::types::{Position, Velocity};
use brickyard_engine::{Scene, UpdateSystem};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}

pub struct MovementSystem;

impl UpdateSystem for MovementSystem {
    fn run(&mut self, scene: &mut Scene, dt: f32) -> GameOutcome {
        run(scene.world_mut(), dt);
        GameOutcome::Continue
    }
}
