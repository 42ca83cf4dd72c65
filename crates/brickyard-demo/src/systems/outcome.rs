//! Win and lose checks. These are the only systems that end a game.

use hecs::World;

use brickyard_core::components::{EnemyCollider, Sprite};
use brickyard_core::enums::GameOutcome;
use brickyard_core::types::{Bounds, Position, Velocity};
use brickyard_engine::{Scene, UpdateSystem};

/// `Lost` if any moving sprite's projected bottom edge would pass the
/// bottom of the playfield this frame.
///
/// The check is predictive: it fires one frame before the sprite visibly
/// crosses. `walls::bounce` uses the same projection, so the two agree on
/// which frame the crossing happens.
pub fn check_lose(world: &mut World, bounds: Bounds, dt: f32) -> GameOutcome {
    for (_entity, (pos, vel, sprite)) in world.query_mut::<(&Position, &Velocity, &Sprite)>() {
        let (_, next_y) = pos.projected_pixels(vel, dt);
        if next_y + sprite.height > bounds.height {
            return GameOutcome::Lost;
        }
    }
    GameOutcome::Continue
}

/// `Won` once every enemy is destroyed. A scene with no enemies at all
/// counts as won.
pub fn check_win(world: &mut World) -> GameOutcome {
    let all_destroyed = world
        .query_mut::<&EnemyCollider>()
        .into_iter()
        .all(|(_, enemy)| enemy.destroyed);
    if all_destroyed {
        GameOutcome::Won
    } else {
        GameOutcome::Continue
    }
}

pub struct LoseSystem {
    bounds: Bounds,
}

impl LoseSystem {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl UpdateSystem for LoseSystem {
    fn run(&mut self, scene: &mut Scene, dt: f32) -> GameOutcome {
        check_lose(scene.world_mut(), self.bounds, dt)
    }
}

pub struct EnemyCheckSystem;

impl UpdateSystem for EnemyCheckSystem {
    fn run(&mut self, scene: &mut Scene, _dt: f32) -> GameOutcome {
        check_win(scene.world_mut())
    }
}
