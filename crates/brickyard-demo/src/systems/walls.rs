//! Playfield boundary reactions.
//!
//! Both systems look at where an entity will be after this frame's
//! movement, not where it is now, so they must run before `movement`.

use hecs::World;

use brickyard_core::components::{PaddleCollider, Sprite};
use brickyard_core::enums::GameOutcome;
use brickyard_core::types::{Bounds, Position, Velocity};
use brickyard_engine::{Scene, UpdateSystem};

/// Reflect the velocity of any sprite whose projected rectangle would leave
/// the playfield: vx flips on the left/right walls, vy on the top/bottom.
pub fn bounce(world: &mut World, bounds: Bounds, dt: f32) {
    for (_entity, (pos, vel, sprite)) in
        world.query_mut::<(&Position, &mut Velocity, &Sprite)>()
    {
        let (next_x, next_y) = pos.projected_pixels(vel, dt);
        if next_x < 0 || next_x + sprite.width > bounds.width {
            vel.x = -vel.x;
        }
        if next_y < 0 || next_y + sprite.height > bounds.height {
            vel.y = -vel.y;
        }
    }
}

/// Shorten the paddle's horizontal step so it stops flush with a wall
/// instead of crossing it.
pub fn clamp_paddle(world: &mut World, bounds: Bounds, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for (_entity, (pos, vel, paddle)) in
        world.query_mut::<(&Position, &mut Velocity, &PaddleCollider)>()
    {
        let (next_x, _) = pos.projected_pixels(vel, dt);
        if next_x < 0 {
            vel.x = -pos.x / dt;
        } else if next_x + paddle.width > bounds.width {
            vel.x = ((bounds.width - paddle.width) as f32 - pos.x) / dt;
        }
    }
}

pub struct WallHitSystem {
    bounds: Bounds,
}

impl WallHitSystem {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl UpdateSystem for WallHitSystem {
    fn run(&mut self, scene: &mut Scene, dt: f32) -> GameOutcome {
        bounce(scene.world_mut(), self.bounds, dt);
        GameOutcome::Continue
    }
}

pub struct PaddleWallSystem {
    bounds: Bounds,
}

impl PaddleWallSystem {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl UpdateSystem for PaddleWallSystem {
    fn run(&mut self, scene: &mut Scene, dt: f32) -> GameOutcome {
        clamp_paddle(scene.world_mut(), self.bounds, dt);
        GameOutcome::Continue
    }
}
