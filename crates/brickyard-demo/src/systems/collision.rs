//! Ball collision systems: per-frame reset, paddle bounce, and enemy hits.
//!
//! Collisions are tested on the ball's projected rectangle, the same
//! look-ahead the wall systems use.

use hecs::{Entity, World};

use brickyard_core::components::{BallCollider, EnemyCollider, PaddleCollider, Sprite};
use brickyard_core::enums::GameOutcome;
use brickyard_core::types::{Position, Rect, Velocity};
use brickyard_engine::{Scene, UpdateSystem};

/// Clear last frame's `hit` flags.
pub fn reset(world: &mut World) {
    for (_entity, collider) in world.query_mut::<&mut BallCollider>() {
        collider.hit = false;
    }
}

/// Send the ball upward when its projected rectangle overlaps a paddle
/// while it is falling.
pub fn paddle_bounce(world: &mut World, dt: f32) {
    let paddles: Vec<Rect> = world
        .query_mut::<(&Position, &PaddleCollider)>()
        .into_iter()
        .map(|(_, (pos, paddle))| Rect::at(pos, paddle.width as f32, paddle.height as f32))
        .collect();

    for (_entity, (pos, vel, ball)) in
        world.query_mut::<(&Position, &mut Velocity, &mut BallCollider)>()
    {
        if !ball.active || vel.y <= 0.0 {
            continue;
        }
        let next = projected_rect(pos, vel, ball, dt);
        if paddles.iter().any(|paddle| next.overlaps(paddle)) {
            vel.y = -vel.y.abs();
            ball.hit = true;
        }
    }
}

/// Destroy every live enemy the ball is about to overlap.
///
/// A destroyed enemy keeps its `EnemyCollider` (flagged) so the win check
/// can see it, but loses its `Sprite`, so it is neither drawn nor collided
/// with again. The ball reflects vertically at most once per frame however
/// many enemies it clears. Returns the number of enemies destroyed.
pub fn enemy_hits(world: &mut World, dt: f32, hit_buffer: &mut Vec<Entity>) -> usize {
    hit_buffer.clear();

    let enemies: Vec<(Entity, Rect)> = world
        .query_mut::<(&Position, &Sprite, &EnemyCollider)>()
        .into_iter()
        .filter(|(_, (_, _, enemy))| !enemy.destroyed)
        .map(|(entity, (pos, sprite, _))| {
            (entity, Rect::at(pos, sprite.width as f32, sprite.height as f32))
        })
        .collect();

    for (_entity, (pos, vel, ball)) in
        world.query_mut::<(&Position, &mut Velocity, &mut BallCollider)>()
    {
        if !ball.active {
            continue;
        }
        let next = projected_rect(pos, vel, ball, dt);
        for (enemy, rect) in &enemies {
            if hit_buffer.contains(enemy) || !next.overlaps(rect) {
                continue;
            }
            hit_buffer.push(*enemy);
            if !ball.hit {
                vel.y = -vel.y;
                ball.hit = true;
            }
        }
    }

    for &enemy in hit_buffer.iter() {
        if let Ok(mut collider) = world.get::<&mut EnemyCollider>(enemy) {
            collider.destroyed = true;
        }
        let _ = world.remove_one::<Sprite>(enemy);
    }
    hit_buffer.len()
}

fn projected_rect(pos: &Position, vel: &Velocity, ball: &BallCollider, dt: f32) -> Rect {
    Rect::at(
        &pos.projected(vel, dt),
        ball.width as f32,
        ball.height as f32,
    )
}

pub struct ColliderResetSystem;

impl UpdateSystem for ColliderResetSystem {
    fn run(&mut self, scene: &mut Scene, _dt: f32) -> GameOutcome {
        reset(scene.world_mut());
        GameOutcome::Continue
    }
}

pub struct PaddleColliderSystem;

impl UpdateSystem for PaddleColliderSystem {
    fn run(&mut self, scene: &mut Scene, dt: f32) -> GameOutcome {
        paddle_bounce(scene.world_mut(), dt);
        GameOutcome::Continue
    }
}

#[derive(Default)]
pub struct EnemyCollisionSystem {
    hit_buffer: Vec<Entity>,
}

impl UpdateSystem for EnemyCollisionSystem {
    fn run(&mut self, scene: &mut Scene, dt: f32) -> GameOutcome {
        let destroyed = enemy_hits(scene.world_mut(), dt, &mut self.hit_buffer);
        if destroyed > 0 {
            log::debug!("{destroyed} enemy(s) destroyed");
        }
        GameOutcome::Continue
    }
}
