//! Event-phase systems that steer the player's paddle.

use hecs::World;

use brickyard_core::components::{BallCollider, Player, Sprite};
use brickyard_core::types::{Position, Velocity};
use brickyard_engine::{EventSystem, InputState, Scene};

/// Set each enabled player's horizontal velocity from the Left/Right keys.
pub fn steer(world: &mut World, input: &InputState) {
    let axis = input.horizontal_axis();
    for (_entity, (vel, player)) in world.query_mut::<(&mut Velocity, &Player)>() {
        if player.enabled {
            vel.x = axis * player.speed;
        }
    }
}

/// Steer each enabled player so its center follows the first active ball's
/// center, never faster than the player's speed.
pub fn follow_ball(world: &mut World, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    let target = world
        .query_mut::<(&Position, &BallCollider)>()
        .into_iter()
        .find(|(_, (_, ball))| ball.active)
        .map(|(_, (pos, ball))| pos.x + ball.width as f32 * 0.5);
    let Some(target) = target else {
        return;
    };

    for (_entity, (pos, vel, player, sprite)) in world.query_mut::<(
        &Position,
        &mut Velocity,
        &Player,
        &Sprite,
    )>() {
        if !player.enabled {
            continue;
        }
        let center = pos.x + sprite.width as f32 * 0.5;
        vel.x = ((target - center) / dt).clamp(-player.speed, player.speed);
    }
}

/// Keyboard control.
pub struct PaddleInputSystem;

impl EventSystem for PaddleInputSystem {
    fn run(&mut self, scene: &mut Scene, input: &InputState, _dt: f32) {
        steer(scene.world_mut(), input);
    }
}

/// Unattended control for headless runs.
pub struct AutopilotSystem;

impl EventSystem for AutopilotSystem {
    fn run(&mut self, scene: &mut Scene, _input: &InputState, dt: f32) {
        follow_ball(scene.world_mut(), dt);
    }
}
