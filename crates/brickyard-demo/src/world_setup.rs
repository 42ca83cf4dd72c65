//! Entity spawn factories for the demo scene.
//!
//! Creates the paddle, the ball and a row of enemies with their component
//! bundles. Positions are derived from the playfield bounds.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use brickyard_core::components::{BallCollider, EnemyCollider, PaddleCollider, Player, Sprite};
use brickyard_core::constants::*;
use brickyard_core::types::{Bounds, Color, Velocity};
use brickyard_engine::{EngineError, Entity, Scene, SetupSystem};

pub const PADDLE_NAME: &str = "paddle";
pub const BALL_NAME: &str = "ball";
pub const ENEMY_NAME: &str = "enemy";

/// Enemy colors, left to right.
const ENEMY_COLORS: [Color; ENEMY_COUNT] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::BLUE,
    Color::BLUE,
    Color::BLUE,
];

/// Spawn the player's paddle centered horizontally near the bottom edge.
pub fn spawn_paddle(scene: &mut Scene, bounds: Bounds) -> Result<Entity, EngineError> {
    let x = (bounds.width / 2) as f32;
    let y = (bounds.height - PADDLE_OFFSET_Y) as f32;
    let paddle = scene.create_entity(PADDLE_NAME, x, y);
    paddle.add_components(
        scene,
        (
            Velocity::default(),
            Sprite::new(PADDLE_WIDTH, PADDLE_HEIGHT, Color::RED),
            PaddleCollider::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            Player::new(true, PADDLE_SPEED),
        ),
    )?;
    Ok(paddle)
}

/// Spawn the ball at its start position moving down and to the left.
/// `vx_offset` is added to the starting horizontal speed.
pub fn spawn_ball(scene: &mut Scene, vx_offset: f32) -> Result<Entity, EngineError> {
    let ball = scene.create_entity(BALL_NAME, BALL_START_X, BALL_START_Y);
    ball.add_components(
        scene,
        (
            Velocity::new(BALL_START_VX + vx_offset, BALL_START_VY),
            Sprite::new(BALL_SIZE, BALL_SIZE, Color::BLUE),
            BallCollider::new(BALL_SIZE, BALL_SIZE),
        ),
    )?;
    Ok(ball)
}

/// Spawn the row of enemies along the top edge.
pub fn spawn_enemies(scene: &mut Scene) -> Result<Vec<Entity>, EngineError> {
    let mut enemies = Vec::with_capacity(ENEMY_COUNT);
    for (i, color) in ENEMY_COLORS.iter().enumerate() {
        let x = (i as i32 * ENEMY_SPACING) as f32;
        let enemy = scene.create_entity(ENEMY_NAME, x, 0.0);
        enemy.add_components(
            scene,
            (
                Sprite::new(ENEMY_WIDTH, ENEMY_HEIGHT, *color),
                EnemyCollider::default(),
            ),
        )?;
        enemies.push(enemy);
    }
    Ok(enemies)
}

/// Horizontal offset for the ball's starting speed. Seed 0 keeps the
/// classic start; any other seed draws a reproducible offset.
pub fn ball_jitter(seed: u64) -> f32 {
    if seed == 0 {
        return 0.0;
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.gen_range(-BALL_VX_JITTER..=BALL_VX_JITTER)
}

/// Check that the demo layout fits inside `bounds`.
fn check_layout(bounds: Bounds) -> Result<(), String> {
    let row_width = (ENEMY_COUNT as i32 - 1) * ENEMY_SPACING + ENEMY_WIDTH;
    if bounds.width < row_width {
        return Err(format!(
            "playfield width {} is narrower than the enemy row ({row_width})",
            bounds.width
        ));
    }
    let min_height = ENEMY_HEIGHT.max(BALL_SIZE) + PADDLE_OFFSET_Y + BALL_SIZE;
    if bounds.height < min_height {
        return Err(format!(
            "playfield height {} is below the minimum of {min_height}",
            bounds.height
        ));
    }
    Ok(())
}

/// Populates the demo scene: one paddle, one ball, and `ENEMY_COUNT`
/// enemies.
pub struct SpawnSetupSystem {
    bounds: Bounds,
    seed: u64,
}

impl SpawnSetupSystem {
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        Self { bounds, seed }
    }
}

impl SetupSystem for SpawnSetupSystem {
    fn run(&mut self, scene: &mut Scene) -> Result<(), EngineError> {
        check_layout(self.bounds).map_err(|reason| EngineError::setup(self.name(), reason))?;

        spawn_paddle(scene, self.bounds)?;
        let jitter = ball_jitter(self.seed);
        spawn_ball(scene, jitter)?;
        let enemies = spawn_enemies(scene)?;
        log::info!(
            "spawned paddle, ball (vx offset {jitter:+.1}) and {} enemies in '{}'",
            enemies.len(),
            scene.name()
        );
        Ok(())
    }
}
