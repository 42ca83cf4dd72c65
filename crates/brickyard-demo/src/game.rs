//! Assembles the demo: one scene, its setup system, and the per-frame
//! systems in the order they must run.

use brickyard_core::types::{Bounds, Color};
use brickyard_engine::{Game, GameConfig, Scene, SceneId};

use crate::systems::collision::{ColliderResetSystem, EnemyCollisionSystem, PaddleColliderSystem};
use crate::systems::input::{AutopilotSystem, PaddleInputSystem};
use crate::systems::movement::MovementSystem;
use crate::systems::outcome::{EnemyCheckSystem, LoseSystem};
use crate::systems::render::RectRenderSystem;
use crate::systems::walls::{PaddleWallSystem, WallHitSystem};
use crate::world_setup::SpawnSetupSystem;

pub const SCENE_NAME: &str = "breakout";

/// Who steers the paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Controls {
    /// Left/Right keys from the backend.
    #[default]
    Keyboard,
    /// The paddle follows the ball on its own.
    Autopilot,
}

/// Build a ready-to-run demo game from `config`.
///
/// Update systems are registered so that collision and boundary checks see
/// this frame's projected positions before `MovementSystem` applies them,
/// and the win check sees the frame's collisions.
pub fn build_game(config: GameConfig, controls: Controls) -> Game {
    let bounds = Bounds::new(config.width, config.height);
    let seed = config.seed;
    let scene = Scene::new(SCENE_NAME);
    let id = scene.id();

    let mut game = Game::new(config);
    game.set_scene(scene);
    register_systems(&mut game, id, bounds, seed, controls);
    game
}

fn register_systems(game: &mut Game, id: SceneId, bounds: Bounds, seed: u64, controls: Controls) {
    game.add_setup_system(id, SpawnSetupSystem::new(bounds, seed));

    match controls {
        Controls::Keyboard => game.add_event_system(id, PaddleInputSystem),
        Controls::Autopilot => game.add_event_system(id, AutopilotSystem),
    };

    game.add_update_system(id, ColliderResetSystem)
        .add_update_system(id, PaddleColliderSystem)
        .add_update_system(id, LoseSystem::new(bounds))
        .add_update_system(id, PaddleWallSystem::new(bounds))
        .add_update_system(id, EnemyCollisionSystem::default())
        .add_update_system(id, WallHitSystem::new(bounds))
        .add_update_system(id, MovementSystem)
        .add_update_system(id, EnemyCheckSystem);

    game.add_render_system(id, RectRenderSystem::new(Color::BLACK));
}
