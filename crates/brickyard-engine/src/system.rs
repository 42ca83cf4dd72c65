//! The four system kinds, one trait per phase.
//!
//! Systems hold no simulation state between runs; everything that must
//! survive a frame lives in components. Each registered system is bound to
//! one scene and is only ever handed that scene.
//!
//! Closures and functions with the matching signature are systems too.

use brickyard_core::enums::GameOutcome;

use crate::error::EngineError;
use crate::input::InputState;
use crate::render::Surface;
use crate::scene::{Scene, SceneId};

/// Runs once before the first frame to populate the scene.
pub trait SetupSystem {
    fn run(&mut self, scene: &mut Scene) -> Result<(), EngineError>;

    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Runs every frame before the Update phase, turning input into component
/// changes.
pub trait EventSystem {
    fn run(&mut self, scene: &mut Scene, input: &InputState, dt: f32);

    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Runs every frame; advances the simulation by `dt` seconds and may end the
/// game by returning a terminal outcome.
pub trait UpdateSystem {
    fn run(&mut self, scene: &mut Scene, dt: f32) -> GameOutcome;

    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Runs every frame after the Update phase. Gets the scene read-only.
pub trait RenderSystem {
    fn run(&mut self, scene: &Scene, surface: &mut dyn Surface);

    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<F> SetupSystem for F
where
    F: FnMut(&mut Scene) -> Result<(), EngineError>,
{
    fn run(&mut self, scene: &mut Scene) -> Result<(), EngineError> {
        self(scene)
    }
}

impl<F> EventSystem for F
where
    F: FnMut(&mut Scene, &InputState, f32),
{
    fn run(&mut self, scene: &mut Scene, input: &InputState, dt: f32) {
        self(scene, input, dt)
    }
}

impl<F> UpdateSystem for F
where
    F: FnMut(&mut Scene, f32) -> GameOutcome,
{
    fn run(&mut self, scene: &mut Scene, dt: f32) -> GameOutcome {
        self(scene, dt)
    }
}

impl<F> RenderSystem for F
where
    F: FnMut(&Scene, &mut dyn Surface),
{
    fn run(&mut self, scene: &Scene, surface: &mut dyn Surface) {
        self(scene, surface)
    }
}

/// A system plus the scene it is bound to.
pub(crate) struct Bound<S: ?Sized> {
    pub scene: SceneId,
    pub system: Box<S>,
}

/// `a::b::Foo<c::Bar>` -> `Foo<c::Bar>`.
fn short_type_name(full: &'static str) -> &'static str {
    let generic_start = full.find('<').unwrap_or(full.len());
    match full[..generic_start].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
