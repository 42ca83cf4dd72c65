//! The game: owns the active scene and the per-phase system lists, and
//! drives the frame loop.
//!
//! One frame is, strictly in this order and never interleaved:
//! poll events -> Event phase -> Update phase -> Render phase -> present.
//! Within a phase, systems run in registration order, each to completion.

use brickyard_core::enums::{GameOutcome, Phase};
use brickyard_core::events::InputEvent;

use crate::backend::Backend;
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::input::InputState;
use crate::render::Surface;
use crate::scene::{Scene, SceneId};
use crate::system::{Bound, EventSystem, RenderSystem, SetupSystem, UpdateSystem};
use crate::time::FrameClock;

/// Why `Game::run` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Won,
    Lost,
    /// Window closed, quit requested, or the frame limit was reached.
    Closed,
}

impl Termination {
    pub fn from_outcome(outcome: GameOutcome) -> Option<Self> {
        match outcome {
            GameOutcome::Continue => None,
            GameOutcome::Won => Some(Termination::Won),
            GameOutcome::Lost => Some(Termination::Lost),
        }
    }

    /// Conventional process exit status: 0 unless the game was lost.
    pub fn exit_code(self) -> u8 {
        match self {
            Termination::Won | Termination::Closed => 0,
            Termination::Lost => 1,
        }
    }
}

pub struct Game {
    config: GameConfig,
    scene: Option<Scene>,
    setup: Vec<Bound<dyn SetupSystem>>,
    event: Vec<Bound<dyn EventSystem>>,
    update: Vec<Bound<dyn UpdateSystem>>,
    render: Vec<Bound<dyn RenderSystem>>,
    input: InputState,
    frame: u64,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            scene: None,
            setup: Vec::new(),
            event: Vec::new(),
            update: Vec::new(),
            render: Vec::new(),
            input: InputState::new(),
            frame: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Make `scene` the active scene. The previously active scene, if any,
    /// is handed back; tearing it down is up to the caller.
    pub fn set_scene(&mut self, scene: Scene) -> Option<Scene> {
        log::debug!("active scene -> {} '{}'", scene.id(), scene.name());
        self.scene.replace(scene)
    }

    pub fn take_scene(&mut self) -> Option<Scene> {
        self.scene.take()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    pub fn add_setup_system<S: SetupSystem + 'static>(
        &mut self,
        scene: SceneId,
        system: S,
    ) -> &mut Self {
        log::debug!("registered setup system {} on {scene}", system.name());
        self.setup.push(Bound {
            scene,
            system: Box::new(system),
        });
        self
    }

    pub fn add_event_system<S: EventSystem + 'static>(
        &mut self,
        scene: SceneId,
        system: S,
    ) -> &mut Self {
        log::debug!("registered event system {} on {scene}", system.name());
        self.event.push(Bound {
            scene,
            system: Box::new(system),
        });
        self
    }

    pub fn add_update_system<S: UpdateSystem + 'static>(
        &mut self,
        scene: SceneId,
        system: S,
    ) -> &mut Self {
        log::debug!("registered update system {} on {scene}", system.name());
        self.update.push(Bound {
            scene,
            system: Box::new(system),
        });
        self
    }

    pub fn add_render_system<S: RenderSystem + 'static>(
        &mut self,
        scene: SceneId,
        system: S,
    ) -> &mut Self {
        log::debug!("registered render system {} on {scene}", system.name());
        self.render.push(Bound {
            scene,
            system: Box::new(system),
        });
        self
    }

    /// Systems registered for `phase`. Setup systems count until they run.
    pub fn system_count(&self, phase: Phase) -> usize {
        match phase {
            Phase::Setup => self.setup.len(),
            Phase::Event => self.event.len(),
            Phase::Update => self.update.len(),
            Phase::Render => self.render.len(),
        }
    }

    /// Frames executed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Run every pending setup system bound to the active scene, once, in
    /// registration order, then drop it. Setup systems bound to other scenes
    /// stay pending until their scene is active.
    ///
    /// The first failure aborts setup; there is no partial recovery.
    pub fn run_setup(&mut self) -> Result<(), EngineError> {
        let scene = self.scene.as_mut().ok_or(EngineError::NoActiveScene)?;
        let active = scene.id();

        let (ready, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.setup)
            .into_iter()
            .partition(|bound| bound.scene == active);
        self.setup = pending;

        for mut bound in ready {
            let name = bound.system.name();
            log::info!("setup: {name}");
            bound.system.run(scene).map_err(|err| match err {
                EngineError::Setup { .. } => err,
                other => EngineError::setup(name, other.to_string()),
            })?;
        }
        Ok(())
    }

    /// Start a new frame's input: clear edge state and fold in `events`.
    pub fn handle_events(&mut self, events: &[InputEvent]) {
        self.input.begin_frame();
        self.input.apply_all(events);
    }

    /// Execute one frame against the active scene.
    ///
    /// The Update phase stops at the first system reporting `Won`/`Lost`;
    /// later Update systems and the Render phase do not run that frame.
    pub fn tick(&mut self, dt: f32, surface: &mut dyn Surface) -> Result<GameOutcome, EngineError> {
        let scene = self.scene.as_mut().ok_or(EngineError::NoActiveScene)?;
        let active = scene.id();
        self.frame += 1;
        log::trace!("frame {} dt={dt:.4}", self.frame);

        for bound in self.event.iter_mut().filter(|b| b.scene == active) {
            bound.system.run(scene, &self.input, dt);
        }

        for bound in self.update.iter_mut().filter(|b| b.scene == active) {
            let outcome = bound.system.run(scene, dt);
            if outcome.is_terminal() {
                log::info!(
                    "{} reported {:?} on frame {}",
                    bound.system.name(),
                    outcome,
                    self.frame
                );
                return Ok(outcome);
            }
        }

        for bound in self.render.iter_mut().filter(|b| b.scene == active) {
            bound.system.run(scene, surface);
        }

        Ok(GameOutcome::Continue)
    }

    /// Run setup, then frames until the game is won or lost, the backend
    /// asks to quit, or `max_frames` is reached.
    pub fn run<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<Termination, EngineError> {
        log::info!(
            "starting '{}' ({}x{})",
            self.config.title,
            self.config.width,
            self.config.height
        );
        self.run_setup()?;

        let mut clock = FrameClock::new(&self.config.timing);
        loop {
            if self.config.max_frames.is_some_and(|limit| self.frame >= limit) {
                log::info!("frame limit reached after {} frames", self.frame);
                return Ok(Termination::Closed);
            }

            let events = backend.poll_events();
            self.handle_events(&events);
            if self.input.quit_requested() {
                log::info!("quit requested after {} frames", self.frame);
                return Ok(Termination::Closed);
            }

            let dt = clock.delta();
            let outcome = self.tick(dt, backend.surface())?;
            if let Some(termination) = Termination::from_outcome(outcome) {
                log::info!("game over after {} frames: {termination:?}", self.frame);
                return Ok(termination);
            }

            backend.present()?;
            clock.pace();
        }
    }
}
