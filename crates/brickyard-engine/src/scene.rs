//! A scene: one component store plus the entities living in it.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use hecs::World;

use brickyard_core::components::Name;
use brickyard_core::types::Position;

use crate::entity::Entity;

static NEXT_SCENE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique scene identifier. Systems are bound to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(u64);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Owns exactly one hecs `World`. Every `Entity` created here operates
/// against that world and no other.
pub struct Scene {
    id: SceneId,
    name: String,
    world: World,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        let id = SceneId(NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed));
        let name = name.into();
        log::debug!("scene {id} '{name}' created");
        Self {
            id,
            name,
            world: World::new(),
        }
    }

    pub fn id(&self) -> SceneId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spawn a named entity at `(x, y)`. It starts with `Name` and `Position`.
    pub fn create_entity(&mut self, name: impl Into<String>, x: f32, y: f32) -> Entity {
        let name = name.into();
        let handle = self.world.spawn((Name(name), Position::new(x, y)));
        log::trace!("scene {}: spawned {:?} at ({x}, {y})", self.id, handle);
        Entity::new(self.id, handle)
    }

    /// Spawn an entity with no components at all.
    pub fn spawn_empty(&mut self) -> Entity {
        let handle = self.world.spawn(());
        Entity::new(self.id, handle)
    }

    /// Wrap a raw store handle (e.g. one yielded by a query) back into an
    /// `Entity`. `None` if the handle is not alive here.
    pub fn entity(&self, handle: hecs::Entity) -> Option<Entity> {
        self.world
            .contains(handle)
            .then(|| Entity::new(self.id, handle))
    }

    pub fn entity_count(&self) -> u32 {
        self.world.len()
    }

    /// Read access to the component store for queries.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Write access to the component store for queries and structural edits.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("entities", &self.world.len())
            .finish()
    }
}
