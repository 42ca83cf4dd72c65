//! Entity handles.
//!
//! An `Entity` is a copyable `(scene, handle)` pair. It does not own the
//! scene and it is not RAII: the entity lives until `destroy` is called,
//! not until the handle is dropped. Handles that outlive `destroy` are
//! detected through the store's generation counter and rejected with
//! `EngineError::StaleEntity`.

use hecs::{Component, ComponentError, DynamicBundle};

use crate::error::EngineError;
use crate::scene::{Scene, SceneId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    scene: SceneId,
    handle: hecs::Entity,
}

impl Entity {
    pub(crate) fn new(scene: SceneId, handle: hecs::Entity) -> Self {
        Self { scene, handle }
    }

    /// The raw store handle, for use with `scene.world()` queries.
    pub fn handle(&self) -> hecs::Entity {
        self.handle
    }

    pub fn scene_id(&self) -> SceneId {
        self.scene
    }

    pub fn is_alive(&self, scene: &Scene) -> bool {
        self.scene == scene.id() && scene.world().contains(self.handle)
    }

    /// Attach `component`. An existing component of the same type is
    /// overwritten (last write wins).
    pub fn add_component<T: Component>(
        &self,
        scene: &mut Scene,
        component: T,
    ) -> Result<(), EngineError> {
        self.check(scene)?;
        scene
            .world_mut()
            .insert_one(self.handle, component)
            .map_err(|_| self.stale())
    }

    /// Attach several components at once.
    pub fn add_components(
        &self,
        scene: &mut Scene,
        components: impl DynamicBundle,
    ) -> Result<(), EngineError> {
        self.check(scene)?;
        scene
            .world_mut()
            .insert(self.handle, components)
            .map_err(|_| self.stale())
    }

    /// Detach the `T` component. Absent is not an error: returns `Ok(None)`.
    pub fn remove_component<T: Component>(
        &self,
        scene: &mut Scene,
    ) -> Result<Option<T>, EngineError> {
        self.check(scene)?;
        match scene.world_mut().remove_one::<T>(self.handle) {
            Ok(component) => Ok(Some(component)),
            Err(ComponentError::MissingComponent(_)) => Ok(None),
            Err(ComponentError::NoSuchEntity) => Err(self.stale()),
        }
    }

    pub fn has<T: Component>(&self, scene: &Scene) -> bool {
        self.is_alive(scene) && scene.world().get::<&T>(self.handle).is_ok()
    }

    /// Copy of the `T` component, if attached.
    pub fn get<T: Component + Clone>(&self, scene: &Scene) -> Result<Option<T>, EngineError> {
        self.check(scene)?;
        match scene.world().get::<&T>(self.handle) {
            Ok(component) => Ok(Some(T::clone(&component))),
            Err(ComponentError::MissingComponent(_)) => Ok(None),
            Err(ComponentError::NoSuchEntity) => Err(self.stale()),
        }
    }

    /// Release the handle and every attached component.
    pub fn destroy(self, scene: &mut Scene) -> Result<(), EngineError> {
        self.check(scene)?;
        scene
            .world_mut()
            .despawn(self.handle)
            .map_err(|_| self.stale())?;
        log::trace!("scene {}: destroyed {:?}", self.scene, self.handle);
        Ok(())
    }

    fn check(&self, scene: &Scene) -> Result<(), EngineError> {
        if self.scene != scene.id() {
            return Err(EngineError::ForeignEntity {
                owner: self.scene,
                scene: scene.id(),
            });
        }
        if !scene.world().contains(self.handle) {
            return Err(self.stale());
        }
        Ok(())
    }

    fn stale(&self) -> EngineError {
        EngineError::StaleEntity {
            scene: self.scene,
            entity: self.handle,
        }
    }
}
