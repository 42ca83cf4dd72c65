//! Rectangle renderer: one filled rect per positioned sprite.

use brickyard_core::components::Sprite;
use brickyard_core::types::{Color, Position, Rect};
use brickyard_engine::{RenderSystem, Scene, Surface};

pub fn draw(scene: &Scene, surface: &mut dyn Surface, background: Color) {
    surface.clear(background);
    for (_entity, (pos, sprite)) in scene.world().query::<(&Position, &Sprite)>().iter() {
        let rect = Rect::at(pos, sprite.width as f32, sprite.height as f32);
        surface.fill_rect(rect, sprite.color);
    }
}

pub struct RectRenderSystem {
    background: Color,
}

impl RectRenderSystem {
    pub fn new(background: Color) -> Self {
        Self { background }
    }
}

impl Default for RectRenderSystem {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

impl RenderSystem for RectRenderSystem {
    fn run(&mut self, scene: &Scene, surface: &mut dyn Surface) {
        draw(scene, surface, self.background);
    }
}
