//! Per-frame input state folded from backend events.

use std::collections::HashSet;

use brickyard_core::enums::Key;
use brickyard_core::events::InputEvent;

/// Keys held across frames, keys pressed this frame, and whether the host
/// asked the loop to stop. Event systems read this; nothing writes it but
/// the game loop.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget edge-triggered state from the previous frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                if self.held.insert(key) {
                    self.pressed.insert(key);
                }
                if key == Key::Escape {
                    self.quit = true;
                }
            }
            InputEvent::KeyUp { key } => {
                self.held.remove(&key);
            }
            InputEvent::Quit => self.quit = true,
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// True only on the frame the key went down.
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// -1 for Left, +1 for Right, 0 for neither or both.
    pub fn horizontal_axis(&self) -> f32 {
        axis(self.is_held(Key::Left), self.is_held(Key::Right))
    }

    /// -1 for Up, +1 for Down (screen space), 0 for neither or both.
    pub fn vertical_axis(&self) -> f32 {
        axis(self.is_held(Key::Up), self.is_held(Key::Down))
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}
