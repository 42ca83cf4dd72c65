//! External input events delivered by the host backend.

use serde::{Deserialize, Serialize};

use crate::enums::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    KeyDown { key: Key },
    KeyUp { key: Key },
    /// Window closed or the host asked the loop to stop.
    Quit,
}
