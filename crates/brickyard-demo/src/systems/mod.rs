//! Systems for the brick-breaking demo.
//!
//! Each module exposes a plain function over `&mut World` (or `&World`) that
//! does the work, plus a thin system type that binds it to a phase.
//! Systems do not own simulation state; everything lives in components.

pub mod collision;
pub mod input;
pub mod movement;
pub mod outcome;
pub mod render;
pub mod snapshot;
pub mod walls;
