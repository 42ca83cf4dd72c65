//! Host backend seam: event polling, the drawing surface, and presenting a
//! finished frame.
//!
//! Windowing backends live outside this crate. `HeadlessBackend` drives the
//! loop without a display, from a script of per-frame input events.

use std::collections::VecDeque;

use brickyard_core::events::InputEvent;

use crate::error::EngineError;
use crate::render::{FrameBuffer, Surface};

pub trait Backend {
    /// Drain the events that arrived since the previous poll.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Surface the Render phase draws into this frame.
    fn surface(&mut self) -> &mut dyn Surface;

    /// Display the completed frame.
    fn present(&mut self) -> Result<(), EngineError>;
}

/// Offscreen backend rendering into a `FrameBuffer`.
#[derive(Debug)]
pub struct HeadlessBackend {
    frame_buffer: FrameBuffer,
    script: VecDeque<Vec<InputEvent>>,
    quit_after: Option<u64>,
    polls: u64,
    presented: u64,
}

impl HeadlessBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame_buffer: FrameBuffer::new(width, height),
            script: VecDeque::new(),
            quit_after: None,
            polls: 0,
            presented: 0,
        }
    }

    /// Events to deliver, one entry per frame in order. Once the script runs
    /// out every poll returns nothing.
    pub fn with_script(mut self, frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        self.script.extend(frames);
        self
    }

    /// Emit `Quit` on the poll after `frames` frames, as if the window closed.
    pub fn quit_after(mut self, frames: u64) -> Self {
        self.quit_after = Some(frames);
        self
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub fn presented_frames(&self) -> u64 {
        self.presented
    }
}

impl Backend for HeadlessBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = self.script.pop_front().unwrap_or_default();
        if self.quit_after.is_some_and(|limit| self.polls >= limit) {
            events.push(InputEvent::Quit);
        }
        self.polls += 1;
        events
    }

    fn surface(&mut self) -> &mut dyn Surface {
        &mut self.frame_buffer
    }

    fn present(&mut self) -> Result<(), EngineError> {
        self.presented += 1;
        Ok(())
    }
}
