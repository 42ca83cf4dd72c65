//! Frame timing: delta time production and frame-rate pacing.

use std::time::{Duration, Instant};

use brickyard_core::enums::TimingMode;

use crate::config::TimingConfig;

#[derive(Debug)]
pub struct FrameClock {
    mode: TimingMode,
    fixed_dt: f32,
    max_dt: f32,
    frame_duration: Option<Duration>,
    last_frame: Option<Instant>,
    next_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new(config: &TimingConfig) -> Self {
        Self {
            mode: config.mode,
            fixed_dt: config.fixed_dt,
            max_dt: config.max_dt,
            frame_duration: config
                .target_fps
                .map(|fps| Duration::from_secs_f64(1.0 / f64::from(fps))),
            last_frame: None,
            next_frame: None,
        }
    }

    /// Seconds elapsed since the previous call.
    ///
    /// `Fixed` always reports the configured step. `Measured` reports wall
    /// time, clamped to `max_dt`; the first frame reports the fixed step.
    pub fn delta(&mut self) -> f32 {
        match self.mode {
            TimingMode::Fixed => self.fixed_dt,
            TimingMode::Measured => {
                let now = Instant::now();
                let dt = self
                    .last_frame
                    .map(|last| (now - last).as_secs_f32())
                    .unwrap_or(self.fixed_dt);
                self.last_frame = Some(now);
                dt.min(self.max_dt)
            }
        }
    }

    /// Sleep until the next frame is due. No-op without a target rate.
    pub fn pace(&mut self) {
        let Some(frame) = self.frame_duration else {
            return;
        };
        let now = Instant::now();
        let next = self.next_frame.unwrap_or(now) + frame;
        if next > now {
            std::thread::sleep(next - now);
            self.next_frame = Some(next);
        } else if now - next > frame * 2 {
            // Too far behind; resync instead of spiralling to catch up.
            self.next_frame = Some(now);
        } else {
            self.next_frame = Some(next);
        }
    }
}
