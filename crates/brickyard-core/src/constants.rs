//! Engine defaults and demo tuning parameters.

/// Default frame rate (Hz) for the fixed-step clock.
pub const FRAME_RATE: u32 = 60;

/// Seconds per frame at the default frame rate.
pub const DT: f32 = 1.0 / FRAME_RATE as f32;

/// Largest delta the measured clock will report, so a stall never moves an
/// entity further than this many seconds' worth in one step.
pub const MAX_DT: f32 = 0.25;

// --- World bounds ---

/// Playfield width in pixels.
pub const WIDTH: i32 = 1024;

/// Playfield height in pixels.
pub const HEIGHT: i32 = 768;

/// Default window title.
pub const TITLE: &str = "SAMPLE";

// --- Paddle ---

pub const PADDLE_WIDTH: i32 = 200;
pub const PADDLE_HEIGHT: i32 = 30;
/// Distance from the paddle's top edge to the bottom of the playfield.
pub const PADDLE_OFFSET_Y: i32 = 40;
pub const PADDLE_SPEED: f32 = 500.0;

// --- Ball ---

pub const BALL_SIZE: i32 = 100;
pub const BALL_START_X: f32 = 100.0;
pub const BALL_START_Y: f32 = 0.0;
pub const BALL_START_VX: f32 = -400.0;
pub const BALL_START_VY: f32 = 400.0;
/// Maximum seeded deviation applied to the ball's starting horizontal speed.
pub const BALL_VX_JITTER: f32 = 80.0;

// --- Enemies ---

pub const ENEMY_COUNT: usize = 6;
pub const ENEMY_WIDTH: i32 = 100;
pub const ENEMY_HEIGHT: i32 = 50;
/// Horizontal distance between consecutive enemies' left edges.
pub const ENEMY_SPACING: i32 = 150;
