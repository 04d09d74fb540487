//! Flappy VGA - A Flappy Bird clone for a double-buffered framebuffer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scrolling, collisions, modes)
//! - `renderer`: Framebuffer primitives, digit glyphs and scene composition
//! - `platform`: Display, input and text-overlay collaborators
//! - `driver`: The vsync-gated frame loop
//! - `settings`: Policy presets and run configuration

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::FrameDriver;
pub use settings::{Revision, Settings};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const RESOLUTION_X: i32 = 320;
    pub const RESOLUTION_Y: i32 = 240;

    /// Text overlay grid (one cell is 4x4 pixels)
    pub const TEXT_COLUMNS: usize = 80;
    pub const TEXT_ROWS: usize = 60;

    /// First row of the grass strip; the play band is everything above it
    pub const PLAY_BAND_BOTTOM: i32 = 200;
    pub const GRASS_HEIGHT: i32 = 8;
    /// First row of the sand band
    pub const GROUND_TOP: i32 = PLAY_BAND_BOTTOM + GRASS_HEIGHT;

    /// Pipes
    pub const NUM_PIPES: usize = 4;
    pub const PIPE_WIDTH: i32 = 30;
    pub const PIPE_VOID_HEIGHT: i32 = 60;
    pub const PIPE_SPACING: i32 = 110;
    pub const PIPE_HEAD_HEIGHT: i32 = 6;
    /// Center x of the first pipe at session start (just off the right edge)
    pub const FIRST_PIPE_X: i32 = RESOLUTION_X + PIPE_WIDTH;

    /// Grass tiles (even count keeps the colour parity stable across recycles)
    pub const NUM_GRASS_BLOCKS: usize = 22;
    pub const GRASS_BLOCK_WIDTH: i32 = 16;

    /// Horizontal scroll per tick
    pub const SCROLL_SPEED: i32 = 2;

    /// Player
    pub const BIRD_X: i32 = 60;
    pub const BIRD_START_Y: f32 = 100.0;
    pub const BIRD_WIDTH: i32 = 17;
    pub const BIRD_HEIGHT: i32 = 12;

    /// Constant-gravity policy: velocity gained per tick
    pub const GRAVITY: f32 = 0.25;

    /// Exponential-damping policy
    pub const FALL_FACTOR: f32 = 1.08;
    pub const RISE_FACTOR: f32 = 0.85;
    pub const INITIAL_FALL_VELOCITY: f32 = 0.5;
    /// Rising speeds below this are treated as a stop
    pub const DAMPING_CUTOFF: f32 = 0.1;

    /// Jump impulse
    pub const JUMP_VELOCITY: f32 = -4.0;
    pub const JUMP_DISPLACEMENT: f32 = 2.0;
    pub const JUMP_DECREMENT: f32 = 3.0;

    /// Cosmetic tilt (radians per unit of velocity, clamped)
    pub const ANGLE_PER_VELOCITY: f32 = 0.1;
    pub const MAX_ANGLE: f32 = 0.5;

    /// Time-based scoring: ticks between two awards (one pipe spacing)
    pub const SCORE_INTERVAL_TICKS: u32 = (PIPE_SPACING / SCROLL_SPEED) as u32;

    /// Score HUD
    pub const SCORE_SCALE: i32 = 3;
    pub const SCORE_ANCHOR_X: i32 = RESOLUTION_X / 2 + 15;
    pub const SCORE_ANCHOR_Y: i32 = 12;
}
