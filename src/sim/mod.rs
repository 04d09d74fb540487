//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Fixed-size arenas, stable iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{is_run_over, out_of_play_band, overlaps};
pub use scoring::update_score;
pub use state::{
    GameState, GrassBlock, GravityPolicy, JumpPolicy, Mode, Pipe, Player, Rules, ScorePolicy,
    void_center_range,
};
pub use tick::{TickInput, advance_scroll, apply_jump, integrate, tick};
