//! Software rendering into an RGB565 framebuffer
//!
//! All drawing goes through a per-frame [`Canvas`] borrowed from the display.

pub mod framebuffer;
pub mod glyphs;
pub mod scene;

pub use framebuffer::{Canvas, Color, palette};
pub use glyphs::{draw_digit, draw_integer, draw_score};
pub use scene::{compose, draw_background, draw_pipe, draw_player};
