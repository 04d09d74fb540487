//! Platform abstraction layer
//!
//! The game only ever talks to hardware through three narrow collaborators:
//! - [`Display`]: double-buffered pixel memory with a vsync-gated swap
//! - [`InputSource`]: non-blocking, drainable key events
//! - [`TextOverlay`]: a character plane drawn over the pixels
//!
//! Register layouts and base addresses belong to implementations of these
//! traits; the host versions in [`host`] back the binary and the tests.

pub mod host;

pub use host::{CharOverlay, MemoryDisplay, ScriptedInput};

use serde::{Deserialize, Serialize};

use crate::renderer::Canvas;

/// A key press the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyEvent {
    Jump,
    Confirm,
    Cancel,
}

impl KeyEvent {
    /// Decode a PS/2 scan code set 2 make code
    pub fn from_ps2_make_code(code: u8) -> Option<Self> {
        match code {
            0x29 => Some(KeyEvent::Jump),    // Space
            0x5A => Some(KeyEvent::Confirm), // Enter
            0x76 => Some(KeyEvent::Cancel),  // Escape
            _ => None,
        }
    }
}

/// Identifies one of the display's pixel buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub usize);

/// Double-buffered display
pub trait Display {
    /// The buffer that is safe to draw into right now
    fn writable(&self) -> BufferHandle;

    /// Borrow the pixels behind `handle` for one frame.
    ///
    /// `handle` must be the one most recently returned by
    /// [`Display::writable`] or [`Display::request_swap_and_wait`].
    fn canvas(&mut self, handle: BufferHandle) -> Canvas<'_>;

    /// Show the buffer just drawn, block until the display has latched it,
    /// and return the buffer that is now writable
    fn request_swap_and_wait(&mut self) -> BufferHandle;
}

/// Non-blocking key source
pub trait InputSource {
    /// Next pending key, or `None` when nothing is queued
    fn poll_key(&mut self) -> Option<KeyEvent>;
}

/// Character plane drawn on top of the pixel buffer
pub trait TextOverlay {
    fn draw_text(&mut self, col: usize, row: usize, text: &str);

    /// Overwrite a previously drawn string with spaces
    fn erase_text(&mut self, col: usize, row: usize, text: &str) {
        let blank = " ".repeat(text.chars().count());
        self.draw_text(col, row, &blank);
    }
}
