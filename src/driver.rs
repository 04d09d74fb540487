//! Frame driver: compose, tick, swap, repeat
//!
//! The driver owns the session, the collaborators and the handle of the
//! buffer that is currently writable. Drawing code only ever sees a
//! [`Canvas`](crate::renderer::Canvas) borrowed for the current frame, so
//! nothing can touch the buffer the display is showing.

use crate::platform::{BufferHandle, Display, InputSource, KeyEvent, TextOverlay};
use crate::renderer::compose;
use crate::sim::{GameState, Mode, TickInput, tick};

/// Text captions shown over each mode (column, row, text)
fn captions(mode: Mode) -> &'static [(usize, usize, &'static str)] {
    match mode {
        Mode::Menu => &[(34, 20, "FLAPPY BIRD"), (30, 36, "PRESS SPACE TO START")],
        Mode::Playing => &[],
        Mode::GameOver => &[(35, 20, "GAME OVER"), (25, 36, "ENTER: PLAY AGAIN   ESC: MENU")],
    }
}

pub struct FrameDriver<D, I, T> {
    state: GameState,
    display: D,
    input: I,
    overlay: T,
    writable: BufferHandle,
    autopilot: bool,
    /// Mode whose captions are on the overlay
    shown_captions: Option<Mode>,
    frames: u64,
}

impl<D: Display, I: InputSource, T: TextOverlay> FrameDriver<D, I, T> {
    pub fn new(state: GameState, display: D, input: I, overlay: T) -> Self {
        let writable = display.writable();
        Self {
            state,
            display,
            input,
            overlay,
            writable,
            autopilot: false,
            shown_captions: None,
            frames: 0,
        }
    }

    /// Let the simulation synthesize its own input
    pub fn with_autopilot(mut self, autopilot: bool) -> Self {
        self.autopilot = autopilot;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn overlay(&self) -> &T {
        &self.overlay
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Drain every pending key so none is replayed next frame
    fn poll_input(&mut self) -> TickInput {
        let mut input = TickInput {
            idle_mode: self.autopilot,
            ..Default::default()
        };
        while let Some(key) = self.input.poll_key() {
            match key {
                KeyEvent::Jump => input.jump = true,
                KeyEvent::Confirm => input.confirm = true,
                KeyEvent::Cancel => input.cancel = true,
            }
        }
        input
    }

    fn refresh_captions(&mut self) {
        let mode = self.state.mode;
        if self.shown_captions == Some(mode) {
            return;
        }
        if let Some(previous) = self.shown_captions {
            for &(col, row, text) in captions(previous) {
                self.overlay.erase_text(col, row, text);
            }
        }
        for &(col, row, text) in captions(mode) {
            self.overlay.draw_text(col, row, text);
        }
        self.shown_captions = Some(mode);
    }

    /// Compose one frame, advance the game once and swap on vsync
    pub fn run_frame(&mut self) {
        let input = self.poll_input();
        self.refresh_captions();

        let mut canvas = self.display.canvas(self.writable);
        compose(&mut canvas, &self.state);
        tick(&mut self.state, &input);

        self.writable = self.display.request_swap_and_wait();
        self.frames += 1;
    }

    pub fn run_frames(&mut self, count: u64) {
        for _ in 0..count {
            self.run_frame();
        }
    }

    /// Run until the process is killed
    pub fn run(&mut self) -> ! {
        loop {
            self.run_frame();
        }
    }
}
