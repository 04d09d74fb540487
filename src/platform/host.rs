//! In-memory collaborators for headless runs and tests

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::{BufferHandle, Display, InputSource, KeyEvent, TextOverlay};
use crate::consts::{RESOLUTION_X, RESOLUTION_Y, TEXT_COLUMNS, TEXT_ROWS};
use crate::renderer::{Canvas, Color};

/// Two RGB565 buffers in RAM, one shown and one writable
pub struct MemoryDisplay {
    buffers: [Vec<Color>; 2],
    /// Index of the buffer being shown
    front: usize,
    swaps: u64,
    frame_time: Option<Duration>,
    next_vsync: Option<Instant>,
}

impl Default for MemoryDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDisplay {
    /// Swaps latch immediately
    pub fn new() -> Self {
        let len = (RESOLUTION_X * RESOLUTION_Y) as usize;
        Self {
            buffers: [vec![Color::default(); len], vec![Color::default(); len]],
            front: 0,
            swaps: 0,
            frame_time: None,
            next_vsync: None,
        }
    }

    /// Swaps latch on a fixed refresh cadence, spinning until the next one
    pub fn with_frame_rate(hz: u32) -> Self {
        Self {
            frame_time: (hz > 0).then(|| Duration::from_secs_f64(1.0 / hz as f64)),
            ..Self::new()
        }
    }

    /// Number of completed swaps
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Pixels currently on screen
    pub fn front(&self) -> &[Color] {
        &self.buffers[self.front]
    }

    pub fn front_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= RESOLUTION_X || y >= RESOLUTION_Y {
            return None;
        }
        Some(self.front()[(y * RESOLUTION_X + x) as usize])
    }

    /// Poll the refresh deadline the way the hardware status bit is polled
    fn wait_for_vsync(&mut self) {
        let Some(period) = self.frame_time else {
            return;
        };
        let deadline = self.next_vsync.unwrap_or_else(Instant::now);
        while Instant::now() < deadline {
            std::hint::spin_loop();
        }
        self.next_vsync = Some(deadline + period);
    }
}

impl Display for MemoryDisplay {
    fn writable(&self) -> BufferHandle {
        BufferHandle(1 - self.front)
    }

    fn canvas(&mut self, handle: BufferHandle) -> Canvas<'_> {
        debug_assert_ne!(handle.0, self.front, "drawing into the displayed buffer");
        Canvas::new(
            &mut self.buffers[handle.0],
            RESOLUTION_X,
            RESOLUTION_Y,
            RESOLUTION_X as usize,
        )
    }

    fn request_swap_and_wait(&mut self) -> BufferHandle {
        self.front = 1 - self.front;
        self.wait_for_vsync();
        self.swaps += 1;
        self.writable()
    }
}

/// Replays a fixed list of key presses, frame by frame
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    /// `None` marks the end of one frame's events
    queue: VecDeque<Option<KeyEvent>>,
}

impl ScriptedInput {
    /// One entry per frame; each frame's keys are drained together
    pub fn from_frames<I, F>(frames: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: IntoIterator<Item = KeyEvent>,
    {
        let mut queue = VecDeque::new();
        for frame in frames {
            queue.extend(frame.into_iter().map(Some));
            queue.push_back(None);
        }
        Self { queue }
    }

    /// Replay raw PS/2 set 2 bytes
    ///
    /// `0x00` ends a frame. Break codes (`0xF0 xx`) and keys the game does not
    /// use are dropped.
    pub fn from_scan_codes(bytes: &[u8]) -> Self {
        let mut queue = VecDeque::new();
        let mut bytes = bytes.iter().copied();
        while let Some(byte) = bytes.next() {
            match byte {
                0x00 => queue.push_back(None),
                0xF0 => {
                    bytes.next();
                }
                code => {
                    if let Some(key) = KeyEvent::from_ps2_make_code(code) {
                        queue.push_back(Some(key));
                    }
                }
            }
        }
        Self { queue }
    }

    /// Queue a key for the next drain
    pub fn push(&mut self, key: KeyEvent) {
        self.queue.push_back(Some(key));
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> Option<KeyEvent> {
        self.queue.pop_front().flatten()
    }
}

/// 80x60 character plane
#[derive(Debug, Clone)]
pub struct CharOverlay {
    cells: Vec<char>,
}

impl Default for CharOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl CharOverlay {
    pub fn new() -> Self {
        Self {
            cells: vec![' '; TEXT_COLUMNS * TEXT_ROWS],
        }
    }

    /// Contents of one row with trailing blanks removed
    pub fn row_text(&self, row: usize) -> String {
        if row >= TEXT_ROWS {
            return String::new();
        }
        let start = row * TEXT_COLUMNS;
        let line: String = self.cells[start..start + TEXT_COLUMNS].iter().collect();
        line.trim_end().to_string()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == ' ')
    }
}

impl TextOverlay for CharOverlay {
    fn draw_text(&mut self, col: usize, row: usize, text: &str) {
        if row >= TEXT_ROWS {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let c = col + i;
            if c >= TEXT_COLUMNS {
                break;
            }
            self.cells[row * TEXT_COLUMNS + c] = ch;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_alternates_buffers() {
        let mut display = MemoryDisplay::new();
        let first = display.writable();
        let second = display.request_swap_and_wait();
        assert_ne!(first, second);
        assert_eq!(display.request_swap_and_wait(), first);
        assert_eq!(display.swaps(), 2);
    }

    #[test]
    fn test_drawn_frame_is_shown_after_swap() {
        let mut display = MemoryDisplay::new();
        let handle = display.writable();
        display.canvas(handle).set_pixel(3, 4, Color(0x1234));
        assert_eq!(display.front_pixel(3, 4), Some(Color::default()));

        display.request_swap_and_wait();
        assert_eq!(display.front_pixel(3, 4), Some(Color(0x1234)));
    }

    #[test]
    fn test_paced_swaps_take_a_frame() {
        let mut display = MemoryDisplay::with_frame_rate(200);
        let start = Instant::now();
        for _ in 0..3 {
            display.request_swap_and_wait();
        }
        // The first swap latches at once, the next two wait a period each
        assert!(start.elapsed() >= Duration::from_millis(9));
    }

    #[test]
    fn test_scripted_input_drains_per_frame() {
        let mut input = ScriptedInput::from_frames([
            vec![KeyEvent::Jump, KeyEvent::Jump],
            vec![],
            vec![KeyEvent::Cancel],
        ]);
        assert_eq!(input.poll_key(), Some(KeyEvent::Jump));
        assert_eq!(input.poll_key(), Some(KeyEvent::Jump));
        assert_eq!(input.poll_key(), None);
        assert_eq!(input.poll_key(), None);
        assert_eq!(input.poll_key(), Some(KeyEvent::Cancel));
        assert_eq!(input.poll_key(), None);
        assert!(input.is_empty());
        assert_eq!(input.poll_key(), None);
    }

    #[test]
    fn test_scan_codes_replay_make_codes_only() {
        // Space, Space released, Enter | nothing | 'A', Escape
        let mut input = ScriptedInput::from_scan_codes(&[
            0x29, 0xF0, 0x29, 0x5A, 0x00, 0x00, 0x1C, 0x76, 0x00,
        ]);
        assert_eq!(input.poll_key(), Some(KeyEvent::Jump));
        assert_eq!(input.poll_key(), Some(KeyEvent::Confirm));
        assert_eq!(input.poll_key(), None);
        assert_eq!(input.poll_key(), None);
        assert_eq!(input.poll_key(), Some(KeyEvent::Cancel));
        assert_eq!(input.poll_key(), None);
        assert!(input.is_empty());
    }

    #[test]
    fn test_overlay_draw_and_erase() {
        let mut overlay = CharOverlay::new();
        overlay.draw_text(2, 5, "GAME OVER");
        assert_eq!(overlay.row_text(5), "  GAME OVER");
        overlay.erase_text(2, 5, "GAME OVER");
        assert!(overlay.is_blank());
    }

    #[test]
    fn test_overlay_clips_at_row_end() {
        let mut overlay = CharOverlay::new();
        overlay.draw_text(TEXT_COLUMNS - 2, 0, "ABCD");
        assert_eq!(overlay.row_text(0).trim_start(), "AB");
        assert_eq!(overlay.row_text(1), "");
        overlay.draw_text(0, TEXT_ROWS, "X");
        assert!(overlay.row_text(TEXT_ROWS).is_empty());
    }
}
