//! Pixel and rectangle primitives over a borrowed RGB565 buffer
//!
//! Every primitive funnels through [`Canvas::set_pixel`], which silently
//! clips to the visible rectangle. Callers never pre-clip.

use serde::{Deserialize, Serialize};

/// A packed 16-bit RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(pub u16);

impl Color {
    /// Pack 8-bit channels into RGB565
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((b as u16) >> 3))
    }
}

/// The fixed game palette
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const SKY: Color = Color::from_rgb(112, 197, 206);
    pub const SAND: Color = Color::from_rgb(222, 216, 149);
    pub const GRASS_LIGHT: Color = Color::from_rgb(156, 230, 89);
    pub const GRASS_DARK: Color = Color::from_rgb(115, 191, 46);
    pub const PIPE: Color = Color(0x07E0);
    pub const BIRD_YELLOW: Color = Color(0xFFE0);
    pub const BIRD_ORANGE: Color = Color(0xFC00);
    pub const BIRD_RED: Color = Color(0xF800);
}

/// The writable buffer for one frame
pub struct Canvas<'a> {
    pixels: &'a mut [Color],
    width: i32,
    height: i32,
    /// Pixels per row in memory (may exceed `width`)
    stride: usize,
}

impl<'a> Canvas<'a> {
    /// Wrap a row-major pixel slice. `pixels` must hold `stride * height` entries.
    pub fn new(pixels: &'a mut [Color], width: i32, height: i32, stride: usize) -> Self {
        debug_assert!(stride >= width as usize);
        debug_assert!(pixels.len() >= stride * height as usize);
        Self {
            pixels,
            width,
            height,
            stride,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.stride + x as usize)
    }

    /// Write one pixel; out-of-bounds coordinates are ignored
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Fill the whole visible area
    pub fn clear(&mut self, color: Color) {
        self.fill_rect(0, 0, self.width - 1, self.height - 1, color);
    }

    /// Fill `x0..=x1` by `y0..=y1`; reversed bounds draw nothing
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Border of the rectangle only
    pub fn outline_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if x0 > x1 || y0 > y1 {
            return;
        }
        for x in x0..=x1 {
            self.set_pixel(x, y0, color);
            self.set_pixel(x, y1, color);
        }
        for y in y0..=y1 {
            self.set_pixel(x0, y, color);
            self.set_pixel(x1, y, color);
        }
    }

    /// Like `fill_rect`, but row `i` (from `y0`) is shifted left by `i`
    pub fn fill_parallelogram(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        for y in y0..=y1 {
            let shift = y - y0;
            for x in x0..=x1 {
                self.set_pixel(x - shift, y, color);
            }
        }
    }

    /// Slanted left/right edges of a parallelogram.
    ///
    /// The top and bottom segments are drawn over the unshifted `x0..=x1`
    /// range, so the bottom border does not follow the slant.
    pub fn outline_parallelogram(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if x0 > x1 || y0 > y1 {
            return;
        }
        for x in x0..=x1 {
            self.set_pixel(x, y0, color);
            self.set_pixel(x, y1, color);
        }
        for y in y0..=y1 {
            let shift = y - y0;
            self.set_pixel(x0 - shift, y, color);
            self.set_pixel(x1 - shift, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: i32 = 32;
    const H: i32 = 24;
    const SENTINEL: Color = Color(0xBEEF);
    const C: Color = Color(0x1234);

    /// Buffer with a sentinel margin on the right of each row and after the last row
    fn buffer() -> Vec<Color> {
        vec![SENTINEL; (W as usize + 8) * (H as usize + 2)]
    }

    fn canvas(pixels: &mut [Color]) -> Canvas<'_> {
        Canvas::new(pixels, W, H, W as usize + 8)
    }

    fn count(canvas: &Canvas, color: Color) -> usize {
        (0..H)
            .flat_map(|y| (0..W).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get_pixel(x, y) == Some(color))
            .count()
    }

    #[test]
    fn test_rgb565_packing() {
        assert_eq!(Color::from_rgb(255, 255, 255), palette::WHITE);
        assert_eq!(Color::from_rgb(0, 0, 0), palette::BLACK);
        assert_eq!(Color::from_rgb(255, 0, 0), palette::BIRD_RED);
        assert_eq!(Color::from_rgb(0, 255, 0), palette::PIPE);
    }

    #[test]
    fn test_set_pixel_clips() {
        let mut pixels = buffer();
        let mut canvas = canvas(&mut pixels);
        canvas.set_pixel(-1, 0, C);
        canvas.set_pixel(0, -1, C);
        canvas.set_pixel(W, 0, C);
        canvas.set_pixel(0, H, C);
        assert_eq!(count(&canvas, C), 0);
        assert!(pixels.iter().all(|&p| p == SENTINEL));
    }

    #[test]
    fn test_fill_rect_clips_to_visible_area() {
        let mut pixels = buffer();
        let mut canvas = canvas(&mut pixels);
        canvas.fill_rect(-5, -5, 5, 5, C);
        for y in 0..=5 {
            for x in 0..=5 {
                assert_eq!(canvas.get_pixel(x, y), Some(C));
            }
        }
        assert_eq!(count(&canvas, C), 36);

        canvas.fill_rect(W - 3, H - 3, W + 10, H + 10, C);
        assert_eq!(count(&canvas, C), 36 + 9);

        // Nothing leaked into the padding or past the last row
        let stride = W as usize + 8;
        for (i, &p) in pixels.iter().enumerate() {
            let (x, y) = (i % stride, i / stride);
            if x >= W as usize || y >= H as usize {
                assert_eq!(p, SENTINEL, "write outside visible area at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_clear_skips_row_padding() {
        let mut pixels = buffer();
        let mut canvas = canvas(&mut pixels);
        canvas.clear(C);
        assert_eq!(count(&canvas, C), (W * H) as usize);

        let stride = W as usize + 8;
        for (i, &p) in pixels.iter().enumerate() {
            let visible = i % stride < W as usize && i / stride < H as usize;
            assert_eq!(p == C, visible, "pixel {i}");
        }
    }

    #[test]
    fn test_fill_rect_reversed_is_empty() {
        let mut pixels = buffer();
        let mut canvas = canvas(&mut pixels);
        canvas.fill_rect(5, 5, 4, 10, C);
        canvas.fill_rect(5, 5, 10, 4, C);
        assert_eq!(count(&canvas, C), 0);
    }

    #[test]
    fn test_outline_rect_draws_border_only() {
        let mut pixels = buffer();
        let mut canvas = canvas(&mut pixels);
        canvas.outline_rect(2, 2, 6, 5, C);
        assert_eq!(canvas.get_pixel(2, 2), Some(C));
        assert_eq!(canvas.get_pixel(6, 5), Some(C));
        assert_eq!(canvas.get_pixel(4, 3), Some(SENTINEL));
        // 5 wide, 4 tall: 2*5 + 2*2
        assert_eq!(count(&canvas, C), 14);
    }

    #[test]
    fn test_fill_parallelogram_shifts_each_row() {
        let mut pixels = buffer();
        let mut canvas = canvas(&mut pixels);
        canvas.fill_parallelogram(10, 0, 13, 3, C);
        for row in 0..=3 {
            let left = 10 - row;
            assert_eq!(canvas.get_pixel(left - 1, row), Some(SENTINEL));
            for x in left..=left + 3 {
                assert_eq!(canvas.get_pixel(x, row), Some(C));
            }
            assert_eq!(canvas.get_pixel(left + 4, row), Some(SENTINEL));
        }
    }

    #[test]
    fn test_outline_parallelogram_borders_are_unshifted() {
        let mut pixels = buffer();
        let mut canvas = canvas(&mut pixels);
        canvas.outline_parallelogram(10, 0, 13, 3, C);
        // Slanted sides
        assert_eq!(canvas.get_pixel(8, 2), Some(C));
        assert_eq!(canvas.get_pixel(11, 2), Some(C));
        // Bottom border sits at the top border's x-range
        for x in 10..=13 {
            assert_eq!(canvas.get_pixel(x, 3), Some(C));
        }
        assert_eq!(canvas.get_pixel(9, 3), Some(SENTINEL));
    }
}
