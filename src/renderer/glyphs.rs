//! 4x6 bitmap digits for the score HUD

use super::framebuffer::{Canvas, Color, palette};
use crate::consts::SCORE_SCALE;

pub const DIGIT_WIDTH: i32 = 4;
pub const DIGIT_HEIGHT: i32 = 6;
/// Columns from one digit to the next (one blank column between digits)
pub const DIGIT_ADVANCE: i32 = DIGIT_WIDTH + 1;

/// One row per entry; bit 3 is the leftmost column
#[rustfmt::skip]
const DIGITS: [[u8; DIGIT_HEIGHT as usize]; 10] = [
    [0b0110, 0b1001, 0b1001, 0b1001, 0b1001, 0b0110], // 0
    [0b0010, 0b0110, 0b0010, 0b0010, 0b0010, 0b0111], // 1
    [0b0110, 0b1001, 0b0001, 0b0010, 0b0100, 0b1111], // 2
    [0b1110, 0b0001, 0b0110, 0b0001, 0b0001, 0b1110], // 3
    [0b1001, 0b1001, 0b1111, 0b0001, 0b0001, 0b0001], // 4
    [0b1111, 0b1000, 0b1110, 0b0001, 0b0001, 0b1110], // 5
    [0b0110, 0b1000, 0b1110, 0b1001, 0b1001, 0b0110], // 6
    [0b1111, 0b0001, 0b0010, 0b0100, 0b0100, 0b0100], // 7
    [0b0110, 0b1001, 0b0110, 0b1001, 0b1001, 0b0110], // 8
    [0b0110, 0b1001, 0b0111, 0b0001, 0b0001, 0b0110], // 9
];

#[inline]
fn cell_on(digit: u8, col: i32, row: i32) -> bool {
    DIGITS[digit as usize][row as usize] & (0b1000 >> col) != 0
}

/// Draw one digit; each lit cell becomes a `scale`-sized square at
/// `x + (col + column_offset) * scale, y + row * scale`
pub fn draw_digit(
    canvas: &mut Canvas,
    digit: u8,
    column_offset: i32,
    x: i32,
    y: i32,
    color: Color,
    scale: i32,
) {
    let digit = digit % 10;
    for row in 0..DIGIT_HEIGHT {
        for col in 0..DIGIT_WIDTH {
            if cell_on(digit, col, row) {
                let px = x + (col + column_offset) * scale;
                let py = y + row * scale;
                canvas.fill_rect(px, py, px + scale - 1, py + scale - 1, color);
            }
        }
    }
}

/// Draw `n` so that its last column is `x - 1` (text grows leftward)
pub fn draw_integer(canvas: &mut Canvas, n: u32, x: i32, y: i32, color: Color, scale: i32) {
    let mut rest = n;
    let mut column_offset = -DIGIT_WIDTH;
    loop {
        draw_digit(canvas, (rest % 10) as u8, column_offset, x, y, color, scale);
        rest /= 10;
        if rest == 0 {
            break;
        }
        column_offset -= DIGIT_ADVANCE;
    }
}

/// Score HUD: black outline from four 1-pixel offsets, then white on top.
/// `(x, y)` is the top-right anchor.
pub fn draw_score(canvas: &mut Canvas, n: u32, x: i32, y: i32) {
    for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
        draw_integer(canvas, n, x + dx, y + dy, palette::BLACK, SCORE_SCALE);
    }
    draw_integer(canvas, n, x, y, palette::WHITE, SCORE_SCALE);
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: i32 = 64;
    const H: i32 = 32;
    const BG: Color = Color(0x0101);
    const C: Color = Color(0xAAAA);

    fn lit(canvas: &Canvas, color: Color) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..H {
            for x in 0..W {
                if canvas.get_pixel(x, y) == Some(color) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_zero_draws_single_digit() {
        let mut pixels = vec![BG; (W * H) as usize];
        let mut canvas = Canvas::new(&mut pixels, W, H, W as usize);
        draw_integer(&mut canvas, 0, 20, 0, C, 1);
        let on = lit(&canvas, C);
        // "0" has 12 lit cells, all within the four columns left of the anchor
        assert_eq!(on.len(), 12);
        assert!(on.iter().all(|&(x, _)| (16..20).contains(&x)));
        assert_eq!(on.iter().map(|&(x, _)| x).max(), Some(19));
    }

    #[test]
    fn test_digits_read_left_to_right() {
        let mut pixels = vec![BG; (W * H) as usize];
        let mut canvas = Canvas::new(&mut pixels, W, H, W as usize);
        draw_integer(&mut canvas, 10, 20, 0, C, 1);
        // "1": bottom row 0111 starting at x = 20 - 9
        assert_eq!(canvas.get_pixel(11, 5), Some(BG));
        assert_eq!(canvas.get_pixel(12, 5), Some(C));
        assert_eq!(canvas.get_pixel(14, 5), Some(C));
        // "0": top row 0110 starting at x = 20 - 4
        assert_eq!(canvas.get_pixel(16, 0), Some(BG));
        assert_eq!(canvas.get_pixel(17, 0), Some(C));
        assert!(lit(&canvas, C).iter().all(|&(x, _)| x < 20));
    }

    #[test]
    fn test_scale_expands_cells() {
        let mut pixels = vec![BG; (W * H) as usize];
        let mut canvas = Canvas::new(&mut pixels, W, H, W as usize);
        draw_digit(&mut canvas, 8, 0, 0, 0, C, 3);
        // 8 has 12 lit cells
        assert_eq!(lit(&canvas, C).len(), 12 * 9);
    }

    #[test]
    fn test_score_has_outline() {
        let mut pixels = vec![BG; (W * H) as usize];
        let mut canvas = Canvas::new(&mut pixels, W, H, W as usize);
        draw_score(&mut canvas, 7, 40, 4);
        // "7" top row is fully lit; with scale 3 it ends flush at the anchor
        assert_eq!(canvas.get_pixel(28, 4), Some(palette::WHITE));
        assert_eq!(canvas.get_pixel(39, 4), Some(palette::WHITE));
        assert_eq!(canvas.get_pixel(27, 4), Some(palette::BLACK));
        assert_eq!(canvas.get_pixel(40, 4), Some(palette::BLACK));
        assert_eq!(canvas.get_pixel(41, 4), Some(BG));
        assert_eq!(canvas.get_pixel(30, 3), Some(palette::BLACK));
    }
}
