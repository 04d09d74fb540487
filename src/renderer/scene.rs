//! Scene composition: background, pipes, bird and score HUD

use super::framebuffer::{Canvas, Color, palette};
use super::glyphs::{DIGIT_HEIGHT, draw_score};
use crate::consts::*;
use crate::sim::{GameState, GrassBlock, Mode, Pipe, Player};

/// Bird pixel art, anchored at the player's top-left corner
#[rustfmt::skip]
const BIRD_SPRITE: [&[u8; BIRD_WIDTH as usize]; BIRD_HEIGHT as usize] = [
    b"......KKKKKK.....",
    b"....KKYYYKWWK....",
    b"...KYYYYKWWWWK...",
    b".KKKKYYYKWWWKWK..",
    b"KWWWWKYYKWWWKWK..",
    b"KWWWWWKYYKWWWWK..",
    b"KYWWWYKYYYKKKKKK.",
    b".KYYYKYYYKOOOOOOK",
    b"..KKKYYYKOKKKKKK.",
    b"..KRRRRRRKOOOOOK.",
    b"...KKRRRRRKKKKK..",
    b".....KKKKK.......",
];

fn sprite_color(cell: u8) -> Option<Color> {
    match cell {
        b'K' => Some(palette::BLACK),
        b'W' => Some(palette::WHITE),
        b'Y' => Some(palette::BIRD_YELLOW),
        b'O' => Some(palette::BIRD_ORANGE),
        b'R' => Some(palette::BIRD_RED),
        _ => None,
    }
}

/// Sky, then sand, then the slanted grass strip on top of both
pub fn draw_background(canvas: &mut Canvas, grass: &[GrassBlock]) {
    let right = canvas.width() - 1;
    let bottom = canvas.height() - 1;
    canvas.clear(palette::SKY);
    canvas.fill_rect(0, GROUND_TOP, right, bottom, palette::SAND);

    for (i, block) in grass.iter().enumerate() {
        let color = if i % 2 == 0 {
            palette::GRASS_LIGHT
        } else {
            palette::GRASS_DARK
        };
        let (y0, y1) = (PLAY_BAND_BOTTOM, GROUND_TOP - 1);
        canvas.fill_parallelogram(block.left, y0, block.right, y1, color);
        canvas.outline_parallelogram(block.left, y0, block.right, y1, palette::BLACK);
    }
}

fn draw_pipe_segment(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32) {
    canvas.fill_rect(x0, y0, x1, y1, palette::PIPE);
    canvas.outline_rect(x0, y0, x1, y1, palette::BLACK);
}

/// Top and bottom pipe around the void, each with an outlined head band at the void edge
///
/// Everything stays inside the pipe's column span, so the drawn pipe is
/// exactly what collision treats as solid.
pub fn draw_pipe(canvas: &mut Canvas, pipe: &Pipe) {
    let (x0, x1) = (pipe.left(), pipe.right());
    let void_top = pipe.void_top();
    let void_bottom = pipe.void_bottom();

    draw_pipe_segment(canvas, x0, 0, x1, void_top - 1);
    draw_pipe_segment(canvas, x0, void_top - PIPE_HEAD_HEIGHT, x1, void_top - 1);

    draw_pipe_segment(canvas, x0, void_bottom + 1, x1, PLAY_BAND_BOTTOM - 1);
    draw_pipe_segment(canvas, x0, void_bottom + 1, x1, void_bottom + PIPE_HEAD_HEIGHT);
}

/// Blit the bird; each run of equal cells in a row is one rectangle
pub fn draw_player(canvas: &mut Canvas, player: &Player) {
    let (x, y) = (player.x, player.top());
    for (row, cells) in BIRD_SPRITE.iter().enumerate() {
        let y = y + row as i32;
        let mut start = 0;
        while start < cells.len() {
            let cell = cells[start];
            let mut end = start;
            while end + 1 < cells.len() && cells[end + 1] == cell {
                end += 1;
            }
            if let Some(color) = sprite_color(cell) {
                canvas.fill_rect(x + start as i32, y, x + end as i32, y, color);
            }
            start = end + 1;
        }
    }
}

/// Compose a full frame for the current mode
pub fn compose(canvas: &mut Canvas, state: &GameState) {
    draw_background(canvas, &state.grass);
    if state.mode != Mode::Menu {
        for pipe in &state.pipes {
            draw_pipe(canvas, pipe);
        }
    }
    draw_player(canvas, &state.player);

    match state.mode {
        Mode::Menu => {
            draw_score(canvas, state.best_score, SCORE_ANCHOR_X, SCORE_ANCHOR_Y);
        }
        Mode::Playing => {
            draw_score(canvas, state.score, SCORE_ANCHOR_X, SCORE_ANCHOR_Y);
        }
        Mode::GameOver => {
            draw_score(canvas, state.score, SCORE_ANCHOR_X, SCORE_ANCHOR_Y);
            let best_y = SCORE_ANCHOR_Y + (DIGIT_HEIGHT + 2) * SCORE_SCALE;
            draw_score(canvas, state.best_score, SCORE_ANCHOR_X, best_y);
        }
    }
}
