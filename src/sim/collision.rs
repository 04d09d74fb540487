//! Collision detection between the bird and the pipes
//!
//! Everything is axis-aligned: a pipe is solid across its horizontal span
//! except for the void rows.

use super::state::{GameState, Pipe, Player};
use crate::consts::PLAY_BAND_BOTTOM;

/// Check whether the player touches the solid part of a pipe
pub fn overlaps(player: &Player, pipe: &Pipe) -> bool {
    if player.right() < pipe.left() || player.x > pipe.right() {
        return false;
    }

    // Horizontally inside the pipe: safe only if fully inside the void
    let inside_void = pipe.void_top() <= player.top() && player.bottom() <= pipe.void_bottom();
    !inside_void
}

/// Check whether the player has left the play band
pub fn out_of_play_band(player: &Player) -> bool {
    player.y < 0.0 || player.bottom() >= PLAY_BAND_BOTTOM
}

/// True when the current run must end
pub fn is_run_over(state: &GameState) -> bool {
    out_of_play_band(&state.player) || state.pipes.iter().any(|pipe| overlaps(&state.player, pipe))
}
