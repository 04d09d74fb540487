//! Score awards

use super::state::{GameState, ScorePolicy};
use crate::consts::SCORE_INTERVAL_TICKS;

/// Award points for the current tick according to the session's policy
pub fn update_score(state: &mut GameState) {
    match state.rules.scoring {
        ScorePolicy::PassThrough => {
            let center = state.player.center_x();
            for pipe in state.pipes.iter_mut() {
                if !pipe.scored && pipe.x < center {
                    pipe.scored = true;
                    state.score += 1;
                }
            }
        }
        ScorePolicy::TimeBased => {
            if state.ticks_since_score >= SCORE_INTERVAL_TICKS {
                state.ticks_since_score = 0;
                state.score += 1;
            }
        }
    }
}
