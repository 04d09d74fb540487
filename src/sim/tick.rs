//! Per-frame simulation tick
//!
//! Drives the mode state machine and, while playing, advances physics and
//! scrolling by exactly one step.

use super::collision::is_run_over;
use super::scoring::update_score;
use super::state::{GameState, GravityPolicy, JumpPolicy, Mode, Player};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap (also starts a run from the menu)
    pub jump: bool,
    /// Start/retry
    pub confirm: bool,
    /// Back to menu from the game-over screen
    pub cancel: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }

    match state.mode {
        Mode::Menu => {
            if input.jump || input.confirm {
                state.start_run();
            }
        }
        Mode::Playing => step(state, input.jump),
        Mode::GameOver => {
            if input.confirm {
                state.start_run();
            } else if input.cancel {
                state.return_to_menu();
            }
        }
    }
}

/// One simulation step of an active run
fn step(state: &mut GameState, jump: bool) {
    state.time_ticks += 1;
    state.ticks_since_score = state.ticks_since_score.saturating_add(1);

    integrate(&mut state.player, state.rules.gravity);
    if jump {
        apply_jump(&mut state.player, state.rules.jump);
    }
    state.player.angle =
        (state.player.y_velocity * ANGLE_PER_VELOCITY).clamp(-MAX_ANGLE, MAX_ANGLE);

    advance_scroll(state);

    if is_run_over(state) {
        state.end_run();
    } else {
        update_score(state);
    }
}

/// Position integration followed by the velocity update
pub fn integrate(player: &mut Player, policy: GravityPolicy) {
    player.y += player.y_velocity;

    match policy {
        GravityPolicy::ConstantGravity => {
            player.y_velocity += GRAVITY;
        }
        GravityPolicy::ExponentialDamping => {
            if player.y_velocity > 0.0 {
                player.y_velocity *= FALL_FACTOR;
            } else if player.y_velocity < -DAMPING_CUTOFF {
                player.y_velocity *= RISE_FACTOR;
            } else {
                player.y_velocity = INITIAL_FALL_VELOCITY;
            }
        }
    }
}

/// Direct jump impulse
pub fn apply_jump(player: &mut Player, policy: JumpPolicy) {
    match policy {
        JumpPolicy::SetVelocity => {
            player.y_velocity = JUMP_VELOCITY;
        }
        JumpPolicy::Displace => {
            player.y -= JUMP_DISPLACEMENT;
            player.y_velocity -= JUMP_DECREMENT;
        }
    }
}

/// Recycle whatever left the screen, then move everything left
pub fn advance_scroll(state: &mut GameState) {
    for i in 0..NUM_PIPES {
        if state.pipes[i].is_off_screen() {
            let x = state.pipes[state.rightmost_pipe].x + PIPE_SPACING;
            let y = state.random_void_center(state.pipes[i].void_height);
            let pipe = &mut state.pipes[i];
            pipe.x = x;
            pipe.y = y;
            pipe.scored = false;
            state.rightmost_pipe = i;
            log::debug!("Recycled pipe {} to x={}, void y={}", i, x, y);
        }
    }

    for i in 0..NUM_GRASS_BLOCKS {
        if state.grass[i].is_off_screen() {
            let left = state.grass[state.rightmost_grass].right + 1;
            state.grass[i] = super::state::GrassBlock::at(left);
            state.rightmost_grass = i;
        }
    }

    for pipe in state.pipes.iter_mut() {
        pipe.x -= SCROLL_SPEED;
    }
    for block in state.grass.iter_mut() {
        block.left -= SCROLL_SPEED;
        block.right -= SCROLL_SPEED;
    }
}

/// Synthesize input from the game state
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.mode {
        Mode::Menu => input.jump = true,
        Mode::GameOver => input.confirm = true,
        Mode::Playing => {
            let player = &state.player;
            // Nearest pipe the bird has not cleared yet
            let target = state
                .pipes
                .iter()
                .filter(|p| p.right() >= player.x)
                .min_by_key(|p| p.x)
                .map(|p| p.y)
                .unwrap_or(BIRD_START_Y as i32 + player.height / 2);

            let center_y = player.top() + player.height / 2;
            input.jump = player.y_velocity >= 0.0 && center_y > target + 12;
        }
    }
}
