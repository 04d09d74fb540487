//! Game state and core simulation types
//!
//! Everything a session owns lives here: the player, the fixed pipe and
//! grass arenas, the mode, scores and the seeded RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Title screen, waiting for Jump/Confirm
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for Confirm (retry) or Cancel (menu)
    GameOver,
}

/// How vertical velocity evolves each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityPolicy {
    /// Add a fixed gravity constant every tick
    #[default]
    ConstantGravity,
    /// Falling speeds grow, rising speeds decay toward a stop
    ExponentialDamping,
}

/// What a jump does to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpPolicy {
    /// Replace velocity with a fixed upward constant
    #[default]
    SetVelocity,
    /// Nudge the player up immediately and decrement velocity
    Displace,
}

/// How points are awarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScorePolicy {
    /// One point per pipe whose center crosses the player's center
    #[default]
    PassThrough,
    /// One point every `SCORE_INTERVAL_TICKS`, roughly one per pipe
    TimeBased,
}

/// Policies selected when a session is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rules {
    pub gravity: GravityPolicy,
    pub jump: JumpPolicy,
    pub scoring: ScorePolicy,
}

/// The bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: i32,
    /// Real-valued so sub-pixel velocities accumulate across ticks
    pub y: f32,
    pub y_velocity: f32,
    /// Tilt derived from velocity; cosmetic only
    pub angle: f32,
    pub width: i32,
    pub height: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            y_velocity: 0.0,
            angle: 0.0,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
        }
    }
}

impl Player {
    /// Topmost pixel row
    #[inline]
    pub fn top(&self) -> i32 {
        self.y.floor() as i32
    }

    /// Bottommost pixel row (inclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top() + self.height - 1
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }
}

/// An obstacle: a pair of pipes around a void
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipe {
    /// Center of the void
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub void_height: i32,
    /// Already awarded a point this pass
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            width: PIPE_WIDTH,
            void_height: PIPE_VOID_HEIGHT,
            scored: false,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x - self.width / 2
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width / 2
    }

    /// First row of the void
    #[inline]
    pub fn void_top(&self) -> i32 {
        self.y - self.void_height / 2
    }

    /// Last row of the void (inclusive)
    #[inline]
    pub fn void_bottom(&self) -> i32 {
        self.y + self.void_height / 2
    }

    /// True once the pipe has scrolled fully past the left edge
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() < -self.width / 2
    }
}

/// A decorative ground tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrassBlock {
    pub left: i32,
    /// Inclusive
    pub right: i32,
}

impl GrassBlock {
    pub fn at(left: i32) -> Self {
        Self {
            left,
            right: left + GRASS_BLOCK_WIDTH - 1,
        }
    }

    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right < 0
    }
}

/// Range of void centers that keeps the whole void strictly inside the play band
pub fn void_center_range(void_height: i32) -> (i32, i32) {
    let half = void_height / 2;
    (half + 1, PLAY_BAND_BOTTOM - 1 - half)
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub rules: Rules,
    pub mode: Mode,
    pub score: u32,
    /// Best score seen during this process
    pub best_score: u32,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    /// Ticks since the last time-based award
    pub ticks_since_score: u32,
    pub player: Player,
    /// Fixed arena; order is spawn order
    pub pipes: [Pipe; NUM_PIPES],
    /// Index of the pipe furthest to the right
    pub rightmost_pipe: usize,
    /// Fixed arena; index parity selects the tile colour
    pub grass: [GrassBlock; NUM_GRASS_BLOCKS],
    /// Index of the tile furthest to the right
    pub rightmost_grass: usize,
}

impl GameState {
    /// Create a new session in the menu
    pub fn new(seed: u64, rules: Rules) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pipes = initial_pipes(&mut rng);
        Self {
            seed,
            rng,
            rules,
            mode: Mode::Menu,
            score: 0,
            best_score: 0,
            time_ticks: 0,
            ticks_since_score: 0,
            player: Player::default(),
            pipes,
            rightmost_pipe: NUM_PIPES - 1,
            grass: initial_grass(),
            rightmost_grass: NUM_GRASS_BLOCKS - 1,
        }
    }

    /// Put every transient entity back to its start-of-session value
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.ticks_since_score = 0;
        self.player = Player::default();
        self.pipes = initial_pipes(&mut self.rng);
        self.rightmost_pipe = NUM_PIPES - 1;
        self.grass = initial_grass();
        self.rightmost_grass = NUM_GRASS_BLOCKS - 1;
    }

    /// Menu/GameOver -> Playing
    pub fn start_run(&mut self) {
        self.reset_run();
        self.mode = Mode::Playing;
        log::info!("Run started ({:?})", self.rules);
    }

    /// Playing -> GameOver
    pub fn end_run(&mut self) {
        self.best_score = self.best_score.max(self.score);
        self.mode = Mode::GameOver;
        log::info!(
            "Run over after {} ticks: score {}, best {}",
            self.time_ticks,
            self.score,
            self.best_score
        );
    }

    /// GameOver -> Menu
    pub fn return_to_menu(&mut self) {
        self.reset_run();
        self.mode = Mode::Menu;
        log::info!("Back to menu");
    }

    /// Draw a fresh void center for a recycled pipe
    pub fn random_void_center(&mut self, void_height: i32) -> i32 {
        random_void_center(&mut self.rng, void_height)
    }
}

fn random_void_center(rng: &mut Pcg32, void_height: i32) -> i32 {
    let (lo, hi) = void_center_range(void_height);
    rng.random_range(lo..=hi)
}

fn initial_pipes(rng: &mut Pcg32) -> [Pipe; NUM_PIPES] {
    std::array::from_fn(|i| {
        let x = FIRST_PIPE_X + i as i32 * PIPE_SPACING;
        Pipe::new(x, random_void_center(rng, PIPE_VOID_HEIGHT))
    })
}

fn initial_grass() -> [GrassBlock; NUM_GRASS_BLOCKS] {
    std::array::from_fn(|i| GrassBlock::at(i as i32 * GRASS_BLOCK_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_in_menu() {
        let state = GameState::new(1, Rules::default());
        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.rightmost_pipe, NUM_PIPES - 1);
        assert_eq!(state.player, Player::default());
    }

    #[test]
    fn test_pipes_spawn_at_fixed_spacing() {
        let state = GameState::new(7, Rules::default());
        for pair in state.pipes.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, PIPE_SPACING);
        }
        let (lo, hi) = void_center_range(PIPE_VOID_HEIGHT);
        for pipe in &state.pipes {
            assert!((lo..=hi).contains(&pipe.y));
            assert!(pipe.void_top() > 0);
            assert!(pipe.void_bottom() < PLAY_BAND_BOTTOM);
        }
    }

    #[test]
    fn test_grass_tiles_are_contiguous() {
        let state = GameState::new(7, Rules::default());
        for pair in state.grass.windows(2) {
            assert_eq!(pair[1].left, pair[0].right + 1);
        }
    }

    #[test]
    fn test_end_run_keeps_best() {
        let mut state = GameState::new(3, Rules::default());
        state.start_run();
        state.score = 5;
        state.end_run();
        assert_eq!(state.best_score, 5);

        state.start_run();
        assert_eq!(state.score, 0);
        state.score = 2;
        state.end_run();
        assert_eq!(state.best_score, 5);
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let a = GameState::new(42, Rules::default());
        let b = GameState::new(42, Rules::default());
        assert_eq!(a.pipes, b.pipes);
    }
}
