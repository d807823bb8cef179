//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::paddle::Paddle;
use crate::config::GameConfig;
use crate::consts::{DEFAULT_PLAYFIELD_HEIGHT, DEFAULT_PLAYFIELD_WIDTH};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball in play
    Running,
    /// Ball fell past the bottom edge; terminal
    GameOver,
}

/// Playfield bounds; the origin is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT)
    }
}

/// Complete game state (one ball, one paddle)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub playfield: Playfield,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Successful paddle hits
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with a seeded ball spawn
    pub fn new(seed: u64, config: &GameConfig, playfield: Playfield, surface_left: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::spawn(&mut rng, config);
        Self::with_ball(seed, ball, config, playfield, surface_left)
    }

    /// Create a game around an explicit ball
    pub fn with_ball(
        seed: u64,
        ball: Ball,
        config: &GameConfig,
        playfield: Playfield,
        surface_left: f32,
    ) -> Self {
        Self {
            seed,
            playfield,
            ball,
            paddle: Paddle::new(config, playfield, surface_left),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
