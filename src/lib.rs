//! Paddle Ball - keep the ball off the floor
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, scoring, game over)
//! - `renderer`: Draw command list and the drawing-surface abstraction
//! - `game`: Per-frame step that ties simulation and rendering together
//! - `config`: Data-driven tunables

pub mod config;
pub mod error;
pub mod game;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::GameError;
pub use game::Game;

/// Game configuration constants
pub mod consts {
    /// Playfield used when no drawing surface supplies a size
    pub const DEFAULT_PLAYFIELD_WIDTH: f32 = 560.0;
    pub const DEFAULT_PLAYFIELD_HEIGHT: f32 = 640.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Spawn column range (x), sampled uniformly
    pub const BALL_SPAWN_X_MIN: f32 = 60.0;
    pub const BALL_SPAWN_X_MAX: f32 = 500.0;
    pub const BALL_SPAWN_Y: f32 = 60.0;
    /// Per-axis speed range (pixels per tick), sign picked separately
    pub const BALL_MIN_AXIS_SPEED: f32 = 6.0;
    pub const BALL_MAX_AXIS_SPEED: f32 = 12.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 32.0;
    /// Distance from the playfield bottom to the paddle top
    pub const PADDLE_BOTTOM_OFFSET: f32 = 64.0;

    /// HUD layout
    pub const SCORE_POS: (f32, f32) = (20.0, 50.0);
    pub const SCORE_FONT: &str = "40px Arial";
    pub const GAME_OVER_POS: (f32, f32) = (150.0, 300.0);
    pub const GAME_OVER_FONT: &str = "54px \"Arial Black\"";
    pub const GAME_OVER_TEXT: &str = "GAME OVER";

    /// Palette
    pub const BALL_COLOR: &str = "#fdfdfd";
    pub const PADDLE_COLOR: &str = "#a051a2";
    pub const SCORE_COLOR: &str = "#7cc8e9";
    pub const GAME_OVER_COLOR: &str = "tomato";
}
