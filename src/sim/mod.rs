//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One unit time-step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use paddle::{Paddle, PaddleContact};
pub use state::{GamePhase, GameState, Playfield};
pub use tick::{TickEvents, TickInput, tick};
