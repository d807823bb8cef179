//! Per-frame simulation tick
//!
//! One tick: move the ball, move the paddle (which may bounce the ball), then
//! check for a miss.

use super::paddle::PaddleContact;
use super::state::{GamePhase, GameState};

/// Input state polled once per tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer x in host (client) space, if it moved
    pub pointer_x: Option<f32>,
    /// Left edge of the drawing surface in host space
    pub surface_left: f32,
    /// Demo mode - the paddle chases the ball on its own
    pub autopilot: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvents {
    pub contact: PaddleContact,
    /// This tick moved the game into GameOver
    pub ended: bool,
}

impl TickEvents {
    fn idle() -> Self {
        Self {
            contact: PaddleContact::NoHit,
            ended: false,
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    if state.phase == GamePhase::GameOver {
        return TickEvents::idle();
    }

    state.time_ticks += 1;

    if input.autopilot {
        let target = autopilot_target(state, input.surface_left);
        state.paddle.set_pointer_target(target);
    } else if let Some(x) = input.pointer_x {
        state.paddle.set_pointer_target(x);
    }

    state.ball.update(state.playfield);
    let contact = state
        .paddle
        .update(&mut state.ball, input.surface_left, state.playfield);

    if contact == PaddleContact::Hit {
        state.score += 1;
        log::debug!("Paddle hit at tick {} (score {})", state.time_ticks, state.score);
    }

    let mut events = TickEvents {
        contact,
        ended: false,
    };
    if state.ball.missed() {
        state.phase = GamePhase::GameOver;
        events.ended = true;
        log::info!(
            "Game over after {} ticks, final score {}",
            state.time_ticks,
            state.score
        );
    }

    events
}

/// Chase where the ball will be after this tick's move, plus a slow wobble
/// that sometimes exceeds half the paddle so rallies eventually end
fn autopilot_target(state: &GameState, surface_left: f32) -> f32 {
    let t = state.time_ticks as f32;
    let wobble = (t * 0.011).sin() * 45.0 + (t * 0.0037).sin() * 35.0;
    state.ball.x() + state.ball.velocity().x + surface_left + wobble
}
