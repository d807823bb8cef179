//! The player's paddle
//!
//! Follows the pointer horizontally, stays at a fixed height, and bounces the
//! ball when they overlap.

use super::ball::Ball;
use super::state::Playfield;
use crate::config::GameConfig;

/// Outcome of a paddle update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleContact {
    NoHit,
    Hit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Left edge, playfield-local
    pub x: f32,
    /// Top edge, fixed at creation
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Last known pointer x in host (client) space
    pointer_target_x: f32,
}

impl Paddle {
    /// Centered paddle near the bottom; the pointer target starts at its center
    pub fn new(config: &GameConfig, playfield: Playfield, surface_left: f32) -> Self {
        let x = (playfield.width - config.paddle_width) / 2.0;
        Self {
            x,
            y: playfield.height - config.paddle_bottom_offset,
            width: config.paddle_width,
            height: config.paddle_height,
            pointer_target_x: x + surface_left + config.paddle_width / 2.0,
        }
    }

    pub fn set_pointer_target(&mut self, client_x: f32) {
        self.pointer_target_x = client_x;
    }

    pub fn pointer_target(&self) -> f32 {
        self.pointer_target_x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Follow the pointer, then bounce the ball if it overlaps
    pub fn update(
        &mut self,
        ball: &mut Ball,
        surface_left: f32,
        playfield: Playfield,
    ) -> PaddleContact {
        self.follow_pointer(surface_left, playfield);

        if !self.ball_overlaps(ball) {
            return PaddleContact::NoHit;
        }

        ball.bounce();
        ball.reposition(self.top());
        PaddleContact::Hit
    }

    fn follow_pointer(&mut self, surface_left: f32, playfield: Playfield) {
        self.x = self.pointer_target_x - surface_left - self.width / 2.0;
        if self.x < 0.0 {
            self.x = 0.0;
        }
        if self.x + self.width > playfield.width {
            self.x = playfield.width - self.width;
        }
    }

    /// Strict overlap test. Vertically the ball's edges must cross into the
    /// paddle; horizontally only the ball's center counts, so a ball whose
    /// center is past the paddle edge misses even if its body overlaps.
    pub fn ball_overlaps(&self, ball: &Ball) -> bool {
        ball.bottom() > self.top()
            && ball.top() < self.bottom()
            && ball.x() > self.left()
            && ball.x() < self.right()
    }
}
