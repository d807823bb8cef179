//! Draw commands for one frame

use glam::Vec2;

use super::Surface;
use crate::consts::*;
use crate::sim::GameState;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: &'static str,
    },
    Text {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: &'static str,
    },
}

/// Output of one game step
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    /// Whether the host should schedule another tick
    pub reschedule: bool,
}

impl Frame {
    pub fn execute<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear { width, height } => {
                    surface.clear_rect(0.0, 0.0, *width, *height);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => surface.fill_circle(*center, *radius, color),
                DrawCommand::Rect { pos, size, color } => {
                    surface.fill_rect(pos.x, pos.y, size.x, size.y, color);
                }
                DrawCommand::Text {
                    text,
                    pos,
                    font,
                    color,
                } => surface.fill_text(text, *pos, font, color),
            }
        }
    }
}

/// Build the frame for the current state.
///
/// While running the whole playfield is redrawn. Once the game is over only
/// the overlay is drawn, on top of whatever the last running frame left.
pub fn compose(state: &GameState) -> Frame {
    if state.is_over() {
        return Frame {
            commands: vec![DrawCommand::Text {
                text: GAME_OVER_TEXT.to_string(),
                pos: Vec2::from(GAME_OVER_POS),
                font: GAME_OVER_FONT,
                color: GAME_OVER_COLOR,
            }],
            reschedule: false,
        };
    }

    let ball = &state.ball;
    let paddle = &state.paddle;
    Frame {
        commands: vec![
            DrawCommand::Clear {
                width: state.playfield.width,
                height: state.playfield.height,
            },
            DrawCommand::Circle {
                center: ball.pos(),
                radius: ball.radius(),
                color: BALL_COLOR,
            },
            DrawCommand::Rect {
                pos: Vec2::new(paddle.x, paddle.y),
                size: Vec2::new(paddle.width, paddle.height),
                color: PADDLE_COLOR,
            },
            DrawCommand::Text {
                text: state.score.to_string(),
                pos: Vec2::from(SCORE_POS),
                font: SCORE_FONT,
                color: SCORE_COLOR,
            },
        ],
        reschedule: true,
    }
}
