//! The ball: Euler motion, wall reflection and the miss latch

use glam::Vec2;
use rand::Rng;

use super::state::Playfield;
use crate::config::GameConfig;

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pos: Vec2,
    /// Displacement per tick
    vel: Vec2,
    radius: f32,
    /// Set once the bottom edge passes the playfield bottom; never cleared
    missed: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            missed: false,
        }
    }

    /// Spawn at a random column near the top with a random diagonal heading
    pub fn spawn<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        let x = sample(rng, config.spawn_x_min, config.spawn_x_max);
        let vx = random_axis_speed(rng, config);
        let vy = random_axis_speed(rng, config);
        Self::new(
            Vec2::new(x, config.spawn_y),
            Vec2::new(vx, vy),
            config.ball_radius,
        )
    }

    /// Advance one tick, then run the miss, side wall and top wall checks
    pub fn update(&mut self, playfield: Playfield) {
        self.pos += self.vel;

        if self.pos.y + self.radius > playfield.height {
            self.missed = true;
        }

        if self.pos.x - self.radius < 0.0 || self.pos.x + self.radius > playfield.width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - self.radius < 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn bounce(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Rest the ball exactly on top of the paddle
    pub fn reposition(&mut self, paddle_top: f32) {
        self.pos.y = paddle_top - self.radius;
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn missed(&self) -> bool {
        self.missed
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Uniform in [min, max), or exactly `min` for an empty range
fn sample<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

fn random_axis_speed<R: Rng>(rng: &mut R, config: &GameConfig) -> f32 {
    let speed = sample(rng, config.min_axis_speed, config.max_axis_speed);
    if rng.random_bool(0.5) { speed } else { -speed }
}
