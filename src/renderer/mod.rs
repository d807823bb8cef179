//! Immediate-mode 2D rendering
//!
//! The game builds a list of draw commands each frame; a `Surface` executes
//! them. On the web the surface is an HTML canvas.

pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::{DrawCommand, Frame, compose};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::Playfield;

/// A 2D drawing surface
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);

    /// Playfield matching the surface size
    fn playfield(&self) -> Playfield {
        Playfield::new(self.width(), self.height())
    }
}
