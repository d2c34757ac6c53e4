//! Rendering on top of a caller-supplied canvas
//!
//! The core only issues rectangle and line primitives. Graphics contexts,
//! fonts and textures belong to whoever implements `Canvas`.

pub mod shapes;

use glam::Vec2;

use crate::sim::{GameState, Rect};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Drawing primitives provided by the platform layer
pub trait Canvas {
    fn draw_rect(&mut self, rect: Rect, color: Color, filled: bool);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
}

/// Draw every visible entity, then the game-over overlay if needed
pub fn draw_frame(state: &GameState, canvas: &mut dyn Canvas) {
    shapes::ship(&state.ship, canvas);
    for hostile in &state.hostiles {
        shapes::hostile(hostile, canvas);
    }
    for barrier in &state.barriers {
        shapes::barrier(barrier, canvas);
    }
    shapes::bonus(&state.bonus, canvas);

    if state.is_game_over() {
        canvas.draw_rect(shapes::screen_rect(), shapes::GAME_OVER_OVERLAY, true);
    }
}
