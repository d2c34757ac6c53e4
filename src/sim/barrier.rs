//! Destructible barriers built from square bricks
//!
//! The brick grid is generated row-major. The middle third of the bottom
//! row is never generated, leaving a passage under each barrier.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// One destructible cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub row: usize,
    pub col: usize,
    pub destroyed: bool,
}

/// A static field of bricks centered on `pos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barrier {
    pub pos: Vec2,
    pub rows: usize,
    pub cols: usize,
    pub brick_size: f32,
    pub bricks: Vec<Brick>,
}

/// True for cells carved out of the bottom row
#[inline]
pub fn is_gap_cell(row: usize, col: usize, rows: usize, cols: usize) -> bool {
    row + 1 == rows && col > cols / 3 && col < 2 * cols / 3
}

impl Barrier {
    /// Standard-size barrier
    pub fn new(pos: Vec2) -> Self {
        Self::with_shape(pos, BARRIER_WIDTH, BARRIER_HEIGHT, BRICK_SIZE)
    }

    pub fn with_shape(pos: Vec2, width: f32, height: f32, brick_size: f32) -> Self {
        let rows = (height / brick_size) as usize;
        let cols = (width / brick_size) as usize;
        let left = pos.x - width * 0.5;
        let top = pos.y - height * 0.5;

        let mut bricks = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                if is_gap_cell(row, col, rows, cols) {
                    continue;
                }
                bricks.push(Brick {
                    rect: Rect::new(
                        left + col as f32 * brick_size,
                        top + row as f32 * brick_size,
                        brick_size,
                        brick_size,
                    ),
                    row,
                    col,
                    destroyed: false,
                });
            }
        }

        Self {
            pos,
            rows,
            cols,
            brick_size,
            bricks,
        }
    }

    /// Mark one brick destroyed; repeated or out-of-range indices are ignored
    pub fn damage_brick(&mut self, index: usize) {
        if let Some(brick) = self.bricks.get_mut(index) {
            brick.destroyed = true;
        }
    }

    /// Index of the first standing brick (in index order) overlapping `rect`
    pub fn first_hit(&self, rect: &Rect) -> Option<usize> {
        self.bricks
            .iter()
            .position(|b| !b.destroyed && b.rect.intersects(rect))
    }

    pub fn standing(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.destroyed)
    }

    pub fn is_demolished(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }
}

/// The default row of barriers above the ship
pub fn default_barriers() -> Vec<Barrier> {
    (0..BARRIER_COUNT)
        .map(|i| {
            Barrier::new(Vec2::new(
                BARRIER_START_X + i as f32 * BARRIER_SPACING,
                BARRIER_Y,
            ))
        })
        .collect()
}
