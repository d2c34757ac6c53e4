//! Shots fired by the ship and by hostiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::rng::RandomSource;
use crate::consts::*;

/// A straight-line shot owned by the actor that fired it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub destroyed: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            destroyed: false,
        }
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Fully past any screen edge by at least its own extent
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.y < -PROJECTILE_HEIGHT
            || self.pos.y > WORLD_HEIGHT + PROJECTILE_HEIGHT
            || self.pos.x < -PROJECTILE_WIDTH
            || self.pos.x > WORLD_WIDTH + PROJECTILE_WIDTH
    }

    /// Still able to hit something this frame
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.destroyed && !self.is_out_of_bounds()
    }
}

impl Actor for Projectile {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn update(&mut self, dt: f32, _rng: &mut dyn RandomSource) {
        if self.destroyed {
            return;
        }
        self.pos += self.vel * dt;
    }
}

/// Advance every shot in `shots` and drop the spent ones
pub(crate) fn advance_all(shots: &mut Vec<Projectile>, dt: f32, rng: &mut dyn RandomSource) {
    for shot in shots.iter_mut() {
        shot.update(dt, rng);
    }
    shots.retain(Projectile::is_live);
}
