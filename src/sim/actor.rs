//! Mobile actors: the player's ship, hostiles and the bonus craft
//!
//! All actors share position/size/bounds and an `update` step. The
//! movement and firing rules differ per actor and live in their own
//! `update` implementations.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::{self, Projectile};
use super::rect::Rect;
use super::rng::RandomSource;
use crate::consts::*;

/// Shared shape of every moving entity
pub trait Actor {
    fn position(&self) -> Vec2;

    fn size(&self) -> Vec2;

    /// Centered bounds, recomputed from the current position
    fn bounds(&self) -> Rect {
        Rect::centered(self.position(), self.size())
    }

    fn is_destroyed(&self) -> bool;

    /// Advance one frame
    fn update(&mut self, dt: f32, rng: &mut dyn RandomSource);
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    pub lives: u8,
    pub max_lives: u8,
    pub move_left: bool,
    pub move_right: bool,
    pub firing: bool,
    /// Seconds until the next shot is allowed
    pub shot_cooldown: f32,
    pub projectiles: Vec<Projectile>,
    /// Set for the frame in which a shot left the ship
    #[serde(skip)]
    pub fired_this_frame: bool,
}

impl Default for Ship {
    fn default() -> Self {
        Self::new(SHIP_LIVES)
    }
}

impl Ship {
    pub fn new(max_lives: u8) -> Self {
        Self {
            pos: Vec2::new(SHIP_START_X, SHIP_START_Y),
            vel: Vec2::ZERO,
            lives: max_lives,
            max_lives,
            move_left: false,
            move_right: false,
            firing: false,
            shot_cooldown: 0.0,
            projectiles: Vec::new(),
            fired_this_frame: false,
        }
    }

    /// Restore lives, position and gun; clears all shots
    pub fn reset(&mut self) {
        self.lives = self.max_lives;
        self.pos = Vec2::new(SHIP_START_X, SHIP_START_Y);
        self.vel = Vec2::ZERO;
        self.shot_cooldown = 0.0;
        self.projectiles.clear();
        self.fired_this_frame = false;
    }

    pub fn set_intent(&mut self, left: bool, right: bool, fire: bool) {
        self.move_left = left;
        self.move_right = right;
        self.firing = fire;
    }

    pub fn take_damage(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn destroy(&mut self) {
        self.lives = 0;
    }

    pub fn live_shots(&self) -> usize {
        self.projectiles.iter().filter(|p| p.is_live()).count()
    }

    /// Spawn a shot at the nose; refused while the cap is reached
    pub fn try_fire(&mut self) -> bool {
        if self.live_shots() >= SHIP_MAX_SHOTS {
            return false;
        }
        let nose = Vec2::new(self.pos.x, self.pos.y - SHIP_HEIGHT * 0.5);
        self.projectiles
            .push(Projectile::new(nose, Vec2::new(0.0, -SHIP_SHOT_SPEED)));
        self.shot_cooldown = SHIP_SHOT_COOLDOWN;
        true
    }
}

impl Actor for Ship {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::new(SHIP_WIDTH, SHIP_HEIGHT)
    }

    fn is_destroyed(&self) -> bool {
        self.lives == 0
    }

    fn update(&mut self, dt: f32, rng: &mut dyn RandomSource) {
        self.fired_this_frame = false;

        // No inertia: velocity is purely the held intent
        self.vel.x = 0.0;
        if self.move_left {
            self.vel.x = -SHIP_SPEED;
        }
        if self.move_right {
            self.vel.x = SHIP_SPEED;
        }
        let half = SHIP_WIDTH * 0.5;
        self.pos.x = (self.pos.x + self.vel.x * dt).clamp(half, WORLD_WIDTH - half);

        projectile::advance_all(&mut self.projectiles, dt, rng);

        if self.firing && self.shot_cooldown <= 0.0 {
            self.fired_this_frame = self.try_fire();
        }
        if self.shot_cooldown > 0.0 {
            self.shot_cooldown -= dt;
        }
    }
}

/// One member of an enemy wave
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub destroyed: bool,
    /// Seconds until the next shot may be rolled for
    pub shot_cooldown: f32,
    /// Per-frame probability of firing once the cooldown has elapsed
    pub fire_chance: f32,
    pub projectiles: Vec<Projectile>,
    #[serde(skip)]
    pub fired_this_frame: bool,
}

impl Hostile {
    pub fn new(pos: Vec2, fire_chance: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(HOSTILE_SPEED, 0.0),
            destroyed: false,
            shot_cooldown: 0.0,
            fire_chance,
            projectiles: Vec::new(),
            fired_this_frame: false,
        }
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Below the player line
    pub fn has_invaded(&self) -> bool {
        self.pos.y > HOSTILE_INVASION_Y
    }

    fn fire(&mut self) {
        let muzzle = Vec2::new(self.pos.x, self.pos.y + HOSTILE_HEIGHT * 0.5);
        self.projectiles
            .push(Projectile::new(muzzle, Vec2::new(0.0, HOSTILE_SHOT_SPEED)));
        self.shot_cooldown = HOSTILE_FIRE_COOLDOWN;
    }
}

impl Actor for Hostile {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::new(HOSTILE_WIDTH, HOSTILE_HEIGHT)
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn update(&mut self, dt: f32, rng: &mut dyn RandomSource) {
        self.fired_this_frame = false;
        if self.destroyed {
            return;
        }

        self.pos.x += self.vel.x * dt;

        // Bounce only off the edge we are heading into, then pull back inside
        let half = HOSTILE_WIDTH * 0.5;
        let hit_right = self.vel.x > 0.0 && self.pos.x >= WORLD_WIDTH - half;
        let hit_left = self.vel.x < 0.0 && self.pos.x <= half;
        if hit_right || hit_left {
            self.vel.x = -self.vel.x;
            self.pos.y += HOSTILE_DROP;
            self.pos.x = self.pos.x.clamp(half, WORLD_WIDTH - half);
        }

        if self.shot_cooldown > 0.0 {
            self.shot_cooldown -= dt;
        }
        if self.shot_cooldown <= 0.0 && rng.chance(self.fire_chance) {
            self.fire();
            self.fired_this_frame = true;
        }

        projectile::advance_all(&mut self.projectiles, dt, rng);
    }
}

/// The periodic high-value target crossing the top of the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusCraft {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
    pub destroyed: bool,
    /// Seconds of dormancy left before the next crossing
    pub spawn_timer: f32,
    pub score_value: u64,
}

impl BonusCraft {
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        Self {
            pos: Vec2::new(-BONUS_WIDTH, BONUS_Y),
            vel: Vec2::ZERO,
            active: false,
            destroyed: false,
            spawn_timer: rng.range(BONUS_TIMER_FIRST_MIN, BONUS_TIMER_MAX),
            score_value: BONUS_SCORE,
        }
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Can currently be shot
    pub fn is_targetable(&self) -> bool {
        self.active && !self.destroyed
    }

    fn activate(&mut self) {
        self.active = true;
        self.pos = Vec2::new(-BONUS_WIDTH, BONUS_Y);
        self.vel = Vec2::new(BONUS_SPEED, 0.0);
        log::debug!("Bonus craft crossing");
    }
}

impl Actor for BonusCraft {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::new(BONUS_WIDTH, BONUS_HEIGHT)
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn update(&mut self, dt: f32, rng: &mut dyn RandomSource) {
        if self.destroyed {
            return;
        }

        if !self.active {
            self.spawn_timer -= dt;
            if self.spawn_timer <= 0.0 {
                self.activate();
            }
            return;
        }

        self.pos.x += self.vel.x * dt;
        if self.pos.x > WORLD_WIDTH + BONUS_WIDTH {
            self.active = false;
            self.vel = Vec2::ZERO;
            self.spawn_timer = rng.range(BONUS_TIMER_REPEAT_MIN, BONUS_TIMER_MAX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;

    const DT: f32 = 1.0 / 60.0;

    fn never() -> ScriptedRng {
        ScriptedRng::constant(0.999)
    }

    #[test]
    fn test_ship_moves_and_clamps() {
        let mut rng = never();
        let mut ship = Ship::default();
        ship.set_intent(true, false, false);
        ship.update(0.05, &mut rng);
        assert_eq!(ship.vel.x, -SHIP_SPEED);
        assert_eq!(ship.pos.x, 385.0);

        ship.set_intent(false, false, false);
        ship.update(0.05, &mut rng);
        assert_eq!(ship.vel.x, 0.0);
        assert_eq!(ship.pos.x, 385.0);

        ship.pos.x = 25.0;
        ship.set_intent(true, false, false);
        ship.update(0.05, &mut rng);
        assert_eq!(ship.pos.x, SHIP_WIDTH * 0.5);

        ship.pos.x = 775.0;
        ship.set_intent(false, true, false);
        ship.update(0.05, &mut rng);
        assert_eq!(ship.pos.x, WORLD_WIDTH - SHIP_WIDTH * 0.5);
    }

    #[test]
    fn test_ship_fires_from_nose() {
        let mut rng = never();
        let mut ship = Ship::default();
        ship.set_intent(false, false, true);
        ship.update(DT, &mut rng);
        assert!(ship.fired_this_frame);
        assert_eq!(ship.projectiles.len(), 1);
        assert_eq!(ship.projectiles[0].pos, Vec2::new(400.0, 535.0));
        assert_eq!(ship.projectiles[0].vel, Vec2::new(0.0, -SHIP_SHOT_SPEED));
        assert!(ship.shot_cooldown > 0.0);

        // Cooldown blocks the next frame
        ship.update(DT, &mut rng);
        assert_eq!(ship.projectiles.len(), 1);
    }

    #[test]
    fn test_ship_third_shot_refused() {
        let mut rng = never();
        let mut ship = Ship::default();
        ship.set_intent(false, false, true);

        // Two shots spaced by the cooldown
        ship.update(DT, &mut rng);
        for _ in 0..13 {
            ship.update(DT, &mut rng);
        }
        assert_eq!(ship.live_shots(), 2);

        // Cooldown elapsed again, both shots still on screen
        for _ in 0..13 {
            ship.update(DT, &mut rng);
        }
        assert!(ship.shot_cooldown <= 0.0);
        assert_eq!(ship.live_shots(), 2);
        assert!(!ship.try_fire());
        assert_eq!(ship.live_shots(), 2);
    }

    #[test]
    fn test_ship_damage_and_reset() {
        let mut ship = Ship::new(3);
        ship.take_damage();
        assert_eq!(ship.lives, 2);
        assert!(!ship.is_destroyed());
        ship.destroy();
        ship.take_damage();
        assert_eq!(ship.lives, 0);
        assert!(ship.is_destroyed());

        ship.pos.x = 10.0;
        ship.shot_cooldown = 1.0;
        ship.projectiles.push(Projectile::new(Vec2::ZERO, Vec2::ZERO));
        ship.reset();
        assert_eq!(ship.lives, 3);
        assert_eq!(ship.pos, Vec2::new(SHIP_START_X, SHIP_START_Y));
        assert_eq!(ship.shot_cooldown, 0.0);
        assert!(ship.projectiles.is_empty());
    }

    #[test]
    fn test_hostile_bounces_off_right_edge() {
        let mut rng = never();
        let edge = WORLD_WIDTH - HOSTILE_WIDTH * 0.5;
        let mut h = Hostile::new(Vec2::new(edge - 0.5, 100.0), 0.0);
        h.update(DT, &mut rng);
        assert!(h.vel.x < 0.0);
        assert_eq!(h.pos.y, 100.0 + HOSTILE_DROP);

        // Sitting on the boundary must not flip back next frame
        h.update(DT, &mut rng);
        assert!(h.vel.x < 0.0);
        assert_eq!(h.pos.y, 100.0 + HOSTILE_DROP);
    }

    #[test]
    fn test_hostile_bounces_off_left_edge() {
        let mut rng = never();
        let mut h = Hostile::new(Vec2::new(15.5, 100.0), 0.0);
        h.vel.x = -HOSTILE_SPEED;
        h.update(DT, &mut rng);
        assert!(h.vel.x > 0.0);
        assert_eq!(h.pos.y, 100.0 + HOSTILE_DROP);
        assert!(h.pos.x >= HOSTILE_WIDTH * 0.5);
    }

    #[test]
    fn test_hostile_fire_roll_and_cooldown() {
        let mut h = Hostile::new(Vec2::new(300.0, 100.0), 0.5);

        let mut miss = ScriptedRng::constant(0.9);
        h.update(DT, &mut miss);
        assert!(h.projectiles.is_empty());

        let mut hit = ScriptedRng::constant(0.1);
        h.update(DT, &mut hit);
        assert!(h.fired_this_frame);
        assert_eq!(h.projectiles.len(), 1);
        assert!(h.projectiles[0].vel.y > 0.0);
        assert_eq!(h.shot_cooldown, HOSTILE_FIRE_COOLDOWN);

        // Certain roll is still gated by the cooldown
        h.fire_chance = 1.0;
        for _ in 0..60 {
            h.update(DT, &mut hit);
        }
        assert_eq!(h.projectiles.len(), 1);
    }

    #[test]
    fn test_destroyed_hostile_is_frozen() {
        let mut rng = ScriptedRng::constant(0.0);
        let mut h = Hostile::new(Vec2::new(300.0, 100.0), 1.0);
        h.destroy();
        h.update(DT, &mut rng);
        assert_eq!(h.pos, Vec2::new(300.0, 100.0));
        assert!(h.projectiles.is_empty());
    }

    #[test]
    fn test_bonus_activates_when_timer_expires() {
        let mut rng = ScriptedRng::constant(0.0);
        let mut bonus = BonusCraft::new(&mut rng);
        assert_eq!(bonus.spawn_timer, BONUS_TIMER_FIRST_MIN);
        assert!(!bonus.active);

        bonus.spawn_timer = 0.01;
        bonus.update(0.02, &mut rng);
        assert!(bonus.active);
        assert_eq!(bonus.pos, Vec2::new(-BONUS_WIDTH, BONUS_Y));
        assert_eq!(bonus.vel, Vec2::new(BONUS_SPEED, 0.0));
    }

    #[test]
    fn test_bonus_goes_dormant_after_crossing() {
        let mut rng = ScriptedRng::constant(0.5);
        let mut bonus = BonusCraft::new(&mut rng);
        bonus.spawn_timer = 0.0;
        bonus.update(DT, &mut rng);
        assert!(bonus.active);

        bonus.pos.x = WORLD_WIDTH + BONUS_WIDTH - 1.0;
        bonus.update(0.05, &mut rng);
        assert!(!bonus.active);
        assert!(!bonus.destroyed);
        assert_eq!(bonus.spawn_timer, 12.5);
    }

    #[test]
    fn test_destroyed_bonus_stays_down() {
        let mut rng = ScriptedRng::constant(0.0);
        let mut bonus = BonusCraft::new(&mut rng);
        bonus.destroy();
        bonus.spawn_timer = 0.0;
        bonus.update(DT, &mut rng);
        assert!(!bonus.active);
        assert!(!bonus.is_targetable());
    }

    #[test]
    fn test_bounds_follow_position() {
        let mut h = Hostile::new(Vec2::new(100.0, 100.0), 0.0);
        assert_eq!(h.bounds(), Rect::new(85.0, 85.0, 30.0, 30.0));
        h.pos.x = 200.0;
        assert_eq!(h.bounds().x, 185.0);
    }
}
