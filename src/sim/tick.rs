//! Per-frame simulation step
//!
//! Core game loop that advances the session by one variable-length frame.

use super::actor::Actor;
use super::collision::resolve_collisions;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Logical keys the input collaborator reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    Restart,
}

/// Input intents for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    /// One-shot; the driver clears it after the frame
    pub restart: bool,
    /// Idle/demo mode - autopilot flies the ship
    pub idle_mode: bool,
}

impl TickInput {
    /// Fold a key-down/key-up event into the held intents
    pub fn apply_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.move_left = pressed,
            Key::Right => self.move_right = pressed,
            Key::Fire => self.fire = pressed,
            Key::Restart => {
                if pressed {
                    self.restart = true;
                }
            }
        }
    }

    /// Clear one-shot commands after they have been processed
    pub fn clear_one_shots(&mut self) {
        self.restart = false;
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    state.elapsed += dt;

    let (left, right, fire) = if input.idle_mode {
        autopilot(state)
    } else {
        (input.move_left, input.move_right, input.fire)
    };
    state.ship.set_intent(left, right, fire);

    state.ship.update(dt, &mut state.rng);
    if state.ship.fired_this_frame {
        state.events.push(GameEvent::ShotFired);
    }
    for hostile in &mut state.hostiles {
        hostile.update(dt, &mut state.rng);
    }
    // Barriers are static
    state.bonus.update(dt, &mut state.rng);

    resolve_collisions(state);

    // End of frame: drop the dead (their shots go with them)
    state.hostiles.retain(|h| !h.destroyed);

    if state.ship.is_destroyed() {
        state.end();
        return;
    }

    if state.hostiles.is_empty() {
        log::info!("Wave cleared at level {}", state.level);
        state.level_up();
    }
}

/// Demo pilot: line up under the lowest hostile (leading its motion) and fire
fn autopilot(state: &GameState) -> (bool, bool, bool) {
    let ship_x = state.ship.pos.x;
    let target = state
        .hostiles
        .iter()
        .filter(|h| !h.destroyed)
        .max_by(|a, b| {
            // Lowest hostile first, then the closest column
            a.pos
                .y
                .total_cmp(&b.pos.y)
                .then((b.pos.x - ship_x).abs().total_cmp(&(a.pos.x - ship_x).abs()))
        });

    let Some(target) = target else {
        return (false, false, false);
    };

    // Lead by the shot's flight time to the target's row
    let nose_y = state.ship.pos.y - SHIP_HEIGHT * 0.5;
    let flight = ((nose_y - target.pos.y) / SHIP_SHOT_SPEED).max(0.0);
    let aim_x = target.pos.x + target.vel.x * flight;

    let dx = aim_x - ship_x;
    let left = dx < -2.0;
    let right = dx > 2.0;
    let aligned = dx.abs() < 8.0;
    (left, right, aligned)
}
