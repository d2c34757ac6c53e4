//! Per-frame collision resolution
//!
//! Runs once per frame after every actor has moved. Pairs are tested in a
//! fixed order:
//! 1. ship shots vs hostiles
//! 2. hostiles vs the player line
//! 3. hostile shots vs the ship
//! 4. hostile shots vs barrier bricks
//! 5. ship shots vs barrier bricks
//! 6. ship shots vs the bonus craft
//!
//! Anything destroyed by an earlier test is skipped by every later one, so a
//! single shot is consumed at most once per frame.

use super::actor::Actor;
use super::barrier::Barrier;
use super::projectile::Projectile;
use super::rect::Rect;
use super::state::{GameEvent, GameState};
use crate::consts::HOSTILE_SCORE;

/// Run every collision test for this frame
pub fn resolve_collisions(state: &mut GameState) {
    ship_shots_vs_hostiles(state);
    hostiles_vs_player_line(state);
    hostile_shots_vs_ship(state);
    hostile_shots_vs_barriers(state);
    ship_shots_vs_barriers(state);
    ship_shots_vs_bonus(state);
}

fn ship_shots_vs_hostiles(state: &mut GameState) {
    let points = HOSTILE_SCORE * state.level as u64;
    for shot in state.ship.projectiles.iter_mut() {
        for hostile in state.hostiles.iter_mut() {
            if shot.destroyed {
                break;
            }
            if hostile.destroyed {
                continue;
            }
            if shot.bounds().intersects(&hostile.bounds()) {
                hostile.destroy();
                shot.destroy();
                state.score += points;
                state.events.push(GameEvent::HostileDestroyed { points });
            }
        }
    }
}

fn hostiles_vs_player_line(state: &mut GameState) {
    if state.ship.is_destroyed() {
        return;
    }
    let invaded = state
        .hostiles
        .iter()
        .any(|h| !h.destroyed && h.has_invaded());
    if invaded {
        log::info!("Hostiles reached the player line");
        state.ship.destroy();
        state.end();
    }
}

fn hostile_shots_vs_ship(state: &mut GameState) {
    'hostiles: for hostile in state.hostiles.iter_mut() {
        for shot in hostile.projectiles.iter_mut() {
            if state.ship.is_destroyed() {
                break 'hostiles;
            }
            if shot.destroyed {
                continue;
            }
            if shot.bounds().intersects(&state.ship.bounds()) {
                shot.destroy();
                state.ship.take_damage();
                state.events.push(GameEvent::ShipHit {
                    lives: state.ship.lives,
                });
            }
        }
    }
    if state.ship.is_destroyed() {
        state.end();
    }
}

/// Let `shot` knock out at most one brick across all barriers
fn hit_barriers(shot: &mut Projectile, barriers: &mut [Barrier], events: &mut Vec<GameEvent>) {
    if shot.destroyed {
        return;
    }
    let rect: Rect = shot.bounds();
    for (barrier_idx, barrier) in barriers.iter_mut().enumerate() {
        if let Some(brick) = barrier.first_hit(&rect) {
            barrier.damage_brick(brick);
            shot.destroy();
            events.push(GameEvent::BrickDestroyed {
                barrier: barrier_idx,
                brick,
            });
            return;
        }
    }
}

fn hostile_shots_vs_barriers(state: &mut GameState) {
    for hostile in state.hostiles.iter_mut() {
        for shot in hostile.projectiles.iter_mut() {
            hit_barriers(shot, &mut state.barriers, &mut state.events);
        }
    }
}

fn ship_shots_vs_barriers(state: &mut GameState) {
    for shot in state.ship.projectiles.iter_mut() {
        hit_barriers(shot, &mut state.barriers, &mut state.events);
    }
}

fn ship_shots_vs_bonus(state: &mut GameState) {
    let points = state.bonus.score_value * state.level as u64;
    for shot in state.ship.projectiles.iter_mut() {
        if !state.bonus.is_targetable() {
            return;
        }
        if shot.destroyed {
            continue;
        }
        if shot.bounds().intersects(&state.bonus.bounds()) {
            state.bonus.destroy();
            shot.destroy();
            state.score += points;
            state.events.push(GameEvent::BonusDestroyed { points });
        }
    }
}
