//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Caller-supplied frame delta only (clamped)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod barrier;
pub mod collision;
pub mod projectile;
pub mod rect;
pub mod rng;
pub mod state;
pub mod tick;

pub use actor::{Actor, BonusCraft, Hostile, Ship};
pub use barrier::{Barrier, Brick, default_barriers};
pub use collision::resolve_collisions;
pub use projectile::Projectile;
pub use rect::Rect;
pub use rng::{RandomSource, ScriptedRng};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Key, TickInput, tick};
