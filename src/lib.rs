//! Invaders - a fixed-screen arcade shooter core
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (actors, barriers, collisions, session state)
//! - `renderer`: Primitive drawing on top of a caller-supplied canvas
//! - `settings`: Data-driven difficulty and session configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Largest frame delta the simulation will integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// World dimensions (origin top-left, +y down)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = 40.0;
    pub const SHIP_HEIGHT: f32 = 30.0;
    pub const SHIP_START_X: f32 = 400.0;
    pub const SHIP_START_Y: f32 = 550.0;
    pub const SHIP_SPEED: f32 = 300.0;
    pub const SHIP_LIVES: u8 = 3;
    pub const SHIP_SHOT_COOLDOWN: f32 = 0.2;
    pub const SHIP_SHOT_SPEED: f32 = 500.0;
    /// Hard cap on the ship's live shots
    pub const SHIP_MAX_SHOTS: usize = 2;

    /// Hostile defaults
    pub const HOSTILE_WIDTH: f32 = 30.0;
    pub const HOSTILE_HEIGHT: f32 = 30.0;
    pub const HOSTILE_SPEED: f32 = 50.0;
    pub const HOSTILE_DROP: f32 = 15.0;
    /// Bernoulli trial per frame once the cooldown has elapsed
    pub const HOSTILE_FIRE_CHANCE: f32 = 0.0005;
    pub const HOSTILE_FIRE_COOLDOWN: f32 = 5.0;
    pub const HOSTILE_SHOT_SPEED: f32 = 300.0;
    /// A hostile below this line has reached the player
    pub const HOSTILE_INVASION_Y: f32 = 500.0;

    /// Projectile size (shared by both sides)
    pub const PROJECTILE_WIDTH: f32 = 5.0;
    pub const PROJECTILE_HEIGHT: f32 = 15.0;

    /// Bonus craft defaults
    pub const BONUS_WIDTH: f32 = 50.0;
    pub const BONUS_HEIGHT: f32 = 25.0;
    pub const BONUS_Y: f32 = 50.0;
    pub const BONUS_SPEED: f32 = 150.0;
    pub const BONUS_SCORE: u64 = 100;
    /// First dormant period is drawn from [FIRST_MIN, MAX), later ones from [REPEAT_MIN, MAX)
    pub const BONUS_TIMER_FIRST_MIN: f32 = 5.0;
    pub const BONUS_TIMER_REPEAT_MIN: f32 = 10.0;
    pub const BONUS_TIMER_MAX: f32 = 15.0;

    /// Barrier layout
    pub const BARRIER_WIDTH: f32 = 80.0;
    pub const BARRIER_HEIGHT: f32 = 60.0;
    pub const BRICK_SIZE: f32 = 10.0;
    pub const BARRIER_COUNT: usize = 4;
    pub const BARRIER_START_X: f32 = 150.0;
    pub const BARRIER_SPACING: f32 = 160.0;
    pub const BARRIER_Y: f32 = 450.0;

    /// Wave layout
    pub const WAVE_BASE_ROWS: u32 = 3;
    pub const WAVE_COLUMNS: u32 = 8;
    pub const WAVE_START_X: f32 = 100.0;
    pub const WAVE_START_Y: f32 = 50.0;
    pub const WAVE_SPACING_X: f32 = 70.0;
    pub const WAVE_SPACING_Y: f32 = 50.0;

    /// Points per hostile, multiplied by the level
    pub const HOSTILE_SCORE: u64 = 10;
}
