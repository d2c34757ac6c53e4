//! Session state and core simulation types
//!
//! Everything needed to resume a session deterministically lives here,
//! including the RNG.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{BonusCraft, Hostile, Ship};
use super::barrier::{Barrier, default_barriers};
use super::rng;
use crate::Settings;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ship lost; frozen until restart
    GameOver,
}

/// Something that happened during the last tick (for audio/effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    HostileDestroyed { points: u64 },
    ShipHit { lives: u8 },
    BrickDestroyed { barrier: usize, brick: usize },
    BonusDestroyed { points: u64 },
    LevelUp { level: u32 },
    GameOver { score: u64 },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub score: u64,
    /// Best score seen in this process
    pub high_score: u64,
    /// 1-based level
    pub level: u32,
    /// Seconds of simulated play
    pub elapsed: f32,
    pub phase: GamePhase,
    /// Per-instance fire chance handed to every spawned hostile
    pub hostile_fire_chance: f32,
    pub ship: Ship,
    pub hostiles: Vec<Hostile>,
    pub barriers: Vec<Barrier>,
    pub bonus: BonusCraft,
    /// Events from the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(&Settings::default(), seed)
    }

    pub fn with_settings(settings: &Settings, seed: u64) -> Self {
        let mut rng = rng::seeded(seed);
        let bonus = BonusCraft::new(&mut rng);
        let mut state = Self {
            seed,
            rng,
            score: 0,
            high_score: 0,
            level: 1,
            elapsed: 0.0,
            phase: GamePhase::Playing,
            hostile_fire_chance: settings.hostile_fire_chance,
            ship: Ship::new(settings.starting_lives),
            hostiles: Vec::new(),
            barriers: default_barriers(),
            bonus,
            events: Vec::new(),
        };

        state.spawn_wave();
        state
    }

    /// Rows in the wave for the current level
    pub fn wave_rows(&self) -> u32 {
        WAVE_BASE_ROWS + (self.level - 1) / 2
    }

    /// Append a full wave for the current level
    pub fn spawn_wave(&mut self) {
        let rows = self.wave_rows();
        for row in 0..rows {
            for col in 0..WAVE_COLUMNS {
                let pos = Vec2::new(
                    WAVE_START_X + col as f32 * WAVE_SPACING_X,
                    WAVE_START_Y + row as f32 * WAVE_SPACING_Y,
                );
                self.hostiles.push(Hostile::new(pos, self.hostile_fire_chance));
            }
        }
        log::info!(
            "Level {} wave: {} x {} hostiles",
            self.level,
            rows,
            WAVE_COLUMNS
        );
    }

    /// Advance to the next level once the wave is cleared
    pub fn level_up(&mut self) {
        self.level += 1;
        self.events.push(GameEvent::LevelUp { level: self.level });
        self.spawn_wave();
    }

    /// End the session
    pub fn end(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("Game over! Final score: {} (level {})", self.score, self.level);
    }

    /// Start over after a game over; no-op while playing
    pub fn restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.high_score = self.high_score.max(self.score);
        self.score = 0;
        self.level = 1;
        self.hostiles.clear();
        self.barriers = default_barriers();
        self.spawn_wave();
        self.ship.reset();
        // A shot-down bonus only returns with a new session
        if self.bonus.destroyed {
            self.bonus = BonusCraft::new(&mut self.rng);
        }
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        log::info!("Restarted (high score {})", self.high_score);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Score line for the HUD
    pub fn hud_text(&self) -> String {
        format!(
            "SCORE: {}   HIGH SCORE: {}   LEVEL: {}",
            self.score, self.high_score, self.level
        )
    }
}
