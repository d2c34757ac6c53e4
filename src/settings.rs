//! Session settings and difficulty presets
//!
//! Stored as JSON next to the binary; missing or broken files fall back
//! to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{HOSTILE_FIRE_CHANCE, SHIP_LIVES};

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Lives the ship starts (and restarts) with
    pub fn starting_lives(&self) -> u8 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => SHIP_LIVES,
            Difficulty::Hard => 2,
        }
    }

    /// Per-frame hostile fire chance
    pub fn hostile_fire_chance(&self) -> f32 {
        match self {
            Difficulty::Easy => HOSTILE_FIRE_CHANCE * 0.5,
            Difficulty::Normal => HOSTILE_FIRE_CHANCE,
            Difficulty::Hard => HOSTILE_FIRE_CHANCE * 2.0,
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Difficulty::from_str(&s).ok_or_else(|| format!("unknown difficulty `{}`", s))
    }
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SettingsFile")]
pub struct Settings {
    pub difficulty: Difficulty,
    pub starting_lives: u8,
    pub hostile_fire_chance: f32,
    /// Fixed session seed; `None` picks one at startup
    pub seed: Option<u64>,
}

/// On-disk form: values left out come from the named preset
#[derive(Deserialize, Default)]
#[serde(default)]
struct SettingsFile {
    difficulty: Difficulty,
    starting_lives: Option<u8>,
    hostile_fire_chance: Option<f32>,
    seed: Option<u64>,
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        let mut settings = Settings::from_preset(file.difficulty);
        if let Some(lives) = file.starting_lives {
            settings.starting_lives = lives;
        }
        if let Some(chance) = file.hostile_fire_chance {
            settings.hostile_fire_chance = chance;
        }
        settings.seed = file.seed;
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(Difficulty::Normal)
    }
}

impl Settings {
    /// Create settings from a difficulty preset
    pub fn from_preset(preset: Difficulty) -> Self {
        Self {
            difficulty: preset,
            starting_lives: preset.starting_lives(),
            hostile_fire_chance: preset.hostile_fire_chance(),
            seed: None,
        }
    }

    /// Apply a preset (overwrites the values it controls)
    pub fn apply_preset(&mut self, preset: Difficulty) {
        self.difficulty = preset;
        self.starting_lives = preset.starting_lives();
        self.hostile_fire_chance = preset.hostile_fire_chance();
    }

    /// Parse from JSON; out-of-range values are pulled back into range
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.starting_lives = self.starting_lives.max(1);
        self.hostile_fire_chance = self.hostile_fire_chance.clamp(0.0, 1.0);
        self
    }

    /// Load from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!(
                    "Loaded settings from {} ({})",
                    path.display(),
                    settings.difficulty.as_str()
                );
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Could not save settings to {}: {}", path.display(), e);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Could not encode settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("norm"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_str("insane"), None);
        assert_eq!(Difficulty::Easy.as_str(), "Easy");
    }

    #[test]
    fn test_default_matches_normal() {
        let s = Settings::default();
        assert_eq!(s.starting_lives, SHIP_LIVES);
        assert_eq!(s.hostile_fire_chance, HOSTILE_FIRE_CHANCE);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_apply_preset() {
        let mut s = Settings::default();
        s.seed = Some(9);
        s.apply_preset(Difficulty::Hard);
        assert_eq!(s.starting_lives, 2);
        assert_eq!(s.seed, Some(9));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "seed": 17 }"#).unwrap();
        assert_eq!(s.seed, Some(17));
        assert_eq!(s.difficulty, Difficulty::Normal);
        assert_eq!(s.starting_lives, SHIP_LIVES);
    }

    #[test]
    fn test_json_difficulty_any_case() {
        let s = Settings::from_json(r#"{ "difficulty": "hard" }"#).unwrap();
        assert_eq!(s.difficulty, Difficulty::Hard);
        assert!(Settings::from_json(r#"{ "difficulty": "insane" }"#).is_err());
    }

    #[test]
    fn test_json_preset_supplies_values() {
        let s = Settings::from_json(r#"{ "difficulty": "Hard" }"#).unwrap();
        assert_eq!(s.starting_lives, 2);
        assert_eq!(s.hostile_fire_chance, Difficulty::Hard.hostile_fire_chance());

        let s = Settings::from_json(r#"{ "difficulty": "easy", "starting_lives": 9 }"#).unwrap();
        assert_eq!(s.starting_lives, 9);
        assert_eq!(s.hostile_fire_chance, Difficulty::Easy.hostile_fire_chance());
    }

    #[test]
    fn test_json_is_sanitized() {
        let s = Settings::from_json(r#"{ "starting_lives": 0, "hostile_fire_chance": 3.0 }"#)
            .unwrap();
        assert_eq!(s.starting_lives, 1);
        assert_eq!(s.hostile_fire_chance, 1.0);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load(Path::new("/nonexistent/invaders-settings.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("invaders-settings-{}.json", std::process::id()));
        let mut s = Settings::from_preset(Difficulty::Easy);
        s.seed = Some(1234);
        s.save(&path);
        assert_eq!(Settings::load(&path), s);
        let _ = std::fs::remove_file(&path);
    }
}
