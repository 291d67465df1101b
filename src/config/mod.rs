use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::model::HitWindows;

/// Player-facing gameplay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameplayConfig {
    /// Beatmap overall difficulty (0-10), drives the judgement windows.
    pub overall_difficulty: f64,
    /// How far ahead of its nominal time an object becomes live, in ms.
    pub object_lead_in_ms: f64,
    /// Enable the Force Alternate modifier.
    pub force_alternate: bool,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            overall_difficulty: 5.0,
            object_lead_in_ms: 600.0,
            force_alternate: false,
        }
    }
}

impl GameplayConfig {
    /// Loads config from a JSON file.
    /// Returns the default config if the file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves config as pretty-printed JSON.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Judgement windows for the configured overall difficulty.
    pub fn hit_windows(&self) -> HitWindows {
        HitWindows::from_overall_difficulty(self.overall_difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameplayConfig::default();
        assert_eq!(config.overall_difficulty, 5.0);
        assert_eq!(config.object_lead_in_ms, 600.0);
        assert!(!config.force_alternate);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = GameplayConfig::load_from("does/not/exist.json").unwrap();
        assert_eq!(config, GameplayConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gameplay.json");

        let config = GameplayConfig {
            overall_difficulty: 7.0,
            object_lead_in_ms: 450.0,
            force_alternate: true,
        };
        config.save_to(&path).unwrap();

        let loaded = GameplayConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn unknown_fields_fall_back_to_defaults() {
        let config: GameplayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameplayConfig::default());
    }

    #[test]
    fn hit_windows_follow_difficulty() {
        let config = GameplayConfig {
            overall_difficulty: 10.0,
            ..Default::default()
        };
        assert_eq!(config.hit_windows().meh, 70.0);
    }
}
