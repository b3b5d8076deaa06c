use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// A configuration value that the engine cannot run with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("`{0}` must be greater than zero")]
    NotPositive(&'static str),
}

/// Configuration for the game
///
/// Every field is optional in a config file; missing fields take their
/// default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ticks between two movement cycles
    pub move_interval: u32,
    /// Ticks a power-up lasts after eating food
    pub power_up_duration: u32,
    /// Number of level columns shown at once
    pub visible_width: i32,
    /// Score for one piece of food
    pub food_score: u32,
    /// Score for eating an enemy during a power-up
    pub enemy_bonus: u32,
    /// Length of the start-screen blink cycle, in ticks
    pub blink_period: u32,
    /// How many ticks the terminal driver runs per second
    pub tick_rate_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_interval: 10,
            power_up_duration: 300,
            visible_width: 32,
            food_score: 1,
            enemy_bonus: 5,
            blink_period: 60,
            tick_rate_hz: 60,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {:?}", path))?;
        Ok(config)
    }

    /// Check the values the engine divides or counts by
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.move_interval == 0 {
            return Err(ConfigError::NotPositive("move_interval"));
        }
        if self.visible_width <= 0 {
            return Err(ConfigError::NotPositive("visible_width"));
        }
        if self.blink_period == 0 {
            return Err(ConfigError::NotPositive("blink_period"));
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::NotPositive("tick_rate_hz"));
        }
        Ok(())
    }

    /// Move every tick; handy for driving the engine step by step
    pub fn every_tick() -> Self {
        Self {
            move_interval: 1,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.move_interval, 10);
        assert_eq!(config.power_up_duration, 300);
        assert_eq!(config.visible_width, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_every_tick_config() {
        let config = GameConfig::every_tick();
        assert_eq!(config.move_interval, 1);
        assert_eq!(config.power_up_duration, 300);
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = GameConfig {
            move_interval: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive("move_interval"))
        );

        let config = GameConfig {
            visible_width: -4,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive("visible_width"))
        );
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "move_interval": 4, "enemy_bonus": 20 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.move_interval, 4);
        assert_eq!(config.enemy_bonus, 20);
        assert_eq!(config.power_up_duration, 300);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tick_rate_hz": 0 }}"#).unwrap();
        assert!(GameConfig::load(file.path()).is_err());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(GameConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GameConfig::load(&dir.path().join("missing.json")).is_err());
    }
}
