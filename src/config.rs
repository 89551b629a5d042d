use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::GameMode;
use crate::search::{DEFAULT_RANDOM_CHANCE, DEFAULT_SEARCH_RANGE};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "GOMOKU_CONFIG";

/// Config file used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "gomoku.toml";

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// Mode of the first game after launch
    pub default_mode: GameMode,
    pub ai: AiConfig,
}

/// Computer player tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Pause before the AI reply is applied, for pacing only
    pub think_delay_ms: u64,
    /// Chance that Easy ignores the board and plays randomly
    pub easy_random_chance: f64,
    /// Chebyshev radius around stones that Hard considers
    pub hard_search_range: u8,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            think_delay_ms: 800,
            easy_random_chance: DEFAULT_RANDOM_CHANCE,
            hard_search_range: DEFAULT_SEARCH_RANGE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chance = self.ai.easy_random_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::Validation(
                "ai.easy_random_chance must be in [0, 1]".into(),
            ));
        }
        if self.ai.hard_search_range == 0
            || self.ai.hard_search_range as usize > crate::board::BOARD_SIZE
        {
            return Err(ConfigError::Validation(
                "ai.hard_search_range must be in 1..=15".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.default_mode, GameMode::PvP);
        assert_eq!(config.ai.think_delay_ms, 800);
        assert_eq!(config.ai.hard_search_range, 2);
        assert!((config.ai.easy_random_chance - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml(
            r#"
            default_mode = "ai-hard"

            [ai]
            think_delay_ms = 0
            seed = 17
            "#,
        )
        .unwrap();
        assert_eq!(config.default_mode, GameMode::AiHard);
        assert_eq!(config.ai.think_delay_ms, 0);
        assert_eq!(config.ai.seed, Some(17));
        assert_eq!(config.ai.hard_search_range, 2);
    }

    #[test]
    fn test_invalid_chance_rejected() {
        let err = GameConfig::from_toml("[ai]\neasy_random_chance = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_zero_range_rejected() {
        let err = GameConfig::from_toml("[ai]\nhard_search_range = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_mode_is_parse_error() {
        let err = GameConfig::from_toml("default_mode = \"online\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_mode = \"ai-easy\"").unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.default_mode, GameMode::AiEasy);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_unreadable_path_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
