use std::path::Path;

use tracing::warn;

use crate::engine::{DEFAULT_DEPTH, MAX_DEPTH};
use crate::error::ConfigError;

/// Which front end the binary starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontEnd {
    #[default]
    Gui,
    Terminal,
}

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Plies searched by the computer
    pub search_depth: u8,
    /// Whether the human (player 1) moves first
    pub human_first: bool,
    pub front_end: FrontEnd,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            search_depth: DEFAULT_DEPTH,
            human_first: true,
            front_end: FrontEnd::Gui,
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
        Self::parse(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 || self.search_depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search_depth must be in 1..={MAX_DEPTH}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search_depth, DEFAULT_DEPTH);
        assert!(config.human_first);
        assert_eq!(config.front_end, FrontEnd::Gui);
    }

    #[test]
    fn test_parse_partial_document() {
        let config = GameConfig::parse("search_depth = 6\nfront_end = \"terminal\"\n").unwrap();
        assert_eq!(config.search_depth, 6);
        assert!(config.human_first);
        assert_eq!(config.front_end, FrontEnd::Terminal);
    }

    #[test]
    fn test_parse_empty_document_gives_defaults() {
        assert_eq!(GameConfig::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_rejects_zero_depth() {
        let err = GameConfig::parse("search_depth = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_deep_search() {
        let config = GameConfig {
            search_depth: MAX_DEPTH + 1,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = GameConfig::parse("search_depth = \"deep\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = std::env::temp_dir().join("connect_four_missing_config.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(GameConfig::load_or_default(&path).unwrap(), GameConfig::default());
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_load_round_trip_through_file() {
        let path = std::env::temp_dir().join("connect_four_config_test.toml");
        let config = GameConfig {
            search_depth: 2,
            human_first: false,
            front_end: FrontEnd::Terminal,
        };
        std::fs::write(&path, toml::to_string(&config).unwrap()).unwrap();
        let loaded = GameConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }
}
