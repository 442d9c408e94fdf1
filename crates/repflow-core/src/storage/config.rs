//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default difficulty for catalog browsing
//! - Optional path to a user-supplied catalog JSON file
//! - Whether completed sessions are appended to the local history file
//!
//! Configuration is stored at `~/.config/repflow/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Difficulty;
use crate::error::{ConfigError, Result};

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/repflow/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_difficulty")]
    pub default_difficulty: Difficulty,
    /// Catalog JSON to load instead of the builtin sample.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub history_enabled: bool,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Beginner
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_difficulty: default_difficulty(),
            catalog_path: None,
            history_enabled: true,
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from the default location (`data_dir()/config.toml`).
    pub fn load() -> Result<Self> {
        Self::load_from(&super::data_dir()?.join("config.toml"))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&super::data_dir()?.join("config.toml"))
    }

    /// String view of one key, for `config get`.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default_difficulty" => Ok(self.default_difficulty.to_string()),
            "catalog_path" => Ok(self
                .catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "history_enabled" => Ok(self.history_enabled.to_string()),
            other => Err(ConfigError::UnknownKey(other.to_string()).into()),
        }
    }

    /// Parse-and-assign one key, for `config set`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default_difficulty" => {
                self.default_difficulty =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("'{value}' is not a difficulty"),
                    })?;
            }
            "catalog_path" => {
                self.catalog_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "history_enabled" => {
                self.history_enabled = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("'{value}' is not a bool"),
                })?;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string()).into()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.default_difficulty, Difficulty::Beginner);
        assert!(config.history_enabled);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("default_difficulty", "advanced").unwrap();
        config.set("history_enabled", "false").unwrap();
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.default_difficulty, Difficulty::Advanced);
        assert!(!reloaded.history_enabled);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = Config::default();
        assert!(config.set("volume", "50").is_err());
        assert!(config.get("volume").is_err());
    }
}
