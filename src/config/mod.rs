//! Configuration management for Niwa

pub mod progress;

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::storage;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Show romaji readings alongside hiragana
    pub show_romaji: bool,

    /// Generation backend base URL override (otherwise NIWA_BACKEND_URL or
    /// the localhost default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { show_romaji: true, backend_url: None }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Ok(storage::read_json_or_default(&config_path))
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        storage::write_json(&Self::config_path()?, self)
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "niwa").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "niwa").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_shows_romaji() {
        let config = Config::default();
        assert!(config.show_romaji);
        assert!(config.backend_url.is_none());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config { show_romaji: false, backend_url: Some("http://example:9999".into()) };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert!(!parsed.show_romaji);
        assert_eq!(parsed.backend_url.as_deref(), Some("http://example:9999"));
    }
}
