use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_refresh_secs() -> u64 {
    10
}

fn default_rebase_pull_capability() -> bool {
    true
}

/// Host-side knobs. The working copy's own sync state never lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Seconds between background snapshot refreshes
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// Whether pull is allowed to honor the user's pull.rebase preference
    #[serde(default = "default_rebase_pull_capability")]
    pub rebase_pull_capability: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_secs: default_refresh_secs(),
            rebase_pull_capability: default_rebase_pull_capability(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        Self::ensure_config_dir()?;
        let config_path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content).context("Failed to write config file")
    }

    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::home_dir()
            .context("Could not find home directory")?
            .join(".gitpulse");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn ensure_config_dir() -> Result<PathBuf> {
        let dir = Self::config_dir()?;
        if !dir.exists() {
            std::fs::create_dir_all(&dir).context("Failed to create config directory")?;
        }
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.refresh_secs, 10);
        assert!(config.rebase_pull_capability);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("refresh_secs = 30").unwrap();
        assert_eq!(config.refresh_secs, 30);
        assert!(config.rebase_pull_capability);
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            refresh_secs: 5,
            rebase_pull_capability: false,
        };
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, config);
    }
}
