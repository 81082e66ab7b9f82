//! Configuration management for the armoury CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Apply the WACCF damage tables unless a command says otherwise.
    pub include_waccf: bool,
    /// Plugins whose weapons the `rebalance` command processes. Weapons
    /// without a plugin value are always processed.
    pub included_plugins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            include_waccf: false,
            included_plugins: vec!["NewArmoury.esp".to_string()],
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("armoury");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Whether a weapon from the given plugin should be processed.
    pub fn is_plugin_included(&self, plugin: Option<&str>) -> bool {
        match plugin {
            Some(plugin) => self
                .included_plugins
                .iter()
                .any(|included| included.eq_ignore_ascii_case(plugin)),
            None => true,
        }
    }
}
