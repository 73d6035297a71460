//! Configuration module for the ubet CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the ubet application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, UbetError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ubet.toml";

/// Application configuration structure.
///
/// This struct represents the complete configuration for the ubet CLI,
/// including global settings and command-specific options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Default dialect name (`classic` or `extended`).
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Export-specific configuration.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Export-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Write a header row before the token records.
    #[serde(default = "default_true")]
    pub include_header: bool,
}

/// Default value functions for configuration fields.
fn default_dialect() -> String {
    "extended".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            dialect: default_dialect(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(UbetError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| UbetError::Config(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Arguments
    /// * `path` - Path where the configuration should be saved
    ///
    /// # Returns
    /// * `Result<()>` - Success or an error
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| UbetError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("ubet").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("ubet").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
