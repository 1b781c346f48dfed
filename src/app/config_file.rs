//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/bookmark-nav/config.toml`

use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{NavError, Result};
use crate::handler::ContextMenuKey;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Keyboard settings
    pub keyboard: KeyboardConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// General settings
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Folder shown in the first pane (defaults to the bookmarks bar)
    pub root_id: Option<String>,
}

/// Keyboard settings
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Key that opens the context menu: "auto", "menu" or "control"
    pub context_menu_key: ContextMenuKey,
}

/// Log output settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// JSON-lines log file; nothing is logged without one
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| NavError::config(format!("unknown log level `{}`", self.level)))
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/bookmark-nav)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bookmark-nav"))
    }

    /// Get the config file path (~/.config/bookmark-nav/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                if path.exists() {
                    fs::read_to_string(&path).ok()
                } else {
                    None
                }
            })
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| NavError::config(e.to_string()))
    }
}
