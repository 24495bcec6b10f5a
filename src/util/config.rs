//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.barcode/config.toml` - User-wide defaults
//! - Project: `.barcode/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Barcode configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Plugin registry settings
    pub registry: RegistryConfig,

    /// Rendering settings
    pub render: RenderConfig,
}

/// Plugin registry configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Extra aliases: alias -> symbology (or any name that resolves)
    pub aliases: BTreeMap<String, String>,
}

/// Rendering configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Default font for text instructions
    pub font: Option<String>,

    /// Fail instead of drawing the error object
    pub strict: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        // Aliases merge key by key
        self.registry.aliases.extend(other.registry.aliases);

        if other.render.font.is_some() {
            self.render.font = other.render.font;
        }
        if other.render.strict.is_some() {
            self.render.strict = other.render.strict;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.barcode/config.toml)
/// 2. Global config (~/.barcode/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global config directory (~/.barcode).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".barcode"))
}

/// Get the global config path (~/.barcode/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.barcode/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".barcode").join("config.toml")
}
