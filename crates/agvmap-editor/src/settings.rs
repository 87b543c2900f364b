//! Editor settings persistence.
//!
//! User-facing preferences (theme, grid, ruler) stored as TOML under the
//! platform configuration directory. Settings are deliberately separate
//! from map documents: they describe the editor, not the maps.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use agvmap_core::ThemeMode;

use crate::canvas::{GridConfig, RulerConfig};

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration directory could not be resolved.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Persisted editor preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorSettings {
    pub theme: ThemeMode,
    pub grid: GridConfig,
    pub ruler: RulerConfig,
    /// Last opened map document, restored on startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_document: Option<PathBuf>,
}

impl EditorSettings {
    /// Default location: `<config dir>/agvmap/settings.toml`.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let base = dirs::config_dir()
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))?;
        Ok(base.join("agvmap").join("settings.toml"))
    }

    /// Loads settings from a file. A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves settings, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loads from the default location.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from_file(&Self::default_path()?)
    }

    /// Saves to the default location.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to_file(&Self::default_path()?)
    }
}
