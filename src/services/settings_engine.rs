// Settings Engine
// Loads and saves the browser settings as a JSON file at the platform config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::BrowserSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<BrowserSettings, SettingsError>;
    fn load_or_init(&mut self) -> Result<BrowserSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &BrowserSettings;
    fn get_config_path(&self) -> &Path;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: PathBuf,
    settings: BrowserSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses `settings.json` in the platform config directory.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        Self {
            config_path: path_override.unwrap_or_else(platform::default_settings_path),
            settings: BrowserSettings::default(),
        }
    }

    /// An engine holding `settings` in memory, never read from disk.
    pub fn with_settings(config_path: PathBuf, settings: BrowserSettings) -> Self {
        Self {
            config_path,
            settings,
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields the defaults. Keys absent from the file take
    /// their default values. A malformed file is a serialization error.
    fn load(&mut self) -> Result<BrowserSettings, SettingsError> {
        if !self.config_path.exists() {
            self.settings = BrowserSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        self.settings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Ok(self.settings.clone())
    }

    /// Like [`load`](Self::load), but writes the defaults out when no config
    /// file exists yet so there is something to edit.
    fn load_or_init(&mut self) -> Result<BrowserSettings, SettingsError> {
        let existed = self.config_path.exists();
        let settings = self.load()?;
        if !existed {
            self.save()?;
            log::info!("Wrote default settings to {}", self.config_path.display());
        }
        Ok(settings)
    }

    /// Saves the current settings, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(&self.config_path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))
    }

    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}
