// SecurePass Settings Engine
// Persists the user's preferences as a small JSON object on disk.
// Loading is best-effort: a missing or unreadable file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::types::errors::SettingsError;
use crate::types::settings::AppSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> AppSettings;
    fn save(&self) -> Result<(), SettingsError>;
    fn settings(&self) -> &AppSettings;
    fn set_dark_mode(&mut self, dark_mode: bool) -> Result<(), SettingsError>;
    fn config_path(&self) -> &Path;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: PathBuf,
    settings: AppSettings,
}

impl SettingsEngine {
    /// Creates an engine for `config_path` holding default settings.
    /// Nothing is read until `load` is called.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: AppSettings::default(),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// Falls back to defaults when the file is absent, unreadable, or does not
    /// parse into `AppSettings`.
    fn load(&mut self) -> AppSettings {
        let path = self.config_path.as_path();

        self.settings = match fs::read(path) {
            Ok(bytes) => match serde_json::from_slice::<AppSettings>(&bytes) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring malformed settings file");
                    AppSettings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppSettings::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read settings file");
                AppSettings::default()
            }
        };

        debug!(dark_mode = self.settings.dark_mode, "settings loaded");
        self.settings.clone()
    }

    /// Overwrites the config file with the current settings.
    fn save(&self) -> Result<(), SettingsError> {
        let json = serde_json::to_string(&self.settings).map_err(|e| {
            SettingsError::Serialization(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(&self.config_path, json)
            .map_err(|e| SettingsError::Io(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Updates the preference and saves to disk immediately.
    fn set_dark_mode(&mut self, dark_mode: bool) -> Result<(), SettingsError> {
        self.settings.dark_mode = dark_mode;
        self.save()
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }
}
