// CardStyler Settings Engine
// Single source of truth for the styler configuration: loading, saving, and
// the toggle mutations driven by the settings UI.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::embed::EmbedKind;
use crate::types::errors::SettingsError;
use crate::types::settings::StylerSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<StylerSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &StylerSettings;
    fn set_enabled(&mut self, value: bool) -> bool;
    fn set_apply_all(&mut self, value: bool) -> bool;
    fn set_target_selected(&mut self, kind: EmbedKind, selected: bool) -> bool;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
///
/// Mutations return `true` only when they changed the in-memory state; a
/// `false` return is the no-op branch and must not trigger a persist or a
/// style reapply.
pub struct SettingsEngine {
    config_path: String,
    settings: StylerSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("settings.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            config_path,
            settings: StylerSettings::default(),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings. Stored fields
    /// overlay the defaults key-by-key (a stored `targets` array replaces the
    /// default wholesale), and duplicate targets are dropped. A malformed
    /// file returns a serialization error.
    fn load(&mut self) -> Result<StylerSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = StylerSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let mut settings: StylerSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        settings.dedup_targets();

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file as a whole-object
    /// replacement. Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Returns a reference to the current in-memory settings.
    fn get_settings(&self) -> &StylerSettings {
        &self.settings
    }

    /// Sets the master feature gate.
    fn set_enabled(&mut self, value: bool) -> bool {
        if self.settings.enabled == value {
            return false;
        }
        self.settings.enabled = value;
        true
    }

    /// Sets the uniform-treatment flag. The `targets` selection is untouched,
    /// so turning the flag back off reveals the previous selection unchanged.
    fn set_apply_all(&mut self, value: bool) -> bool {
        if self.settings.apply_all_embed == value {
            return false;
        }
        self.settings.apply_all_embed = value;
        true
    }

    /// Adds or removes a kind from the target selection.
    ///
    /// Appends only when absent, removes only when present (membership by
    /// kind identifier, not position). Returns `false` when membership is
    /// already as requested.
    fn set_target_selected(&mut self, kind: EmbedKind, selected: bool) -> bool {
        let present = self.settings.has_target(kind);
        match (selected, present) {
            (true, false) => {
                self.settings.targets.push(kind);
                true
            }
            (false, true) => {
                self.settings.targets.retain(|k| *k != kind);
                true
            }
            _ => false,
        }
    }

    /// Returns the path to the config file.
    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
