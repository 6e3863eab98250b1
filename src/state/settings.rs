/// Persistent application settings
///
/// This struct stores the user-tunable parameters of the reviewer.
/// It is serialized to JSON and stored in the user's config directory,
/// so folder choice and gesture tuning survive app restarts.
/// Review decisions themselves are never persisted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Horizontal displacement (logical pixels) that triggers a decision
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// How long the decided photo dwells on screen before the next one
pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1000;

/// How many photos one review session loads
pub const DEFAULT_BATCH_LIMIT: usize = 100;

/// Errors from loading or saving the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read or write settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// All user-tunable parameters of the reviewer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Folder to review. `None` means the system Pictures folder.
    pub photos_dir: Option<PathBuf>,

    /// Maximum number of photos loaded per review session
    pub batch_limit: usize,

    /// Horizontal drag distance that counts as a decision
    pub swipe_threshold: f32,

    /// Dwell on the decided photo before advancing, in milliseconds
    pub advance_delay_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            photos_dir: None,
            batch_limit: DEFAULT_BATCH_LIMIT,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            advance_delay_ms: DEFAULT_ADVANCE_DELAY_MS,
        }
    }
}

impl AppSettings {
    /// Convert to JSON string for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string (from the settings file)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get the path where the settings file should be stored
    ///
    /// - Linux: ~/.config/photo-sweep/settings.json
    /// - macOS: ~/Library/Application Support/photo-sweep/settings.json
    /// - Windows: %APPDATA%\photo-sweep\settings.json
    pub fn settings_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(|| dirs::home_dir())
            .expect("Could not determine user config directory");

        path.push("photo-sweep");
        path.push("settings.json");
        path
    }

    /// Load settings from disk, falling back to defaults when the file is
    /// missing or unreadable. A broken settings file never blocks startup.
    pub fn load() -> Self {
        let path = Self::settings_path();
        match fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("⚠️  Ignoring invalid settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::settings_path();

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, self.to_json()?)?;
        println!("💾 Settings saved to {}", path.display());
        Ok(())
    }

    /// The folder the reviewer should scan: the configured override,
    /// or the system Pictures folder when none is set.
    pub fn resolved_photos_dir(&self) -> Option<PathBuf> {
        self.photos_dir
            .clone()
            .or_else(dirs::picture_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();

        assert!(settings.photos_dir.is_none());
        assert_eq!(settings.batch_limit, 100);
        assert_eq!(settings.swipe_threshold, 50.0);
        assert_eq!(settings.advance_delay_ms, 1000);
    }

    #[test]
    fn test_serialization() {
        let mut settings = AppSettings::default();
        settings.photos_dir = Some(PathBuf::from("/photos/inbox"));
        settings.batch_limit = 25;
        settings.swipe_threshold = 80.0;

        // Serialize to JSON
        let json = settings.to_json().unwrap();

        // Deserialize back
        let restored = AppSettings::from_json(&json).unwrap();

        assert_eq!(settings, restored);
    }

    #[test]
    fn test_resolved_dir_prefers_override() {
        let mut settings = AppSettings::default();
        settings.photos_dir = Some(PathBuf::from("/photos/inbox"));

        assert_eq!(
            settings.resolved_photos_dir(),
            Some(PathBuf::from("/photos/inbox"))
        );
    }
}
