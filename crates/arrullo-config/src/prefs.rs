//! Preference file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Persisted user preferences.
///
/// Preferences are stored as a small TOML file and restored on startup
/// so listening sessions resume where they left off.
///
/// # TOML Format
///
/// ```toml
/// track = "forest"
/// volume = 0.3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Identifier of the last selected track.
    #[serde(default = "default_track")]
    pub track: String,

    /// Master volume in [0, 1].
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_track() -> String {
    "forest".to_string()
}

fn default_volume() -> f32 {
    0.3
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            track: default_track(),
            volume: default_volume(),
        }
    }
}

impl Preferences {
    /// Load preferences from a TOML file.
    ///
    /// An absent or unparsable file yields the defaults rather than an
    /// error, so a corrupted preferences file never blocks startup. The
    /// stored volume is clamped to [0, 1].
    pub fn load(path: impl AsRef<Path>) -> Self {
        let Ok(content) = std::fs::read_to_string(path.as_ref()) else {
            return Self::default();
        };
        match toml::from_str::<Preferences>(&content) {
            Ok(prefs) => prefs.sanitized(),
            Err(_) => Self::default(),
        }
    }

    /// Load preferences from the default platform path.
    pub fn load_default() -> Self {
        Self::load(crate::paths::preferences_path())
    }

    /// Save the preferences to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(&self.sanitized())?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Save the preferences to the default platform path.
    pub fn save_default(&self) -> Result<(), ConfigError> {
        self.save(crate::paths::preferences_path())
    }

    /// Return a copy with the volume clamped to [0, 1].
    ///
    /// Non-finite volumes fall back to the default.
    fn sanitized(&self) -> Self {
        let volume = if self.volume.is_finite() {
            self.volume.clamp(0.0, 1.0)
        } else {
            default_volume()
        };
        Self {
            track: self.track.clone(),
            volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_forest_at_low_volume() {
        let prefs = Preferences::default();
        assert_eq!(prefs.track, "forest");
        assert!((prefs.volume - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let prefs = Preferences::load("/nonexistent/path/preferences.toml");
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "track = [not toml").unwrap();
        assert_eq!(Preferences::load(&path), Preferences::default());
    }

    #[test]
    fn round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let prefs = Preferences {
            track: "rain".to_string(),
            volume: 0.7,
        };
        prefs.save(&path).unwrap();

        let loaded = Preferences::load(&path);
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn out_of_range_volume_is_clamped_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "track = \"fireplace\"\nvolume = 4.5\n").unwrap();

        let prefs = Preferences::load(&path);
        assert_eq!(prefs.track, "fireplace");
        assert!((prefs.volume - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "track = \"lofi\"\n").unwrap();

        let prefs = Preferences::load(&path);
        assert_eq!(prefs.track, "lofi");
        assert!((prefs.volume - 0.3).abs() < f32::EPSILON);
    }
}
