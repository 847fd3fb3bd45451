//! Platform-specific paths for the preferences file.
//!
//! Preferences live in the user configuration directory:
//!
//! - Linux: `~/.config/arrullo/preferences.toml`
//! - macOS: `~/Library/Application Support/arrullo/preferences.toml`
//! - Windows: `%APPDATA%\arrullo\preferences.toml`

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "arrullo";

/// Filename of the preferences file.
const PREFS_FILE: &str = "preferences.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the default path of the preferences file.
pub fn preferences_path() -> PathBuf {
    user_config_dir().join(PREFS_FILE)
}

/// Ensure the user config directory exists.
///
/// Creates the directory and any parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_config_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_contains_app_name() {
        let dir = user_config_dir();
        assert!(dir.to_string_lossy().contains("arrullo"));
    }

    #[test]
    fn preferences_path_ends_with_filename() {
        let path = preferences_path();
        assert_eq!(path.file_name().unwrap(), "preferences.toml");
    }
}
