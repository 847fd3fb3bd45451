//! User preference storage for the arrullo ambient audio engine.
//!
//! This crate persists the last selected track and master volume to a
//! small TOML file in the platform config directory, and restores them
//! on startup. Loading is forgiving: a missing or corrupted file falls
//! back to defaults so playback can always start.
//!
//! # Example
//!
//! ```rust,no_run
//! use arrullo_config::Preferences;
//!
//! let mut prefs = Preferences::load_default();
//! prefs.track = "rain".to_string();
//! prefs.volume = 0.5;
//! prefs.save_default().unwrap();
//! ```

mod error;
mod prefs;

/// Platform-specific paths for the preferences file.
pub mod paths;

pub use error::ConfigError;
pub use prefs::Preferences;
