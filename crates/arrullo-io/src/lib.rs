//! Audio I/O layer for arrullo.
//!
//! This crate provides:
//!
//! - **Pluggable output**: the [`AudioBackend`] trait with a cpal
//!   implementation ([`CpalBackend`]) and a deterministic
//!   [`MockBackend`] for tests
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] for asset loading
//!   and offline rendering
//!
//! The session layer only ever talks to `dyn AudioBackend`; a platform
//! without working audio simply yields no backend and the session runs
//! silently.

pub mod backend;
pub mod cpal_backend;
pub mod mock;
mod wav;

pub use backend::{
    AudioBackend, AudioDevice, BackendStreamConfig, ErrorCallback, OutputCallback, StreamHandle,
};
pub use cpal_backend::CpalBackend;
pub use mock::MockBackend;
pub use wav::{read_wav, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Audio stream setup or runtime error.
    #[error("audio stream error: {0}")]
    Stream(String),

    /// No audio device available on the system.
    #[error("no audio device available")]
    NoDevice,

    /// The requested audio device was not found.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
