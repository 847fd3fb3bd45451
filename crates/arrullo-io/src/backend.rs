//! Pluggable audio backend abstraction.
//!
//! The [`AudioBackend`] trait decouples the session layer from any
//! specific platform audio API. The default implementation wraps cpal;
//! tests use [`crate::MockBackend`] to pump the audio callback
//! deterministically. A platform with no usable audio simply provides
//! no backend and the engine operates in silence.
//!
//! The trait is object-safe: callbacks are boxed closures and stream
//! handles are type-erased. A [`StreamHandle`] keeps its stream alive
//! and stops playback when dropped, so cleanup is RAII regardless of
//! the backend.

use crate::Result;

/// Configuration for building an output stream.
#[derive(Debug, Clone)]
pub struct BackendStreamConfig {
    /// Requested sample rate in Hz.
    pub sample_rate: u32,
    /// Preferred buffer size in frames.
    pub buffer_size: u32,
    /// Number of audio channels.
    pub channels: u16,
    /// Optional device name filter (system default if `None`).
    pub device_name: Option<String>,
}

impl Default for BackendStreamConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000,
            buffer_size: 512,
            channels: 2,
            device_name: None,
        }
    }
}

/// Audio device information.
#[derive(Debug, Clone)]
pub struct AudioDevice {
    /// Human-readable device name.
    pub name: String,
    /// Whether the device supports audio output.
    pub is_output: bool,
    /// Default sample rate in Hz.
    pub default_sample_rate: u32,
}

/// Type-erased audio stream handle.
///
/// The stream is active while this handle exists; dropping it stops
/// playback.
pub struct StreamHandle {
    _inner: Box<dyn Send>,
}

impl StreamHandle {
    /// Wrap a backend-specific stream object, keeping it alive until
    /// this handle is dropped.
    pub fn new<T: Send + 'static>(stream: T) -> Self {
        Self {
            _inner: Box::new(stream),
        }
    }
}

impl std::fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamHandle").finish_non_exhaustive()
    }
}

/// Audio output callback.
///
/// Called on the audio thread with a buffer of interleaved f32 samples
/// (`[L0, R0, L1, R1, ...]` for stereo) that must be filled completely.
/// Implementations must not block: no allocation, no I/O, no contended
/// locks.
pub type OutputCallback = Box<dyn FnMut(&mut [f32]) + Send>;

/// Error callback, invoked with a human-readable message when the
/// backend hits a streaming error.
pub type ErrorCallback = Box<dyn FnMut(&str) + Send>;

/// Pluggable audio output backend.
pub trait AudioBackend: Send {
    /// Human-readable backend name (e.g., "cpal", "mock").
    fn name(&self) -> &str;

    /// List available output devices.
    fn list_devices(&self) -> Result<Vec<AudioDevice>>;

    /// The default output device, if any.
    fn default_output_device(&self) -> Result<Option<AudioDevice>>;

    /// Build and start an output stream.
    ///
    /// The returned [`StreamHandle`] keeps the stream alive; dropping it
    /// stops playback.
    fn build_output_stream(
        &self,
        config: &BackendStreamConfig,
        callback: OutputCallback,
        error_callback: ErrorCallback,
    ) -> Result<StreamHandle>;
}
