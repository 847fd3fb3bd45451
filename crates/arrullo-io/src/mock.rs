//! Deterministic mock backend for tests.
//!
//! The mock captures the output callback instead of spawning a device
//! stream; tests drive audio generation explicitly with
//! [`MockBackend::pump`] and inspect the rendered samples. Construction
//! can be forced to fail to exercise the engine's silence fallback.

use std::sync::{Arc, Mutex};

use crate::backend::{
    AudioBackend, AudioDevice, BackendStreamConfig, ErrorCallback, OutputCallback, StreamHandle,
};
use crate::{Error, Result};

/// Callback captured from `build_output_stream`, with the channel
/// count the stream was opened with.
struct CapturedStream {
    channels: u16,
    callback: OutputCallback,
}

type SharedStream = Arc<Mutex<Option<CapturedStream>>>;

/// Test backend that renders on demand.
#[derive(Clone)]
pub struct MockBackend {
    stream: SharedStream,
    fail_streams: bool,
}

/// Clears the captured callback when the stream handle is dropped,
/// mirroring a real stream stopping on drop.
struct MockStream {
    stream: SharedStream,
}

impl Drop for MockStream {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.stream.lock() {
            *slot = None;
        }
    }
}

impl MockBackend {
    /// Create a mock backend.
    pub fn new() -> Self {
        Self {
            stream: Arc::new(Mutex::new(None)),
            fail_streams: false,
        }
    }

    /// Create a mock backend whose stream construction always fails.
    pub fn failing() -> Self {
        Self {
            fail_streams: true,
            ..Self::new()
        }
    }

    /// Whether an output stream is currently "running".
    pub fn has_stream(&self) -> bool {
        self.stream.lock().is_ok_and(|slot| slot.is_some())
    }

    /// Invoke the captured callback for `frames` frames and return the
    /// interleaved samples, shaped to the stream's channel count.
    /// Returns mono silence if no stream is active.
    pub fn pump(&self, frames: usize) -> Vec<f32> {
        if let Ok(mut slot) = self.stream.lock()
            && let Some(captured) = slot.as_mut()
        {
            let mut buffer = vec![0.0f32; frames * captured.channels as usize];
            (captured.callback)(&mut buffer);
            buffer
        } else {
            vec![0.0f32; frames]
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn list_devices(&self) -> Result<Vec<AudioDevice>> {
        Ok(vec![AudioDevice {
            name: "mock output".to_string(),
            is_output: true,
            default_sample_rate: 48000,
        }])
    }

    fn default_output_device(&self) -> Result<Option<AudioDevice>> {
        Ok(self.list_devices()?.into_iter().next())
    }

    fn build_output_stream(
        &self,
        config: &BackendStreamConfig,
        callback: OutputCallback,
        _error_callback: ErrorCallback,
    ) -> Result<StreamHandle> {
        if self.fail_streams {
            return Err(Error::Stream("mock stream construction failed".into()));
        }
        if let Ok(mut slot) = self.stream.lock() {
            *slot = Some(CapturedStream {
                channels: config.channels,
                callback,
            });
        }
        Ok(StreamHandle::new(MockStream {
            stream: Arc::clone(&self.stream),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_and_pumps_callback() {
        let backend = MockBackend::new();
        let stream = backend
            .build_output_stream(
                &BackendStreamConfig::default(),
                Box::new(|buf| buf.fill(0.25)),
                Box::new(|_| {}),
            )
            .unwrap();

        assert!(backend.has_stream());
        let out = backend.pump(4);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|&s| (s - 0.25).abs() < f32::EPSILON));
        drop(stream);
        assert!(!backend.has_stream());
    }

    #[test]
    fn pump_shapes_buffers_to_the_stream_channel_count() {
        let backend = MockBackend::new();
        let config = BackendStreamConfig {
            channels: 1,
            ..BackendStreamConfig::default()
        };
        let _stream = backend
            .build_output_stream(&config, Box::new(|buf| buf.fill(0.5)), Box::new(|_| {}))
            .unwrap();
        assert_eq!(backend.pump(4).len(), 4);
    }

    #[test]
    fn dropping_handle_silences_output() {
        let backend = MockBackend::new();
        let stream = backend
            .build_output_stream(
                &BackendStreamConfig::default(),
                Box::new(|buf| buf.fill(1.0)),
                Box::new(|_| {}),
            )
            .unwrap();
        drop(stream);
        assert!(backend.pump(4).iter().all(|&s| s == 0.0));
    }

    #[test]
    fn failing_backend_rejects_streams() {
        let backend = MockBackend::failing();
        let result = backend.build_output_stream(
            &BackendStreamConfig::default(),
            Box::new(|_| {}),
            Box::new(|_| {}),
        );
        assert!(result.is_err());
    }
}
