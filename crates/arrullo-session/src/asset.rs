//! Streamed-asset loading behind a trait seam.
//!
//! Asset locators are opaque strings; the engine never interprets them.
//! The bundled [`WavAssetSource`] resolves locators as filesystem paths
//! to WAV files, and tests inject their own sources to simulate slow or
//! broken networks.

use std::sync::Arc;

use arrullo_core::Source;
use thiserror::Error;

/// Errors from asset resolution.
///
/// The selection policy treats every variant identically (fall back to
/// synthesis), so the taxonomy exists for logging, not control flow.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The locator could not be resolved or fetched.
    #[error("asset unavailable: {0}")]
    Unavailable(String),

    /// The asset was fetched but could not be decoded.
    #[error("failed to decode asset: {0}")]
    Decode(String),

    /// The load did not complete within the policy timeout.
    #[error("asset load timed out")]
    Timeout,
}

/// A decoded asset: mono samples at the asset's native rate.
#[derive(Clone, Debug)]
pub struct LoadedAsset {
    /// Decoded mono samples.
    pub samples: Arc<Vec<f32>>,
    /// Native sample rate of the decoded data.
    pub sample_rate: u32,
}

/// Resolves asset locators into decoded audio.
///
/// Implementations must be shareable across threads: the selection
/// policy runs loads on a worker thread so it can enforce a timeout.
pub trait AssetSource: Send + Sync {
    /// Load and decode the asset named by `locator`.
    fn load(&self, locator: &str) -> Result<LoadedAsset, AssetError>;
}

/// Asset source that treats locators as paths to WAV files.
#[derive(Clone, Copy, Debug, Default)]
pub struct WavAssetSource;

impl AssetSource for WavAssetSource {
    fn load(&self, locator: &str) -> Result<LoadedAsset, AssetError> {
        let (samples, sample_rate) = arrullo_io::read_wav(locator).map_err(|e| match e {
            arrullo_io::Error::Wav(inner) => AssetError::Decode(inner.to_string()),
            other => AssetError::Unavailable(other.to_string()),
        })?;
        Ok(LoadedAsset {
            samples: Arc::new(samples),
            sample_rate,
        })
    }
}

/// Plays a loaded asset as an endless loop, linearly resampling from
/// the asset's native rate to the output rate.
pub struct LoopingSampler {
    samples: Arc<Vec<f32>>,
    asset_rate: f32,
    position: f64,
    step: f64,
}

impl LoopingSampler {
    /// Wrap a loaded asset for playback at `output_rate`.
    pub fn new(asset: LoadedAsset, output_rate: f32) -> Self {
        let asset_rate = asset.sample_rate as f32;
        let mut sampler = Self {
            samples: asset.samples,
            asset_rate,
            position: 0.0,
            step: 1.0,
        };
        sampler.set_sample_rate(output_rate);
        sampler
    }

    /// Length of the underlying asset in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the underlying asset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Source for LoopingSampler {
    fn next_sample(&mut self) -> f32 {
        let len = self.samples.len();
        if len == 0 {
            return 0.0;
        }

        let base = self.position as usize;
        let frac = (self.position - base as f64) as f32;
        let a = self.samples[base % len];
        let b = self.samples[(base + 1) % len];
        let out = a + (b - a) * frac;

        self.position += self.step;
        if self.position >= len as f64 {
            self.position -= len as f64;
        }
        out
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.step = if sample_rate > 0.0 {
            f64::from(self.asset_rate) / f64::from(sample_rate)
        } else {
            1.0
        };
    }

    fn reset(&mut self) {
        self.position = 0.0;
    }
}
