//! The track session manager.
//!
//! [`SessionManager`] owns the single [`PlaybackState`] and the single
//! render slot. Every mutation goes through its `&mut` methods, so
//! requests are serialized; each request takes a monotonically
//! increasing generation and the installed graph is stamped with it,
//! making "latest request wins" observable in tests.
//!
//! The audio thread only ever sees the render slot: an
//! `Arc<Mutex<Option<..>>>` the callback polls with `try_lock`,
//! producing silence while the session side holds the lock for a swap.
//! Volume crosses the thread boundary as atomic f32 bits and is
//! smoothed on the audio side before application.
//!
//! None of the public operations return errors. Failures at any layer
//! (no backend, stream construction, asset loads, graph construction)
//! degrade to silent playback and a `tracing` warning.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use arrullo_config::Preferences;
use arrullo_core::{SmoothedParam, clamp_unit};
use arrullo_io::{AudioBackend, BackendStreamConfig, OutputCallback, StreamHandle};
use arrullo_synth::{AmbienceGraph, GraphStats};
use tracing::{debug, warn};

use crate::asset::AssetSource;
use crate::catalog::{Catalog, TrackId};
use crate::policy;
use crate::state::PlaybackState;

/// Gain smoothing time for volume changes on the audio thread.
const VOLUME_SMOOTHING_MS: f32 = 20.0;

struct ActiveGraph {
    graph: AmbienceGraph,
    generation: u64,
}

type RenderSlot = Arc<Mutex<Option<ActiveGraph>>>;

/// Owner of the playback lifecycle: play, stop, volume.
pub struct SessionManager {
    catalog: Catalog,
    assets: Option<Arc<dyn AssetSource>>,
    state: PlaybackState,
    generation: u64,
    slot: RenderSlot,
    volume_bits: Arc<AtomicU32>,
    sample_rate: f32,
    stream: Option<StreamHandle>,
    prefs_path: Option<PathBuf>,
}

impl SessionManager {
    /// Create a session with the default catalog and no audio backend.
    ///
    /// Without a backend the session still runs its full lifecycle; it
    /// just renders nowhere. [`attach_backend`](Self::attach_backend)
    /// wires up actual output.
    pub fn new() -> Self {
        let state = PlaybackState::default();
        Self {
            catalog: Catalog::default(),
            assets: None,
            generation: 0,
            slot: Arc::new(Mutex::new(None)),
            volume_bits: Arc::new(AtomicU32::new(state.volume.to_bits())),
            sample_rate: 48000.0,
            stream: None,
            prefs_path: None,
            state,
        }
    }

    /// Replace the track catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Install an asset source for streamed tracks.
    pub fn with_assets(mut self, assets: Arc<dyn AssetSource>) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Persist preferences to `path` on every track or volume change.
    pub fn with_preferences_at(mut self, path: impl Into<PathBuf>) -> Self {
        self.prefs_path = Some(path.into());
        self
    }

    /// The track catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build an output stream on `backend` and route rendering to it.
    ///
    /// Stream construction failure leaves the session without output,
    /// operating in silence; it is logged, never propagated.
    pub fn attach_backend(&mut self, backend: &dyn AudioBackend, config: &BackendStreamConfig) {
        self.sample_rate = config.sample_rate as f32;
        if let Some(active) = self.lock_slot().as_mut() {
            active.graph.set_sample_rate(self.sample_rate);
        }

        let callback = self.render_callback(config);
        let error_callback = Box::new(|msg: &str| {
            warn!(message = msg, "audio stream error");
        });

        match backend.build_output_stream(config, callback, error_callback) {
            Ok(stream) => {
                debug!(
                    backend = backend.name(),
                    sample_rate = config.sample_rate,
                    channels = config.channels,
                    "output stream started"
                );
                self.stream = Some(stream);
            }
            Err(err) => {
                warn!(backend = backend.name(), %err, "could not open output stream, running silent");
                self.stream = None;
            }
        }
    }

    /// Select and start a track.
    ///
    /// Tears down any previous graph first, then resolves the request
    /// through the selection policy. Always succeeds from the caller's
    /// point of view: failure modes produce a silent "playing" state.
    pub fn play_track(&mut self, id: TrackId) {
        self.generation += 1;
        let generation = self.generation;
        debug!(track = %id, generation, "play request");

        // Previous graph is fully dropped before the successor exists.
        self.clear_slot();
        self.state.current_track = Some(id);
        self.state.is_playing = false;
        self.state.is_loading = true;

        let Some(descriptor) = self.catalog.get(id).cloned() else {
            warn!(track = %id, "track not in catalog, staying silent");
            self.state.is_loading = false;
            self.state.is_playing = true;
            return;
        };

        let route = policy::select(&descriptor, self.sample_rate, self.assets.as_ref());
        debug!(track = %id, route = route.label(), generation, "route resolved");
        if let Some(graph) = route.into_graph() {
            *self.lock_slot() = Some(ActiveGraph { graph, generation });
        }

        self.state.is_loading = false;
        self.state.is_playing = true;
        self.persist_preferences();
    }

    /// Stop playback and return to idle. Idempotent.
    pub fn stop(&mut self) {
        self.generation += 1;
        self.clear_slot();
        let volume = self.state.volume;
        self.state = PlaybackState {
            volume,
            ..PlaybackState::default()
        };
        debug!(generation = self.generation, "stopped");
    }

    /// Set the master volume, clamped to [0, 1].
    ///
    /// Applies to the live render immediately (smoothed on the audio
    /// thread) and is stored for future playback when idle.
    pub fn set_volume(&mut self, volume: f32) {
        let clamped = clamp_unit(volume);
        self.state.volume = clamped;
        self.volume_bits.store(clamped.to_bits(), Ordering::Relaxed);
        self.persist_preferences();
    }

    /// Snapshot of the playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Shape of the installed graph, if one exists.
    pub fn graph_stats(&self) -> Option<GraphStats> {
        self.lock_slot().as_ref().map(|active| GraphStats {
            sources: active.graph.source_count(),
            timers: active.graph.timer_count(),
        })
    }

    /// Generation stamp of the installed graph, if one exists.
    pub fn active_generation(&self) -> Option<u64> {
        self.lock_slot().as_ref().map(|active| active.generation)
    }

    /// Generation of the most recent request (play or stop).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Load preferences from the configured path, apply the stored
    /// volume, and return the stored track id (`Forest` if the stored
    /// name is unknown).
    pub fn restore_preferences(&mut self) -> TrackId {
        let prefs = match &self.prefs_path {
            Some(path) => Preferences::load(path),
            None => Preferences::default(),
        };
        self.set_volume(prefs.volume);
        prefs.track.parse().unwrap_or(TrackId::Forest)
    }

    fn render_callback(&self, config: &BackendStreamConfig) -> OutputCallback {
        let slot = Arc::clone(&self.slot);
        let volume_bits = Arc::clone(&self.volume_bits);
        let channels = usize::from(config.channels).max(1);

        let mut gain = SmoothedParam::new(f32::from_bits(volume_bits.load(Ordering::Relaxed)));
        gain.set_sample_rate(config.sample_rate as f32);
        gain.set_smoothing_ms(VOLUME_SMOOTHING_MS);

        Box::new(move |buffer: &mut [f32]| {
            gain.set_target(f32::from_bits(volume_bits.load(Ordering::Relaxed)));
            // try_lock only: the session side holds this lock briefly
            // during swaps, and the audio thread must never block.
            match slot.try_lock() {
                Ok(mut active) => {
                    for frame in buffer.chunks_mut(channels) {
                        let g = gain.advance();
                        let sample = match active.as_mut() {
                            Some(active) => active.graph.next_sample() * g,
                            None => 0.0,
                        };
                        for out in frame.iter_mut() {
                            *out = sample;
                        }
                    }
                }
                Err(_) => buffer.fill(0.0),
            }
        })
    }

    fn clear_slot(&mut self) {
        let dropped = self.lock_slot().take();
        drop(dropped);
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<ActiveGraph>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist_preferences(&self) {
        let Some(path) = &self.prefs_path else {
            return;
        };
        let mut prefs = Preferences::load(path);
        if let Some(id) = self.state.current_track {
            prefs.track = id.as_str().to_string();
        }
        prefs.volume = self.state.volume;
        if let Err(err) = prefs.save(path) {
            warn!(%err, "failed to persist preferences");
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("has_stream", &self.stream.is_some())
            .finish_non_exhaustive()
    }
}
