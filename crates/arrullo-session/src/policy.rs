//! Per-request source selection.
//!
//! Every play request resolves through the same ladder: a configured
//! streamed asset first (bounded by [`ASSET_LOAD_TIMEOUT`]), the
//! synthesized graph for the track second, silence last. Sentinel tracks
//! short-circuit to no audio at all. Nothing in here returns an error;
//! each rung logs its failure and falls to the next.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use arrullo_synth::{AmbienceGraph, GraphStats, build_graph};
use tracing::{debug, warn};

use crate::asset::{AssetError, AssetSource, LoopingSampler};
use crate::catalog::TrackDescriptor;

/// How long an asset load may take before synthesis takes over.
pub const ASSET_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of the selection ladder.
pub enum Route {
    /// A streamed asset, wrapped as a looped graph.
    Streamed(AmbienceGraph),
    /// The procedurally synthesized graph.
    Synthesized(AmbienceGraph),
    /// A sentinel track: playing, but intentionally no audio.
    Sentinel,
    /// Every rung failed; operate in silence.
    Silent,
}

impl Route {
    /// The graph carried by this route, if any.
    pub fn into_graph(self) -> Option<AmbienceGraph> {
        match self {
            Route::Streamed(g) | Route::Synthesized(g) => Some(g),
            Route::Sentinel | Route::Silent => None,
        }
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Streamed(_) => "streamed",
            Route::Synthesized(_) => "synthesized",
            Route::Sentinel => "sentinel",
            Route::Silent => "silent",
        }
    }
}

/// Resolve a play request for `track` into an audio route.
pub fn select(
    track: &TrackDescriptor,
    sample_rate: f32,
    assets: Option<&Arc<dyn AssetSource>>,
) -> Route {
    select_with_timeout(track, sample_rate, assets, ASSET_LOAD_TIMEOUT)
}

/// [`select`] with an explicit asset-load deadline.
pub fn select_with_timeout(
    track: &TrackDescriptor,
    sample_rate: f32,
    assets: Option<&Arc<dyn AssetSource>>,
    timeout: Duration,
) -> Route {
    let Some(scene) = track.id.scene() else {
        debug!(track = %track.id, "sentinel track, no graph");
        return Route::Sentinel;
    };

    if let Some(locator) = track.asset.as_deref().filter(|l| !l.is_empty()) {
        if let Some(source) = assets {
            match load_with_timeout(Arc::clone(source), locator, timeout) {
                Ok(asset) => {
                    debug!(track = %track.id, locator, "streamed asset selected");
                    let sampler = LoopingSampler::new(asset, sample_rate);
                    let stats = GraphStats {
                        sources: 1,
                        timers: 0,
                    };
                    return Route::Streamed(AmbienceGraph::from_source(Box::new(sampler), stats));
                }
                Err(err) => {
                    warn!(track = %track.id, locator, %err, "asset load failed, falling back to synthesis");
                }
            }
        } else {
            warn!(track = %track.id, locator, "asset configured but no asset source installed");
        }
    }

    match build_graph(scene, sample_rate) {
        Ok(graph) => {
            debug!(track = %track.id, sources = graph.source_count(), "synthesized graph selected");
            Route::Synthesized(graph)
        }
        Err(err) => {
            warn!(track = %track.id, %err, "graph construction failed, falling back to silence");
            Route::Silent
        }
    }
}

/// Run a load on a worker thread, bounded by `timeout`.
///
/// A load that outlives the timeout keeps running on its detached
/// thread; its result is discarded when the channel closes.
fn load_with_timeout(
    source: Arc<dyn AssetSource>,
    locator: &str,
    timeout: Duration,
) -> Result<crate::asset::LoadedAsset, AssetError> {
    let (tx, rx) = mpsc::sync_channel(1);
    let locator = locator.to_string();
    thread::spawn(move || {
        let _ = tx.send(source.load(&locator));
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(_) => Err(AssetError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::LoadedAsset;
    use crate::catalog::{Catalog, TrackId};

    struct InstantSource;

    impl AssetSource for InstantSource {
        fn load(&self, _locator: &str) -> Result<LoadedAsset, AssetError> {
            Ok(LoadedAsset {
                samples: Arc::new(vec![0.5; 480]),
                sample_rate: 48000,
            })
        }
    }

    struct BrokenSource;

    impl AssetSource for BrokenSource {
        fn load(&self, locator: &str) -> Result<LoadedAsset, AssetError> {
            Err(AssetError::Unavailable(locator.to_string()))
        }
    }

    struct StalledSource;

    impl AssetSource for StalledSource {
        fn load(&self, _locator: &str) -> Result<LoadedAsset, AssetError> {
            thread::sleep(Duration::from_secs(60));
            unreachable!("test timeout should fire first")
        }
    }

    fn track_with_asset(id: TrackId) -> TrackDescriptor {
        let mut catalog = Catalog::default();
        catalog.set_asset(id, "ambient.wav");
        catalog.get(id).unwrap().clone()
    }

    #[test]
    fn sentinel_tracks_route_to_no_graph() {
        let catalog = Catalog::default();
        for id in [TrackId::Silence, TrackId::External] {
            let route = select(catalog.get(id).unwrap(), 48000.0, None);
            assert!(matches!(route, Route::Sentinel));
        }
    }

    #[test]
    fn no_asset_routes_to_synthesis() {
        let catalog = Catalog::default();
        let route = select(catalog.get(TrackId::Rain).unwrap(), 48000.0, None);
        assert!(matches!(route, Route::Synthesized(_)));
    }

    #[test]
    fn working_asset_is_preferred() {
        let source: Arc<dyn AssetSource> = Arc::new(InstantSource);
        let track = track_with_asset(TrackId::Lofi);
        let route = select(&track, 48000.0, Some(&source));
        assert!(matches!(route, Route::Streamed(_)));
        let graph = route.into_graph().unwrap();
        assert_eq!(graph.source_count(), 1);
        assert_eq!(graph.timer_count(), 0);
    }

    #[test]
    fn broken_asset_falls_back_to_synthesis() {
        let source: Arc<dyn AssetSource> = Arc::new(BrokenSource);
        let track = track_with_asset(TrackId::Lofi);
        let route = select(&track, 48000.0, Some(&source));
        assert!(matches!(route, Route::Synthesized(_)));
    }

    #[test]
    fn stalled_load_times_out() {
        let source: Arc<dyn AssetSource> = Arc::new(StalledSource);
        let err = load_with_timeout(source, "slow.wav", Duration::from_millis(50)).unwrap_err();
        assert!(matches!(err, AssetError::Timeout));
    }

    #[test]
    fn stalled_asset_falls_back_to_synthesis() {
        let source: Arc<dyn AssetSource> = Arc::new(StalledSource);
        let track = track_with_asset(TrackId::Lofi);
        let route = select_with_timeout(&track, 48000.0, Some(&source), Duration::from_millis(50));
        assert!(matches!(route, Route::Synthesized(_)));
        let graph = route.into_graph().unwrap();
        assert_eq!(graph.source_count(), 2);
        assert_eq!(graph.timer_count(), 2);
    }

    #[test]
    fn invalid_sample_rate_routes_to_silence() {
        let catalog = Catalog::default();
        let route = select(catalog.get(TrackId::Forest).unwrap(), 0.0, None);
        assert!(matches!(route, Route::Silent));
    }
}
