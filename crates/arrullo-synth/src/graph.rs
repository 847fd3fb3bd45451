//! Graph construction and the owning handle.
//!
//! [`build_graph`] realizes a [`SceneKind`] as an [`AmbienceGraph`]: a
//! single owner of every node and timer in a running ambience. There is
//! no separate teardown step — dropping the graph stops the sources and
//! cancels the timers, because they are plain owned data.

use arrullo_core::Source;
use thiserror::Error;

use crate::scene::{CozyCafe, Fireplace, Forest, Lofi, Rain, SceneKind};

/// Construction errors.
///
/// Synthesis itself is pure math, so the only way construction can fail
/// is a nonsensical sample rate. Callers treat any error as "fall back
/// to silence".
#[derive(Debug, Error)]
pub enum BuildError {
    /// The sample rate is zero, negative, or non-finite.
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(f32),
}

/// Shape of a constructed graph, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// Generator voices owned by the graph.
    pub sources: usize,
    /// Event timers owned by the graph.
    pub timers: usize,
}

/// Owning handle to a running ambience.
pub struct AmbienceGraph {
    source: Box<dyn Source + Send>,
    stats: GraphStats,
}

impl AmbienceGraph {
    /// Wrap an arbitrary source (e.g. a looped asset buffer) as a graph.
    pub fn from_source(source: Box<dyn Source + Send>, stats: GraphStats) -> Self {
        Self { source, stats }
    }

    /// Produce the next mono sample.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.source.next_sample()
    }

    /// Fill a buffer with consecutive samples.
    pub fn fill(&mut self, buffer: &mut [f32]) {
        self.source.fill(buffer);
    }

    /// Update the sample rate of every owned node.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.source.set_sample_rate(sample_rate);
    }

    /// Generator voices owned by this graph.
    pub fn source_count(&self) -> usize {
        self.stats.sources
    }

    /// Event timers owned by this graph.
    pub fn timer_count(&self) -> usize {
        self.stats.timers
    }
}

impl std::fmt::Debug for AmbienceGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmbienceGraph")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Build the graph for a scene with a seed derived from the scene kind.
pub fn build_graph(kind: SceneKind, sample_rate: f32) -> Result<AmbienceGraph, BuildError> {
    build_graph_seeded(kind, sample_rate, default_seed(kind))
}

/// Build the graph for a scene with an explicit seed.
pub fn build_graph_seeded(
    kind: SceneKind,
    sample_rate: f32,
    seed: u32,
) -> Result<AmbienceGraph, BuildError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(BuildError::InvalidSampleRate(sample_rate));
    }

    let graph = match kind {
        SceneKind::Forest => {
            let scene = Forest::new(sample_rate, seed);
            let stats = GraphStats {
                sources: scene.source_count(),
                timers: scene.timer_count(),
            };
            AmbienceGraph::from_source(Box::new(scene), stats)
        }
        SceneKind::Rain => {
            let scene = Rain::new(sample_rate, seed);
            let stats = GraphStats {
                sources: scene.source_count(),
                timers: scene.timer_count(),
            };
            AmbienceGraph::from_source(Box::new(scene), stats)
        }
        SceneKind::Fireplace => {
            let scene = Fireplace::new(sample_rate, seed);
            let stats = GraphStats {
                sources: scene.source_count(),
                timers: scene.timer_count(),
            };
            AmbienceGraph::from_source(Box::new(scene), stats)
        }
        SceneKind::CozyCafe => {
            let scene = CozyCafe::new(sample_rate, seed);
            let stats = GraphStats {
                sources: scene.source_count(),
                timers: scene.timer_count(),
            };
            AmbienceGraph::from_source(Box::new(scene), stats)
        }
        SceneKind::Lofi => {
            let scene = Lofi::new(sample_rate, seed);
            let stats = GraphStats {
                sources: scene.source_count(),
                timers: scene.timer_count(),
            };
            AmbienceGraph::from_source(Box::new(scene), stats)
        }
    };

    Ok(graph)
}

fn default_seed(kind: SceneKind) -> u32 {
    match kind {
        SceneKind::Forest => 0x00F0_7E57,
        SceneKind::Rain => 0x0074_41B1,
        SceneKind::Fireplace => 0x00F1_7E00,
        SceneKind::CozyCafe => 0x00CA_FE00,
        SceneKind::Lofi => 0x0010_F100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scene_builds() {
        for kind in SceneKind::ALL {
            let graph = build_graph(kind, 48000.0).expect("scene should build");
            assert!(graph.source_count() >= 1, "{kind} has no sources");
        }
    }

    #[test]
    fn forest_shape_matches_recipe() {
        let graph = build_graph(SceneKind::Forest, 48000.0).unwrap();
        assert_eq!(graph.source_count(), 4, "noise bed + 3 chirpers");
        assert_eq!(graph.timer_count(), 3);
    }

    #[test]
    fn invalid_sample_rate_is_rejected() {
        assert!(build_graph(SceneKind::Rain, 0.0).is_err());
        assert!(build_graph(SceneKind::Rain, -48000.0).is_err());
        assert!(build_graph(SceneKind::Rain, f32::NAN).is_err());
    }

    #[test]
    fn graphs_output_finite_audio() {
        for kind in SceneKind::ALL {
            let mut graph = build_graph(kind, 44100.0).unwrap();
            let mut buffer = [0.0f32; 1024];
            graph.fill(&mut buffer);
            for s in buffer {
                assert!(s.is_finite(), "{kind} produced {s}");
            }
        }
    }

    #[test]
    fn seeded_builds_are_deterministic() {
        let mut a = build_graph_seeded(SceneKind::Forest, 48000.0, 77).unwrap();
        let mut b = build_graph_seeded(SceneKind::Forest, 48000.0, 77).unwrap();
        for _ in 0..4096 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }
}
