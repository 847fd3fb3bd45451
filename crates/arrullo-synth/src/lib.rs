//! Arrullo Synth - procedural ambience synthesis.
//!
//! This crate turns the primitives from `arrullo-core` into complete
//! background soundscapes:
//!
//! - [`noise`] - white, pink, and brown noise sources and buffer helpers
//! - [`oscillator`] - phase-accumulation sine/triangle/square oscillator
//! - [`timer`] - sample-counted interval timers for transient events
//! - [`scene`] - the five ambience recipes (forest, rain, fireplace,
//!   cozy cafe, lofi)
//! - [`graph`] - [`build_graph`], producing an [`AmbienceGraph`] that
//!   owns every node and timer of a running ambience
//!
//! Every scene is deterministic for a given seed: all randomness flows
//! through an explicitly seeded [`arrullo_core::XorShift32`].

pub mod graph;
pub mod noise;
pub mod oscillator;
pub mod scene;
pub mod timer;

pub use graph::{AmbienceGraph, BuildError, GraphStats, build_graph, build_graph_seeded};
pub use noise::{BrownNoise, PinkNoise, WhiteNoise, brown_noise, pink_noise, white_noise};
pub use oscillator::{Oscillator, Waveform};
pub use scene::SceneKind;
pub use timer::{FixedInterval, RandomInterval};
