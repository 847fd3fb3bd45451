//! Arrullo Core - DSP primitives for ambient soundscape synthesis.
//!
//! This crate provides the building blocks the ambience scenes are wired
//! from, designed for per-sample processing with zero allocation in the
//! audio path.
//!
//! # Core Abstractions
//!
//! - [`Source`] - Object-safe trait for anything that produces samples
//! - [`Biquad`] - Second-order IIR filter with RBJ cookbook coefficients
//! - [`OnePole`] - Single-pole lowpass for gentle high-frequency rolloff
//! - [`Lfo`] - Sine low-frequency oscillator for slow gain swells
//! - [`DecayEnvelope`] - Exponential decay for transient bursts
//! - [`SmoothedParam`] - Zipper-free parameter changes
//! - [`XorShift32`] - Small deterministic PRNG for noise and event jitter
//!
//! # no_std Support
//!
//! The crate is `no_std` compatible; disable the default `std` feature.
//!
//! # Design Principles
//!
//! - **Real-time safe**: no allocations in processing paths
//! - **Deterministic**: every stochastic element is seeded explicitly
//! - **Object-safe traits**: dynamic dispatch at the graph boundary only

#![cfg_attr(not(feature = "std"), no_std)]

pub mod biquad;
pub mod envelope;
pub mod lfo;
pub mod math;
pub mod one_pole;
pub mod param;
pub mod rng;
pub mod source;

pub use biquad::Biquad;
pub use envelope::DecayEnvelope;
pub use lfo::Lfo;
pub use math::{clamp_unit, flush_denormal};
pub use one_pole::OnePole;
pub use param::SmoothedParam;
pub use rng::XorShift32;
pub use source::Source;
