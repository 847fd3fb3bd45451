//! One-pole (6 dB/oct) lowpass for gentle tone shaping.
//!
//! ```text
//! y[n] = x[n] + coeff * (y[n-1] - x[n])
//! ```
//!
//! with `coeff = exp(-2π * freq / sample_rate)`. One multiply per
//! sample, no resonance; it sits after a biquad where a scene wants an
//! extra soft high-frequency rolloff rather than a second full filter
//! stage.

use crate::flush_denormal;
use core::f32::consts::TAU;
use libm::expf;

/// Single-pole IIR lowpass.
///
/// `coeff` stays in [0, 1) for any positive cutoff below the sample
/// rate, so the filter cannot self-oscillate.
#[derive(Debug, Clone)]
pub struct OnePole {
    state: f32,
    coeff: f32,
    frequency: f32,
    sample_rate: f32,
}

impl OnePole {
    /// Lowpass with the given cutoff (the -3 dB point).
    pub fn new(sample_rate: f32, frequency: f32) -> Self {
        let mut filter = Self {
            state: 0.0,
            coeff: 0.0,
            frequency,
            sample_rate,
        };
        filter.update_coeff();
        filter
    }

    /// Change the cutoff frequency.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
        self.update_coeff();
    }

    /// Process one sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.state = flush_denormal(input + self.coeff * (self.state - input));
        self.state
    }

    /// Clear the feedback state.
    pub fn clear(&mut self) {
        self.state = 0.0;
    }

    /// Re-rate the filter, preserving the cutoff frequency.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.update_coeff();
    }

    fn update_coeff(&mut self) {
        self.coeff = expf(-TAU * self.frequency / self.sample_rate);
    }
}
