//! Sine low-frequency oscillator.
//!
//! Used for slow periodic gain modulation, e.g. the ~0.5 Hz intensity
//! swell of the rain scene. Phase accumulation in [0, 1) keeps the
//! oscillator alias-free at any rate.

use core::f32::consts::TAU;
use libm::sinf;

/// Sine LFO with phase accumulation.
#[derive(Debug, Clone)]
pub struct Lfo {
    phase: f32,
    phase_inc: f32,
    sample_rate: f32,
}

impl Lfo {
    /// Create an LFO at the given rate.
    pub fn new(sample_rate: f32, frequency_hz: f32) -> Self {
        Self {
            phase: 0.0,
            phase_inc: frequency_hz / sample_rate,
            sample_rate,
        }
    }

    /// Set the oscillation rate in Hz.
    pub fn set_frequency(&mut self, frequency_hz: f32) {
        self.phase_inc = frequency_hz / self.sample_rate;
    }

    /// Update the sample rate, preserving the configured rate in Hz.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        let frequency = self.phase_inc * self.sample_rate;
        self.sample_rate = sample_rate;
        self.phase_inc = frequency / sample_rate;
    }

    /// Reset phase to zero.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Next value in [-1.0, 1.0].
    #[inline]
    pub fn next(&mut self) -> f32 {
        let out = sinf(self.phase * TAU);
        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        out
    }

    /// Next value remapped to [0.0, 1.0].
    #[inline]
    pub fn next_unipolar(&mut self) -> f32 {
        (self.next() + 1.0) * 0.5
    }
}
