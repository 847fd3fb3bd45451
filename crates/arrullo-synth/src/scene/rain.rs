//! Rain ambience: high-passed white noise with a slow intensity swell.
//!
//! White noise above ~1.2 kHz reads as rainfall hiss; a 0.5 Hz sine LFO
//! modulates the gain slightly so the downpour breathes instead of
//! sounding like a constant hiss.

use arrullo_core::{Biquad, Lfo, Source};

use crate::noise::WhiteNoise;

const HISS_CUTOFF_HZ: f32 = 1200.0;
const BASE_GAIN: f32 = 0.18;
const SWELL_DEPTH: f32 = 0.05;
const SWELL_RATE_HZ: f32 = 0.5;

/// Rain scene.
#[derive(Debug, Clone)]
pub struct Rain {
    noise: WhiteNoise,
    filter: Biquad,
    swell: Lfo,
}

impl Rain {
    /// Build the scene.
    pub fn new(sample_rate: f32, seed: u32) -> Self {
        Self {
            noise: WhiteNoise::new(seed),
            filter: Biquad::highpass(sample_rate, HISS_CUTOFF_HZ, 0.707),
            swell: Lfo::new(sample_rate, SWELL_RATE_HZ),
        }
    }

    /// Number of generator voices owned by the scene.
    pub fn source_count(&self) -> usize {
        1
    }

    /// Number of event timers owned by the scene.
    pub fn timer_count(&self) -> usize {
        0
    }
}

impl Source for Rain {
    #[inline]
    fn next_sample(&mut self) -> f32 {
        let gain = BASE_GAIN + SWELL_DEPTH * self.swell.next();
        self.filter.process(self.noise.next_sample()) * gain
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.filter.set_sample_rate(sample_rate);
        self.swell.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.noise.reset();
        self.filter.clear();
        self.swell.reset();
    }
}
