//! Cozy cafe ambience: indistinct chatter.
//!
//! Pink noise through a band-pass centered in the speech range, at low
//! gain, reads as a murmuring room without any intelligible voices.

use arrullo_core::{Biquad, Source};

use crate::noise::PinkNoise;

const CHATTER_CENTER_HZ: f32 = 550.0;
const CHATTER_Q: f32 = 0.9;
const CHATTER_GAIN: f32 = 0.09;

/// Cozy cafe scene.
#[derive(Debug, Clone)]
pub struct CozyCafe {
    murmur: PinkNoise,
    filter: Biquad,
}

impl CozyCafe {
    /// Build the scene.
    pub fn new(sample_rate: f32, seed: u32) -> Self {
        Self {
            murmur: PinkNoise::new(seed),
            filter: Biquad::bandpass(sample_rate, CHATTER_CENTER_HZ, CHATTER_Q),
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

impl Source for CozyCafe {
    #[inline]
    fn next_sample(&mut self) -> f32 {
        self.filter.process(self.murmur.next_sample()) * CHATTER_GAIN
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.filter.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.murmur.reset();
        self.filter.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_finite_and_quiet() {
        let mut scene = CozyCafe::new(48000.0, 4);
        for _ in 0..48000 {
            let s = scene.next_sample();
            assert!(s.is_finite());
            assert!(s.abs() < 0.3, "chatter should be at low gain, got {s}");
        }
    }

    #[test]
    fn has_no_timers() {
        let scene = CozyCafe::new(48000.0, 4);
        assert_eq!(scene.source_count(), 1);
        assert_eq!(scene.timer_count(), 0);
    }
}
