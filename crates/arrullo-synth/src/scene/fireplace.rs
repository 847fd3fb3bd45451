//! Fireplace ambience: low rumble with randomized crackle pops.
//!
//! Brown noise through a resonant low-pass gives the fire its body; a
//! short square-wave burst at a random pitch in 100-300 Hz, decaying
//! over 0.1-0.3 s, fires every 2-10 s as a crackle.

use arrullo_core::{Biquad, DecayEnvelope, Source};

use crate::noise::BrownNoise;
use crate::oscillator::{Oscillator, Waveform};
use crate::timer::RandomInterval;

const BODY_CUTOFF_HZ: f32 = 1000.0;
const BODY_Q: f32 = 1.2;
const BODY_GAIN: f32 = 0.18;
const POP_MIN_HZ: f32 = 100.0;
const POP_MAX_HZ: f32 = 300.0;
const POP_MIN_DECAY_S: f32 = 0.1;
const POP_MAX_DECAY_S: f32 = 0.3;
const POP_MIN_INTERVAL_S: f32 = 2.0;
const POP_MAX_INTERVAL_S: f32 = 10.0;
const POP_GAIN: f32 = 0.2;

/// Fireplace scene.
#[derive(Debug, Clone)]
pub struct Fireplace {
    body: BrownNoise,
    body_filter: Biquad,
    pop_osc: Oscillator,
    pop_envelope: DecayEnvelope,
    pop_timer: RandomInterval,
}

impl Fireplace {
    /// Build the scene.
    pub fn new(sample_rate: f32, seed: u32) -> Self {
        Self {
            body: BrownNoise::new(seed),
            body_filter: Biquad::lowpass(sample_rate, BODY_CUTOFF_HZ, BODY_Q),
            pop_osc: Oscillator::new(sample_rate, POP_MIN_HZ, Waveform::Square),
            pop_envelope: DecayEnvelope::new(sample_rate, POP_MIN_DECAY_S),
            pop_timer: RandomInterval::new(
                sample_rate,
                POP_MIN_INTERVAL_S,
                POP_MAX_INTERVAL_S,
                seed.wrapping_add(1),
            ),
        }
    }

    /// Number of generator voices owned by the scene.
    pub fn source_count(&self) -> usize {
        2
    }

    /// Number of event timers owned by the scene.
    pub fn timer_count(&self) -> usize {
        1
    }
}

impl Source for Fireplace {
    #[inline]
    fn next_sample(&mut self) -> f32 {
        if self.pop_timer.tick() {
            let rng = self.pop_timer.rng();
            let pitch = rng.range(POP_MIN_HZ, POP_MAX_HZ);
            let decay = rng.range(POP_MIN_DECAY_S, POP_MAX_DECAY_S);
            self.pop_osc.set_frequency(pitch);
            self.pop_envelope.trigger_with_decay(decay);
        }

        let rumble = self.body_filter.process(self.body.next_sample()) * BODY_GAIN;
        let crackle = if self.pop_envelope.is_active() {
            self.pop_osc.next_sample() * self.pop_envelope.advance() * POP_GAIN
        } else {
            0.0
        };
        rumble + crackle
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.body_filter.set_sample_rate(sample_rate);
        self.pop_osc.set_sample_rate(sample_rate);
        self.pop_envelope.set_sample_rate(sample_rate);
        self.pop_timer.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.body.reset();
        self.body_filter.clear();
        self.pop_osc.reset();
        self.pop_envelope.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_finite_and_quiet() {
        let mut scene = Fireplace::new(48000.0, 3);
        for _ in 0..48000 {
            let s = scene.next_sample();
            assert!(s.is_finite());
            assert!(s.abs() < 1.0);
        }
    }

    #[test]
    fn pops_fire_within_the_interval_bound() {
        let mut scene = Fireplace::new(48000.0, 3);
        // Interval upper bound is 10 s, so 11 s must contain a pop.
        let mut popped = false;
        for _ in 0..(11 * 48000) {
            scene.next_sample();
            if scene.pop_envelope.is_active() {
                popped = true;
                break;
            }
        }
        assert!(popped, "no crackle within 11 s");
    }

    #[test]
    fn pop_pitch_stays_in_range() {
        let mut scene = Fireplace::new(48000.0, 3);
        for _ in 0..(30 * 48000) {
            scene.next_sample();
            let f = scene.pop_osc.frequency();
            assert!((POP_MIN_HZ..=POP_MAX_HZ).contains(&f), "pop pitch {f}");
        }
    }
}
