//! Forest ambience: wind bed plus bird chirps.
//!
//! Pink noise through a gentle low-pass approximates wind in foliage,
//! with a one-pole damper softening what the biquad leaves above the
//! cutoff; three independent sine voices, band-pass filtered in the
//! 800-2000 Hz range, fire short exponential-decay chirps at randomized
//! 3-8 s intervals.

use arrullo_core::{Biquad, DecayEnvelope, OnePole, Source};

use crate::oscillator::{Oscillator, Waveform};
use crate::timer::RandomInterval;

const BED_CUTOFF_HZ: f32 = 600.0;
const BED_DAMP_HZ: f32 = 1500.0;
const BED_GAIN: f32 = 0.12;
const CHIRP_MIN_HZ: f32 = 800.0;
const CHIRP_MAX_HZ: f32 = 2000.0;
const CHIRP_GAIN: f32 = 0.08;
const CHIRP_DECAY_S: f32 = 0.15;
const CHIRP_MIN_INTERVAL_S: f32 = 3.0;
const CHIRP_MAX_INTERVAL_S: f32 = 8.0;

/// One bird voice: a sine oscillator through a band-pass tuned to the
/// chirp pitch, gated by a decay envelope and re-pitched per firing.
#[derive(Debug, Clone)]
struct Chirper {
    osc: Oscillator,
    filter: Biquad,
    envelope: DecayEnvelope,
    timer: RandomInterval,
}

impl Chirper {
    fn new(sample_rate: f32, seed: u32) -> Self {
        let mut timer = RandomInterval::new(
            sample_rate,
            CHIRP_MIN_INTERVAL_S,
            CHIRP_MAX_INTERVAL_S,
            seed,
        );
        let frequency = timer.rng().range(CHIRP_MIN_HZ, CHIRP_MAX_HZ);
        Self {
            osc: Oscillator::new(sample_rate, frequency, Waveform::Sine),
            filter: Biquad::bandpass(sample_rate, frequency, 4.0),
            envelope: DecayEnvelope::new(sample_rate, CHIRP_DECAY_S),
            timer,
        }
    }

    #[inline]
    fn next(&mut self) -> f32 {
        if self.timer.tick() {
            let frequency = self.timer.rng().range(CHIRP_MIN_HZ, CHIRP_MAX_HZ);
            self.osc.set_frequency(frequency);
            self.filter.set_frequency(frequency);
            self.envelope.trigger();
        }
        if !self.envelope.is_active() {
            return 0.0;
        }
        let tone = self.filter.process(self.osc.next_sample());
        tone * self.envelope.advance() * CHIRP_GAIN
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.osc.set_sample_rate(sample_rate);
        self.filter.set_sample_rate(sample_rate);
        self.envelope.set_sample_rate(sample_rate);
        self.timer.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.osc.reset();
        self.filter.clear();
        self.envelope.reset();
    }
}

/// Forest scene.
#[derive(Debug, Clone)]
pub struct Forest {
    bed: crate::noise::PinkNoise,
    bed_filter: Biquad,
    bed_damp: OnePole,
    chirpers: [Chirper; 3],
}

impl Forest {
    /// Build the scene; the seed spreads into per-voice streams.
    pub fn new(sample_rate: f32, seed: u32) -> Self {
        Self {
            bed: crate::noise::PinkNoise::new(seed),
            bed_filter: Biquad::lowpass(sample_rate, BED_CUTOFF_HZ, 0.707),
            bed_damp: OnePole::new(sample_rate, BED_DAMP_HZ),
            chirpers: [
                Chirper::new(sample_rate, seed.wrapping_add(1)),
                Chirper::new(sample_rate, seed.wrapping_add(2)),
                Chirper::new(sample_rate, seed.wrapping_add(3)),
            ],
        }
    }

    /// Number of generator voices owned by the scene (bed + chirpers).
    pub fn source_count(&self) -> usize {
        1 + self.chirpers.len()
    }

    /// Number of event timers owned by the scene.
    pub fn timer_count(&self) -> usize {
        self.chirpers.len()
    }
}

impl Source for Forest {
    #[inline]
    fn next_sample(&mut self) -> f32 {
        let wind = self
            .bed_damp
            .process(self.bed_filter.process(self.bed.next_sample()))
            * BED_GAIN;
        let birds: f32 = self.chirpers.iter_mut().map(Chirper::next).sum();
        wind + birds
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.bed_filter.set_sample_rate(sample_rate);
        self.bed_damp.set_sample_rate(sample_rate);
        for chirper in &mut self.chirpers {
            chirper.set_sample_rate(sample_rate);
        }
    }

    fn reset(&mut self) {
        self.bed.reset();
        self.bed_filter.clear();
        self.bed_damp.clear();
        for chirper in &mut self.chirpers {
            chirper.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_finite_and_quiet() {
        let mut scene = Forest::new(48000.0, 1);
        for _ in 0..48000 {
            let s = scene.next_sample();
            assert!(s.is_finite());
            assert!(s.abs() < 1.0, "ambient bed should stay well below unity");
        }
    }

    #[test]
    fn owns_three_chirp_voices() {
        let scene = Forest::new(48000.0, 1);
        assert_eq!(scene.source_count(), 4);
        assert_eq!(scene.timer_count(), 3);
    }

    #[test]
    fn bed_damper_removes_energy() {
        let mut noise = crate::noise::PinkNoise::new(7);
        let mut filter = Biquad::lowpass(48000.0, BED_CUTOFF_HZ, 0.707);
        let mut damp = OnePole::new(48000.0, BED_DAMP_HZ);
        let mut plain = 0.0f64;
        let mut damped = 0.0f64;
        for _ in 0..48000 {
            let x = filter.process(noise.next_sample());
            plain += f64::from(x * x);
            let y = damp.process(x);
            damped += f64::from(y * y);
        }
        assert!(damped < plain, "damper should only ever attenuate");
    }

    #[test]
    fn chirps_eventually_fire() {
        let mut voice = Chirper::new(48000.0, 9);
        // The interval is drawn from [3, 8) s, so 9 s must contain at
        // least one chirp.
        let mut fired = false;
        for _ in 0..(9 * 48000) {
            if voice.next().abs() > 0.0 {
                fired = true;
                break;
            }
        }
        assert!(fired, "no chirp within 9 s");
    }

    #[test]
    fn chirp_pitch_changes_between_firings() {
        let mut voice = Chirper::new(48000.0, 9);
        let mut pitches = Vec::new();
        let mut was_active = false;
        for _ in 0..(20 * 48000) {
            voice.next();
            let active = voice.envelope.is_active();
            if active && !was_active {
                pitches.push(voice.osc.frequency());
            }
            was_active = active;
        }
        pitches.dedup();
        assert!(pitches.len() > 1, "chirp pitch should be re-rolled");
        for p in pitches {
            assert!((CHIRP_MIN_HZ..CHIRP_MAX_HZ).contains(&p));
        }
    }
}
