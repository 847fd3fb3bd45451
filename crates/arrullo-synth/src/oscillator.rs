//! Phase-accumulation oscillator.
//!
//! Sine, triangle, and square waveforms for the melodic and percussive
//! voices. No band-limiting: every oscillator in the scenes runs below
//! ~2 kHz behind a filter at low gain, where naive waveform aliasing is
//! inaudible.

use arrullo_core::Source;
use core::f32::consts::TAU;
use libm::sinf;

/// Oscillator waveform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Waveform {
    /// Pure fundamental tone (chirps, kick).
    #[default]
    Sine,
    /// Odd harmonics, soft timbre (lofi melody).
    Triangle,
    /// Odd harmonics, hollow timbre (fire pops).
    Square,
}

/// Free-running oscillator with phase in [0, 1).
#[derive(Debug, Clone)]
pub struct Oscillator {
    phase: f32,
    phase_inc: f32,
    frequency: f32,
    sample_rate: f32,
    waveform: Waveform,
}

impl Oscillator {
    /// Create an oscillator at the given frequency.
    pub fn new(sample_rate: f32, frequency_hz: f32, waveform: Waveform) -> Self {
        Self {
            phase: 0.0,
            phase_inc: frequency_hz / sample_rate,
            frequency: frequency_hz,
            sample_rate,
            waveform,
        }
    }

    /// Set the frequency in Hz.
    pub fn set_frequency(&mut self, frequency_hz: f32) {
        self.frequency = frequency_hz.max(0.0);
        self.phase_inc = self.frequency / self.sample_rate;
    }

    /// Current frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

impl Source for Oscillator {
    #[inline]
    fn next_sample(&mut self) -> f32 {
        let out = match self.waveform {
            Waveform::Sine => sinf(self.phase * TAU),
            Waveform::Triangle => {
                if self.phase < 0.5 {
                    4.0 * self.phase - 1.0
                } else {
                    3.0 - 4.0 * self.phase
                }
            }
            Waveform::Square => {
                if self.phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        };

        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        out
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.phase_inc = self.frequency / sample_rate;
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_in_range_for_all_waveforms() {
        for waveform in [Waveform::Sine, Waveform::Triangle, Waveform::Square] {
            let mut osc = Oscillator::new(48000.0, 220.0, waveform);
            for _ in 0..10_000 {
                let v = osc.next_sample();
                assert!(
                    (-1.0..=1.0).contains(&v),
                    "{waveform:?} out of range: {v}"
                );
            }
        }
    }

    #[test]
    fn sine_completes_cycles() {
        let mut osc = Oscillator::new(48000.0, 100.0, Waveform::Sine);
        // Count zero crossings over one second: 100 Hz has 200.
        let mut crossings = 0;
        let mut prev = osc.next_sample();
        for _ in 0..48000 {
            let v = osc.next_sample();
            if prev <= 0.0 && v > 0.0 || prev >= 0.0 && v < 0.0 {
                crossings += 1;
            }
            prev = v;
        }
        assert!(
            (195..=205).contains(&crossings),
            "expected ~200 crossings, got {crossings}"
        );
    }

    #[test]
    fn retune_applies_immediately() {
        let mut osc = Oscillator::new(48000.0, 110.0, Waveform::Triangle);
        osc.set_frequency(440.0);
        assert!((osc.frequency() - 440.0).abs() < f32::EPSILON);
        assert!(osc.next_sample().is_finite());
    }
}
