//! Exponential decay envelope for transient bursts.
//!
//! Bird chirps, fire pops, lofi kicks and melody notes are all short
//! one-shot events: the envelope jumps to full level on trigger and
//! decays exponentially. The decay time is the -60 dB point, the usual
//! reverb-tail convention.

use libm::expf;

/// Level below which the envelope is considered finished.
const SILENCE_FLOOR: f32 = 1e-4;

/// One-shot exponential decay envelope.
#[derive(Debug, Clone)]
pub struct DecayEnvelope {
    level: f32,
    coeff: f32,
    decay_s: f32,
    sample_rate: f32,
}

impl DecayEnvelope {
    /// Create an envelope with the given -60 dB decay time in seconds.
    pub fn new(sample_rate: f32, decay_s: f32) -> Self {
        let mut env = Self {
            level: 0.0,
            coeff: 0.0,
            decay_s: decay_s.max(0.001),
            sample_rate,
        };
        env.recalculate();
        env
    }

    /// Restart the envelope at full level.
    pub fn trigger(&mut self) {
        self.level = 1.0;
    }

    /// Change the decay time, then restart at full level.
    pub fn trigger_with_decay(&mut self, decay_s: f32) {
        self.decay_s = decay_s.max(0.001);
        self.recalculate();
        self.trigger();
    }

    /// Whether the envelope is still audible.
    pub fn is_active(&self) -> bool {
        self.level > SILENCE_FLOOR
    }

    /// Advance one sample and return the current level in [0, 1].
    #[inline]
    pub fn advance(&mut self) -> f32 {
        let out = self.level;
        self.level *= self.coeff;
        if self.level <= SILENCE_FLOOR {
            self.level = 0.0;
        }
        out
    }

    /// Update the sample rate, preserving the decay time.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate();
    }

    /// Kill the envelope immediately.
    pub fn reset(&mut self) {
        self.level = 0.0;
    }

    fn recalculate(&mut self) {
        // level(t) = e^(-6.91 * t / decay) reaches -60 dB at t = decay.
        self.coeff = expf(-6.91 / (self.decay_s * self.sample_rate));
    }
}
