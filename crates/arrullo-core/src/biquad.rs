//! Biquad (bi-quadratic) IIR filter.
//!
//! A Direct Form I second-order filter configured by the RBJ Audio EQ
//! Cookbook formulas. Only the responses the ambience scenes use are
//! provided: low-pass (forest wind, fire body), high-pass (rain hiss)
//! and band-pass (cafe chatter, bird chirps).

use crate::flush_denormal;
use core::f32::consts::PI;
use libm::{cosf, sinf};

/// Filter response shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterShape {
    /// Low-pass: passes below the cutoff, 12 dB/oct rolloff above.
    Lowpass,
    /// High-pass: passes above the cutoff.
    Highpass,
    /// Band-pass with constant 0 dB peak gain at the center frequency.
    Bandpass,
}

/// Second-order IIR filter.
///
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
/// ```
#[derive(Debug, Clone)]
pub struct Biquad {
    shape: FilterShape,
    frequency: f32,
    q: f32,
    sample_rate: f32,

    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,

    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl Biquad {
    /// Low-pass filter with the given cutoff and Q.
    pub fn lowpass(sample_rate: f32, frequency: f32, q: f32) -> Self {
        Self::new(FilterShape::Lowpass, sample_rate, frequency, q)
    }

    /// High-pass filter with the given cutoff and Q.
    pub fn highpass(sample_rate: f32, frequency: f32, q: f32) -> Self {
        Self::new(FilterShape::Highpass, sample_rate, frequency, q)
    }

    /// Band-pass filter centered on `frequency` (bandwidth = frequency / q).
    pub fn bandpass(sample_rate: f32, frequency: f32, q: f32) -> Self {
        Self::new(FilterShape::Bandpass, sample_rate, frequency, q)
    }

    fn new(shape: FilterShape, sample_rate: f32, frequency: f32, q: f32) -> Self {
        let mut filter = Self {
            shape,
            frequency,
            q: q.max(0.01),
            sample_rate,
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        };
        filter.recalculate();
        filter
    }

    /// Retune the center/cutoff frequency, keeping shape and Q.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
        self.recalculate();
    }

    /// Current center/cutoff frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Update the sample rate and recalculate coefficients.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate();
    }

    /// Process one sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;
        let output = flush_denormal(output);

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Clear the delay lines without changing the tuning.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// RBJ cookbook coefficients, normalized by a0.
    fn recalculate(&mut self) {
        // Keep the tuning strictly below Nyquist so alpha stays positive.
        let nyquist = self.sample_rate * 0.49;
        let frequency = self.frequency.clamp(1.0, nyquist);
        let omega = 2.0 * PI * frequency / self.sample_rate;
        let cos_omega = cosf(omega);
        let sin_omega = sinf(omega);
        let alpha = sin_omega / (2.0 * self.q);

        let (b0, b1, b2) = match self.shape {
            FilterShape::Lowpass => {
                let b1 = 1.0 - cos_omega;
                (b1 / 2.0, b1, b1 / 2.0)
            }
            FilterShape::Highpass => {
                let b1 = -(1.0 + cos_omega);
                (-b1 / 2.0, b1, -b1 / 2.0)
            }
            FilterShape::Bandpass => (alpha, 0.0, -alpha),
        };
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        let a0_inv = 1.0 / a0;
        self.b0 = b0 * a0_inv;
        self.b1 = b1 * a0_inv;
        self.b2 = b2 * a0_inv;
        self.a1 = a1 * a0_inv;
        self.a2 = a2 * a0_inv;
    }
}
