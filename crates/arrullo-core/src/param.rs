//! Smoothed parameter for zipper-free volume changes.
//!
//! The session's volume control is applied on the audio thread; stepping
//! the gain directly would produce audible zipper noise, so the target is
//! approached with a one-pole exponential ramp instead.

use libm::expf;

/// A parameter that glides exponentially toward its target.
#[derive(Debug, Clone)]
pub struct SmoothedParam {
    current: f32,
    target: f32,
    coeff: f32,
    sample_rate: f32,
    smoothing_ms: f32,
}

impl SmoothedParam {
    /// Create a parameter at an initial value with no smoothing configured
    /// (changes are instant until [`set_smoothing_ms`](Self::set_smoothing_ms)
    /// and [`set_sample_rate`](Self::set_sample_rate) are called).
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            coeff: 0.0,
            sample_rate: 0.0,
            smoothing_ms: 0.0,
        }
    }

    /// Set the sample rate and recalculate the smoothing coefficient.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate();
    }

    /// Set the smoothing time constant in milliseconds.
    pub fn set_smoothing_ms(&mut self, smoothing_ms: f32) {
        self.smoothing_ms = smoothing_ms.max(0.0);
        self.recalculate();
    }

    /// Set the value the parameter glides toward.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to a value immediately, bypassing the ramp.
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    /// Current smoothed value without advancing.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Advance one sample and return the smoothed value.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        self.current = self.target + self.coeff * (self.current - self.target);
        self.current
    }

    fn recalculate(&mut self) {
        if self.smoothing_ms <= 0.0 || self.sample_rate <= 0.0 {
            self.coeff = 0.0;
        } else {
            self.coeff = expf(-1000.0 / (self.smoothing_ms * self.sample_rate));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_without_smoothing() {
        let mut p = SmoothedParam::new(0.0);
        p.set_target(0.8);
        assert!((p.advance() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn converges_to_target() {
        let mut p = SmoothedParam::new(0.0);
        p.set_sample_rate(48000.0);
        p.set_smoothing_ms(10.0);
        p.set_target(1.0);
        for _ in 0..4800 {
            p.advance();
        }
        assert!((p.current() - 1.0).abs() < 0.01);
    }

    #[test]
    fn ramp_is_monotonic() {
        let mut p = SmoothedParam::new(0.0);
        p.set_sample_rate(48000.0);
        p.set_smoothing_ms(20.0);
        p.set_target(0.5);
        let mut prev = 0.0;
        for _ in 0..1000 {
            let v = p.advance();
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn snap_skips_the_ramp() {
        let mut p = SmoothedParam::new(0.0);
        p.set_sample_rate(48000.0);
        p.set_smoothing_ms(50.0);
        p.snap_to(0.3);
        assert_eq!(p.current(), 0.3);
        assert!((p.advance() - 0.3).abs() < 1e-6);
    }
}
