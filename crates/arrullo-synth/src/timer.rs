//! Sample-counted interval timers.
//!
//! The transient events in a scene (bird chirps, fire pops, lofi hits)
//! are scheduled by counting samples rather than by wall-clock timers,
//! so a timer is plain data owned by its scene: dropping the graph
//! cancels every pending event with it, and offline rendering stays
//! sample-accurate.

use arrullo_core::XorShift32;

/// Timer that fires at a randomized interval drawn from [min_s, max_s).
#[derive(Debug, Clone)]
pub struct RandomInterval {
    min_s: f32,
    max_s: f32,
    sample_rate: f32,
    remaining: u32,
    rng: XorShift32,
}

impl RandomInterval {
    /// Create a timer; the first firing is also randomized.
    pub fn new(sample_rate: f32, min_s: f32, max_s: f32, seed: u32) -> Self {
        let mut timer = Self {
            min_s: min_s.max(0.001),
            max_s: max_s.max(min_s),
            sample_rate,
            remaining: 0,
            rng: XorShift32::new(seed),
        };
        timer.rearm();
        timer
    }

    /// Advance one sample; returns `true` on the sample the timer fires.
    #[inline]
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            self.rearm();
            return true;
        }
        self.remaining -= 1;
        false
    }

    /// Borrow the timer's RNG, e.g. to randomize the event it fires.
    pub fn rng(&mut self) -> &mut XorShift32 {
        &mut self.rng
    }

    /// Update the sample rate; the pending interval is re-drawn.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.rearm();
    }

    fn rearm(&mut self) {
        let interval_s = self.rng.range(self.min_s, self.max_s);
        self.remaining = (interval_s * self.sample_rate) as u32;
    }
}

/// Timer that fires every `period_s` seconds.
#[derive(Debug, Clone)]
pub struct FixedInterval {
    period_s: f32,
    sample_rate: f32,
    remaining: u32,
}

impl FixedInterval {
    /// Create a timer with the given period; the first firing happens
    /// after one full period.
    pub fn new(sample_rate: f32, period_s: f32) -> Self {
        let period_s = period_s.max(0.001);
        Self {
            period_s,
            sample_rate,
            remaining: (period_s * sample_rate) as u32,
        }
    }

    /// Offset the first firing, e.g. to interleave two fixed timers.
    pub fn with_phase_offset(mut self, offset_s: f32) -> Self {
        let offset = (offset_s * self.sample_rate) as u32;
        self.remaining = self.remaining.saturating_sub(offset).max(1);
        self
    }

    /// Advance one sample; returns `true` on the sample the timer fires.
    #[inline]
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            self.remaining = (self.period_s * self.sample_rate) as u32;
            return true;
        }
        self.remaining -= 1;
        false
    }

    /// Update the sample rate; the pending interval restarts.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.remaining = (self.period_s * sample_rate) as u32;
    }
}
