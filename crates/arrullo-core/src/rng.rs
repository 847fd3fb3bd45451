//! Deterministic xorshift PRNG.
//!
//! Random numbers are needed on the audio thread (noise samples, event
//! jitter for chirps and fire pops), so the generator must be tiny,
//! allocation-free, and explicitly seeded. A 32-bit xorshift is plenty
//! for audible randomness and keeps every scene reproducible in tests.

/// Marsaglia xorshift32 generator.
///
/// Period 2^32 - 1. State must never be zero; the constructor remaps a
/// zero seed to a fixed non-zero value.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator from a seed. A zero seed is remapped.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    /// Next raw 32-bit value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next value uniform in [0.0, 1.0).
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        // Use the top 24 bits so the mantissa is filled evenly.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Next value uniform in [-1.0, 1.0].
    #[inline]
    pub fn next_bipolar(&mut self) -> f32 {
        (self.next_u32() as i32 as f32) / (i32::MAX as f32)
    }

    /// Next value uniform in [lo, hi).
    #[inline]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(0x1234_5678)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_remapped() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn deterministic_for_same_seed() {
        let mut a = XorShift32::new(42);
        let mut b = XorShift32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn unit_range() {
        let mut rng = XorShift32::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn bipolar_range_and_mean() {
        let mut rng = XorShift32::new(99);
        let mut sum = 0.0f64;
        const N: usize = 100_000;
        for _ in 0..N {
            let v = rng.next_bipolar();
            assert!((-1.0..=1.0).contains(&v), "out of range: {v}");
            sum += f64::from(v);
        }
        let mean = sum / N as f64;
        assert!(mean.abs() < 0.02, "mean should be near zero, got {mean}");
    }

    #[test]
    fn range_respects_bounds() {
        let mut rng = XorShift32::new(3);
        for _ in 0..1000 {
            let v = rng.range(3.0, 8.0);
            assert!((3.0..8.0).contains(&v), "out of range: {v}");
        }
    }
}
