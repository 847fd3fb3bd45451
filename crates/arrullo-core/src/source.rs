//! The [`Source`] trait: a mono sample generator.
//!
//! Everything that produces audio in arrullo — noise colors, oscillators,
//! whole ambience scenes, looped asset buffers — implements this trait.
//! It is deliberately minimal and object-safe so a running graph can be
//! owned as a single `Box<dyn Source + Send>`.

/// A mono audio generator advanced one sample at a time.
///
/// Output samples are nominally in [-1.0, 1.0]; colored noise may exceed
/// that slightly and relies on downstream gain stages to attenuate.
pub trait Source {
    /// Produce the next output sample and advance internal state.
    fn next_sample(&mut self) -> f32;

    /// Update the sample rate. Implementations recalculate any
    /// rate-dependent coefficients (phase increments, filter poles).
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state to the post-construction condition.
    fn reset(&mut self);

    /// Fill a buffer with consecutive samples.
    ///
    /// Default implementation calls [`next_sample`](Self::next_sample)
    /// per element; generators may override for block efficiency.
    fn fill(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp {
        value: f32,
    }

    impl Source for Ramp {
        fn next_sample(&mut self) -> f32 {
            self.value += 0.25;
            self.value
        }

        fn set_sample_rate(&mut self, _sample_rate: f32) {}

        fn reset(&mut self) {
            self.value = 0.0;
        }
    }

    #[test]
    fn fill_advances_per_sample() {
        let mut ramp = Ramp { value: 0.0 };
        let mut buf = [0.0f32; 4];
        ramp.fill(&mut buf);
        assert_eq!(buf, [0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn object_safe() {
        let mut boxed: &mut dyn Source = &mut Ramp { value: 0.0 };
        assert!(boxed.next_sample() > 0.0);
        boxed.reset();
    }
}
