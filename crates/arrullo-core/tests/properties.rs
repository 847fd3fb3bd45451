//! Property-based tests for arrullo-core DSP primitives.
//!
//! Filter stability, envelope bounds, and clamping invariants under
//! randomized parameters and input.

use arrullo_core::{Biquad, DecayEnvelope, SmoothedParam, clamp_unit};
use proptest::prelude::*;

fn make_filter(variant: usize, freq: f32, q: f32) -> Biquad {
    let sr = 48000.0;
    match variant % 3 {
        0 => Biquad::lowpass(sr, freq, q),
        1 => Biquad::highpass(sr, freq, q),
        _ => Biquad::bandpass(sr, freq, q),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any cutoff in 20-20000 Hz and Q in 0.1-10, every filter shape
    /// produces finite output for random input in [-1, 1].
    #[test]
    fn biquad_stability(
        freq in 20.0f32..20000.0f32,
        q in 0.1f32..10.0f32,
        variant in 0usize..3,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut filter = make_filter(variant, freq, q);
        for &sample in &input {
            let out = filter.process(sample);
            prop_assert!(
                out.is_finite(),
                "variant {} (freq={}, q={}) produced {}",
                variant % 3, freq, q, out
            );
        }
    }

    /// clamp_unit always lands in [0, 1] for any float, including
    /// non-finite inputs.
    #[test]
    fn clamp_unit_always_in_range(v in prop::num::f32::ANY) {
        let clamped = clamp_unit(v);
        prop_assert!((0.0..=1.0).contains(&clamped));
    }

    /// The decay envelope stays within [0, 1] for any decay time.
    #[test]
    fn envelope_bounded(decay_s in 0.001f32..5.0f32) {
        let mut env = DecayEnvelope::new(48000.0, decay_s);
        env.trigger();
        for _ in 0..2000 {
            let level = env.advance();
            prop_assert!((0.0..=1.0).contains(&level));
        }
    }

    /// A smoothed parameter always ends up closer to its target than it
    /// started after a block of samples.
    #[test]
    fn smoothed_param_approaches_target(
        start in -1.0f32..1.0f32,
        target in -1.0f32..1.0f32,
        smoothing_ms in 1.0f32..100.0f32,
    ) {
        let mut p = SmoothedParam::new(start);
        p.set_sample_rate(48000.0);
        p.set_smoothing_ms(smoothing_ms);
        p.set_target(target);

        let before = (start - target).abs();
        for _ in 0..512 {
            p.advance();
        }
        let after = (p.current() - target).abs();
        prop_assert!(after <= before + 1e-6);
    }
}
