//! Small math helpers shared by the DSP primitives.

/// Clamp a value into the unit interval [0.0, 1.0].
///
/// Non-finite inputs collapse to 0.0 rather than propagating through
/// gain stages.
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Flush denormal values to zero.
///
/// Long-running IIR filters decay into the denormal range where some
/// CPUs fall off the fast path; ambient scenes run for hours, so every
/// feedback state goes through this.
#[inline]
pub fn flush_denormal(value: f32) -> f32 {
    if value.abs() < 1e-20 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_unit_bounds() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(0.3), 0.3);
        assert_eq!(clamp_unit(1.7), 1.0);
    }

    #[test]
    fn clamp_unit_non_finite() {
        assert_eq!(clamp_unit(f32::NAN), 0.0);
        assert_eq!(clamp_unit(f32::INFINITY), 0.0);
        assert_eq!(clamp_unit(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn denormals_flushed() {
        assert_eq!(flush_denormal(1e-30), 0.0);
        assert_eq!(flush_denormal(0.5), 0.5);
        assert_eq!(flush_denormal(-1e-30), 0.0);
    }
}
