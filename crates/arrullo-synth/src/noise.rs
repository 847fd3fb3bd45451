//! Noise colors: white, pink, and brown.
//!
//! White noise is raw uniform samples. Pink (~1/f) runs white noise
//! through a bank of six leaky integrators with Voss-McCartney-style
//! weights; brown (~1/f²) is a single leaky integrator. Pink and brown
//! are not guaranteed to stay strictly inside [-1, 1] — the scenes'
//! gain stages attenuate well below unity anyway.

use arrullo_core::{Source, XorShift32};

/// Uniform white noise in [-1.0, 1.0].
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    rng: XorShift32,
}

impl WhiteNoise {
    /// Create a white noise source from a seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: XorShift32::new(seed),
        }
    }
}

impl Source for WhiteNoise {
    #[inline]
    fn next_sample(&mut self) -> f32 {
        self.rng.next_bipolar()
    }

    fn set_sample_rate(&mut self, _sample_rate: f32) {}

    fn reset(&mut self) {}
}

/// Pink (1/f) noise.
///
/// Six leaky integrators of white noise, summed with fixed weights and a
/// direct white term, then scaled by 0.11 to bring the amplitude near
/// the [-1, 1] range.
#[derive(Debug, Clone)]
pub struct PinkNoise {
    rng: XorShift32,
    rows: [f32; 6],
    direct: f32,
}

/// Output normalization for the integrator sum.
const PINK_SCALE: f32 = 0.11;

impl PinkNoise {
    /// Create a pink noise source from a seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: XorShift32::new(seed),
            rows: [0.0; 6],
            direct: 0.0,
        }
    }
}

impl Source for PinkNoise {
    #[inline]
    fn next_sample(&mut self) -> f32 {
        let white = self.rng.next_bipolar();

        self.rows[0] = 0.99886 * self.rows[0] + white * 0.0555179;
        self.rows[1] = 0.99332 * self.rows[1] + white * 0.0750759;
        self.rows[2] = 0.96900 * self.rows[2] + white * 0.1538520;
        self.rows[3] = 0.86650 * self.rows[3] + white * 0.3104856;
        self.rows[4] = 0.55000 * self.rows[4] + white * 0.5329522;
        self.rows[5] = -0.7616 * self.rows[5] - white * 0.0168980;

        let sum: f32 = self.rows.iter().sum::<f32>() + self.direct + white * 0.5362;
        self.direct = white * 0.115926;

        sum * PINK_SCALE
    }

    fn set_sample_rate(&mut self, _sample_rate: f32) {}

    fn reset(&mut self) {
        self.rows = [0.0; 6];
        self.direct = 0.0;
    }
}

/// Brown (1/f²) noise: a leaky integrator over white noise.
///
/// `state = (state + 0.02 * white) / 1.02`, output scaled by 3.5.
#[derive(Debug, Clone)]
pub struct BrownNoise {
    rng: XorShift32,
    state: f32,
}

/// Post-integration amplitude makeup.
const BROWN_SCALE: f32 = 3.5;

impl BrownNoise {
    /// Create a brown noise source from a seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: XorShift32::new(seed),
            state: 0.0,
        }
    }
}

impl Source for BrownNoise {
    #[inline]
    fn next_sample(&mut self) -> f32 {
        let white = self.rng.next_bipolar();
        self.state = (self.state + 0.02 * white) / 1.02;
        self.state * BROWN_SCALE
    }

    fn set_sample_rate(&mut self, _sample_rate: f32) {}

    fn reset(&mut self) {
        self.state = 0.0;
    }
}

/// Generate a buffer of white noise samples.
pub fn white_noise(length: usize, seed: u32) -> Vec<f32> {
    let mut source = WhiteNoise::new(seed);
    let mut buffer = vec![0.0; length];
    source.fill(&mut buffer);
    buffer
}

/// Generate a buffer of pink noise samples.
pub fn pink_noise(length: usize, seed: u32) -> Vec<f32> {
    let mut source = PinkNoise::new(seed);
    let mut buffer = vec![0.0; length];
    source.fill(&mut buffer);
    buffer
}

/// Generate a buffer of brown noise samples.
pub fn brown_noise(length: usize, seed: u32) -> Vec<f32> {
    let mut source = BrownNoise::new(seed);
    let mut buffer = vec![0.0; length];
    source.fill(&mut buffer);
    buffer
}
