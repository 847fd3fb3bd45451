//! Lofi ambience: sparse kick and a cycling pentatonic melody.
//!
//! A low sine burst with a fast decay every 0.9 s stands in for the
//! beat; a triangle note every 1.6 s, phase-offset from the kick and
//! stepping cyclically through a five-note minor pentatonic scale,
//! carries the melody.

use arrullo_core::{DecayEnvelope, Source};

use crate::oscillator::{Oscillator, Waveform};
use crate::timer::FixedInterval;

const KICK_PERIOD_S: f32 = 0.9;
const KICK_HZ: f32 = 55.0;
const KICK_DECAY_S: f32 = 0.12;
const KICK_GAIN: f32 = 0.4;

const NOTE_PERIOD_S: f32 = 1.6;
const NOTE_DECAY_S: f32 = 0.8;
const NOTE_GAIN: f32 = 0.12;

/// A minor pentatonic, one octave above the kick register.
const SCALE_HZ: [f32; 5] = [220.0, 261.63, 293.66, 329.63, 392.0];

/// Lofi scene.
#[derive(Debug, Clone)]
pub struct Lofi {
    kick_osc: Oscillator,
    kick_envelope: DecayEnvelope,
    kick_timer: FixedInterval,

    note_osc: Oscillator,
    note_envelope: DecayEnvelope,
    note_timer: FixedInterval,
    note_index: usize,
}

impl Lofi {
    /// Build the scene. The seed is unused — lofi is fully periodic —
    /// but kept for a uniform scene constructor signature.
    pub fn new(sample_rate: f32, _seed: u32) -> Self {
        Self {
            kick_osc: Oscillator::new(sample_rate, KICK_HZ, Waveform::Sine),
            kick_envelope: DecayEnvelope::new(sample_rate, KICK_DECAY_S),
            kick_timer: FixedInterval::new(sample_rate, KICK_PERIOD_S),
            note_osc: Oscillator::new(sample_rate, SCALE_HZ[0], Waveform::Triangle),
            note_envelope: DecayEnvelope::new(sample_rate, NOTE_DECAY_S),
            note_timer: FixedInterval::new(sample_rate, NOTE_PERIOD_S)
                .with_phase_offset(NOTE_PERIOD_S * 0.5),
            note_index: 0,
        }
    }

    /// Number of generator voices owned by the scene.
    pub fn source_count(&self) -> usize {
        2
    }

    /// Number of event timers owned by the scene.
    pub fn timer_count(&self) -> usize {
        2
    }
}

impl Source for Lofi {
    #[inline]
    fn next_sample(&mut self) -> f32 {
        if self.kick_timer.tick() {
            self.kick_osc.reset();
            self.kick_envelope.trigger();
        }
        if self.note_timer.tick() {
            self.note_osc.set_frequency(SCALE_HZ[self.note_index]);
            self.note_osc.reset();
            self.note_envelope.trigger();
            self.note_index = (self.note_index + 1) % SCALE_HZ.len();
        }

        let mut out = 0.0;
        if self.kick_envelope.is_active() {
            out += self.kick_osc.next_sample() * self.kick_envelope.advance() * KICK_GAIN;
        }
        if self.note_envelope.is_active() {
            out += self.note_osc.next_sample() * self.note_envelope.advance() * NOTE_GAIN;
        }
        out
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.kick_osc.set_sample_rate(sample_rate);
        self.kick_envelope.set_sample_rate(sample_rate);
        self.kick_timer.set_sample_rate(sample_rate);
        self.note_osc.set_sample_rate(sample_rate);
        self.note_envelope.set_sample_rate(sample_rate);
        self.note_timer.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.kick_osc.reset();
        self.kick_envelope.reset();
        self.note_osc.reset();
        self.note_envelope.reset();
        self.note_index = 0;
    }
}
