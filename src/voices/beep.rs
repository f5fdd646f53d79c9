//! Beep voice - parameterizable UI/test tone.
//!
//! A 25 ms sine at a caller-chosen frequency with a moderate decay. The
//! standard catalog emits one beep per keyboard row (800-1500 Hz) so each
//! row gets a distinct pitch.

use crate::dsp::{amplify, envelope, oscillator};

const DURATION: f32 = 0.025;
const DECAY_RATE: f32 = 60.0;
const LEVEL: f32 = 0.6;

/// Render a beep at `frequency` Hz. Deterministic: no noise component.
pub fn beep(frequency: f32, sample_rate: u32) -> Vec<f32> {
    let mut buffer = oscillator::sine(frequency, DURATION, sample_rate);
    envelope::apply_decay(&mut buffer, DECAY_RATE, sample_rate);
    amplify::normalize_peak(&mut buffer, LEVEL);
    buffer
}
