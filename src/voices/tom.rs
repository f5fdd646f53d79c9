//! Tom drum voice.
//!
//! Like the kick but higher and gentler: a linear pitch glide from
//! 180 Hz down to 120 Hz over 400 ms with a medium decay.

use crate::dsp::oscillator::Sweep;
use crate::dsp::{amplify, envelope, oscillator};

const SWEEP: Sweep = Sweep::Linear {
    start: 180.0,
    end: 120.0,
};
const DURATION: f32 = 0.4;
const DECAY_RATE: f32 = 7.0;
const LEVEL: f32 = 0.8;

/// Render the tom voice. Deterministic: no noise component.
pub fn tom(sample_rate: u32) -> Vec<f32> {
    let mut buffer = oscillator::swept_sine(SWEEP, DURATION, sample_rate);
    envelope::apply_decay(&mut buffer, DECAY_RATE, sample_rate);
    amplify::normalize_peak(&mut buffer, LEVEL);
    buffer
}
