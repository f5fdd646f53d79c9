//! Click voice - the default hit sound for rhythm input.
//!
//! A very short burst of high-frequency sine. At 30 ms with a steep decay
//! it reads as a tick rather than a tone, which keeps perceived input
//! latency low.

use crate::dsp::{amplify, envelope, oscillator};

const FREQUENCY_HZ: f32 = 2000.0;
const DURATION: f32 = 0.03;
const DECAY_RATE: f32 = 100.0;
const LEVEL: f32 = 0.8;

/// Render the click voice. Deterministic: no noise component.
pub fn click(sample_rate: u32) -> Vec<f32> {
    let mut buffer = oscillator::sine(FREQUENCY_HZ, DURATION, sample_rate);
    envelope::apply_decay(&mut buffer, DECAY_RATE, sample_rate);
    amplify::normalize_peak(&mut buffer, LEVEL);
    buffer
}
