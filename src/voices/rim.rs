//! Rim shot voice - the shortest sound in the catalog.
//!
//! 15 ms of 1.5 kHz sine under an extremely fast decay. Reads as a dry
//! "tick" with a bit more wood than the click.

use crate::dsp::{amplify, envelope, oscillator};

const FREQUENCY_HZ: f32 = 1500.0;
const DURATION: f32 = 0.015;
const DECAY_RATE: f32 = 150.0;
const LEVEL: f32 = 0.7;

/// Render the rim shot voice. Deterministic: no noise component.
pub fn rim(sample_rate: u32) -> Vec<f32> {
    let mut buffer = oscillator::sine(FREQUENCY_HZ, DURATION, sample_rate);
    envelope::apply_decay(&mut buffer, DECAY_RATE, sample_rate);
    amplify::normalize_peak(&mut buffer, LEVEL);
    buffer
}
