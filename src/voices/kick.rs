//! Kick drum voice.
//!
//! A classic synthesized kick: a sine wave whose pitch starts high and
//! drops fast toward the fundamental, creating the characteristic
//! "punch" of an electronic kick.
//!
//! # How It Works
//!
//! 1. Exponential pitch sweep: starts at 150 Hz, settles toward 40 Hz
//! 2. The sweep is phase-integrated (see `dsp::oscillator`)
//! 3. Quick exponential amplitude decay
//!
//! # Variations
//!
//! - Slower amplitude decay = boomy 808-style kick
//! - Higher start pitch = more "click" in the attack

use crate::dsp::oscillator::Sweep;
use crate::dsp::{amplify, envelope, oscillator};

const SWEEP: Sweep = Sweep::Exponential {
    start: 150.0,
    floor: 40.0,
    rate: 20.0,
};
const DURATION: f32 = 0.3;
const DECAY_RATE: f32 = 25.0;
const LEVEL: f32 = 0.8;

/// Render the kick voice. Deterministic: no noise component.
pub fn kick(sample_rate: u32) -> Vec<f32> {
    let mut buffer = oscillator::swept_sine(SWEEP, DURATION, sample_rate);
    envelope::apply_decay(&mut buffer, DECAY_RATE, sample_rate);
    amplify::normalize_peak(&mut buffer, LEVEL);
    buffer
}
