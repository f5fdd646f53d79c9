//! Hi-hat voice (closed).
//!
//! A tight, short burst of high-passed noise. The filter choice is passed
//! in from the catalog: the zero-phase SVF gives the cleanest "tss", the
//! iterated first-difference is a cheaper approximation with the same
//! bright character.

use rand::Rng;

use crate::dsp::filter::Highpass;
use crate::dsp::{amplify, envelope, noise, num_samples};

const DURATION: f32 = 0.1;
const DECAY_RATE: f32 = 30.0;
const LEVEL: f32 = 0.5;

/// Render the closed hi-hat voice.
pub fn hihat<R: Rng + ?Sized>(sample_rate: u32, filter: Highpass, rng: &mut R) -> Vec<f32> {
    cymbal(DURATION, DECAY_RATE, LEVEL, filter, sample_rate, rng)
}

/// Shared carrier for the cymbal family: filtered noise under a decay
/// envelope, peak-normalized.
pub(crate) fn cymbal<R: Rng + ?Sized>(
    duration: f32,
    decay_rate: f32,
    level: f32,
    filter: Highpass,
    sample_rate: u32,
    rng: &mut R,
) -> Vec<f32> {
    let mut buffer = noise::white(rng, num_samples(sample_rate, duration));
    filter.apply(&mut buffer, sample_rate);
    envelope::apply_decay(&mut buffer, decay_rate, sample_rate);
    amplify::normalize_peak(&mut buffer, level);
    buffer
}
