//! Hi-hat voice (open).
//!
//! Same filtered-noise carrier as the closed hat, but with a ten-times
//! slower decay so the cymbal is heard ringing.

use rand::Rng;

use crate::dsp::filter::Highpass;
use crate::voices::hihat::cymbal;

const DURATION: f32 = 0.3;
const DECAY_RATE: f32 = 3.0;
const LEVEL: f32 = 0.5;

/// Render the open hi-hat voice.
pub fn openhat<R: Rng + ?Sized>(sample_rate: u32, filter: Highpass, rng: &mut R) -> Vec<f32> {
    cymbal(DURATION, DECAY_RATE, LEVEL, filter, sample_rate, rng)
}
