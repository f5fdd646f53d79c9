//! Crash cymbal voice.
//!
//! The longest sound in the catalog: 1.5 seconds of bright noise washing
//! out slowly. Three first-difference passes tilt the noise spectrum hard
//! toward the highs for the metallic character.

use rand::Rng;

use crate::dsp::filter::Highpass;
use crate::voices::hihat::cymbal;

const DURATION: f32 = 1.5;
const DECAY_RATE: f32 = 2.0;
const LEVEL: f32 = 0.6;
const FILTER: Highpass = Highpass::Diff { passes: 3 };

/// Render the crash voice.
pub fn crash<R: Rng + ?Sized>(sample_rate: u32, rng: &mut R) -> Vec<f32> {
    cymbal(DURATION, DECAY_RATE, LEVEL, FILTER, sample_rate, rng)
}
