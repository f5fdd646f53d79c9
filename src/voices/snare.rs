//! Snare drum voice.
//!
//! A synthesized snare combining a tonal body with noise for the "snare"
//! rattle. Real snares have wires stretched across the bottom head that
//! buzz when the drum is struck - the noise component simulates this.
//!
//! # How It Works
//!
//! 1. 200 Hz sine provides the tonal body (the drum head)
//! 2. White noise provides the rattle
//! 3. Each gets its own decay envelope (the body rings slightly shorter)
//! 4. Mixed 60% body / 40% rattle
//!
//! # Variations
//!
//! - More noise = trashy, lo-fi snare
//! - Less noise = more "tom" like

use rand::Rng;

use crate::dsp::{amplify, envelope, noise, num_samples, oscillator};

const TONE_HZ: f32 = 200.0;
const DURATION: f32 = 0.2;
const TONE_DECAY_RATE: f32 = 10.0;
const NOISE_DECAY_RATE: f32 = 8.0;
const TONE_WEIGHT: f32 = 0.6;
const NOISE_WEIGHT: f32 = 0.4;
const LEVEL: f32 = 0.7;

/// Render the snare voice. The rattle varies with the RNG.
pub fn snare<R: Rng + ?Sized>(sample_rate: u32, rng: &mut R) -> Vec<f32> {
    let mut body = oscillator::sine(TONE_HZ, DURATION, sample_rate);
    envelope::apply_decay(&mut body, TONE_DECAY_RATE, sample_rate);

    let mut rattle = noise::white(rng, num_samples(sample_rate, DURATION));
    envelope::apply_decay(&mut rattle, NOISE_DECAY_RATE, sample_rate);

    let mut buffer = amplify::mix(&body, TONE_WEIGHT, &rattle, NOISE_WEIGHT);
    amplify::normalize_peak(&mut buffer, LEVEL);
    buffer
}
