//! Clap voice - layered noise bursts.
//!
//! A hand clap is not one impact but several, a few milliseconds apart,
//! as palms and fingers land at slightly different times.
//!
//! # How It Works
//!
//! 1. Start from a silent buffer
//! 2. Overlay three ~30 ms noise bursts at 0 / 10 / 20 ms offsets
//! 3. Each burst carries its own steep decay envelope
//!
//! There is no whole-buffer envelope; the staggered burst envelopes are
//! the clap's shape.

use rand::Rng;

use crate::dsp::{amplify, envelope, noise, num_samples};

const DURATION: f32 = 0.1;
const BURST_OFFSETS: [f32; 3] = [0.0, 0.01, 0.02];
const BURST_DURATION: f32 = 0.03;
const BURST_DECAY_RATE: f32 = 50.0;
const LEVEL: f32 = 0.8;

/// Render the clap voice. The bursts vary with the RNG.
pub fn clap<R: Rng + ?Sized>(sample_rate: u32, rng: &mut R) -> Vec<f32> {
    let len = num_samples(sample_rate, DURATION);
    let burst_len = num_samples(sample_rate, BURST_DURATION);
    let mut buffer = vec![0.0f32; len];

    for &offset in &BURST_OFFSETS {
        let start = (offset * sample_rate as f32).round() as usize;
        if start + burst_len > len {
            continue;
        }

        let mut burst = noise::white(rng, burst_len);
        envelope::apply_decay(&mut burst, BURST_DECAY_RATE, sample_rate);

        for (slot, sample) in buffer[start..start + burst_len].iter_mut().zip(burst) {
            *slot += sample;
        }
    }

    amplify::normalize_peak(&mut buffer, LEVEL);
    buffer
}
