//! Low-level DSP primitives used by the percussive voices.
//!
//! These components stay focused on the signal math: oscillators and
//! frequency sweeps, noise sources, decay envelopes, high-pass filtering,
//! and peak normalization. The `voices` modules layer the per-sound
//! recipes on top.

/// Gain, signal multiplication, and peak normalization.
pub mod amplify;
/// Exponential decay envelope generator.
pub mod envelope;
/// High-pass filtering with two interchangeable implementations.
pub mod filter;
/// White noise sources driven by an injectable RNG.
pub mod noise;
/// Sine oscillator and phase-integrated frequency sweeps.
pub mod oscillator;

/// Number of samples in a buffer of `duration` seconds at `sample_rate`.
#[inline]
pub fn num_samples(sample_rate: u32, duration: f32) -> usize {
    (sample_rate as f32 * duration).round() as usize
}
