//! White noise sources.
//!
//! Noise is the raw material for the unpitched voices (hi-hats, claps,
//! crashes, the snare rattle). The generator is passed in by the caller so
//! tests can pin a seeded `Pcg32` while the CLI uses an OS-seeded
//! generator; noise voices are expected to vary run to run.

use rand::Rng;

/// Fill a fresh buffer with uniform white noise in [-1, 1].
pub fn white<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.random_range(-1.0..=1.0f32)).collect()
}
