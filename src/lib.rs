pub mod catalog; // The fixed sound library and its dispatch
pub mod dsp;
pub mod io;
pub mod voices; // Per-kind percussive generators

/// Sample rate used by the standard catalog (Hz).
pub const SAMPLE_RATE: u32 = 48_000;
