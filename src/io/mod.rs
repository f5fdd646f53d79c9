//! Serialization of rendered buffers to audio containers.

/// Canonical mono 16-bit PCM WAV encoding and file output.
pub mod wav;
