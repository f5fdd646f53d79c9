//! Pre-built percussive voices.
//!
//! Each voice is a pure function from parameters to a finite, normalized
//! sample buffer. They all share the same pipeline: build a carrier
//! (sine, swept sine, or filtered noise), shape it with an exponential
//! decay envelope, then peak-normalize to the voice's target level.
//!
//! Noise-based voices take the RNG as an argument so callers control
//! reproducibility; tonal voices are bit-identical on every call.
//!
//! # Example
//!
//! ```ignore
//! use percgen::voices;
//!
//! let kick = voices::kick(48_000);
//! let snare = voices::snare(48_000, &mut rand::rng());
//! ```

mod beep;
mod clap;
mod click;
mod crash;
mod hihat;
mod kick;
mod openhat;
mod rim;
mod snare;
mod tom;

pub use beep::beep;
pub use clap::clap;
pub use click::click;
pub use crash::crash;
pub use hihat::hihat;
pub use kick::kick;
pub use openhat::openhat;
pub use rim::rim;
pub use snare::snare;
pub use tom::tom;
