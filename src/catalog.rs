//! The fixed sound library and its dispatch.
//!
//! Every sound the generator knows how to make is a [`SoundKind`]; the
//! [`standard`] catalog pairs each kind with its output filename. Per-kind
//! generation shares one pipeline (carrier, envelope, normalize), so the
//! kinds are small parameterized strategies dispatched here rather than a
//! type hierarchy.
//!
//! Each entry is normalized to its own target level independently of the
//! others; relative loudness across the catalog is tuned by those per-kind
//! levels, not guaranteed by the pipeline.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::filter::Highpass;
use crate::voices;

/// Cutoff of the zero-phase high-pass applied to hi-hat noise (Hz).
const CYMBAL_CUTOFF_HZ: f32 = 8000.0;

/// Tag selecting one percussive generator, with its free parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoundKind {
    Click,
    Kick,
    Snare,
    Hihat,
    Openhat,
    Clap,
    Crash,
    Rim,
    Tom,
    Beep { frequency: f32 },
}

impl SoundKind {
    /// Render this sound into a normalized buffer at `sample_rate`.
    ///
    /// The RNG is only consulted by noise-based kinds; deterministic kinds
    /// produce bit-identical buffers on every call.
    pub fn render<R: Rng + ?Sized>(&self, sample_rate: u32, rng: &mut R) -> Vec<f32> {
        let cymbal_filter = Highpass::Svf {
            cutoff_hz: CYMBAL_CUTOFF_HZ,
        };

        match *self {
            SoundKind::Click => voices::click(sample_rate),
            SoundKind::Kick => voices::kick(sample_rate),
            SoundKind::Snare => voices::snare(sample_rate, rng),
            SoundKind::Hihat => voices::hihat(sample_rate, cymbal_filter, rng),
            SoundKind::Openhat => voices::openhat(sample_rate, cymbal_filter, rng),
            SoundKind::Clap => voices::clap(sample_rate, rng),
            SoundKind::Crash => voices::crash(sample_rate, rng),
            SoundKind::Rim => voices::rim(sample_rate),
            SoundKind::Tom => voices::tom(sample_rate),
            SoundKind::Beep { frequency } => voices::beep(frequency, sample_rate),
        }
    }

    /// True for purely tonal kinds whose output never touches the RNG.
    pub fn is_deterministic(&self) -> bool {
        matches!(
            self,
            SoundKind::Click
                | SoundKind::Kick
                | SoundKind::Rim
                | SoundKind::Tom
                | SoundKind::Beep { .. }
        )
    }
}

/// One catalog entry: output name plus generator parameters.
#[derive(Debug, Clone, Copy)]
pub struct SoundSpec {
    pub name: &'static str,
    pub kind: SoundKind,
}

/// The standard catalog: the drum kit plus one UI beep per keyboard row.
pub fn standard() -> Vec<SoundSpec> {
    vec![
        SoundSpec {
            name: "click",
            kind: SoundKind::Click,
        },
        SoundSpec {
            name: "kick",
            kind: SoundKind::Kick,
        },
        SoundSpec {
            name: "snare",
            kind: SoundKind::Snare,
        },
        SoundSpec {
            name: "hihat",
            kind: SoundKind::Hihat,
        },
        SoundSpec {
            name: "hihat_open",
            kind: SoundKind::Openhat,
        },
        SoundSpec {
            name: "clap",
            kind: SoundKind::Clap,
        },
        SoundSpec {
            name: "crash",
            kind: SoundKind::Crash,
        },
        SoundSpec {
            name: "rim",
            kind: SoundKind::Rim,
        },
        SoundSpec {
            name: "tom",
            kind: SoundKind::Tom,
        },
        SoundSpec {
            name: "beep1",
            kind: SoundKind::Beep { frequency: 800.0 },
        },
        SoundSpec {
            name: "beep2",
            kind: SoundKind::Beep { frequency: 1000.0 },
        },
        SoundSpec {
            name: "beep3",
            kind: SoundKind::Beep { frequency: 1200.0 },
        },
        SoundSpec {
            name: "beep4",
            kind: SoundKind::Beep { frequency: 1500.0 },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let catalog = standard();
        for (i, a) in catalog.iter().enumerate() {
            for b in &catalog[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn deterministic_flag_matches_kind() {
        assert!(SoundKind::Click.is_deterministic());
        assert!(SoundKind::Beep { frequency: 440.0 }.is_deterministic());
        assert!(!SoundKind::Snare.is_deterministic());
        assert!(!SoundKind::Crash.is_deterministic());
    }
}
