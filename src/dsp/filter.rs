use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
High-pass filtering for cymbal-type noise.

| variant | implementation                          | character              |
| ------- | --------------------------------------- | ---------------------- |
| Svf     | state-variable HPF, forward + backward  | steep, zero phase      |
| Diff    | y[n] = x[n] − x[n−1], iterated          | gentle 6 dB/oct tilt   |

Which one a voice uses is a configuration choice made in the catalog, not
a runtime fallback: the difference operator is always available, so noise
filtering can never fail. Running the SVF forward and then backward over
the buffer doubles the slope and cancels the phase distortion of each
pass (only possible offline, on a finite buffer).
*/

/// High-pass capability with two interchangeable implementations.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Highpass {
    /// State-variable high-pass at `cutoff_hz`, applied forward and
    /// backward for zero phase.
    Svf { cutoff_hz: f32 },
    /// First-difference operator applied `passes` times. More passes give
    /// stronger high-frequency emphasis.
    Diff { passes: u32 },
}

impl Highpass {
    /// Filter `samples` in place.
    pub fn apply(&self, samples: &mut [f32], sample_rate: u32) {
        match *self {
            Highpass::Svf { cutoff_hz } => {
                SvfHighpass::new(cutoff_hz, sample_rate as f32).process(samples);
                samples.reverse();
                SvfHighpass::new(cutoff_hz, sample_rate as f32).process(samples);
                samples.reverse();
            }
            Highpass::Diff { passes } => {
                for _ in 0..passes {
                    first_difference(samples);
                }
            }
        }
    }
}

/// Second-order state-variable filter, high-pass output only.
struct SvfHighpass {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory
    g: f32,
    k: f32,
}

impl SvfHighpass {
    fn new(cutoff_hz: f32, sample_rate: f32) -> Self {
        // Pre-warp the cutoff so the digital response matches the analog
        // prototype at that frequency.
        let wd = TAU * cutoff_hz;
        let wa = (2.0 * sample_rate) * (wd / (2.0 * sample_rate)).tan();
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            g: wa / (2.0 * sample_rate),
            k: 2.0, // no resonance
        }
    }

    #[inline]
    fn next_sample(&mut self, sample: f32) -> f32 {
        let h = 1.0 / (1.0 + self.g * (self.g + self.k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + self.g * v3);
        let v2 = self.ic2eq + self.g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        sample - self.k * v1 - v2
    }

    fn process(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }
}

/// y[n] = x[n] − x[n−1], with y[0] = 0 (the first sample has no
/// predecessor, so it is treated as its own).
fn first_difference(samples: &mut [f32]) {
    let mut prev = match samples.first() {
        Some(&first) => first,
        None => return,
    };
    for sample in samples.iter_mut() {
        let current = *sample;
        *sample = current - prev;
        prev = current;
    }
}
