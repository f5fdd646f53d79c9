use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::num_samples;

/*
Frequency Sweeps and Phase Integration
======================================

A fixed-pitch sine is simple: sample n is sin(2π·f·n / sample_rate).

A swept sine is not. When the frequency f(t) changes continuously, you
CANNOT substitute it into the fixed-pitch formula:

    sin(2π · f(t) · t)        ← WRONG

That expression reinterprets the entire elapsed phase under the new
frequency every sample, producing audible phase jumps and chirp artifacts.
The instantaneous frequency is the DERIVATIVE of phase, so phase must be
the INTEGRAL of frequency:

    phase(t) = 2π · ∫ f(τ) dτ
    sample n = sin(phase)

Discretely, that integral is a running sum: each sample we emit
sin(phase) and then advance phase by 2π·f(t)/sample_rate. This is how
every kick-drum pitch drop in this crate is rendered.

Sweep Shapes
------------

  Exponential   f(t) = floor + (start − floor)·e^(−rate·t)
                Fast drop that levels off at a floor. The classic
                electronic kick: starts ~150 Hz, settles near 40 Hz.

  Linear        f(t) interpolates start → end over the buffer.
                Gentler, used for toms.

Both shapes are monotonically decreasing whenever start > end/floor, and
f(0) is exactly the configured start frequency.
*/

/// Continuous frequency trajectory for a swept oscillator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sweep {
    /// Exponential drop toward a floor: `floor + (start - floor)·e^(-rate·t)`.
    Exponential { start: f32, floor: f32, rate: f32 },
    /// Straight-line interpolation from `start` to `end` over the buffer.
    Linear { start: f32, end: f32 },
}

impl Sweep {
    /// Instantaneous frequency at time `t` seconds, for a buffer lasting
    /// `duration` seconds (the linear shape needs to know the endpoint).
    pub fn frequency_at(&self, t: f32, duration: f32) -> f32 {
        match *self {
            Sweep::Exponential { start, floor, rate } => {
                floor + (start - floor) * (-rate * t).exp()
            }
            Sweep::Linear { start, end } => {
                if duration <= 0.0 {
                    start
                } else {
                    start + (end - start) * (t / duration).min(1.0)
                }
            }
        }
    }
}

/// Render a fixed-frequency sine tone.
///
/// Sample n is exactly `sin(2π·f·n / sample_rate)`, so the buffer always
/// begins at a zero crossing.
pub fn sine(frequency: f32, duration: f32, sample_rate: u32) -> Vec<f32> {
    let n = num_samples(sample_rate, duration);
    let omega = TAU * frequency / sample_rate as f32;
    (0..n).map(|i| (omega * i as f32).sin()).collect()
}

/// Render a frequency-swept sine by integrating frequency into phase.
///
/// See the module notes: the sweep's instantaneous frequency is summed
/// into a running phase accumulator rather than substituted into the
/// fixed-pitch sine formula.
pub fn swept_sine(sweep: Sweep, duration: f32, sample_rate: u32) -> Vec<f32> {
    let n = num_samples(sample_rate, duration);
    let dt = 1.0 / sample_rate as f32;

    let mut out = Vec::with_capacity(n);
    let mut phase = 0.0f32;
    for i in 0..n {
        out.push(phase.sin());
        let t = i as f32 * dt;
        phase += TAU * sweep.frequency_at(t, duration) * dt;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: u32 = 48_000;

    #[test]
    fn sine_matches_closed_form() {
        let buffer = sine(440.0, 0.01, SAMPLE_RATE);

        let sample_index = 12;
        let expected = (TAU * 440.0 * sample_index as f32 / SAMPLE_RATE as f32).sin();
        let actual = buffer[sample_index];
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sine_starts_at_zero_crossing() {
        let buffer = sine(1000.0, 0.025, SAMPLE_RATE);
        assert_eq!(buffer[0], 0.0);
    }

    #[test]
    fn buffer_length_rounds_duration() {
        assert_eq!(sine(1000.0, 0.025, SAMPLE_RATE).len(), 1200);
    }

    #[test]
    fn exponential_sweep_starts_at_start_and_decreases() {
        let sweep = Sweep::Exponential {
            start: 150.0,
            floor: 40.0,
            rate: 20.0,
        };
        let duration = 0.3;

        assert!((sweep.frequency_at(0.0, duration) - 150.0).abs() < 1e-6);

        let mut prev = f32::INFINITY;
        for i in 0..100 {
            let f = sweep.frequency_at(i as f32 * duration / 100.0, duration);
            assert!(f < prev, "frequency must decrease monotonically");
            assert!(f >= 40.0, "frequency must stay above the floor");
            prev = f;
        }
    }

    #[test]
    fn linear_sweep_hits_both_endpoints() {
        let sweep = Sweep::Linear {
            start: 180.0,
            end: 120.0,
        };
        assert!((sweep.frequency_at(0.0, 0.4) - 180.0).abs() < 1e-6);
        assert!((sweep.frequency_at(0.4, 0.4) - 120.0).abs() < 1e-6);

        let mut prev = f32::INFINITY;
        for i in 0..=20 {
            let f = sweep.frequency_at(i as f32 * 0.4 / 20.0, 0.4);
            assert!(f <= prev);
            prev = f;
        }
    }

    #[test]
    fn swept_sine_is_deterministic() {
        let sweep = Sweep::Exponential {
            start: 150.0,
            floor: 40.0,
            rate: 20.0,
        };
        let a = swept_sine(sweep, 0.1, SAMPLE_RATE);
        let b = swept_sine(sweep, 0.1, SAMPLE_RATE);
        assert_eq!(a, b);
    }

    #[test]
    fn swept_sine_has_no_phase_jumps() {
        // With phase integration, consecutive samples can never differ by
        // more than the steepest slope of a sine at the highest frequency.
        let sweep = Sweep::Exponential {
            start: 150.0,
            floor: 40.0,
            rate: 20.0,
        };
        let buffer = swept_sine(sweep, 0.3, SAMPLE_RATE);
        let max_step = TAU * 150.0 / SAMPLE_RATE as f32;
        for pair in buffer.windows(2) {
            assert!((pair[1] - pair[0]).abs() <= max_step * 1.01);
        }
    }
}
