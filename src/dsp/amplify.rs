//! Gain, signal multiplication, and peak normalization.

/// Multiply a signal by a constant gain factor (in-place).
#[inline]
pub fn apply_gain(signal: &mut [f32], gain: f32) {
    for sample in signal.iter_mut() {
        *sample *= gain;
    }
}

/// Multiply a signal by a modulator sample-by-sample (in-place).
///
/// This is how a tonal body and a noise rattle get their independent
/// envelopes before being mixed.
#[inline]
pub fn multiply_in_place(signal: &mut [f32], modulator: &[f32]) {
    debug_assert_eq!(signal.len(), modulator.len());

    for (s, &m) in signal.iter_mut().zip(modulator.iter()) {
        *s *= m;
    }
}

/// Weighted sum of two equal-length signals into a fresh buffer.
pub fn mix(a: &[f32], weight_a: f32, b: &[f32], weight_b: f32) -> Vec<f32> {
    debug_assert_eq!(a.len(), b.len());

    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| weight_a * x + weight_b * y)
        .collect()
}

/// Scale `samples` so the peak absolute value equals `target`.
///
/// This runs after the envelope, so the final buffer never exceeds
/// `target` no matter how the noise variance came out. A silent buffer is
/// left untouched rather than dividing by zero.
pub fn normalize_peak(samples: &mut [f32], target: f32) {
    let peak = samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
    if peak <= f32::EPSILON {
        return;
    }
    apply_gain(samples, target / peak);
}
