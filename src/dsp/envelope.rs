/*
Exponential Decay Envelope
==========================

Every sound in the catalog is shaped by the same envelope:

    level(t) = e^(−rate · t)

Acoustic percussion decays exponentially, so this single curve covers the
whole kit. The only knob is `rate`, in units of 1/seconds:

    rate   2    crash wash, still audible after a second
    rate  30    closed hi-hat "tss"
    rate 150    rim shot, gone in ~15 ms

A higher rate means a faster decay and therefore a SHORTER perceived
sound, even when two buffers have the same sample count. level(0) is
always exactly 1.0 and the curve is strictly decreasing; it never reaches
zero, which is fine because the buffer itself ends.
*/

/// Multiply `samples` in place by `e^(−rate·t)`, t taken from the index.
pub fn apply_decay(samples: &mut [f32], rate: f32, sample_rate: u32) {
    let dt = 1.0 / sample_rate as f32;
    for (i, sample) in samples.iter_mut().enumerate() {
        *sample *= (-rate * i as f32 * dt).exp();
    }
}

/// Render the envelope itself: `e^(−rate·t)` for `len` samples.
pub fn decay(rate: f32, len: usize, sample_rate: u32) -> Vec<f32> {
    let dt = 1.0 / sample_rate as f32;
    (0..len).map(|i| (-rate * i as f32 * dt).exp()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: u32 = 48_000;

    #[test]
    fn starts_at_unity() {
        let env = decay(30.0, 100, SAMPLE_RATE);
        assert_eq!(env[0], 1.0);
    }

    #[test]
    fn strictly_decreasing() {
        let env = decay(30.0, 4800, SAMPLE_RATE);
        for pair in env.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn higher_rate_decays_faster() {
        let slow = decay(3.0, 4800, SAMPLE_RATE);
        let fast = decay(30.0, 4800, SAMPLE_RATE);
        assert!(fast[4799] < slow[4799]);
    }

    #[test]
    fn apply_matches_rendered_envelope() {
        let mut samples = vec![1.0f32; 256];
        apply_decay(&mut samples, 10.0, SAMPLE_RATE);
        let env = decay(10.0, 256, SAMPLE_RATE);
        assert_eq!(samples, env);
    }
}
