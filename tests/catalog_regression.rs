use std::fs;
use std::path::PathBuf;

use percgen::{catalog, io::wav, voices, SAMPLE_RATE};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("percgen_test_{}", std::process::id()))
        .join(name)
}

#[test]
fn every_catalog_entry_renders_normalized_audio() {
    let mut rng = Pcg32::seed_from_u64(0xC0FFEE);

    for spec in catalog::standard() {
        let samples = spec.kind.render(SAMPLE_RATE, &mut rng);

        assert!(!samples.is_empty(), "{}: empty buffer", spec.name);
        assert!(
            samples.iter().all(|s| (-1.0..=1.0).contains(s)),
            "{}: sample out of range",
            spec.name
        );
        assert!(
            samples.iter().any(|s| s.abs() > 0.1),
            "{}: buffer is effectively silent",
            spec.name
        );
    }
}

#[test]
fn tonal_kinds_are_bit_identical_across_renders() {
    for spec in catalog::standard() {
        if !spec.kind.is_deterministic() {
            continue;
        }
        // Different RNGs on purpose: tonal kinds must not consult them.
        let a = spec.kind.render(SAMPLE_RATE, &mut Pcg32::seed_from_u64(1));
        let b = spec.kind.render(SAMPLE_RATE, &mut Pcg32::seed_from_u64(2));
        assert_eq!(a, b, "{}: tonal render must be reproducible", spec.name);
    }
}

#[test]
fn noise_kinds_vary_with_the_rng() {
    let a = voices::crash(SAMPLE_RATE, &mut Pcg32::seed_from_u64(1));
    let b = voices::crash(SAMPLE_RATE, &mut Pcg32::seed_from_u64(2));
    assert_ne!(a, b);
}

#[test]
fn beep_scenario_25ms_1khz() {
    // 25 ms at 48 kHz: 1200 samples, 44 + 2400 bytes on disk.
    let samples = voices::beep(1000.0, SAMPLE_RATE);
    assert_eq!(samples.len(), 1200);

    let bytes = wav::encode(&samples, SAMPLE_RATE);
    assert_eq!(bytes.len(), 2444);

    // The sine starts at a zero crossing.
    assert_eq!(samples[0], 0.0);

    // The envelope decays: the loudest moment near the start beats the
    // loudest moment around the midpoint (windows dodge zero crossings).
    let early_peak = samples[..100].iter().fold(0.0f32, |m, s| m.max(s.abs()));
    let mid_peak = samples[600..700].iter().fold(0.0f32, |m, s| m.max(s.abs()));
    assert!(mid_peak < early_peak);
}

#[test]
fn written_file_round_trips_through_a_wav_decoder() {
    let mut rng = Pcg32::seed_from_u64(99);
    let samples = voices::hihat(
        SAMPLE_RATE,
        percgen::dsp::filter::Highpass::Svf { cutoff_hz: 8000.0 },
        &mut rng,
    );

    let path = temp_path("hihat.wav");
    let bytes = wav::write(&path, &samples, SAMPLE_RATE).expect("write should succeed");
    assert_eq!(bytes as usize, wav::HEADER_LEN + 2 * samples.len());

    let reader = hound::WavReader::open(&path).expect("decoder should accept the file");
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_rate, SAMPLE_RATE);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.len() as usize, samples.len());

    let _ = fs::remove_file(&path);
}

#[test]
fn write_overwrites_existing_files() {
    let path = temp_path("overwrite.wav");

    let long = voices::tom(SAMPLE_RATE);
    let short = voices::rim(SAMPLE_RATE);

    wav::write(&path, &long, SAMPLE_RATE).expect("first write");
    wav::write(&path, &short, SAMPLE_RATE).expect("second write");

    let on_disk = fs::metadata(&path).expect("file exists").len();
    assert_eq!(on_disk as usize, wav::HEADER_LEN + 2 * short.len());

    let _ = fs::remove_file(&path);
}
