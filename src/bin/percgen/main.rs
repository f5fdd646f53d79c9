//! percgen - render the standard sample catalog into `samples/`.
//!
//! Run with: cargo run
//!
//! One WAV file per catalog entry, mono 16-bit PCM at 48 kHz. Tonal
//! sounds come out identical on every run; noise-based sounds vary.

use std::path::Path;

use color_eyre::eyre::eyre;
use percgen::{catalog, io::wav, SAMPLE_RATE};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let out_dir = Path::new("samples");
    let mut rng = rand::rng();

    let mut written = 0usize;
    let mut failed = 0usize;
    for spec in catalog::standard() {
        let samples = spec.kind.render(SAMPLE_RATE, &mut rng);
        let path = out_dir.join(format!("{}.wav", spec.name));

        match wav::write(&path, &samples, SAMPLE_RATE) {
            Ok(bytes) => {
                println!("{} ({bytes} bytes)", path.display());
                written += 1;
            }
            Err(err) => {
                eprintln!("skipping {}: {err}", spec.name);
                failed += 1;
            }
        }
    }

    println!("{written} sample(s) written to {}", out_dir.display());
    if failed > 0 {
        return Err(eyre!("{failed} sample(s) failed to write"));
    }
    Ok(())
}
