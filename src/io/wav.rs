use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/*
Canonical mono 16-bit PCM WAV layout (44-byte header, no extra chunks):

  offset  size  field
  ------  ----  -----------------------------------
       0     4  "RIFF"
       4     4  u32le  total file size − 8
       8     4  "WAVE"
      12     4  "fmt "
      16     4  u32le  16 (fmt chunk size)
      20     2  u16le  1  (uncompressed PCM)
      22     2  u16le  1  (channels)
      24     4  u32le  sample rate
      28     4  u32le  byte rate = sample_rate · 2
      32     2  u16le  2  (block align)
      34     2  u16le  16 (bits per sample)
      36     4  "data"
      40     4  u32le  data byte count = 2 · sample count
      44     …  little-endian i16 samples

Total file size is exactly 44 + 2·N, no trailing padding.
*/

/// Size of the canonical header preceding the sample data.
pub const HEADER_LEN: usize = 44;

/// Failure writing a WAV file to disk.
#[derive(Debug, Error)]
pub enum WavError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Quantize normalized samples to signed 16-bit PCM.
///
/// Out-of-range input is clipped before scaling; the caller should have
/// normalized already, but wraparound from a stray over-unity sample
/// would be far worse than a clipped peak.
pub fn quantize(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0).round() as i16)
        .collect()
}

/// Encode normalized samples as a complete mono 16-bit WAV byte sequence.
pub fn encode(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let pcm = quantize(samples);

    let channels = 1u16;
    let bits_per_sample = 16u16;
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = sample_rate * u32::from(block_align);
    let data_size = (pcm.len() * 2) as u32;

    let mut bytes = Vec::with_capacity(HEADER_LEN + data_size as usize);

    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_size).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM format tag
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&bits_per_sample.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_size.to_le_bytes());
    for sample in pcm {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    bytes
}

/// Encode `samples` and write them to `path`, creating parent directories
/// as needed and overwriting any existing file. Returns the byte count.
///
/// The bytes are fully assembled before the write, so a failure leaves
/// either the previous file or nothing, never a truncated header.
pub fn write(path: &Path, samples: &[f32], sample_rate: u32) -> Result<u64, WavError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|source| WavError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    let bytes = encode(samples, sample_rate);
    fs::write(path, &bytes).map_err(|source| WavError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(bytes.len() as u64)
}
