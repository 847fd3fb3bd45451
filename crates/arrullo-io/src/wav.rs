//! Mono WAV read/write via hound.
//!
//! Assets are loaded to mono f32 (multi-channel files are mixed down by
//! averaging); offline renders are written as 16-bit PCM.

use crate::Result;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Read a WAV file as mono f32 samples plus the file's sample rate.
///
/// Multi-channel files are mixed down by averaging channels; integer
/// formats are normalized to [-1, 1].
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, u32)> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            // i64 so 32-bit PCM does not wrap the shift to i32::MIN.
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    Ok((mono, spec.sample_rate))
}

/// Write mono f32 samples as a 16-bit PCM WAV file.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;

    let max_val = (1i32 << 15) as f32;
    for &sample in samples {
        let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
        writer.write_sample(int_sample)?;
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        let samples: Vec<f32> = (0..4800)
            .map(|i| (i as f32 * 0.05).sin() * 0.5)
            .collect();
        write_wav(&path, &samples, 48000).unwrap();

        let (loaded, sample_rate) = read_wav(&path).unwrap();
        assert_eq!(sample_rate, 48000);
        assert_eq!(loaded.len(), samples.len());
        for (a, b) in samples.iter().zip(&loaded) {
            assert!((a - b).abs() < 1e-3, "16-bit quantization bound: {a} vs {b}");
        }
    }

    #[test]
    fn clipping_input_stays_in_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hot.wav");
        write_wav(&path, &[2.0, -2.0, 0.0], 44100).unwrap();
        let (loaded, _) = read_wav(&path).unwrap();
        assert!(loaded.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn reads_32_bit_pcm_without_sign_flip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        let half = (i32::MAX / 2) as f32 / (1i64 << 31) as f32;
        writer.write_sample(i32::MAX / 2).unwrap();
        writer.write_sample(-(i32::MAX / 2)).unwrap();
        writer.write_sample(0i32).unwrap();
        writer.finalize().unwrap();

        let (loaded, _) = read_wav(&path).unwrap();
        assert!((loaded[0] - half).abs() < 1e-6, "got {}", loaded[0]);
        assert!((loaded[1] + half).abs() < 1e-6, "got {}", loaded[1]);
        assert_eq!(loaded[2], 0.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_wav("/nonexistent/definitely_missing.wav").is_err());
    }
}
