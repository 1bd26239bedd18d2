//! Audio decode and preprocessing for the whisper backend.
//!
//! whisper.cpp consumes 16 kHz mono f32 PCM, so WAV input of any sample
//! format, channel count, or rate is converted here.

use anyhow::{Context, Result};

/// Sample rate expected by the whisper encoder.
pub const WHISPER_SAMPLE_RATE: u32 = 16_000;

/// Decode WAV bytes into 16 kHz mono f32 samples in `[-1.0, 1.0]`.
pub fn pcm_mono_16k(wav_bytes: &[u8]) -> Result<Vec<f32>> {
    let (samples, sample_rate) = decode_wav_bytes(wav_bytes)?;
    Ok(resample_linear(&samples, sample_rate, WHISPER_SAMPLE_RATE))
}

fn decode_wav_bytes(wav_bytes: &[u8]) -> Result<(Vec<f32>, u32)> {
    use std::io::Cursor;

    let mut reader =
        hound::WavReader::new(Cursor::new(wav_bytes)).context("failed to parse WAV header")?;

    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels.max(1) as usize;

    let mut samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Int => {
            let bits = spec.bits_per_sample.max(1) as u32;
            let max_val = if bits > 1 {
                ((1i64 << (bits - 1)) - 1) as f32
            } else {
                1.0
            };
            reader
                .samples::<i32>()
                .filter_map(|s| s.ok())
                .map(|s| (s as f32 / max_val).clamp(-1.0, 1.0))
                .collect()
        }
        hound::SampleFormat::Float => reader.samples::<f32>().filter_map(|s| s.ok()).collect(),
    };

    if channels > 1 {
        let mut mono = Vec::with_capacity(samples.len() / channels + 1);
        for frame in samples.chunks(channels) {
            let sum: f32 = frame.iter().copied().sum();
            mono.push(sum / frame.len() as f32);
        }
        samples = mono;
    }

    for sample in &mut samples {
        if !sample.is_finite() {
            *sample = 0.0;
        } else {
            *sample = sample.clamp(-1.0, 1.0);
        }
    }

    Ok((samples, sample_rate))
}

fn resample_linear(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || samples.is_empty() || from_rate == 0 {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let out_len = ((samples.len() as f64) / ratio).round() as usize;
    let mut out = Vec::with_capacity(out_len);

    for i in 0..out_len {
        let pos = i as f64 * ratio;
        let idx = pos.floor() as usize;
        let frac = (pos - idx as f64) as f32;
        let a = samples[idx.min(samples.len() - 1)];
        let b = samples[(idx + 1).min(samples.len() - 1)];
        out.push(a + (b - a) * frac);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_i16(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut buf = Vec::new();
        let mut writer = hound::WavWriter::new(std::io::Cursor::new(&mut buf), spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
        buf
    }

    fn wav_f32(channels: u16, sample_rate: u32, samples: &[f32]) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut buf = Vec::new();
        let mut writer = hound::WavWriter::new(std::io::Cursor::new(&mut buf), spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
        buf
    }

    #[test]
    fn decodes_i16_mono_at_target_rate() {
        let bytes = wav_i16(1, 16_000, &[0, i16::MAX, i16::MIN, 0]);

        let samples = pcm_mono_16k(&bytes).unwrap();
        assert_eq!(samples.len(), 4);
        assert!((samples[1] - 1.0).abs() < 1e-3);
        assert!((samples[2] + 1.0).abs() < 1e-3);
    }

    #[test]
    fn downmixes_stereo() {
        // L=1.0, R=0.0 for every frame; mono should be 0.5.
        let frames: Vec<f32> = (0..8).flat_map(|_| [1.0, 0.0]).collect();
        let bytes = wav_f32(2, 16_000, &frames);

        let samples = pcm_mono_16k(&bytes).unwrap();
        assert_eq!(samples.len(), 8);
        assert!(samples.iter().all(|s| (s - 0.5).abs() < 1e-6));
    }

    #[test]
    fn resamples_8k_to_16k() {
        let bytes = wav_i16(1, 8_000, &[1000; 800]);

        let samples = pcm_mono_16k(&bytes).unwrap();
        // 0.1 s of audio comes out as ~0.1 s at 16 kHz.
        assert!((samples.len() as i64 - 1600).abs() <= 2, "{}", samples.len());
    }

    #[test]
    fn rejects_non_wav_bytes() {
        assert!(pcm_mono_16k(b"ID3\x03not a wav file").is_err());
    }
}
