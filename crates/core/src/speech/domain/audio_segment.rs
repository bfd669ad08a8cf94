use std::io::Cursor;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioDecodeError {
    #[error("invalid WAV data: {0}")]
    Wav(#[from] hound::Error),
    #[error("unsupported WAV format: {bits}-bit {format:?}, expected 16-bit integer PCM")]
    UnsupportedFormat {
        bits: u16,
        format: hound::SampleFormat,
    },
    #[error("raw LINEAR16 audio must have an even byte length, got {0}")]
    OddLength(usize),
    #[error("sample rate must be positive")]
    ZeroSampleRate,
}

/// Decoded mono PCM samples normalized to [-1.0, 1.0].
#[derive(Clone, Debug)]
pub struct AudioSegment {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioSegment {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Decodes LINEAR16 bytes: a RIFF/WAV container when one is present,
    /// otherwise headerless little-endian samples at `raw_sample_rate`.
    /// Multichannel WAV input is downmixed to mono.
    pub fn from_linear16(bytes: &[u8], raw_sample_rate: u32) -> Result<Self, AudioDecodeError> {
        if bytes.starts_with(b"RIFF") {
            Self::from_wav(bytes)
        } else {
            Self::from_raw(bytes, raw_sample_rate)
        }
    }

    fn from_wav(bytes: &[u8]) -> Result<Self, AudioDecodeError> {
        let mut reader = hound::WavReader::new(Cursor::new(bytes))?;
        let spec = reader.spec();
        if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
            return Err(AudioDecodeError::UnsupportedFormat {
                bits: spec.bits_per_sample,
                format: spec.sample_format,
            });
        }
        if spec.sample_rate == 0 {
            return Err(AudioDecodeError::ZeroSampleRate);
        }

        let interleaved: Vec<f32> = reader
            .samples::<i16>()
            .map(|s| s.map(|sample| sample as f32 / i16::MAX as f32))
            .collect::<Result<_, _>>()?;

        let channels = spec.channels.max(1) as usize;
        let samples = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect();
        Ok(Self::new(samples, spec.sample_rate))
    }

    fn from_raw(bytes: &[u8], sample_rate: u32) -> Result<Self, AudioDecodeError> {
        if bytes.len() % 2 != 0 {
            return Err(AudioDecodeError::OddLength(bytes.len()));
        }
        if sample_rate == 0 {
            return Err(AudioDecodeError::ZeroSampleRate);
        }
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / i16::MAX as f32)
            .collect();
        Ok(Self::new(samples, sample_rate))
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Linear-interpolation resample. Returns a clone when rates already match.
    pub fn resampled(&self, target_rate: u32) -> Self {
        if target_rate == self.sample_rate || self.samples.is_empty() {
            return Self::new(self.samples.clone(), target_rate);
        }

        let ratio = self.sample_rate as f64 / target_rate as f64;
        let out_len = (self.samples.len() as f64 / ratio).round() as usize;
        let last = self.samples.len() - 1;

        let samples = (0..out_len)
            .map(|i| {
                let pos = i as f64 * ratio;
                let idx = (pos.floor() as usize).min(last);
                let next = (idx + 1).min(last);
                let frac = (pos - idx as f64) as f32;
                self.samples[idx] * (1.0 - frac) + self.samples[next] * frac
            })
            .collect();
        Self::new(samples, target_rate)
    }
}
