//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let num_frames = u64::from(reader.duration());
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (e.g., 16, 24, 32).
    pub bits_per_sample: u16,
    /// Integer PCM or IEEE float.
    pub format: WavFormat,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            format: WavFormat::Pcm,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            format: match spec.sample_format {
                SampleFormat::Float => WavFormat::IeeeFloat,
                SampleFormat::Int => WavFormat::Pcm,
            },
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: match spec.format {
                WavFormat::IeeeFloat => SampleFormat::Float,
                WavFormat::Pcm => SampleFormat::Int,
            },
        }
    }
}

/// How multi-channel files are reduced to the single channel the engine takes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelMode {
    /// Keep only the first channel.
    #[default]
    First,
    /// Average all channels.
    Downmix,
}

/// Largest positive value of a signed integer sample with `bits` bits.
#[inline]
fn int_full_scale(bits: u16) -> f64 {
    ((1i64 << bits.saturating_sub(1)) - 1) as f64
}

/// Read a WAV file as mono `f64` samples along with its spec.
///
/// Integer samples are divided by the format's largest positive value, so
/// full-scale positive PCM maps to exactly 1.0. Float samples pass through.
///
/// # Example
/// ```ignore
/// let (samples, spec) = read_wav("input.wav", ChannelMode::First)?;
/// println!("Loaded {} samples at {} Hz", samples.len(), spec.sample_rate);
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P, mode: ChannelMode) -> Result<(Vec<f64>, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = usize::from(spec.channels);
    if spec.format == WavFormat::Pcm && spec.bits_per_sample == 0 {
        return Err(Error::UnsupportedFormat("0-bit PCM".to_string()));
    }

    let interleaved: Vec<f64> = match spec.format {
        WavFormat::IeeeFloat => {
            if spec.bits_per_sample != 32 {
                return Err(Error::UnsupportedFormat(format!(
                    "{}-bit float",
                    spec.bits_per_sample
                )));
            }
            reader
                .into_samples::<f32>()
                .map(|s| s.map(f64::from))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
        WavFormat::Pcm => {
            let full_scale = int_full_scale(spec.bits_per_sample);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / full_scale))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let mono = if channels > 1 {
        match mode {
            ChannelMode::First => interleaved.chunks(channels).map(|frame| frame[0]).collect(),
            ChannelMode::Downmix => interleaved
                .chunks(channels)
                .map(|frame| frame.iter().sum::<f64>() / channels as f64)
                .collect(),
        }
    } else {
        interleaved
    };

    tracing::debug!(
        path = %path.display(),
        frames = mono.len(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        ?mode,
        "decoded wav"
    );

    Ok((mono, spec))
}

/// Write mono samples to a WAV file with the given spec.
///
/// Integer formats store `round(sample · full_scale)`, clamped to the
/// format's range. 32-bit float stores samples as-is. `spec.channels` is
/// ignored; the file is always mono.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f64], spec: WavSpec) -> Result<()> {
    let path = path.as_ref();
    let mono = WavSpec {
        channels: 1,
        ..spec
    };
    let mut writer = WavWriter::create(path, hound::WavSpec::from(mono))?;

    match spec.format {
        WavFormat::IeeeFloat => {
            for &sample in samples {
                writer.write_sample(sample as f32)?;
            }
        }
        WavFormat::Pcm => {
            let full_scale = int_full_scale(spec.bits_per_sample);
            for &sample in samples {
                let value = (sample * full_scale).round().clamp(-full_scale - 1.0, full_scale);
                writer.write_sample(value as i32)?;
            }
        }
    }

    writer.finalize()?;

    tracing::debug!(
        path = %path.display(),
        frames = samples.len(),
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        "encoded wav"
    );
    Ok(())
}

/// Write mono samples as 16-bit PCM: each sample becomes `round(sample · 32767)`.
///
/// # Example
/// ```ignore
/// let samples = vec![0.0f64; 44100]; // 1 second of silence
/// write_wav_pcm16("output.wav", &samples, 44100)?;
/// ```
pub fn write_wav_pcm16<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> Result<()> {
    write_wav(
        path,
        samples,
        WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            format: WavFormat::Pcm,
        },
    )
}
