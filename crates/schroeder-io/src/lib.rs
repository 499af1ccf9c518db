//! Audio I/O layer for the schroeder reverberator.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] decodes any PCM or float WAV into a mono,
//!   amplitude-normalized `f64` buffer; [`write_wav_pcm16`] encodes a buffer
//!   back to 16-bit PCM
//! - **File rendering**: [`render_file`] runs the full decode → reverb →
//!   encode path for one file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use schroeder_core::ReverbConfig;
//! use schroeder_io::{ChannelMode, read_wav, write_wav_pcm16};
//!
//! let (samples, spec) = read_wav("input.wav", ChannelMode::First)?;
//! let output = schroeder_core::apply_reverb(&samples, spec.sample_rate, &ReverbConfig::default())?;
//! write_wav_pcm16("input_reverberated.wav", &output.samples, spec.sample_rate)?;
//! ```

mod render;
mod wav;

pub use render::{RenderOptions, RenderReport, render_file, reverberated_path};
pub use wav::{
    ChannelMode, WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav, write_wav_pcm16,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// The reverb engine rejected the configuration or input.
    #[error(transparent)]
    Reverb(#[from] schroeder_core::ReverbError),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
