//! One-shot file rendering: decode, reverberate, encode.

use crate::Result;
use crate::wav::{ChannelMode, read_wav, write_wav_pcm16};
use schroeder_core::{
    EngineOptions, ReverbConfig, ReverbEngine, ReverbError, ReverbWarning, peak, rms,
};
use std::path::{Path, PathBuf};

/// Options for [`render_file`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// How multi-channel input is reduced to mono.
    pub channel_mode: ChannelMode,
    /// Engine strictness and threading.
    pub engine: EngineOptions,
}

/// Summary of a completed render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    /// Sample rate of the input, reused for the output.
    pub sample_rate: u32,
    /// Number of mono samples processed.
    pub num_samples: usize,
    /// Peak absolute value of the decoded input.
    pub input_peak: f64,
    /// RMS level of the decoded input.
    pub input_rms: f64,
    /// Peak absolute value of the written output.
    pub output_peak: f64,
    /// RMS level of the written output.
    pub output_rms: f64,
    /// Diagnostics raised by the engine.
    pub warnings: Vec<ReverbWarning>,
    /// Where the result was written.
    pub output_path: PathBuf,
}

impl RenderReport {
    /// Input duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.num_samples as f64 / f64::from(self.sample_rate)
    }
}

/// Default output path for `input`: `<dir>/<stem>_reverberated.wav`.
///
/// ```
/// use std::path::Path;
/// use schroeder_io::reverberated_path;
///
/// assert_eq!(
///     reverberated_path(Path::new("takes/guitar.wav")),
///     Path::new("takes/guitar_reverberated.wav")
/// );
/// ```
pub fn reverberated_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_reverberated.wav"))
}

/// Reverberate the WAV file at `input` and write 16-bit PCM to `output`.
///
/// The engine is configured before the file is opened, so configuration
/// errors surface even when the input is missing.
pub fn render_file(
    input: &Path,
    output: &Path,
    config: &ReverbConfig,
    options: &RenderOptions,
) -> Result<RenderReport> {
    // The sample rate is only known after decoding; any positive rate
    // exercises the remaining checks.
    config.validate(1).map_err(ReverbError::from)?;
    if options.engine.reject_unstable {
        config.validate_stability().map_err(ReverbError::from)?;
    }

    let (samples, spec) = read_wav(input, options.channel_mode)?;
    let engine = ReverbEngine::with_options(config, spec.sample_rate, options.engine)?;
    let rendered = engine.process(&samples)?;

    write_wav_pcm16(output, &rendered.samples, spec.sample_rate)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        samples = samples.len(),
        sample_rate = spec.sample_rate,
        warnings = rendered.warnings.len(),
        "render complete"
    );

    Ok(RenderReport {
        sample_rate: spec.sample_rate,
        num_samples: samples.len(),
        input_peak: peak(&samples),
        input_rms: rms(&samples),
        output_peak: peak(&rendered.samples),
        output_rms: rms(&rendered.samples),
        warnings: rendered.warnings,
        output_path: output.to_path_buf(),
    })
}
