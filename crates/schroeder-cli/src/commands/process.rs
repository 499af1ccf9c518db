//! File-based reverb processing command.

use crate::commands::common::load_preset;
use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use schroeder_config::{ReverbPreset, get_factory_preset, parse_list};
use schroeder_core::{EngineOptions, linear_to_db};
use schroeder_io::{ChannelMode, RenderOptions, render_file, reverberated_path};
use std::path::PathBuf;
use std::time::Duration;

/// Reverberate a WAV file.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (default: <INPUT stem>_reverberated.wav)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Factory preset name or preset file (TOML)
    #[arg(short, long)]
    preset: Option<String>,

    /// Comb mix weights (e.g., "0.3,0.25,0.25,0.20")
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    mixing: Option<String>,

    /// Comb delays in samples (e.g., "1553,1613,1493,1153")
    #[arg(long, value_name = "LIST")]
    comb_delays: Option<String>,

    /// Allpass delays in samples (e.g., "223,443")
    #[arg(long, value_name = "LIST")]
    allpass_delays: Option<String>,

    /// Allpass gains (e.g., "-0.7,-0.7")
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    allpass_gains: Option<String>,

    /// Reverb time (T60) in seconds
    #[arg(short = 't', long)]
    reverb_time: Option<f64>,

    /// Average all channels instead of taking the first
    #[arg(long)]
    downmix: bool,

    /// Reject unstable allpass gains and fail on NaN/Inf output
    #[arg(long)]
    strict: bool,

    /// Run comb filters on the calling thread
    #[arg(long)]
    sequential: bool,
}

impl ProcessArgs {
    /// Preset (or the classic defaults) with command-line overrides applied.
    fn preset(&self) -> anyhow::Result<ReverbPreset> {
        let mut preset = match &self.preset {
            Some(name) => load_preset(name)?,
            None => get_factory_preset("classic").unwrap_or_default(),
        };

        if let Some(text) = &self.mixing {
            preset.mixing_params = parse_list(text).context("--mixing")?;
        }
        if let Some(text) = &self.comb_delays {
            preset.comb_delays = parse_list(text).context("--comb-delays")?;
        }
        if let Some(text) = &self.allpass_delays {
            preset.allpass_delays = parse_list(text).context("--allpass-delays")?;
        }
        if let Some(text) = &self.allpass_gains {
            preset.allpass_gains = parse_list(text).context("--allpass-gains")?;
        }
        if let Some(t60) = self.reverb_time {
            preset.reverb_time = t60;
        }
        Ok(preset)
    }

    fn render_options(&self) -> RenderOptions {
        let mut engine = if self.strict {
            EngineOptions::strict()
        } else {
            EngineOptions::default()
        };
        engine.parallel = !self.sequential;

        RenderOptions {
            channel_mode: if self.downmix {
                ChannelMode::Downmix
            } else {
                ChannelMode::First
            },
            engine,
        }
    }
}

/// Run the process command.
pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let preset = args.preset()?;
    let config = preset.to_config();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| reverberated_path(&args.input));

    println!("Preset: {}", preset.name);
    println!(
        "  {} comb(s), {} allpass(es), T60 {:.2}s",
        config.comb_delays.len(),
        config.allpass_delays.len(),
        config.reverb_time
    );
    println!("Reading {}...", args.input.display());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]")?);
    spinner.set_message("Reverberating");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = render_file(&args.input, &output, &config, &args.render_options());
    spinner.finish_and_clear();
    let report = result.with_context(|| format!("failed to process {}", args.input.display()))?;

    println!(
        "  {} samples, {} Hz, {:.2}s",
        report.num_samples,
        report.sample_rate,
        report.duration_secs()
    );

    for warning in &report.warnings {
        println!("Warning: {warning}");
    }

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(report.input_rms),
        linear_to_db(report.input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(report.output_rms),
        linear_to_db(report.output_peak)
    );

    println!("\nWrote {}", report.output_path.display());
    Ok(())
}
