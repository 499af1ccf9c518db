//! Describe a WAV file as `process` will see it.

use clap::Args;
use schroeder_io::{WavFormat, WavInfo, read_wav_info};
use std::path::PathBuf;

/// Show WAV file metadata.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: PathBuf,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// How `process` reduces the file's channels to the mono signal it reverberates.
fn channel_handling(channels: u16) -> &'static str {
    if channels > 1 {
        "first channel (--downmix averages all)"
    } else {
        "mono"
    }
}

fn encoding(info: &WavInfo) -> String {
    let kind = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "float",
    };
    format!("{}-bit {kind}", info.bits_per_sample)
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    if args.json {
        let value = serde_json::json!({
            "file": args.file.display().to_string(),
            "encoding": encoding(&info),
            "channels": info.channels,
            "reverb_input": channel_handling(info.channels),
            "sample_rate": info.sample_rate,
            "num_frames": info.num_frames,
            "duration_secs": info.duration_secs,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", args.file.display());
    println!(
        "  {} Hz, {}, {} channel(s)",
        info.sample_rate,
        encoding(&info),
        info.channels
    );
    println!(
        "  {} frames ({:.3}s)",
        info.num_frames, info.duration_secs
    );
    println!("  Reverb input: {}", channel_handling(info.channels));
    println!("  Reverb output: 16-bit PCM mono, {} Hz", info.sample_rate);

    Ok(())
}
