//! Factory preset listing.

use crate::commands::common::load_preset;
use clap::Args;
use schroeder_config::{factory_preset_names, format_list, get_factory_preset};

/// List or show presets.
#[derive(Args)]
pub struct PresetsArgs {
    /// Preset name or path; prints it as TOML
    name: Option<String>,
}

/// Run the presets command.
pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.name {
        Some(name) => {
            let preset = load_preset(&name)?;
            print!("{}", preset.to_toml()?);
        }
        None => list_presets(),
    }
    Ok(())
}

fn list_presets() {
    println!("Factory Presets:");
    println!("================");
    for name in factory_preset_names() {
        let Some(preset) = get_factory_preset(name) else {
            continue;
        };
        let desc = preset.description.as_deref().unwrap_or("");
        println!("  {:12} - {}", name, desc);
        println!(
            "  {:12}   T60 {:.2}s, combs [{}], allpasses [{}]",
            "",
            preset.reverb_time,
            format_list(&preset.comb_delays),
            format_list(&preset.allpass_delays)
        );
    }
}
