//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use schroeder_config::{ReverbPreset, get_factory_preset};
use std::path::Path;

/// Load a preset by factory name or TOML file path.
pub fn load_preset(name: &str) -> anyhow::Result<ReverbPreset> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }

    let path = Path::new(name);
    if path.exists() {
        return ReverbPreset::load(path)
            .with_context(|| format!("failed to load preset '{}'", path.display()));
    }

    anyhow::bail!(
        "Preset '{}' not found. Use 'schroeder presets' to see available presets.",
        name
    )
}
