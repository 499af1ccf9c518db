//! Reverb preset file format and operations.

use schroeder_core::ReverbConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PresetError;

/// A named set of reverberator parameters.
///
/// Presets are stored as TOML. Any parameter left out of the file takes the
/// value from [`ReverbConfig::default`].
///
/// # TOML Format
///
/// ```toml
/// name = "Classic"
/// description = "Four combs and two allpasses"
/// reverb_time = 1.2
/// mixing_params = [0.3, 0.25, 0.25, 0.2]
/// comb_delays = [1553, 1613, 1493, 1153]
/// allpass_delays = [223, 443]
/// allpass_gains = [-0.7, -0.7]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReverbPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Target decay time in seconds.
    pub reverb_time: f64,

    /// Output weight of each comb filter.
    pub mixing_params: Vec<f64>,

    /// Comb delays in samples.
    pub comb_delays: Vec<usize>,

    /// Allpass delays in samples, in processing order.
    pub allpass_delays: Vec<usize>,

    /// Allpass gains, paired with `allpass_delays`.
    pub allpass_gains: Vec<f64>,
}

impl Default for ReverbPreset {
    fn default() -> Self {
        Self::from_config("Untitled", &ReverbConfig::default())
    }
}

impl ReverbPreset {
    /// Wrap an engine configuration under a name.
    pub fn from_config(name: impl Into<String>, config: &ReverbConfig) -> Self {
        Self {
            name: name.into(),
            description: None,
            reverb_time: config.reverb_time,
            mixing_params: config.mixing_params.clone(),
            comb_delays: config.comb_delays.clone(),
            allpass_delays: config.allpass_delays.clone(),
            allpass_gains: config.allpass_gains.clone(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PresetError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, PresetError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PresetError> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| PresetError::write_file(path, e))
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, PresetError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Engine configuration for this preset. Not validated.
    pub fn to_config(&self) -> ReverbConfig {
        ReverbConfig::from(self)
    }
}

impl From<&ReverbPreset> for ReverbConfig {
    fn from(preset: &ReverbPreset) -> Self {
        ReverbConfig {
            mixing_params: preset.mixing_params.clone(),
            comb_delays: preset.comb_delays.clone(),
            allpass_delays: preset.allpass_delays.clone(),
            allpass_gains: preset.allpass_gains.clone(),
            reverb_time: preset.reverb_time,
        }
    }
}
