//! Presets and parameter parsing for the schroeder reverberator.
//!
//! # Features
//!
//! - **Presets**: Load and save [`ReverbPreset`]s as TOML files
//! - **Factory Presets**: `classic`, `small_room` and `large_hall`, always available
//! - **List Parsing**: [`parse_list`] reads the comma-separated parameter lists
//!   accepted on the command line
//!
//! # Example
//!
//! ```rust,no_run
//! use schroeder_config::{ReverbPreset, get_factory_preset, parse_list};
//!
//! let mut preset = get_factory_preset("classic").unwrap();
//! preset.allpass_gains = parse_list("-0.6, -0.6").unwrap();
//! preset.save("my_reverb.toml").unwrap();
//!
//! let config = ReverbPreset::load("my_reverb.toml").unwrap().to_config();
//! ```

mod error;
mod parse;
mod preset;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::PresetError;
pub use factory_presets::{factory_preset_names, factory_presets, get_factory_preset};
pub use parse::{format_list, parse_list};
pub use preset::ReverbPreset;
