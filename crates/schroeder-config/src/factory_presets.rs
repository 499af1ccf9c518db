//! Factory presets bundled with the library.
//!
//! These presets are always available without external files. `classic`
//! reproduces the engine defaults; the others trade density and length for
//! different spaces.

use crate::ReverbPreset;

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("classic", CLASSIC_PRESET),
    ("small_room", SMALL_ROOM_PRESET),
    ("large_hall", LARGE_HALL_PRESET),
];

/// Four combs and two allpasses at 1.2 s.
const CLASSIC_PRESET: &str = r#"
name = "Classic"
description = "Four parallel combs into two allpasses, 1.2 s decay"
reverb_time = 1.2
mixing_params = [0.3, 0.25, 0.25, 0.2]
comb_delays = [1553, 1613, 1493, 1153]
allpass_delays = [223, 443]
allpass_gains = [-0.7, -0.7]
"#;

/// Short combs, quick decay.
const SMALL_ROOM_PRESET: &str = r#"
name = "Small Room"
description = "Short, dense reflections with a 0.5 s decay"
reverb_time = 0.5
mixing_params = [0.3, 0.25, 0.25, 0.2]
comb_delays = [701, 773, 839, 907]
allpass_delays = [131, 43]
allpass_gains = [-0.7, -0.7]
"#;

/// Six combs, four allpasses, long tail.
const LARGE_HALL_PRESET: &str = r#"
name = "Large Hall"
description = "Six combs and four allpasses with a 3.5 s tail"
reverb_time = 3.5
mixing_params = [0.2, 0.18, 0.17, 0.16, 0.15, 0.14]
comb_delays = [1557, 1617, 1491, 1422, 1277, 1356]
allpass_delays = [225, 556, 441, 341]
allpass_gains = [-0.7, -0.7, -0.7, -0.7]
"#;

/// Get all factory presets.
pub fn factory_presets() -> Vec<ReverbPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| ReverbPreset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by name.
///
/// Matches the internal name (`large_hall`) or the display name
/// (`Large Hall`), case-insensitively.
///
/// # Example
///
/// ```rust
/// use schroeder_config::get_factory_preset;
///
/// let preset = get_factory_preset("Small Room").unwrap();
/// assert_eq!(preset.reverb_time, 0.5);
/// ```
pub fn get_factory_preset(name: &str) -> Option<ReverbPreset> {
    let name_lower = name.to_lowercase();

    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(preset_name, _)| *preset_name == name_lower)
    {
        return ReverbPreset::from_toml(toml).ok();
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// Get the internal names of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use schroeder_core::ReverbConfig;

    #[test]
    fn test_factory_presets_load() {
        let presets = factory_presets();
        assert_eq!(presets.len(), FACTORY_PRESETS_TOML.len());

        let names: Vec<_> = presets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Classic", "Small Room", "Large Hall"]);
    }

    #[test]
    fn test_classic_is_engine_default() {
        let preset = get_factory_preset("classic").unwrap();
        assert_eq!(preset.to_config(), ReverbConfig::default());
    }

    #[test]
    fn test_get_factory_preset() {
        assert_eq!(get_factory_preset("large_hall").unwrap().name, "Large Hall");
        assert_eq!(get_factory_preset("LARGE HALL").unwrap().name, "Large Hall");
        assert!(get_factory_preset("cathedral").is_none());
    }

    #[test]
    fn test_factory_preset_names() {
        assert_eq!(
            factory_preset_names(),
            vec!["classic", "small_room", "large_hall"]
        );
    }

    #[test]
    fn test_all_factory_presets_valid() {
        for (name, toml) in FACTORY_PRESETS_TOML {
            let preset = ReverbPreset::from_toml(toml)
                .unwrap_or_else(|e| panic!("factory preset '{name}' should parse: {e}"));
            assert!(preset.description.is_some(), "preset '{name}' should have a description");

            let config = preset.to_config();
            assert!(config.validate(44100).is_ok(), "preset '{name}' should validate");
            assert!(config.validate_stability().is_ok(), "preset '{name}' should be stable");
            assert!(
                (config.mix_sum() - 1.0).abs() < 1e-9,
                "preset '{name}' mix weights should sum to 1"
            );
        }
    }
}
