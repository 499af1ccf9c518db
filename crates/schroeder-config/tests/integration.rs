//! Preset files driving the reverb engine.

use schroeder_config::{ReverbPreset, factory_presets, format_list, parse_list};
use schroeder_core::{ReverbConfig, ReverbEngine, apply_reverb};
use tempfile::TempDir;

#[test]
fn every_factory_preset_renders_an_impulse() {
    let mut impulse = vec![0.0; 8000];
    impulse[0] = 1.0;

    for preset in factory_presets() {
        let out = apply_reverb(&impulse, 44100, &preset.to_config())
            .unwrap_or_else(|e| panic!("{} failed: {e}", preset.name));
        assert_eq!(out.samples.len(), impulse.len());
        assert!(out.warnings.is_empty(), "{}: {:?}", preset.name, out.warnings);
    }
}

#[test]
fn preset_file_edited_from_command_line_lists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    let mut preset = ReverbPreset::from_config("Custom", &ReverbConfig::default());
    preset.comb_delays = parse_list("1001, 1103, 1201, 1301").unwrap();
    preset.save(&path).unwrap();

    let loaded = ReverbPreset::load(&path).unwrap();
    assert_eq!(format_list(&loaded.comb_delays), "1001, 1103, 1201, 1301");

    let engine = ReverbEngine::new(&ReverbConfig::from(&loaded), 48000).unwrap();
    let delays: Vec<usize> = engine.combs().stages().iter().map(|s| s.spec.delay).collect();
    assert_eq!(delays, vec![1001, 1103, 1201, 1301]);
}
