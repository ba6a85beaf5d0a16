//! Integration tests for configuration loading and migration

use std::fs;
use tempfile::TempDir;

use cutline::config::{migrate_config, TimeFormat};
use cutline::{Config, PoiKind};

#[test]
fn partial_config_fills_in_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "[display]\ntime_format = \"millis\"\n\n[playback]\ndefault_collection = \"tags\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.display.time_format, TimeFormat::Millis);
    assert!(config.display.color);
    assert_eq!(config.playback.default_collection, PoiKind::Tags);
    assert_eq!(config.playback.tick_ms, 250);
    assert!(config.engine.cuts_enabled);
}

#[test]
fn migrated_config_keeps_user_values_and_comments() {
    let original = "# my settings\n[engine]\ncuts_enabled = false\n";

    let result = migrate_config(original).unwrap();

    assert!(result.has_changes());
    assert!(result.content.contains("# my settings"));
    assert!(result.sections_added.contains(&"display".to_string()));
    assert!(result.sections_added.contains(&"playback".to_string()));
    assert!(!result.added_fields.contains(&"engine.cuts_enabled".to_string()));

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, &result.content).unwrap();
    let config = Config::load_from(&path).unwrap();
    assert!(!config.engine.cuts_enabled);
    assert_eq!(config.playback, Config::default().playback);
}

#[test]
fn saved_config_loads_back_and_needs_no_migration() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.display.bar_width = 72;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
    let content = fs::read_to_string(&path).unwrap();
    assert!(!migrate_config(&content).unwrap().has_changes());
}
