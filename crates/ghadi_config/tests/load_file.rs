//! File-based config loading.

use std::fs;

use ghadi_base::EveningLabel;
use ghadi_config::{ConfigError, GhadiConfig};

#[test]
fn load_resolves_relative_sun_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ghadiyalu.toml");
    fs::write(
        &path,
        "evening_label = \"fixed_to_evening_date\"\nsun_table = \"sun.toml\"\n",
    )
    .unwrap();

    let c = GhadiConfig::load(&path).unwrap();
    assert_eq!(c.evening_label, EveningLabel::FixedToEveningDate);
    assert_eq!(c.sun_table.unwrap(), dir.path().join("sun.toml"));
}

#[test]
fn load_keeps_absolute_sun_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("tables").join("sun.toml");
    let path = dir.path().join("ghadiyalu.toml");
    fs::write(&path, format!("sun_table = {:?}\n", table.display().to_string())).unwrap();

    let c = GhadiConfig::load(&path).unwrap();
    assert_eq!(c.sun_table.unwrap(), table);
}

#[test]
fn discover_explicit_path_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "segments_per_batch = 60\n").unwrap();

    let c = GhadiConfig::discover(Some(&path)).unwrap();
    assert_eq!(c.segments_per_batch, 60);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GhadiConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
