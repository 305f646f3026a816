use super::*;
use tempfile::tempdir;

#[test]
fn write_default_settings_creates_parent_and_file_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".jotpad").join("setting.json");

    write_default_settings(&path).unwrap();
    assert!(path.is_file());
    assert_eq!(load_settings_from(&path), Settings::default());

    std::fs::write(&path, r#"{"stylesheet": "custom.css"}"#).unwrap();
    write_default_settings(&path).unwrap();
    assert_eq!(load_settings_from(&path).stylesheet, "custom.css");
}

#[test]
fn load_settings_from_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("nope.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn load_settings_from_malformed_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(load_settings_from(&path), Settings::default());
}
