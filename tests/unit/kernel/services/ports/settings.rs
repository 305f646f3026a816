use super::*;

#[test]
fn settings_missing_keys_fall_back_to_defaults() {
    let settings: Settings = serde_json::from_str("{}").expect("deserialize Settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.default_file.as_deref(), Some("default.c"));
    assert_eq!(settings.stylesheet, "styles.css");
}

#[test]
fn settings_null_default_file_means_no_active_file() {
    let settings: Settings =
        serde_json::from_str(r#"{"default_file": null}"#).expect("deserialize Settings");
    assert_eq!(settings.default_file, None);
}

#[test]
fn settings_partial_terminal_section_keeps_other_defaults() {
    let settings: Settings = serde_json::from_str(r#"{"terminal": {"split_percent": 70}}"#)
        .expect("deserialize Settings");
    assert_eq!(settings.terminal.split_percent, 70);
    assert_eq!(
        settings.terminal.scrollback_lines,
        DEFAULT_SCROLLBACK_LINES
    );
}

#[test]
fn split_percent_is_clamped() {
    assert_eq!(clamp_split_percent(0), MIN_SPLIT_PERCENT);
    assert_eq!(clamp_split_percent(55), 55);
    assert_eq!(clamp_split_percent(100), MAX_SPLIT_PERCENT);
}
