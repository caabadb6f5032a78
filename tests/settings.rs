use quick_kv::hotkey::DEFAULT_HOTKEY;
use quick_kv::settings::Settings;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.hotkey, DEFAULT_HOTKEY);
    assert_eq!(settings.settle_delay(), Duration::from_millis(150));
    assert!(!settings.debug_logging);
    assert!(!settings.start_hidden);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "debug_logging": true, "settle_delay_ms": 180 }"#).unwrap();
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(settings.debug_logging);
    assert_eq!(settings.settle_delay(), Duration::from_millis(180));
    assert_eq!(settings.hotkey, DEFAULT_HOTKEY);
    assert_eq!(settings.window_size, (420.0, 720.0));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ nope").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn settle_delay_is_clamped() {
    let mut settings = Settings::default();
    settings.settle_delay_ms = 0;
    assert_eq!(settings.settle_delay(), Duration::from_millis(100));
    settings.settle_delay_ms = 10_000;
    assert_eq!(settings.settle_delay(), Duration::from_millis(200));
}

#[test]
fn invalid_hotkey_falls_back() {
    let mut settings = Settings::default();
    settings.hotkey = "Ctrl+Nope".into();
    assert_eq!(settings.hotkey(), DEFAULT_HOTKEY);
    settings.hotkey = "Alt+Space".into();
    assert_eq!(settings.hotkey(), "Alt+Space");
}

#[test]
fn explicit_data_dir_wins() {
    let dir = tempdir().unwrap();
    let mut settings = Settings::default();
    settings.data_dir = Some(dir.path().to_path_buf());
    assert_eq!(settings.data_dir(), dir.path());
}

#[test]
fn save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut settings = Settings::default();
    settings.start_hidden = true;
    settings.hotkey = "Ctrl+Alt+K".into();
    settings.save(path.to_str().unwrap()).unwrap();
    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(loaded.start_hidden);
    assert_eq!(loaded.hotkey, "Ctrl+Alt+K");
}
