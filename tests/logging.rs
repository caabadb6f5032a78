use std::{fs, thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn file_output_respects_info_level_and_ignores_rust_log() {
    std::env::set_var("RUST_LOG", "trace");
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("logs").join("quick_kv.log");

    quick_kv::logging::init(false, Some(path.clone()));
    tracing::info!("kept-at-info");
    tracing::debug!("dropped-at-debug");

    sleep(Duration::from_millis(100));

    assert!(path.parent().unwrap().is_dir(), "log directory was not created");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("kept-at-info"));
    assert!(!contents.contains("dropped-at-debug"));
    assert!(!contents.contains("\u{1b}["), "file output should not carry ANSI colors");
}
