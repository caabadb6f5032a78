use quick_kv::clipboard::{ClipboardBridge, CopyOutcome};

#[path = "mock_clipboard.rs"]
mod mock_clipboard;
use mock_clipboard::RecordingClipboard;

#[test]
fn primary_success_skips_fallback() {
    let primary = RecordingClipboard::default();
    let fallback = RecordingClipboard::default();
    let mut bridge = ClipboardBridge::new(Box::new(primary.clone()), Some(Box::new(fallback.clone())));
    assert_eq!(bridge.copy("secret"), CopyOutcome::Copied);
    assert_eq!(primary.copied(), vec!["secret".to_string()]);
    assert!(fallback.copied().is_empty());
}

#[test]
fn primary_failure_uses_fallback() {
    let fallback = RecordingClipboard::default();
    let mut bridge = ClipboardBridge::new(
        Box::new(RecordingClipboard::failing()),
        Some(Box::new(fallback.clone())),
    );
    assert_eq!(bridge.copy("value"), CopyOutcome::Degraded);
    assert_eq!(fallback.copied(), vec!["value".to_string()]);
}

#[test]
fn total_failure_is_reported_not_raised() {
    let mut bridge = ClipboardBridge::new(
        Box::new(RecordingClipboard::failing()),
        Some(Box::new(RecordingClipboard::failing())),
    );
    assert_eq!(bridge.copy("value"), CopyOutcome::Failed);

    let mut bridge = ClipboardBridge::new(Box::new(RecordingClipboard::failing()), None);
    assert_eq!(bridge.copy("value"), CopyOutcome::Failed);
}

#[test]
fn egui_fallback_sets_platform_output() {
    use eframe::egui;
    use quick_kv::clipboard::EguiClipboard;

    let ctx = egui::Context::default();
    let mut bridge = ClipboardBridge::new(
        Box::new(RecordingClipboard::failing()),
        Some(Box::new(EguiClipboard::new(ctx.clone()))),
    );
    assert_eq!(bridge.copy("from egui"), CopyOutcome::Degraded);
    assert_eq!(ctx.output(|o| o.copied_text.clone()), "from egui");
}
