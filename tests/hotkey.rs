use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use quick_kv::hotkey::{parse_hotkey, DEFAULT_HOTKEY};

#[test]
fn parse_default_combo() {
    let hk = parse_hotkey(DEFAULT_HOTKEY).expect("default combo should parse");
    #[cfg(target_os = "macos")]
    let expected = HotKey::new(Some(Modifiers::SUPER | Modifiers::SHIFT), Code::KeyA);
    #[cfg(not(target_os = "macos"))]
    let expected = HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyA);
    assert_eq!(hk.id(), expected.id());
}

#[test]
fn parse_simple_f_key() {
    let hk = parse_hotkey("F2").expect("should parse F2");
    assert_eq!(hk.id(), HotKey::new(None, Code::F2).id());
}

#[test]
fn parse_invalid_hotkey() {
    assert!(parse_hotkey("Ctrl+Foo").is_none());
    assert!(parse_hotkey("").is_none());
}
