use serial_test::serial;
use tracing::Level;

#[test]
#[serial]
fn debug_mode_enables_debug_and_first_init_wins() {
    std::env::remove_var("RUST_LOG");

    quick_kv::logging::init(true, None);
    assert!(tracing::enabled!(Level::DEBUG));
    assert!(!tracing::enabled!(Level::TRACE));

    quick_kv::logging::init(false, None);
    assert!(tracing::enabled!(Level::DEBUG));
}
