#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use quick_kv::gui::QuickAccessApp;
use quick_kv::logging;
use quick_kv::settings::{Settings, SETTINGS_FILE};
use quick_kv::window::OFFSCREEN_POS;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let (settings, settings_error) = match Settings::load(SETTINGS_FILE) {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    logging::init(settings.debug_logging, settings.log_file.clone());
    if let Some(e) = settings_error {
        tracing::error!(error = %e, "failed to load {SETTINGS_FILE}; using defaults");
    }

    let (width, height) = settings.window_size;
    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Quick Access")
        .with_inner_size([width, height])
        .with_min_inner_size([320.0, 240.0]);
    // The window stays mapped so the frame loop keeps running; starting hidden
    // means starting parked.
    if settings.start_hidden {
        viewport = viewport.with_position([OFFSCREEN_POS.0, OFFSCREEN_POS.1]);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Quick Access",
        native_options,
        Box::new(move |cc| Box::new(QuickAccessApp::new(&cc.egui_ctx, settings))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run app: {e}"))?;
    Ok(())
}
