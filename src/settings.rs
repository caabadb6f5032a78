use crate::hotkey::{parse_hotkey, DEFAULT_HOTKEY};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const SETTINGS_FILE: &str = "settings.json";

const MIN_SETTLE_MS: u64 = 100;
const MAX_SETTLE_MS: u64 = 200;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Global show/hide combo, e.g. "CmdOrCtrl+Shift+A".
    #[serde(default = "default_hotkey")]
    pub hotkey: String,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving a copy of the log output.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Directory holding the stored entries. Defaults to the platform data
    /// directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Lock-out after a show/hide toggle, in milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_window_size")]
    pub window_size: (f32, f32),
    /// Start hidden in the tray instead of showing the window.
    #[serde(default)]
    pub start_hidden: bool,
    #[serde(default = "default_tray_tooltip")]
    pub tray_tooltip: String,
}

fn default_hotkey() -> String {
    DEFAULT_HOTKEY.into()
}

fn default_settle_delay_ms() -> u64 {
    150
}

fn default_window_size() -> (f32, f32) {
    (420.0, 720.0)
}

fn default_tray_tooltip() -> String {
    "Quick Access — Ctrl+Shift+A to toggle".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hotkey: default_hotkey(),
            debug_logging: false,
            log_file: None,
            data_dir: None,
            settle_delay_ms: default_settle_delay_ms(),
            window_size: default_window_size(),
            start_hidden: false,
            tray_tooltip: default_tray_tooltip(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// The configured hotkey if it parses, otherwise the default combo.
    pub fn hotkey(&self) -> &str {
        if parse_hotkey(&self.hotkey).is_some() {
            return &self.hotkey;
        }
        tracing::warn!(
            "provided hotkey string '{}' is invalid; using default {}",
            self.hotkey,
            DEFAULT_HOTKEY
        );
        DEFAULT_HOTKEY
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms.clamp(MIN_SETTLE_MS, MAX_SETTLE_MS))
    }

    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs_next::data_dir()
            .map(|d| d.join("quick_kv"))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(std::env::temp_dir)
    }
}
