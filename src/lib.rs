pub mod autostart;
pub mod clipboard;
pub mod entries;
pub mod gui;
pub mod hotkey;
pub mod interaction;
pub mod lifecycle;
pub mod logging;
pub mod search;
pub mod selection;
pub mod settings;
pub mod storage;
pub mod tray;
pub mod triggers;
pub mod visibility;
pub mod window;
