use crate::triggers::{Trigger, TriggerQueue};
use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use std::sync::Arc;

/// Combo used when the settings file does not provide a valid one.
pub const DEFAULT_HOTKEY: &str = "CmdOrCtrl+Shift+A";

/// Registration of system-wide shortcuts.
pub trait HotkeyHost {
    /// Register `combo` and return its id.
    fn register(&mut self, combo: &str) -> anyhow::Result<u32>;
    fn unregister_all(&mut self) -> anyhow::Result<()>;
}

/// Parse a combo like "CmdOrCtrl+Shift+A". `CmdOrCtrl` is Cmd on macOS and
/// Ctrl elsewhere.
pub fn parse_hotkey(s: &str) -> Option<HotKey> {
    match s.trim().parse::<HotKey>() {
        Ok(hotkey) => Some(hotkey),
        Err(e) => {
            tracing::debug!(combo = %s, error = %e, "invalid hotkey");
            None
        }
    }
}

/// [`HotkeyHost`] backed by the `global-hotkey` crate. Presses of a
/// registered combo are forwarded to a [`TriggerQueue`] as
/// [`Trigger::Hotkey`].
pub struct GlobalHotkeys {
    manager: GlobalHotKeyManager,
    registered: Vec<HotKey>,
    queue: TriggerQueue,
    on_trigger: Arc<dyn Fn() + Send + Sync>,
}

impl GlobalHotkeys {
    pub fn new(queue: TriggerQueue, on_trigger: impl Fn() + Send + Sync + 'static) -> anyhow::Result<Self> {
        let manager = GlobalHotKeyManager::new()?;
        Ok(Self {
            manager,
            registered: Vec::new(),
            queue,
            on_trigger: Arc::new(on_trigger),
        })
    }

    fn install_handler(&self) {
        let ids: Vec<u32> = self.registered.iter().map(|h| h.id()).collect();
        let queue = self.queue.clone();
        let on_trigger = self.on_trigger.clone();
        GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
            if !ids.contains(&event.id) || !matches!(event.state, HotKeyState::Pressed) {
                return;
            }
            tracing::debug!(id = event.id, "hotkey pressed");
            queue.push(Trigger::Hotkey);
            on_trigger();
        }));
    }
}

impl HotkeyHost for GlobalHotkeys {
    fn register(&mut self, combo: &str) -> anyhow::Result<u32> {
        let hotkey = parse_hotkey(combo).ok_or_else(|| anyhow::anyhow!("invalid hotkey '{combo}'"))?;
        self.manager.register(hotkey)?;
        self.registered.push(hotkey);
        self.install_handler();
        tracing::info!(combo = %combo, id = hotkey.id(), "registered hotkey");
        Ok(hotkey.id())
    }

    fn unregister_all(&mut self) -> anyhow::Result<()> {
        GlobalHotKeyEvent::set_event_handler(None::<fn(GlobalHotKeyEvent)>);
        let hotkeys = std::mem::take(&mut self.registered);
        self.manager.unregister_all(&hotkeys)?;
        tracing::info!(count = hotkeys.len(), "unregistered hotkeys");
        Ok(())
    }
}
