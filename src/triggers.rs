use std::sync::{Arc, Mutex};

/// External requests that reach the app from outside the egui event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Hotkey,
    TrayToggle,
    Quit,
}

/// Shared signal between OS event handlers and the UI thread.
#[derive(Clone, Default)]
pub struct TriggerQueue {
    pending: Arc<Mutex<Vec<Trigger>>>,
}

impl TriggerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, trigger: Trigger) {
        match self.pending.lock() {
            Ok(mut pending) => pending.push(trigger),
            Err(_) => tracing::error!(?trigger, "trigger queue poisoned; dropping"),
        }
    }

    /// Drain everything received since the last call, oldest first.
    pub fn take(&self) -> Vec<Trigger> {
        match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        }
    }
}
