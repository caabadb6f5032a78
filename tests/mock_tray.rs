use quick_kv::tray::{TrayHost, TrayItem};
use std::sync::{Arc, Mutex};

/// Records label updates and teardown calls, appending to a shared call log.
#[derive(Clone, Default)]
pub struct RecordingTray {
    pub labels: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<&'static str>>>,
    pub fail_destroy: bool,
}

impl RecordingTray {
    pub fn with_log(calls: Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            calls,
            ..Self::default()
        }
    }

    pub fn last_label(&self) -> Option<String> {
        self.labels.lock().unwrap().last().cloned()
    }
}

impl TrayHost for RecordingTray {
    fn set_label(&mut self, item: TrayItem, text: &str) -> anyhow::Result<()> {
        assert_eq!(item, TrayItem::ShowHide);
        self.labels.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn destroy(&mut self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push("destroy_tray");
        if self.fail_destroy {
            anyhow::bail!("tray already gone");
        }
        Ok(())
    }
}
