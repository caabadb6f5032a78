use quick_kv::clipboard::ClipboardWriter;
use std::sync::{Arc, Mutex};

/// Records every write; optionally fails instead.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("clipboard unavailable");
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
