use eframe::egui;

/// Something that can place text on a clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// The OS clipboard via `arboard`.
///
/// The handle is opened on first use and kept alive afterwards; on X11 the
/// copied text only stays available while the owning handle exists.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.handle.is_none() {
            self.handle = Some(arboard::Clipboard::new()?);
        }
        match self.handle.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_string())?,
            None => anyhow::bail!("clipboard unavailable"),
        }
        Ok(())
    }
}

/// Hands the text to egui, which copies it through the windowing backend at
/// the end of the frame.
pub struct EguiClipboard {
    ctx: egui::Context,
}

impl EguiClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl ClipboardWriter for EguiClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.ctx.output_mut(|o| o.copied_text = text.to_string());
        self.ctx.request_repaint();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The primary writer succeeded.
    Copied,
    /// The primary writer failed and the fallback succeeded.
    Degraded,
    /// Both writers failed. Only logged.
    Failed,
}

pub struct ClipboardBridge {
    primary: Box<dyn ClipboardWriter>,
    fallback: Option<Box<dyn ClipboardWriter>>,
}

impl ClipboardBridge {
    pub fn new(primary: Box<dyn ClipboardWriter>, fallback: Option<Box<dyn ClipboardWriter>>) -> Self {
        Self { primary, fallback }
    }

    /// System clipboard first, egui's copy path second.
    pub fn for_context(ctx: &egui::Context) -> Self {
        Self::new(
            Box::new(SystemClipboard::new()),
            Some(Box::new(EguiClipboard::new(ctx.clone()))),
        )
    }

    pub fn copy(&mut self, text: &str) -> CopyOutcome {
        let err = match self.primary.write_text(text) {
            Ok(()) => {
                tracing::debug!(len = text.len(), "copied to clipboard");
                return CopyOutcome::Copied;
            }
            Err(e) => e,
        };
        tracing::warn!(error = %err, "clipboard write failed; trying fallback");
        let Some(fallback) = self.fallback.as_mut() else {
            tracing::error!("no clipboard fallback configured");
            return CopyOutcome::Failed;
        };
        match fallback.write_text(text) {
            Ok(()) => CopyOutcome::Degraded,
            Err(e) => {
                tracing::error!(error = %e, "clipboard fallback failed");
                CopyOutcome::Failed
            }
        }
    }
}
