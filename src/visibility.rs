use crate::tray::{TrayHost, TrayItem};
use crate::window::WindowHost;
use std::time::{Duration, Instant};

pub const HIDE_LABEL: &str = "Hide Window";
pub const SHOW_LABEL: &str = "Show Window";

/// Lock-out after a toggle, absorbing key repeat and the same request
/// arriving from several sources.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchState {
    Idle,
    Busy { until: Instant },
}

/// Single-flight guard for toggles.
///
/// Acquiring stamps the release deadline before any window call runs, so a
/// toggle that fails half way cannot keep the latch held.
#[derive(Debug, Clone, Copy)]
pub struct ToggleLatch {
    state: LatchState,
    settle: Duration,
}

impl ToggleLatch {
    pub fn new(settle: Duration) -> Self {
        Self {
            state: LatchState::Idle,
            settle,
        }
    }

    pub fn state(&self) -> LatchState {
        self.state
    }

    pub fn is_busy_at(&self, now: Instant) -> bool {
        match self.state {
            LatchState::Idle => false,
            LatchState::Busy { until } => now < until,
        }
    }

    /// Returns `false` and leaves the state alone while a previous toggle is
    /// still settling.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if self.is_busy_at(now) {
            return false;
        }
        self.state = LatchState::Busy {
            until: now + self.settle,
        };
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Shown,
    Hidden,
    /// Another toggle is still settling.
    Dropped,
    /// A window call failed; the error was logged.
    Failed,
}

/// Owns the show/hide state machine for the main window and keeps the tray
/// label in sync with it.
pub struct VisibilityCoordinator {
    window: Box<dyn WindowHost>,
    tray: Option<Box<dyn TrayHost>>,
    label: &'static str,
    latch: ToggleLatch,
}

impl VisibilityCoordinator {
    pub fn new(window: Box<dyn WindowHost>, settle: Duration) -> Self {
        let visible = window.is_visible().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not query window visibility");
            true
        });
        Self {
            window,
            tray: None,
            label: if visible { HIDE_LABEL } else { SHOW_LABEL },
            latch: ToggleLatch::new(settle),
        }
    }

    /// Attach the tray and push the current label to it.
    pub fn attach_tray(&mut self, tray: Box<dyn TrayHost>) {
        self.tray = Some(tray);
        let label = self.label;
        self.set_label(label);
    }

    /// Remove and destroy the tray.
    pub fn detach_tray(&mut self) -> anyhow::Result<()> {
        match self.tray.take() {
            Some(mut tray) => tray.destroy(),
            None => Ok(()),
        }
    }

    pub fn has_tray(&self) -> bool {
        self.tray.is_some()
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn latch(&self) -> &ToggleLatch {
        &self.latch
    }

    pub fn is_busy_at(&self, now: Instant) -> bool {
        self.latch.is_busy_at(now)
    }

    pub fn toggle(&mut self) -> ToggleOutcome {
        self.toggle_at(Instant::now())
    }

    /// Show the window if it is hidden or minimized, hide it otherwise.
    pub fn toggle_at(&mut self, now: Instant) -> ToggleOutcome {
        if !self.latch.try_acquire(now) {
            tracing::debug!("toggle dropped; previous toggle still settling");
            return ToggleOutcome::Dropped;
        }
        match self.run_toggle() {
            Ok(outcome) => {
                tracing::debug!(?outcome, "window toggled");
                outcome
            }
            Err(e) => {
                tracing::error!(error = %e, "window toggle failed");
                ToggleOutcome::Failed
            }
        }
    }

    fn run_toggle(&mut self) -> anyhow::Result<ToggleOutcome> {
        let minimized = self.window.is_minimized()?;
        let visible = self.window.is_visible()?;
        if !visible || minimized {
            self.show_sequence()?;
            Ok(ToggleOutcome::Shown)
        } else {
            self.hide_sequence()?;
            Ok(ToggleOutcome::Hidden)
        }
    }

    fn show_sequence(&mut self) -> anyhow::Result<()> {
        self.window.unminimize()?;
        self.window.show()?;
        self.window.focus()?;
        self.set_label(HIDE_LABEL);
        Ok(())
    }

    fn hide_sequence(&mut self) -> anyhow::Result<()> {
        self.window.hide()?;
        self.set_label(SHOW_LABEL);
        Ok(())
    }

    /// Closing the window always hides it, never shows it. Not gated by the
    /// toggle latch.
    pub fn hide_on_close(&mut self) {
        if let Err(e) = self.hide_sequence() {
            tracing::error!(error = %e, "failed to hide window on close");
        }
    }

    /// A focused window is a shown window; resync the label.
    pub fn on_focus_changed(&mut self, focused: bool) {
        if focused {
            self.set_label(HIDE_LABEL);
        }
    }

    fn set_label(&mut self, label: &'static str) {
        self.label = label;
        if let Some(tray) = self.tray.as_mut() {
            if let Err(e) = tray.set_label(TrayItem::ShowHide, label) {
                tracing::warn!(error = %e, "failed to update tray label");
            }
        }
    }
}
