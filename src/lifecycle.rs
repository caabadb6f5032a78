use crate::hotkey::HotkeyHost;
use crate::tray::TrayHost;
use crate::visibility::VisibilityCoordinator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    NotStarted,
    Running,
    TornDown,
}

/// What came up during [`Integrations::start`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StartReport {
    pub hotkey: bool,
    pub tray: bool,
    pub listeners: bool,
}

/// Which teardown steps succeeded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TeardownReport {
    pub hotkey_unregistered: bool,
    pub listeners_detached: bool,
    pub tray_destroyed: bool,
}

/// Process-lifetime hookups: the global hotkey, the tray and the window
/// listeners (close interception and focus tracking).
pub struct Integrations {
    stage: Stage,
    hotkeys: Option<Box<dyn HotkeyHost>>,
    listeners_attached: bool,
    report: StartReport,
}

impl Default for Integrations {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrations {
    pub fn new() -> Self {
        Self {
            stage: Stage::NotStarted,
            hotkeys: None,
            listeners_attached: false,
            report: StartReport::default(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.stage != Stage::NotStarted
    }

    pub fn listeners_attached(&self) -> bool {
        self.listeners_attached
    }

    /// Set everything up once. Later calls return the first report without
    /// running the factories again. Failures are logged and leave the
    /// corresponding feature off.
    pub fn start<H, T>(
        &mut self,
        combo: &str,
        hotkeys: H,
        tray: T,
        coordinator: &mut VisibilityCoordinator,
    ) -> StartReport
    where
        H: FnOnce() -> anyhow::Result<Box<dyn HotkeyHost>>,
        T: FnOnce() -> anyhow::Result<Box<dyn TrayHost>>,
    {
        if self.stage != Stage::NotStarted {
            tracing::debug!("integrations already initialized");
            return self.report;
        }
        self.stage = Stage::Running;

        match tray() {
            Ok(tray) => {
                coordinator.attach_tray(tray);
                self.report.tray = true;
            }
            Err(e) => tracing::error!(error = %e, "tray initialization failed"),
        }

        match hotkeys() {
            Ok(mut host) => match host.register(combo) {
                Ok(_) => {
                    self.hotkeys = Some(host);
                    self.report.hotkey = true;
                }
                Err(e) => tracing::error!(error = %e, combo = %combo, "hotkey registration failed"),
            },
            Err(e) => tracing::error!(error = %e, "hotkey manager unavailable"),
        }

        self.listeners_attached = true;
        self.report.listeners = true;
        tracing::info!(
            hotkey = self.report.hotkey,
            tray = self.report.tray,
            "integrations started"
        );
        self.report
    }

    /// Unregister the hotkey, detach the window listeners, destroy the tray.
    /// Each step runs regardless of the others failing. Only the first call
    /// does anything.
    pub fn teardown(&mut self, coordinator: &mut VisibilityCoordinator) -> TeardownReport {
        let mut report = TeardownReport::default();
        if self.stage != Stage::Running {
            return report;
        }
        self.stage = Stage::TornDown;

        match self.hotkeys.take() {
            Some(mut host) => match host.unregister_all() {
                Ok(()) => report.hotkey_unregistered = true,
                Err(e) => tracing::warn!(error = %e, "failed to unregister hotkeys"),
            },
            None => report.hotkey_unregistered = true,
        }

        self.listeners_attached = false;
        report.listeners_detached = true;

        match coordinator.detach_tray() {
            Ok(()) => report.tray_destroyed = true,
            Err(e) => tracing::warn!(error = %e, "failed to destroy tray"),
        }

        tracing::info!(?report, "integrations torn down");
        report
    }
}
