use auto_launch::{AutoLaunch, AutoLaunchBuilder};

/// Launch-on-login switch.
pub trait AutostartHost {
    fn is_enabled(&self) -> anyhow::Result<bool>;
    fn enable(&mut self) -> anyhow::Result<()>;
    fn disable(&mut self) -> anyhow::Result<()>;
}

pub struct LoginItem {
    inner: AutoLaunch,
}

impl LoginItem {
    /// Register the currently running executable under `app_name`.
    pub fn for_current_exe(app_name: &str) -> anyhow::Result<Self> {
        let exe = std::env::current_exe()?;
        let path = exe.to_string_lossy().to_string();
        let inner = AutoLaunchBuilder::new()
            .set_app_name(app_name)
            .set_app_path(&path)
            .set_use_launch_agent(true)
            .build()?;
        Ok(Self { inner })
    }
}

impl AutostartHost for LoginItem {
    fn is_enabled(&self) -> anyhow::Result<bool> {
        Ok(self.inner.is_enabled()?)
    }

    fn enable(&mut self) -> anyhow::Result<()> {
        Ok(self.inner.enable()?)
    }

    fn disable(&mut self) -> anyhow::Result<()> {
        Ok(self.inner.disable()?)
    }
}

/// Last known autostart state plus the host used to change it.
pub struct AutostartToggle {
    host: Option<Box<dyn AutostartHost>>,
    enabled: bool,
}

impl AutostartToggle {
    pub fn new(host: Box<dyn AutostartHost>) -> Self {
        let enabled = host.is_enabled().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to read autostart state");
            false
        });
        Self {
            host: Some(host),
            enabled,
        }
    }

    /// A toggle with no backing host; always reports disabled.
    pub fn unavailable() -> Self {
        Self {
            host: None,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_available(&self) -> bool {
        self.host.is_some()
    }

    /// Flip the state. On failure the previous state is kept.
    pub fn toggle(&mut self) -> bool {
        let Some(host) = self.host.as_mut() else {
            tracing::warn!("autostart is unavailable");
            return self.enabled;
        };
        let result = if self.enabled {
            host.disable()
        } else {
            host.enable()
        };
        match result {
            Ok(()) => {
                self.enabled = !self.enabled;
                tracing::info!(enabled = self.enabled, "autostart updated");
            }
            Err(e) => tracing::error!(error = %e, "failed to toggle autostart"),
        }
        self.enabled
    }
}
