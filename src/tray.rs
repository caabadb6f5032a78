use crate::triggers::TriggerQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayItem {
    ShowHide,
}

/// Tray presence with a show/hide item and a quit item.
pub trait TrayHost {
    fn set_label(&mut self, item: TrayItem, text: &str) -> anyhow::Result<()>;
    fn destroy(&mut self) -> anyhow::Result<()>;
}

pub const QUIT_LABEL: &str = "Quit";

#[cfg(any(target_os = "windows", target_os = "macos"))]
mod system {
    use super::{TrayHost, TrayItem, QUIT_LABEL};
    use crate::triggers::{Trigger, TriggerQueue};
    use tray_icon::menu::{Menu, MenuEvent, MenuItem};
    use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

    pub struct SystemTray {
        tray: Option<TrayIcon>,
        show_hide: MenuItem,
    }

    impl SystemTray {
        pub fn build(
            tooltip: &str,
            initial_label: &str,
            queue: TriggerQueue,
            on_trigger: impl Fn() + Send + Sync + 'static,
        ) -> anyhow::Result<Self> {
            let show_hide = MenuItem::new(initial_label, true, None);
            let quit = MenuItem::new(QUIT_LABEL, true, None);
            let menu = Menu::new();
            menu.append(&show_hide)?;
            menu.append(&quit)?;

            let toggle_id = show_hide.id().clone();
            let quit_id = quit.id().clone();
            MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
                if event.id == toggle_id {
                    queue.push(Trigger::TrayToggle);
                } else if event.id == quit_id {
                    queue.push(Trigger::Quit);
                } else {
                    return;
                }
                on_trigger();
            }));

            let tray = TrayIconBuilder::new()
                .with_menu(Box::new(menu))
                .with_tooltip(tooltip)
                .with_title("Quick Access")
                .with_icon(build_icon()?)
                .build()?;
            tracing::info!("tray icon created");
            Ok(Self {
                tray: Some(tray),
                show_hide,
            })
        }
    }

    impl TrayHost for SystemTray {
        fn set_label(&mut self, item: TrayItem, text: &str) -> anyhow::Result<()> {
            match item {
                TrayItem::ShowHide => self.show_hide.set_text(text),
            }
            Ok(())
        }

        fn destroy(&mut self) -> anyhow::Result<()> {
            MenuEvent::set_event_handler(None::<fn(MenuEvent)>);
            if let Some(tray) = self.tray.take() {
                tray.set_visible(false)?;
            }
            Ok(())
        }
    }

    fn build_icon() -> anyhow::Result<Icon> {
        let size = 16u32;
        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let border = x == 0 || y == 0 || x == size - 1 || y == size - 1;
                let key = (4..12).contains(&x) && (6..10).contains(&y);
                let (r, g, b) = if border || key {
                    (37, 99, 235)
                } else {
                    (243, 244, 246)
                };
                rgba.extend_from_slice(&[r, g, b, 255]);
            }
        }
        Ok(Icon::from_rgba(rgba, size, size)?)
    }
}

#[cfg(any(target_os = "windows", target_os = "macos"))]
pub use system::SystemTray;

/// Create the system tray. Platforms without tray support report an error so
/// the caller can carry on without one.
pub fn init_tray(
    tooltip: &str,
    initial_label: &str,
    queue: TriggerQueue,
    on_trigger: impl Fn() + Send + Sync + 'static,
) -> anyhow::Result<Box<dyn TrayHost>> {
    #[cfg(any(target_os = "windows", target_os = "macos"))]
    {
        let tray = SystemTray::build(tooltip, initial_label, queue, on_trigger)?;
        Ok(Box::new(tray))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let _ = (tooltip, initial_label, queue, on_trigger);
        anyhow::bail!("system tray is not supported on this platform")
    }
}
