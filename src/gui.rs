use crate::autostart::{AutostartToggle, LoginItem};
use crate::clipboard::ClipboardBridge;
use crate::entries::EntryStore;
use crate::hotkey::{GlobalHotkeys, HotkeyHost};
use crate::interaction::{FocusTarget, Interaction, KeyOutcome, SubmitOutcome};
use crate::lifecycle::Integrations;
use crate::settings::Settings;
use crate::storage::FileBlobStore;
use crate::tray::{init_tray, TrayHost};
use crate::triggers::{Trigger, TriggerQueue};
use crate::visibility::VisibilityCoordinator;
use crate::window::ViewportWindow;
use eframe::egui;

pub const APP_NAME: &str = "quick_kv";

const SEARCH_ID: &str = "search-input";
const DRAFT_KEY_ID: &str = "draft-key-input";

pub struct QuickAccessApp {
    pub interaction: Interaction,
    pub coordinator: VisibilityCoordinator,
    pub integrations: Integrations,
    pub triggers: TriggerQueue,
    pub autostart: AutostartToggle,
    pub loading: bool,
    settings: Settings,
    combo: String,
    last_focused: Option<bool>,
    last_selected: usize,
}

impl QuickAccessApp {
    pub fn new(ctx: &egui::Context, settings: Settings) -> Self {
        let blob = FileBlobStore::new(settings.data_dir());
        tracing::info!(dir = %blob.dir().display(), "using data directory");
        let store = EntryStore::load(Box::new(blob));
        let interaction = Interaction::new(store, ClipboardBridge::for_context(ctx));
        let window = ViewportWindow::new(ctx.clone(), !settings.start_hidden);
        let coordinator = VisibilityCoordinator::new(Box::new(window), settings.settle_delay());
        Self::from_parts(interaction, coordinator, settings)
    }

    /// Assemble the app from prebuilt parts. Integrations start on the first
    /// frame.
    pub fn from_parts(interaction: Interaction, coordinator: VisibilityCoordinator, settings: Settings) -> Self {
        let combo = settings.hotkey().to_string();
        Self {
            interaction,
            coordinator,
            integrations: Integrations::new(),
            triggers: TriggerQueue::new(),
            autostart: AutostartToggle::unavailable(),
            loading: true,
            settings,
            combo,
            last_focused: None,
            last_selected: 0,
        }
    }

    /// Hook up autostart, the tray and the global hotkey. Runs once; the
    /// loading indicator clears whatever the outcome.
    fn initialize(&mut self, ctx: &egui::Context) {
        if self.integrations.is_started() {
            return;
        }
        match LoginItem::for_current_exe(APP_NAME) {
            Ok(item) => self.autostart = AutostartToggle::new(Box::new(item)),
            Err(e) => tracing::error!(error = %e, "autostart unavailable"),
        }

        let combo = self.combo.clone();
        let tooltip = self.settings.tray_tooltip.clone();
        let label = self.coordinator.label();
        let hotkey_queue = self.triggers.clone();
        let tray_queue = self.triggers.clone();
        let hotkey_ctx = ctx.clone();
        let tray_ctx = ctx.clone();
        self.integrations.start(
            &combo,
            move || {
                let host = GlobalHotkeys::new(hotkey_queue, move || hotkey_ctx.request_repaint())?;
                Ok(Box::new(host) as Box<dyn HotkeyHost>)
            },
            move || -> anyhow::Result<Box<dyn TrayHost>> {
                init_tray(&tooltip, label, tray_queue, move || tray_ctx.request_repaint())
            },
            &mut self.coordinator,
        );
        self.loading = false;
    }

    pub fn handle_trigger(&mut self, ctx: &egui::Context, trigger: Trigger) {
        match trigger {
            Trigger::Hotkey | Trigger::TrayToggle => {
                self.coordinator.toggle();
            }
            Trigger::Quit => self.quit(ctx),
        }
    }

    /// Tear down integrations and close for real. With the listeners detached
    /// the close request is no longer turned into a hide.
    pub fn quit(&mut self, ctx: &egui::Context) {
        self.integrations.teardown(&mut self.coordinator);
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    /// Turn close requests into a hide and resync the tray label when the
    /// window regains focus. Inert once the listeners are detached.
    pub fn handle_window_events(&mut self, ctx: &egui::Context) {
        if !self.integrations.listeners_attached() {
            return;
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.coordinator.hide_on_close();
        }
        let focused = ctx.input(|i| i.viewport().focused);
        if focused == Some(true) && self.last_focused != Some(true) {
            self.coordinator.on_focus_changed(true);
        }
        self.last_focused = focused;
    }

    /// Route key presses through the interaction machine before any widget
    /// sees them, dropping the ones it consumed.
    fn dispatch_keys(&mut self, ctx: &egui::Context) {
        let presses: Vec<(egui::Key, egui::Modifiers)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect()
        });
        for (key, modifiers) in presses {
            if self.interaction.handle_key(key, modifiers) == KeyOutcome::Consumed {
                ctx.input_mut(|i| suppress_key(&mut i.events, key));
            }
        }
    }

    fn apply_focus_request(&mut self, ctx: &egui::Context) {
        let Some(target) = self.interaction.take_focus_request() else {
            return;
        };
        let id = match target {
            FocusTarget::Search => egui::Id::new(SEARCH_ID),
            FocusTarget::DraftKey => egui::Id::new(DRAFT_KEY_ID),
        };
        ctx.memory_mut(|m| m.request_focus(id));
        ctx.request_repaint();
    }

    fn header_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Quick Key/Value");
            ui.small(format!("Press {} to toggle", self.combo));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let text = if self.loading {
                    "Loading..."
                } else if self.autostart.is_enabled() {
                    "Enabled"
                } else {
                    "Disabled"
                };
                let enabled = !self.loading && self.autostart.is_available();
                let button = ui
                    .add_enabled(enabled, egui::Button::new(format!("⏻ {text}")))
                    .on_hover_text("Launch on startup");
                if button.clicked() {
                    self.autostart.toggle();
                }
            });
        });
    }

    fn search_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut query = self.interaction.query().to_string();
            let add_width = 60.0;
            let resp = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .id(egui::Id::new(SEARCH_ID))
                    .hint_text("Search keys or values…")
                    .desired_width(ui.available_width() - add_width),
            );
            if resp.changed() {
                self.interaction.set_query(query);
            }
            if ui.button("+ Add").on_hover_text("Add (Ctrl/Cmd+N)").clicked() {
                self.interaction.begin_add();
            }
        });
    }

    fn list_ui(&mut self, ui: &mut egui::Ui) {
        let rows: Vec<(String, String)> = self
            .interaction
            .filtered()
            .into_iter()
            .map(|e| (e.key.clone(), e.value.clone()))
            .collect();
        let selected = self.interaction.selected();
        let scroll = selected != self.last_selected;
        self.last_selected = selected;

        if rows.is_empty() {
            ui.weak("No matches.");
            return;
        }
        let mut clicked = None;
        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 120.0).max(60.0))
            .show(ui, |ui| {
                for (i, (key, value)) in rows.iter().enumerate() {
                    let active = i == selected;
                    let text = format!("{key}\n{value}");
                    let resp = ui.add_sized(
                        [ui.available_width(), 0.0],
                        egui::SelectableLabel::new(active, text),
                    );
                    if active && scroll {
                        resp.scroll_to_me(None);
                    }
                    if resp.clicked() {
                        clicked = Some(i);
                    }
                }
            });
        if let Some(i) = clicked {
            self.interaction.copy_at(i);
        }
    }

    fn add_drawer_ui(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;
        let mut cancel = false;
        let Some(draft) = self.interaction.draft_mut() else {
            return;
        };
        ui.separator();
        egui::Grid::new("add-form").num_columns(2).show(ui, |ui| {
            ui.label("Key");
            let key_resp = ui.add(
                egui::TextEdit::singleline(&mut draft.key)
                    .id(egui::Id::new(DRAFT_KEY_ID))
                    .hint_text("my_api_key"),
            );
            ui.end_row();
            ui.label("Value");
            let value_resp = ui.add(egui::TextEdit::singleline(&mut draft.value).hint_text("••••••"));
            ui.end_row();
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if enter && (key_resp.lost_focus() || value_resp.lost_focus()) {
                submit = true;
            }
        });
        ui.horizontal(|ui| {
            if ui.button("✔ Save (Enter)").clicked() {
                submit = true;
            }
            if ui.button("Cancel (Esc)").clicked() {
                cancel = true;
            }
        });
        if cancel {
            self.interaction.cancel_add();
        } else if submit && self.interaction.submit_draft() == SubmitOutcome::Rejected {
            self.interaction.begin_add();
        }
    }
}

/// Remove a consumed key press, together with the events the same keystroke
/// would otherwise produce in a text field.
fn suppress_key(events: &mut Vec<egui::Event>, key: egui::Key) {
    events.retain(|e| match e {
        egui::Event::Key { key: k, pressed: true, .. } => *k != key,
        egui::Event::Copy => key != egui::Key::C,
        egui::Event::Text(t) => !(key == egui::Key::Slash && t == "/"),
        _ => true,
    });
}

impl eframe::App for QuickAccessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.initialize(ctx);
        for trigger in self.triggers.take() {
            self.handle_trigger(ctx, trigger);
        }
        self.handle_window_events(ctx);
        self.dispatch_keys(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| self.header_ui(ui));
        egui::TopBottomPanel::bottom("hints").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("↑/↓ navigate");
                ui.small("Enter copy value");
                ui.small("Ctrl/Cmd+C copy");
                ui.small("/ focus search");
                ui.small("Ctrl/Cmd+N add");
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.search_ui(ui);
            ui.separator();
            self.list_ui(ui);
            self.add_drawer_ui(ui);
        });

        self.apply_focus_request(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.integrations.teardown(&mut self.coordinator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn suppressing_slash_drops_its_text() {
        let mut events = vec![
            key_event(egui::Key::Slash),
            egui::Event::Text("/".into()),
            egui::Event::Text("a".into()),
        ];
        suppress_key(&mut events, egui::Key::Slash);
        assert_eq!(events, vec![egui::Event::Text("a".into())]);
    }

    #[test]
    fn suppressing_copy_key_drops_copy_event() {
        let mut events = vec![key_event(egui::Key::C), egui::Event::Copy, key_event(egui::Key::A)];
        suppress_key(&mut events, egui::Key::C);
        assert_eq!(events, vec![key_event(egui::Key::A)]);
    }
}
