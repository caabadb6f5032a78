use crate::clipboard::{ClipboardBridge, CopyOutcome};
use crate::entries::{Entry, EntryStore};
use crate::search::filter_entries;
use crate::selection::SelectionCursor;
use eframe::egui::{Key, Modifiers};

/// Staging fields of the add form. Only exists while adding.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Draft {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Adding(Draft),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Search,
    DraftKey,
}

/// Whether a key press was handled. `Consumed` keys must not reach the
/// focused widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Blank key. The form stays open with its contents.
    Rejected,
    NotAdding,
}

/// Keyboard state machine over the entry list: search, selection, copy and
/// the add form.
pub struct Interaction {
    store: EntryStore,
    query: String,
    cursor: SelectionCursor,
    mode: Mode,
    clipboard: ClipboardBridge,
    focus_request: Option<FocusTarget>,
}

impl Interaction {
    pub fn new(store: EntryStore, clipboard: ClipboardBridge) -> Self {
        Self {
            store,
            query: String::new(),
            cursor: SelectionCursor::new(),
            mode: Mode::Browsing,
            clipboard,
            focus_request: Some(FocusTarget::Search),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_adding(&self) -> bool {
        matches!(self.mode, Mode::Adding(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.mode {
            Mode::Adding(draft) => Some(draft),
            Mode::Browsing => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match &mut self.mode {
            Mode::Adding(draft) => Some(draft),
            Mode::Browsing => None,
        }
    }

    pub fn filtered(&self) -> Vec<&Entry> {
        filter_entries(self.store.entries(), &self.query)
    }

    pub fn selected(&self) -> usize {
        self.cursor.index()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.filtered().get(self.cursor.index()).copied()
    }

    pub fn take_focus_request(&mut self) -> Option<FocusTarget> {
        self.focus_request.take()
    }

    /// A fresh query always starts at the top result.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.cursor.reset();
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        let len = self.filtered().len();
        self.cursor.clamp(len);
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> KeyOutcome {
        if self.is_adding() {
            if key == Key::Escape {
                self.cancel_add();
                return KeyOutcome::Consumed;
            }
            return KeyOutcome::Ignored;
        }

        match key {
            Key::ArrowDown => {
                let len = self.filtered().len();
                self.cursor.move_by(1, len);
            }
            Key::ArrowUp => {
                let len = self.filtered().len();
                self.cursor.move_by(-1, len);
            }
            Key::Enter => {
                self.copy_selected();
            }
            Key::C if is_shortcut(modifiers) => {
                self.copy_selected();
            }
            Key::N if is_shortcut(modifiers) => self.begin_add(),
            Key::Slash => self.focus_request = Some(FocusTarget::Search),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    /// Open the add form with empty fields. Reopening an already open form
    /// only moves focus back to the key field.
    pub fn begin_add(&mut self) {
        if !self.is_adding() {
            self.mode = Mode::Adding(Draft::default());
            tracing::debug!("add form opened");
        }
        self.focus_request = Some(FocusTarget::DraftKey);
    }

    pub fn cancel_add(&mut self) {
        if self.is_adding() {
            self.mode = Mode::Browsing;
            tracing::debug!("add form cancelled");
        }
        self.focus_request = Some(FocusTarget::Search);
    }

    pub fn submit_draft(&mut self) -> SubmitOutcome {
        let Mode::Adding(draft) = &self.mode else {
            return SubmitOutcome::NotAdding;
        };
        let key = draft.key.trim().to_string();
        if key.is_empty() {
            return SubmitOutcome::Rejected;
        }
        let value = draft.value.clone();
        self.store.upsert(&key, &value);
        tracing::info!(key = %key, "entry saved");
        self.mode = Mode::Browsing;
        self.set_query(key);
        self.focus_request = Some(FocusTarget::Search);
        SubmitOutcome::Saved
    }

    pub fn copy_selected(&mut self) -> Option<CopyOutcome> {
        self.copy_at(self.cursor.index())
    }

    /// Copy the value of the filtered row at `index`. The selection does not
    /// move.
    pub fn copy_at(&mut self, index: usize) -> Option<CopyOutcome> {
        let value = self.filtered().get(index)?.value.clone();
        Some(self.clipboard.copy(&value))
    }
}

/// Ctrl or Cmd, on every platform.
fn is_shortcut(modifiers: Modifiers) -> bool {
    modifiers.ctrl || modifiers.command || modifiers.mac_cmd
}
