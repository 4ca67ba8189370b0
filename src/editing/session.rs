//! An editing session bound to a host's `value` / `on_change` pair
//!
//! The session owns its [`Document`]; the host's string is only used to
//! (re)initialize it. Every in-session edit is serialized and handed to the
//! `on_change` callback. When the host feeds a value back, it is compared
//! with the last value the two sides agreed on: an echo of our own output
//! is ignored, anything else replaces the document. Nothing is emitted for
//! values that come from the host.

use crate::core::errors::EditorResult;
use crate::core::settings::EditorSettings;
use crate::data::document::Document;
use crate::data::serialization::{parse_document, serialize_document};
use crate::editing::commands::EditCommand;
use crate::editing::edit_type::EditType;
use crate::editing::undo::UndoState;

/// Called with the new serialized document after every in-session edit
pub type ChangeCallback = Box<dyn FnMut(&str)>;

pub struct EditorSession {
    document: Document,
    settings: EditorSettings,
    undo: UndoState<Document>,
    last_edit: EditType,
    /// The value both the host and this session currently agree on
    synced_value: String,
    on_change: Option<ChangeCallback>,
}

impl EditorSession {
    /// Start a session from the host's current value
    pub fn new(value: &str, settings: EditorSettings) -> Self {
        let document = parse_document(value, &settings.grid);
        let undo = UndoState::new_sized(settings.undo_limit, document.clone());
        Self {
            document,
            settings,
            undo,
            last_edit: EditType::Normal,
            synced_value: value.to_string(),
            on_change: None,
        }
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// The current document in its serialized form
    pub fn value(&self) -> String {
        serialize_document(&self.document)
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    /// Take a value from the host
    ///
    /// Returns true when the document was replaced. The session's own
    /// output, or a value describing the same content, leaves it untouched.
    pub fn receive_value(&mut self, value: &str) -> bool {
        if value == self.synced_value {
            return false;
        }

        let incoming = parse_document(value, &self.settings.grid);
        self.synced_value = value.to_string();
        if incoming == self.document {
            log::debug!("Host value matches the current document");
            return false;
        }

        log::debug!("Host supplied a new document, resetting the editor");
        self.undo =
            UndoState::new_sized(self.settings.undo_limit, incoming.clone());
        self.document = incoming;
        self.last_edit = EditType::Normal;
        true
    }

    /// Apply one user edit and notify the host
    ///
    /// A failing command leaves the document unchanged.
    pub fn apply(&mut self, command: &EditCommand) -> EditorResult<()> {
        let mut next = self.document.clone();
        command.apply(&mut next)?;
        log::debug!("Applied {}", command);

        let edit_type = command.edit_type();
        if edit_type.needs_new_undo_group(&self.last_edit) {
            self.undo.push(next.clone());
        } else {
            self.undo.update_current(next.clone());
        }
        self.last_edit = edit_type;
        self.document = next;
        self.emit();
        Ok(())
    }

    /// Revert the last undo group; false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        let Some(state) = self.undo.undo().cloned() else {
            return false;
        };
        self.restore(state);
        true
    }

    /// Re-apply an undone group; false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        let Some(state) = self.undo.redo().cloned() else {
            return false;
        };
        self.restore(state);
        true
    }

    fn restore(&mut self, mut state: Document) {
        // Ids handed out since the snapshot stay used
        state.ids = self.document.ids.clone();
        self.document = state;
        self.last_edit = EditType::Normal;
        self.emit();
    }

    fn emit(&mut self) {
        let value = serialize_document(&self.document);
        if value == self.synced_value {
            return;
        }
        self.synced_value = value;
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.synced_value);
        }
    }
}
