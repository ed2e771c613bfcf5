//! Entry and edit dialogs.
//!
//! # Responsibility
//! - Hold local drafts for one new or edited record.
//! - Gate submission on a non-blank trimmed title.
//! - Hand trimmed values to a caller-supplied callback.
//!
//! # Invariants
//! - Drafts can only change while the dialog is open.
//! - A blocked submit never calls its callback.
//! - Cancel never calls a callback.
//!
//! The three dialogs share one phase model: `Closed` and `Editing`.
//! Submitting is a synchronous step inside `submit`; there is no in-flight
//! state.

use crate::model::note::{Note, NoteId};

/// Lifecycle phase shared by every dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,
    Editing,
}

/// One labelled input of a rendered dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub multiline: bool,
}

/// Rendered dialog, ready for a front end to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub heading: &'static str,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub cancel_label: &'static str,
}

const CANCEL_LABEL: &str = "Cancel";

fn title_is_submittable(title: &str) -> bool {
    !title.trim().is_empty()
}

fn note_fields(title: &str, content: &str) -> Vec<FieldView> {
    vec![
        FieldView {
            label: "Title",
            placeholder: "Note title",
            value: title.to_string(),
            multiline: false,
        },
        FieldView {
            label: "Content",
            placeholder: "Write your note here...",
            value: content.to_string(),
            multiline: true,
        },
    ]
}

/// Single-field dialog creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTaskDialog {
    phase: DialogPhase,
    title: String,
}

impl AddTaskDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::Editing
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Opens the dialog. A draft left by an earlier cancel is kept.
    pub fn open(&mut self) {
        self.phase = DialogPhase::Editing;
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        if self.is_open() {
            self.title = value.into();
        }
    }

    pub fn can_submit(&self) -> bool {
        self.is_open() && title_is_submittable(&self.title)
    }

    /// Calls `on_add` with the trimmed title, clears the draft and closes.
    ///
    /// Returns `false` without side effects while submission is blocked.
    pub fn submit(&mut self, on_add: impl FnOnce(String)) -> bool {
        if !self.can_submit() {
            return false;
        }
        on_add(self.title.trim().to_string());
        self.title.clear();
        self.phase = DialogPhase::Closed;
        true
    }

    pub fn cancel(&mut self) {
        self.phase = DialogPhase::Closed;
    }

    pub fn view(&self) -> Option<DialogView> {
        self.is_open().then(|| DialogView {
            heading: "Add New Task",
            fields: vec![FieldView {
                label: "Task",
                placeholder: "What needs to be done?",
                value: self.title.clone(),
                multiline: false,
            }],
            submit_label: "Add Task",
            submit_enabled: self.can_submit(),
            cancel_label: CANCEL_LABEL,
        })
    }
}

/// Two-field dialog creating a note. Content is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddNoteDialog {
    phase: DialogPhase,
    title: String,
    content: String,
}

impl AddNoteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::Editing
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn open(&mut self) {
        self.phase = DialogPhase::Editing;
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        if self.is_open() {
            self.title = value.into();
        }
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        if self.is_open() {
            self.content = value.into();
        }
    }

    pub fn can_submit(&self) -> bool {
        self.is_open() && title_is_submittable(&self.title)
    }

    /// Calls `on_add(title, content)` with trimmed drafts, clears both and
    /// closes.
    pub fn submit(&mut self, on_add: impl FnOnce(String, String)) -> bool {
        if !self.can_submit() {
            return false;
        }
        on_add(
            self.title.trim().to_string(),
            self.content.trim().to_string(),
        );
        self.title.clear();
        self.content.clear();
        self.phase = DialogPhase::Closed;
        true
    }

    pub fn cancel(&mut self) {
        self.phase = DialogPhase::Closed;
    }

    pub fn view(&self) -> Option<DialogView> {
        self.is_open().then(|| DialogView {
            heading: "Add New Note",
            fields: note_fields(&self.title, &self.content),
            submit_label: "Add Note",
            submit_enabled: self.can_submit(),
            cancel_label: CANCEL_LABEL,
        })
    }
}

/// Dialog editing exactly one existing note.
///
/// Open while bound to a note id. Closing is the owner's call: a successful
/// submit leaves the dialog bound so the owner can end the edit session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditNoteDialog {
    bound: Option<NoteId>,
    title: String,
    content: String,
}

impl EditNoteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialogPhase {
        if self.bound.is_some() {
            DialogPhase::Editing
        } else {
            DialogPhase::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.bound.is_some()
    }

    /// Id of the note being edited.
    pub fn bound_note(&self) -> Option<NoteId> {
        self.bound
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Opens the dialog on `note`.
    ///
    /// Drafts are reset from `note` whenever the bound identity changes;
    /// unsaved edits to a previously bound note are discarded. Rebinding the
    /// note already being edited keeps the drafts.
    pub fn bind(&mut self, note: &Note) {
        if self.bound == Some(note.id) {
            return;
        }
        self.bound = Some(note.id);
        self.title = note.title.clone();
        self.content = note.content.clone();
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        if self.is_open() {
            self.title = value.into();
        }
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        if self.is_open() {
            self.content = value.into();
        }
    }

    pub fn can_submit(&self) -> bool {
        self.is_open() && title_is_submittable(&self.title)
    }

    /// Calls `on_update(id, title, content)` with trimmed drafts.
    pub fn submit(&mut self, on_update: impl FnOnce(NoteId, String, String)) -> bool {
        let Some(note_id) = self.bound.filter(|_| self.can_submit()) else {
            return false;
        };
        on_update(
            note_id,
            self.title.trim().to_string(),
            self.content.trim().to_string(),
        );
        true
    }

    /// Ends the edit session and drops the drafts.
    pub fn close(&mut self) {
        self.bound = None;
        self.title.clear();
        self.content.clear();
    }

    pub fn view(&self) -> Option<DialogView> {
        self.is_open().then(|| DialogView {
            heading: "Edit Note",
            fields: note_fields(&self.title, &self.content),
            submit_label: "Save Changes",
            submit_enabled: self.can_submit(),
            cancel_label: CANCEL_LABEL,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_task_blank_title_blocks_submit() {
        let mut dialog = AddTaskDialog::new();
        dialog.open();
        dialog.set_title("  ");

        let mut called = false;
        assert!(!dialog.can_submit());
        assert!(!dialog.submit(|_| called = true));
        assert!(!called);
        assert!(dialog.is_open());
    }

    #[test]
    fn add_task_submit_trims_clears_and_closes() {
        let mut dialog = AddTaskDialog::new();
        dialog.open();
        dialog.set_title("  Buy milk  ");

        let mut received = None;
        assert!(dialog.submit(|title| received = Some(title)));
        assert_eq!(received.as_deref(), Some("Buy milk"));
        assert_eq!(dialog.title(), "");
        assert_eq!(dialog.phase(), DialogPhase::Closed);
    }

    #[test]
    fn cancel_keeps_draft_for_next_open() {
        let mut dialog = AddNoteDialog::new();
        dialog.open();
        dialog.set_title("Draft");
        dialog.cancel();
        assert!(!dialog.is_open());

        dialog.open();
        assert_eq!(dialog.title(), "Draft");
    }

    #[test]
    fn closed_dialog_ignores_draft_edits() {
        let mut dialog = AddTaskDialog::new();
        dialog.set_title("ignored");
        assert_eq!(dialog.title(), "");
        assert!(dialog.view().is_none());
    }

    #[test]
    fn add_note_allows_empty_content() {
        let mut dialog = AddNoteDialog::new();
        dialog.open();
        dialog.set_title(" Title ");
        dialog.set_content("   ");

        let mut received = None;
        assert!(dialog.submit(|title, content| received = Some((title, content))));
        assert_eq!(
            received,
            Some(("Title".to_string(), String::new()))
        );
    }

    #[test]
    fn dialog_view_reflects_submit_state() {
        let mut dialog = AddNoteDialog::new();
        dialog.open();
        let view = dialog.view().unwrap();
        assert_eq!(view.heading, "Add New Note");
        assert!(!view.submit_enabled);

        dialog.set_title("x");
        assert!(dialog.view().unwrap().submit_enabled);
    }
}
