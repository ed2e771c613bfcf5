//! Top-level view state: two panels, three dialogs, one controller.
//!
//! # Responsibility
//! - Route user messages to dialogs and controller operations.
//! - Track the active panel and the note being edited.
//! - Build the full view model from the current snapshots.
//!
//! # Invariants
//! - Only the controller mutates the collections.
//! - At most one note is being edited at a time.

use crate::dialog::{AddNoteDialog, AddTaskDialog, DialogView, EditNoteDialog};
use crate::model::note::NoteId;
use crate::model::task::TaskId;
use crate::service::controller::Controller;
use crate::storage::KeyValueStore;
use crate::view::{render_note_list, render_task_list, NoteListView, TaskListView};
use chrono::{FixedOffset, Local, Offset};

pub const APP_HEADING: &str = "Task & Note Manager";

/// Switchable panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Tasks,
    Notes,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Tasks, Panel::Notes];

    pub fn label(self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Notes => "Notes",
        }
    }

    /// Label of the panel's creation trigger.
    pub fn create_label(self) -> &'static str {
        match self {
            Self::Tasks => "New Task",
            Self::Notes => "New Note",
        }
    }
}

/// User intent delivered to [`App::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SelectPanel(Panel),
    OpenAddTask,
    AddTaskTitleChanged(String),
    SubmitAddTask,
    CancelAddTask,
    OpenAddNote,
    AddNoteTitleChanged(String),
    AddNoteContentChanged(String),
    SubmitAddNote,
    CancelAddNote,
    /// Row checkbox toggled.
    ToggleTask(TaskId),
    DeleteTask(TaskId),
    /// Card edit trigger; opens the edit dialog on this note.
    EditNote(NoteId),
    EditNoteTitleChanged(String),
    EditNoteContentChanged(String),
    SubmitEditNote,
    CancelEditNote,
    DeleteNote(NoteId),
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub panel: Panel,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub heading: &'static str,
    pub tabs: Vec<TabView>,
    pub active_panel: Panel,
    pub create_label: &'static str,
    pub tasks: TaskListView,
    pub notes: NoteListView,
    pub add_task_dialog: Option<DialogView>,
    pub add_note_dialog: Option<DialogView>,
    pub edit_note_dialog: Option<DialogView>,
}

pub struct App<S: KeyValueStore> {
    controller: Controller<S>,
    panel: Panel,
    add_task: AddTaskDialog,
    add_note: AddNoteDialog,
    edit_note: EditNoteDialog,
    display_offset: FixedOffset,
}

impl<S: KeyValueStore> App<S> {
    /// Starts the controller on `store`; timestamps display in local time.
    pub fn start(store: S) -> Self {
        Self::start_with_offset(store, Local::now().offset().fix())
    }

    pub fn start_with_offset(store: S, display_offset: FixedOffset) -> Self {
        Self {
            controller: Controller::start(store),
            panel: Panel::default(),
            add_task: AddTaskDialog::new(),
            add_note: AddNoteDialog::new(),
            edit_note: EditNoteDialog::new(),
            display_offset,
        }
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    pub fn into_controller(self) -> Controller<S> {
        self.controller
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn add_task_dialog(&self) -> &AddTaskDialog {
        &self.add_task
    }

    pub fn add_note_dialog(&self) -> &AddNoteDialog {
        &self.add_note
    }

    pub fn edit_note_dialog(&self) -> &EditNoteDialog {
        &self.edit_note
    }

    /// Applies one message.
    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::SelectPanel(panel) => self.panel = panel,
            Msg::OpenAddTask => self.add_task.open(),
            Msg::AddTaskTitleChanged(value) => self.add_task.set_title(value),
            Msg::SubmitAddTask => {
                let controller = &mut self.controller;
                self.add_task.submit(|title| {
                    controller.add_task(title);
                });
            }
            Msg::CancelAddTask => self.add_task.cancel(),
            Msg::OpenAddNote => self.add_note.open(),
            Msg::AddNoteTitleChanged(value) => self.add_note.set_title(value),
            Msg::AddNoteContentChanged(value) => self.add_note.set_content(value),
            Msg::SubmitAddNote => {
                let controller = &mut self.controller;
                self.add_note.submit(|title, content| {
                    controller.add_note(&title, &content);
                });
            }
            Msg::CancelAddNote => self.add_note.cancel(),
            Msg::ToggleTask(id) => {
                self.controller.toggle_task(id);
            }
            Msg::DeleteTask(id) => {
                self.controller.delete_task(id);
            }
            Msg::EditNote(id) => {
                if let Some(note) = self.controller.note(id) {
                    self.edit_note.bind(note);
                }
            }
            Msg::EditNoteTitleChanged(value) => self.edit_note.set_title(value),
            Msg::EditNoteContentChanged(value) => self.edit_note.set_content(value),
            Msg::SubmitEditNote => {
                let controller = &mut self.controller;
                let saved = self.edit_note.submit(|id, title, content| {
                    controller.update_note(id, &title, &content);
                });
                if saved {
                    self.edit_note.close();
                }
            }
            Msg::CancelEditNote => self.edit_note.close(),
            Msg::DeleteNote(id) => {
                self.controller.delete_note(id);
                // The edit session cannot outlive its note.
                if self.edit_note.bound_note() == Some(id) {
                    self.edit_note.close();
                }
            }
            Msg::NoOp => {}
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            heading: APP_HEADING,
            tabs: Panel::ALL
                .iter()
                .map(|&panel| TabView {
                    panel,
                    label: panel.label(),
                    active: panel == self.panel,
                })
                .collect(),
            active_panel: self.panel,
            create_label: self.panel.create_label(),
            tasks: render_task_list(self.controller.tasks(), &self.display_offset),
            notes: render_note_list(self.controller.notes(), &self.display_offset),
            add_task_dialog: self.add_task.view(),
            add_note_dialog: self.add_note.view(),
            edit_note_dialog: self.edit_note.view(),
        }
    }
}
