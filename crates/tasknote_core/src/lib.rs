//! Core logic for the task and note manager.
//!
//! Records live in two collections owned by [`Controller`]; every change is
//! mirrored to a [`KeyValueStore`] slot. [`App`] layers panels and dialogs on
//! top and produces a renderable [`AppViewModel`].

pub mod app;
pub mod db;
pub mod dialog;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;
pub mod view;

pub use app::{App, AppViewModel, Msg, Panel, TabView, APP_HEADING};
pub use dialog::{AddNoteDialog, AddTaskDialog, DialogPhase, DialogView, EditNoteDialog, FieldView};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use model::task::{Task, TaskId};
pub use repo::record_slot::{
    decode_slot, encode_slot, load_slot, save_slot, try_load_slot, try_save_slot, SlotError,
    NOTES_KEY, TASKS_KEY,
};
pub use service::controller::Controller;
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};
pub use view::{
    render_note_list, render_task_list, NoteCardView, NoteListView, TaskListView, TaskRowView,
    EMPTY_NOTES_MESSAGE, EMPTY_TASKS_MESSAGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
