//! Root controller owning the task and note collections.
//!
//! # Responsibility
//! - Hold both collections and the store they are mirrored to.
//! - Apply add/toggle/delete/update transformations.
//! - Mirror each changed collection to its own slot.
//!
//! # Invariants
//! - Collections are loaded exactly once, in [`Controller::start`].
//! - Startup never writes to the store.
//! - A task change saves only `TASKS_KEY`; a note change saves only `NOTES_KEY`.
//! - Operations on unknown ids change nothing and save nothing.

use crate::model::note::{Note, NoteId};
use crate::model::task::{Task, TaskId};
use crate::repo::record_slot::{load_slot, save_slot, NOTES_KEY, TASKS_KEY};
use crate::storage::KeyValueStore;
use log::{debug, info};

/// Sole owner of the task and note collections.
pub struct Controller<S: KeyValueStore> {
    store: S,
    tasks: Vec<Task>,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> Controller<S> {
    /// Loads both slots from `store` and takes ownership of it.
    pub fn start(store: S) -> Self {
        let tasks: Vec<Task> = load_slot(&store, TASKS_KEY);
        let notes: Vec<Note> = load_slot(&store, NOTES_KEY);
        info!(
            "event=controller_start module=controller status=ok tasks={} notes={}",
            tasks.len(),
            notes.len()
        );
        Self {
            store,
            tasks,
            notes,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gives the store back, e.g. to simulate a restart.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Appends an open task. The title is taken as given.
    pub fn add_task(&mut self, title: impl Into<String>) -> TaskId {
        let task = Task::new(title);
        let id = task.id;
        self.tasks.push(task);
        debug!("event=task_add module=controller status=ok id={id}");
        self.persist_tasks();
        id
    }

    /// Flips `completed` on the matching task; `false` when none matches.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_toggle module=controller status=miss id={id}");
            return false;
        };
        task.toggle();
        debug!(
            "event=task_toggle module=controller status=ok id={id} completed={}",
            task.completed
        );
        self.persist_tasks();
        true
    }

    /// Removes the matching task; `false` when none matches.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_delete module=controller status=miss id={id}");
            return false;
        }
        debug!("event=task_delete module=controller status=ok id={id}");
        self.persist_tasks();
        true
    }

    /// Appends a note with trimmed title and content.
    pub fn add_note(&mut self, title: &str, content: &str) -> NoteId {
        let note = Note::new(title.trim(), content.trim());
        let id = note.id;
        self.notes.push(note);
        debug!("event=note_add module=controller status=ok id={id}");
        self.persist_notes();
        id
    }

    /// Removes the matching note; `false` when none matches.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            debug!("event=note_delete module=controller status=miss id={id}");
            return false;
        }
        debug!("event=note_delete module=controller status=ok id={id}");
        self.persist_notes();
        true
    }

    /// Replaces title and content of the matching note.
    ///
    /// `id` and `created_at` are preserved. Returns `false` when none matches.
    pub fn update_note(&mut self, id: NoteId, title: &str, content: &str) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!("event=note_update module=controller status=miss id={id}");
            return false;
        };
        note.edit(title, content);
        debug!("event=note_update module=controller status=ok id={id}");
        self.persist_notes();
        true
    }

    fn persist_tasks(&mut self) {
        save_slot(&mut self.store, TASKS_KEY, &self.tasks);
    }

    fn persist_notes(&mut self) {
        save_slot(&mut self.store, NOTES_KEY, &self.notes);
    }
}
