use chrono::FixedOffset;
use tasknote_core::{App, DialogPhase, MemoryStore, Msg, Panel, TaskListView};

fn app() -> App<MemoryStore> {
    App::start_with_offset(MemoryStore::new(), FixedOffset::east_opt(0).unwrap())
}

fn add_task(app: &mut App<MemoryStore>, title: &str) {
    app.update(Msg::OpenAddTask);
    app.update(Msg::AddTaskTitleChanged(title.to_string()));
    app.update(Msg::SubmitAddTask);
}

fn add_note(app: &mut App<MemoryStore>, title: &str, content: &str) {
    app.update(Msg::OpenAddNote);
    app.update(Msg::AddNoteTitleChanged(title.to_string()));
    app.update(Msg::AddNoteContentChanged(content.to_string()));
    app.update(Msg::SubmitAddNote);
}

#[test]
fn initial_view_shows_tasks_panel_with_placeholders() {
    let view = app().view();

    assert_eq!(view.heading, "Task & Note Manager");
    assert_eq!(view.active_panel, Panel::Tasks);
    assert_eq!(view.create_label, "New Task");
    assert_eq!(
        view.tabs.iter().map(|tab| tab.label).collect::<Vec<_>>(),
        vec!["Tasks", "Notes"]
    );
    assert!(matches!(view.tasks, TaskListView::Empty { .. }));
    assert!(view.add_task_dialog.is_none());
}

#[test]
fn switching_panels_changes_create_trigger() {
    let mut app = app();
    app.update(Msg::SelectPanel(Panel::Notes));

    let view = app.view();
    assert_eq!(view.create_label, "New Note");
    assert!(view.tabs[1].active);
}

#[test]
fn whitespace_task_title_is_blocked() {
    let mut app = app();
    add_task(&mut app, "  ");

    let view = app.view();
    assert!(app.controller().tasks().is_empty());
    let dialog = view.add_task_dialog.expect("dialog stays open");
    assert!(!dialog.submit_enabled);
}

#[test]
fn padded_task_title_creates_one_trimmed_task() {
    let mut app = app();
    add_task(&mut app, "  Buy milk  ");

    let tasks = app.controller().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(app.add_task_dialog().phase(), DialogPhase::Closed);
    assert_eq!(app.add_task_dialog().title(), "");
}

#[test]
fn row_actions_toggle_and_delete() {
    let mut app = app();
    add_task(&mut app, "one");
    let id = app.controller().tasks()[0].id;

    app.update(Msg::ToggleTask(id));
    assert!(app.view().tasks.rows()[0].struck_through);

    app.update(Msg::DeleteTask(id));
    assert!(app.controller().tasks().is_empty());
}

#[test]
fn cancel_add_note_creates_nothing() {
    let mut app = app();
    app.update(Msg::OpenAddNote);
    app.update(Msg::AddNoteTitleChanged("Draft".to_string()));
    app.update(Msg::CancelAddNote);

    assert!(app.controller().notes().is_empty());
    assert!(app.view().add_note_dialog.is_none());
}

#[test]
fn edit_note_saves_and_closes_session() {
    let mut app = app();
    add_note(&mut app, "A", "x");
    let note = app.controller().notes()[0].clone();

    app.update(Msg::EditNote(note.id));
    let dialog = app.view().edit_note_dialog.expect("edit dialog open");
    assert_eq!(dialog.fields[0].value, "A");
    assert_eq!(dialog.fields[1].value, "x");

    app.update(Msg::EditNoteTitleChanged(" B ".to_string()));
    app.update(Msg::EditNoteContentChanged("y".to_string()));
    app.update(Msg::SubmitEditNote);

    let edited = &app.controller().notes()[0];
    assert_eq!(edited.id, note.id);
    assert_eq!(edited.created_at, note.created_at);
    assert_eq!(edited.title, "B");
    assert_eq!(edited.content, "y");
    assert!(app.view().edit_note_dialog.is_none());
}

#[test]
fn blank_edit_title_blocks_save() {
    let mut app = app();
    add_note(&mut app, "A", "x");
    let id = app.controller().notes()[0].id;

    app.update(Msg::EditNote(id));
    app.update(Msg::EditNoteTitleChanged("   ".to_string()));
    app.update(Msg::SubmitEditNote);

    assert_eq!(app.controller().notes()[0].title, "A");
    assert_eq!(app.edit_note_dialog().bound_note(), Some(id));
}

#[test]
fn switching_edited_note_discards_unsaved_drafts() {
    let mut app = app();
    add_note(&mut app, "First", "1");
    add_note(&mut app, "Second", "2");
    let first = app.controller().notes()[0].id;
    let second = app.controller().notes()[1].id;

    app.update(Msg::EditNote(first));
    app.update(Msg::EditNoteTitleChanged("unsaved".to_string()));
    app.update(Msg::EditNote(second));

    assert_eq!(app.edit_note_dialog().title(), "Second");
    assert_eq!(app.edit_note_dialog().content(), "2");

    app.update(Msg::CancelEditNote);
    assert_eq!(app.controller().note(first).unwrap().title, "First");
}

#[test]
fn deleting_edited_note_ends_edit_session() {
    let mut app = app();
    add_note(&mut app, "Doomed", "body");
    add_note(&mut app, "Other", "");
    let doomed = app.controller().notes()[0].id;
    let other = app.controller().notes()[1].id;

    app.update(Msg::EditNote(doomed));
    app.update(Msg::DeleteNote(other));
    assert_eq!(app.edit_note_dialog().bound_note(), Some(doomed));

    app.update(Msg::DeleteNote(doomed));
    assert!(!app.edit_note_dialog().is_open());
    assert_eq!(app.edit_note_dialog().title(), "");
    assert!(app.view().edit_note_dialog.is_none());
    assert!(app.controller().notes().is_empty());
}

#[test]
fn edit_of_unknown_note_is_ignored() {
    let mut app = app();
    app.update(Msg::EditNote(uuid::Uuid::new_v4()));
    assert!(!app.edit_note_dialog().is_open());
}

#[test]
fn reload_restores_rendered_lists() {
    let mut app = app();
    add_task(&mut app, "persisted");
    add_note(&mut app, "note", "body");

    let store = app.into_controller().into_store();
    let reloaded = App::start_with_offset(store, FixedOffset::east_opt(0).unwrap());
    let view = reloaded.view();
    assert_eq!(view.tasks.rows()[0].title, "persisted");
    assert_eq!(view.notes.cards()[0].content, "body");
}
