//! Pure view construction for the task and note panels.
//!
//! # Responsibility
//! - Turn a collection snapshot into a display list.
//! - Format creation timestamps for display.
//!
//! # Invariants
//! - Rendering never mutates its input; ordering is recomputed on every call.
//! - Tasks: incomplete first, then newest `created_at` first.
//! - Notes: newest `created_at` first, no secondary key.

use crate::model::note::{Note, NoteId};
use crate::model::task::{Task, TaskId};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

pub const EMPTY_TASKS_MESSAGE: &str = "No tasks yet. Add your first task to get started!";
pub const EMPTY_NOTES_MESSAGE: &str = "No notes yet. Add your first note to get started!";

const TASK_TIMESTAMP_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";
const NOTE_DATE_FORMAT: &str = "%b %-d, %Y";

/// Rendered task panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListView {
    Empty { message: &'static str },
    Rows(Vec<TaskRowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowView {
    pub id: TaskId,
    pub title: String,
    /// State of the row's toggle control.
    pub completed: bool,
    /// Title is drawn struck through.
    pub struck_through: bool,
    pub created_label: String,
}

/// Rendered note panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteListView {
    Empty { message: &'static str },
    Cards(Vec<NoteCardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCardView {
    pub id: NoteId,
    pub title: String,
    /// Full content; embedded line breaks are kept.
    pub content: String,
    pub created_label: String,
}

impl TaskListView {
    pub fn rows(&self) -> &[TaskRowView] {
        match self {
            Self::Empty { .. } => &[],
            Self::Rows(rows) => rows,
        }
    }
}

impl NoteListView {
    pub fn cards(&self) -> &[NoteCardView] {
        match self {
            Self::Empty { .. } => &[],
            Self::Cards(cards) => cards,
        }
    }
}

/// Display order for tasks. Equal keys keep their input order.
pub fn sorted_tasks(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted = tasks.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    sorted
}

/// Display order for notes.
pub fn sorted_notes(notes: &[Note]) -> Vec<&Note> {
    let mut sorted = notes.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

pub fn render_task_list<Tz>(tasks: &[Task], tz: &Tz) -> TaskListView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if tasks.is_empty() {
        return TaskListView::Empty {
            message: EMPTY_TASKS_MESSAGE,
        };
    }

    let rows = sorted_tasks(tasks)
        .into_iter()
        .map(|task| TaskRowView {
            id: task.id,
            title: task.title.clone(),
            completed: task.completed,
            struck_through: task.completed,
            created_label: format_task_timestamp(&task.created_at, tz),
        })
        .collect();
    TaskListView::Rows(rows)
}

pub fn render_note_list<Tz>(notes: &[Note], tz: &Tz) -> NoteListView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if notes.is_empty() {
        return NoteListView::Empty {
            message: EMPTY_NOTES_MESSAGE,
        };
    }

    let cards = sorted_notes(notes)
        .into_iter()
        .map(|note| NoteCardView {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
            created_label: format_note_date(&note.created_at, tz),
        })
        .collect();
    NoteListView::Cards(cards)
}

/// `Jan 5, 2024 at 3:07 PM`
pub fn format_task_timestamp<Tz>(value: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value
        .with_timezone(tz)
        .format(TASK_TIMESTAMP_FORMAT)
        .to_string()
}

/// `Jan 5, 2024`
pub fn format_note_date<Tz>(value: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.with_timezone(tz).format(NOTE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, hour, minute, 0).unwrap()
    }

    #[test]
    fn task_timestamp_uses_twelve_hour_clock() {
        assert_eq!(format_task_timestamp(&at(15, 7), &Utc), "Jan 5, 2024 at 3:07 PM");
        assert_eq!(format_task_timestamp(&at(0, 30), &Utc), "Jan 5, 2024 at 12:30 AM");
    }

    #[test]
    fn note_date_follows_display_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_note_date(&at(20, 0), &Utc), "Jan 5, 2024");
        assert_eq!(format_note_date(&at(20, 0), &tokyo), "Jan 6, 2024");
    }

    #[test]
    fn completed_rows_are_struck_through() {
        let mut task = Task::new("done");
        task.toggle();
        let view = render_task_list(&[task], &Utc);
        assert!(view.rows()[0].struck_through);
        assert!(view.rows()[0].completed);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let a = Task::with_id(uuid::Uuid::new_v4(), "a", false, at(9, 0));
        let b = Task::with_id(uuid::Uuid::new_v4(), "b", false, at(9, 0));
        let order = sorted_tasks(&[a.clone(), b.clone()])
            .into_iter()
            .map(|task| task.id)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![a.id, b.id]);
    }
}
