//! Plain-text rendering of the app view model.

use tasknote_core::{AppViewModel, DialogView, NoteListView, Panel, TaskListView};

const STRIKE_ON: &str = "\u{1b}[9m";
const STRIKE_OFF: &str = "\u{1b}[0m";

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

pub fn render_app(view: &AppViewModel) -> String {
    let mut out = String::new();
    push_line(&mut out, view.heading);

    let tabs = view
        .tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.label)
            } else {
                format!(" {} ", tab.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    push_line(&mut out, format!("{tabs}    (+ {})", view.create_label));
    out.push('\n');

    match view.active_panel {
        Panel::Tasks => render_tasks(&mut out, &view.tasks),
        Panel::Notes => render_notes(&mut out, &view.notes),
    }

    for dialog in [
        &view.add_task_dialog,
        &view.add_note_dialog,
        &view.edit_note_dialog,
    ]
    .into_iter()
    .flatten()
    {
        render_dialog(&mut out, dialog);
    }
    out
}

fn render_tasks(out: &mut String, tasks: &TaskListView) {
    match tasks {
        TaskListView::Empty { message } => push_line(out, format!("  {message}")),
        TaskListView::Rows(rows) => {
            for row in rows {
                let mark = if row.completed { "x" } else { " " };
                let title = if row.struck_through {
                    format!("{STRIKE_ON}{}{STRIKE_OFF}", row.title)
                } else {
                    row.title.clone()
                };
                push_line(out, format!("[{mark}] {title}"));
                push_line(out, format!("    {}  id={}", row.created_label, row.id));
            }
        }
    }
}

fn render_notes(out: &mut String, notes: &NoteListView) {
    match notes {
        NoteListView::Empty { message } => push_line(out, format!("  {message}")),
        NoteListView::Cards(cards) => {
            for card in cards {
                push_line(out, format!("## {}", card.title));
                for line in card.content.lines() {
                    push_line(out, format!("   {line}"));
                }
                push_line(out, format!("   -- {}  id={}", card.created_label, card.id));
                out.push('\n');
            }
        }
    }
}

fn render_dialog(out: &mut String, dialog: &DialogView) {
    out.push('\n');
    push_line(out, format!("== {} ==", dialog.heading));
    for field in &dialog.fields {
        let value = if field.value.is_empty() {
            field.placeholder
        } else {
            field.value.as_str()
        };
        push_line(out, format!("{}: {value}", field.label));
    }
    let submit_state = if dialog.submit_enabled { "" } else { " (disabled)" };
    push_line(
        out,
        format!(
            "[{}] [{}{submit_state}]",
            dialog.cancel_label, dialog.submit_label
        ),
    );
}
