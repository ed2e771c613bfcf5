//! Terminal front end.
//!
//! Each invocation loads the store, replays one user action as the message
//! sequence the dialogs would produce, then prints the active panel.

mod config;
mod render;

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use config::{Cli, Command};
use log::info;
use tasknote_core::{init_logging, App, KeyValueStore, Msg, Panel, SqliteStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(cli.log_level(), log_dir).map_err(anyhow::Error::msg)?;
    }

    let store_path = cli.store_path();
    let store = SqliteStore::open(&store_path)
        .with_context(|| format!("failed to open store `{}`", store_path.display()))?;
    info!(
        "event=cli_start module=cli status=ok version={} store={}",
        tasknote_core::core_version(),
        store_path.display()
    );

    let mut app = App::start(store);
    run_command(&mut app, cli.command)?;
    print!("{}", render::render_app(&app.view()));
    Ok(())
}

fn run_command<S: KeyValueStore>(app: &mut App<S>, command: Option<Command>) -> Result<()> {
    let Some(command) = command else {
        return Ok(());
    };

    match command {
        Command::Show { panel } => app.update(Msg::SelectPanel(panel.into())),
        Command::AddTask { title } => {
            app.update(Msg::SelectPanel(Panel::Tasks));
            app.update(Msg::OpenAddTask);
            app.update(Msg::AddTaskTitleChanged(title));
            ensure!(
                app.add_task_dialog().can_submit(),
                "task title must not be blank"
            );
            app.update(Msg::SubmitAddTask);
        }
        Command::ToggleTask { id } => {
            app.update(Msg::SelectPanel(Panel::Tasks));
            if app.controller().task(id).is_none() {
                bail!("no task with id {id}");
            }
            app.update(Msg::ToggleTask(id));
        }
        Command::DeleteTask { id } => {
            app.update(Msg::SelectPanel(Panel::Tasks));
            if app.controller().task(id).is_none() {
                bail!("no task with id {id}");
            }
            app.update(Msg::DeleteTask(id));
        }
        Command::AddNote { title, content } => {
            app.update(Msg::SelectPanel(Panel::Notes));
            app.update(Msg::OpenAddNote);
            app.update(Msg::AddNoteTitleChanged(title));
            app.update(Msg::AddNoteContentChanged(content));
            ensure!(
                app.add_note_dialog().can_submit(),
                "note title must not be blank"
            );
            app.update(Msg::SubmitAddNote);
        }
        Command::EditNote { id, title, content } => {
            app.update(Msg::SelectPanel(Panel::Notes));
            app.update(Msg::EditNote(id));
            ensure!(
                app.edit_note_dialog().is_open(),
                "no note with id {id}"
            );
            app.update(Msg::EditNoteTitleChanged(title));
            if let Some(content) = content {
                app.update(Msg::EditNoteContentChanged(content));
            }
            ensure!(
                app.edit_note_dialog().can_submit(),
                "note title must not be blank"
            );
            app.update(Msg::SubmitEditNote);
        }
        Command::DeleteNote { id } => {
            app.update(Msg::SelectPanel(Panel::Notes));
            if app.controller().note(id).is_none() {
                bail!("no note with id {id}");
            }
            app.update(Msg::DeleteNote(id));
        }
    }
    Ok(())
}
