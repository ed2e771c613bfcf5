//! Command-line and environment configuration.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tasknote_core::{default_log_level, Panel};
use uuid::Uuid;

const DEFAULT_STORE_FILE_NAME: &str = "tasknote_store.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "tasknote", version, about = "Manage tasks and notes kept in a local store")]
pub struct Cli {
    /// SQLite file holding the `todos` and `notes` slots.
    #[arg(long, env = "TASKNOTE_STORE_PATH")]
    pub store: Option<PathBuf>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "TASKNOTE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "TASKNOTE_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one panel.
    Show {
        #[arg(long, value_enum, default_value_t = PanelArg::Tasks)]
        panel: PanelArg,
    },
    AddTask {
        title: String,
    },
    ToggleTask {
        id: Uuid,
    },
    DeleteTask {
        id: Uuid,
    },
    AddNote {
        title: String,
        #[arg(default_value = "")]
        content: String,
    },
    /// Replace a note's title; content is kept unless given.
    EditNote {
        id: Uuid,
        title: String,
        content: Option<String>,
    },
    DeleteNote {
        id: Uuid,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PanelArg {
    Tasks,
    Notes,
}

impl From<PanelArg> for Panel {
    fn from(value: PanelArg) -> Self {
        match value {
            PanelArg::Tasks => Panel::Tasks,
            PanelArg::Notes => Panel::Notes,
        }
    }
}

impl Cli {
    /// Store path; falls back to a file in the system temp directory.
    pub fn store_path(&self) -> PathBuf {
        self.store
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_STORE_FILE_NAME))
    }

    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or(default_log_level())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, PanelArg};
    use clap::Parser;

    #[test]
    fn show_is_parsed_with_panel() {
        let cli = Cli::try_parse_from(["tasknote", "show", "--panel", "notes"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Show {
                panel: PanelArg::Notes
            })
        ));
    }

    #[test]
    fn note_content_defaults_to_empty() {
        let cli = Cli::try_parse_from(["tasknote", "add-note", "Title"]).unwrap();
        match cli.command {
            Some(Command::AddNote { title, content }) => {
                assert_eq!(title, "Title");
                assert_eq!(content, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn edit_note_content_is_optional() {
        let cli = Cli::try_parse_from([
            "tasknote",
            "edit-note",
            "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "Title",
        ])
        .unwrap();
        match cli.command {
            Some(Command::EditNote { title, content, .. }) => {
                assert_eq!(title, "Title");
                assert_eq!(content, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ids_must_be_uuids() {
        assert!(Cli::try_parse_from(["tasknote", "toggle-task", "42"]).is_err());
    }

    #[test]
    fn store_path_falls_back_to_temp_dir() {
        let mut cli = Cli::try_parse_from(["tasknote", "show"]).unwrap();
        cli.store = None;
        assert!(cli.store_path().starts_with(std::env::temp_dir()));
        assert!(cli.store_path().ends_with("tasknote_store.sqlite3"));
    }
}
