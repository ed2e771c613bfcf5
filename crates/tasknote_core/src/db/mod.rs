//! SQLite file backing [`crate::storage::SqliteStore`].
//!
//! The schema is a single `local_storage` table of text slots; the
//! `user_version` pragma records which migrations have run. A file written
//! by a newer release is refused rather than downgraded.

use std::fmt;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file's `user_version` is ahead of every migration this build knows.
    SchemaFromNewerRelease { found: u32, supported: u32 },
}

impl DbError {
    /// Stable `error_code` value for `db_*` log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite_failure",
            Self::SchemaFromNewerRelease { .. } => "schema_too_new",
        }
    }
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::SchemaFromNewerRelease { found, supported } => write!(
                f,
                "store was written by a newer release (schema {found}, this build reads up to {supported})"
            ),
        }
    }
}

impl std::error::Error for DbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaFromNewerRelease { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
