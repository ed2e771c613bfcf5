//! Local key-value store abstraction.
//!
//! # Responsibility
//! - Define the string-to-string slot store the persistence adapter writes to.
//! - Provide an in-process backend and a SQLite-backed durable backend.
//!
//! # Invariants
//! - `set_item` overwrites unconditionally.
//! - A failed `set_item` leaves the previous value in place.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a store backend.
#[derive(Debug)]
pub enum StoreError {
    /// Writing `key` would grow the store past its byte quota.
    QuotaExceeded {
        key: String,
        required_bytes: usize,
        quota_bytes: usize,
    },
    /// SQLite transport or schema failure.
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded {
                key,
                required_bytes,
                quota_bytes,
            } => write!(
                f,
                "writing `{key}` needs {required_bytes} bytes, quota is {quota_bytes}"
            ),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::QuotaExceeded { .. } => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Named text slots, the shape of a browser's local storage.
pub trait KeyValueStore {
    /// Returns the text stored under `key`, if any.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> StoreResult<()>;
}
