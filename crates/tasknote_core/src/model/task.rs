//! Task record.
//!
//! # Invariants
//! - New tasks start with `completed == false`.
//! - The only mutation after creation is toggling `completed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;

/// Stable identifier of a task.
pub type TaskId = Uuid;

/// A short actionable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    #[serde(with = "crate::model::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates an open task with a fresh id, stamped with the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, false, timestamp::now())
    }

    /// Creates a task from known parts.
    ///
    /// Used by tests and import paths where identity and time already exist.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            created_at,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
