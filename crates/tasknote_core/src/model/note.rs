//! Note record.
//!
//! # Invariants
//! - Editing replaces `title` and `content` only; `id` and `created_at`
//!   survive every edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;

/// Stable identifier of a note.
pub type NoteId = Uuid;

/// A titled free-form text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// May be empty. Embedded line breaks are kept verbatim.
    pub content: String,
    #[serde(with = "crate::model::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note with a fresh id, stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, content, timestamp::now())
    }

    /// Creates a note from known parts.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at,
        }
    }

    /// Replaces title and content in place.
    pub fn edit(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }
}
