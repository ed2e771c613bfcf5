//! Slot load/save over any [`KeyValueStore`].

use crate::storage::{KeyValueStore, StoreError};
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot holding the task collection.
pub const TASKS_KEY: &str = "todos";
/// Slot holding the note collection.
pub const NOTES_KEY: &str = "notes";

/// Failure while reading, decoding, encoding or writing one slot.
#[derive(Debug)]
pub enum SlotError {
    Store(StoreError),
    /// Stored text is not a JSON array of the expected record shape.
    Malformed(serde_json::Error),
    Encode(serde_json::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed slot text: {err}"),
            Self::Encode(err) => write!(f, "failed to encode slot: {err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Malformed(err) | Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for SlotError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Decodes slot text into records.
pub fn decode_slot<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, SlotError> {
    serde_json::from_str(text).map_err(SlotError::Malformed)
}

/// Encodes records into slot text.
pub fn encode_slot<T: Serialize>(records: &[T]) -> Result<String, SlotError> {
    serde_json::to_string(records).map_err(SlotError::Encode)
}

/// Reads one slot, reporting every failure to the caller.
///
/// Returns `Ok(None)` when the slot has never been written.
pub fn try_load_slot<T, S>(store: &S, key: &str) -> Result<Option<Vec<T>>, SlotError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get_item(key)? {
        Some(text) => decode_slot(&text).map(Some),
        None => Ok(None),
    }
}

/// Reads one slot; absent or unreadable slots come back empty.
///
/// Stored text that fails to decode is left in the store untouched.
pub fn load_slot<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match try_load_slot(store, key) {
        Ok(Some(records)) => {
            debug!(
                "event=slot_load module=repo status=ok key={key} count={}",
                records.len()
            );
            records
        }
        Ok(None) => {
            debug!("event=slot_load module=repo status=empty key={key}");
            Vec::new()
        }
        Err(err) => {
            warn!("event=slot_load module=repo status=error key={key} error={err}");
            Vec::new()
        }
    }
}

/// Writes the full collection under `key`, overwriting the previous text.
pub fn try_save_slot<T, S>(store: &mut S, key: &str, records: &[T]) -> Result<(), SlotError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let text = encode_slot(records)?;
    store.set_item(key, &text)?;
    Ok(())
}

/// Fire-and-forget variant of [`try_save_slot`]; failures are only logged.
pub fn save_slot<T, S>(store: &mut S, key: &str, records: &[T])
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    match try_save_slot(store, key, records) {
        Ok(()) => debug!(
            "event=slot_save module=repo status=ok key={key} count={}",
            records.len()
        ),
        Err(err) => error!("event=slot_save module=repo status=error key={key} error={err}"),
    }
}
