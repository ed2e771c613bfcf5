//! Persistence adapter between record collections and the key-value store.
//!
//! # Responsibility
//! - Encode whole collections as JSON text under a named slot.
//! - Decode slots back into records with real timestamp values.
//!
//! # Invariants
//! - Load never propagates an error; malformed text yields an empty list.
//! - Save never propagates an error; failures are logged.
//! - This is the only module that reads or writes record slots.

pub mod record_slot;
