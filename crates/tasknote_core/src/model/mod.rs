//! Record types for tasks and notes.
//!
//! # Responsibility
//! - Define the two persisted record shapes and their lifecycle helpers.
//! - Own the wire format of `createdAt` timestamps.
//!
//! # Invariants
//! - `id` is generated once at creation and never reused or mutated.
//! - `created_at` is set once at creation and never changed.

pub mod note;
pub mod task;
pub mod timestamp;
