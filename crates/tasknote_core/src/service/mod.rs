//! Use-case layer.
//!
//! # Responsibility
//! - Own the in-memory collections and route mutations to them.
//! - Keep views and dialogs decoupled from storage details.

pub mod controller;
