//! Data models for the trivia TUI
//!
//! This module contains the core data structures:
//! - Question and snapshot types parsed from the API payload
//! - The load state machine and its user-facing messages

pub mod enums;
pub mod question;

// Re-exports for convenient access
pub use enums::LoadState;
pub use question::{Question, Snapshot};
