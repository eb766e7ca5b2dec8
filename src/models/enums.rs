//! Enums used throughout the trivia TUI
//!
//! This module contains the load state machine and the messages shown for
//! each of its non-ready states.

use super::Snapshot;

/// Shown while the single fetch is in flight
pub const LOADING_MESSAGE: &str = "Loading...";

/// Shown for transport failures and malformed payloads alike
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data";

/// Shown when the API returned zero questions
pub const EMPTY_MESSAGE: &str = "No data available. Please try again later.";

/// Lifecycle of the session's only fetch. Every state other than `Loading`
/// is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Snapshot),
    Empty,
    Error(String),
}

impl LoadState {
    pub fn failed() -> Self {
        LoadState::Error(LOAD_FAILED_MESSAGE.to_string())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            LoadState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Message to show instead of the charts, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            LoadState::Loading => Some(LOADING_MESSAGE),
            LoadState::Ready(_) => None,
            LoadState::Empty => Some(EMPTY_MESSAGE),
            LoadState::Error(message) => Some(message),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Ready(_) => "ready",
            LoadState::Empty => "empty",
            LoadState::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_default_is_loading() {
        assert_eq!(LoadState::default(), LoadState::Loading);
        assert!(LoadState::default().is_loading());
    }

    #[test]
    fn test_load_state_messages() {
        assert_eq!(LoadState::Loading.message(), Some("Loading..."));
        assert_eq!(
            LoadState::Empty.message(),
            Some("No data available. Please try again later.")
        );
        assert_eq!(LoadState::failed().message(), Some("Failed to load data"));
        assert_eq!(LoadState::Ready(Snapshot::default()).message(), None);
    }

    #[test]
    fn test_load_state_snapshot_only_when_ready() {
        assert!(LoadState::Loading.snapshot().is_none());
        assert!(LoadState::Empty.snapshot().is_none());
        assert!(LoadState::Ready(Snapshot::default()).snapshot().is_some());
    }

    #[test]
    fn test_load_state_label() {
        assert_eq!(LoadState::Loading.label(), "loading");
        assert_eq!(LoadState::failed().label(), "error");
    }
}
