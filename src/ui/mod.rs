//! UI module for trivia-tui
//!
//! This module contains the rendering functions for the TUI interface:
//! the category selector, summary cards, the two breakdown charts and the
//! loading/error status screens.

mod charts;
mod helpers;
mod render;
mod selector;
mod stats;

pub use render::draw;
