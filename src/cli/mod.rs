//! CLI argument parsing for trivia-tui.

mod args;

pub use args::parse_args;
