mod app;
mod breakdown;
mod cli;
mod entities;
mod error;
mod fetch;
mod filter;
mod logging;
mod models;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tokio::sync::oneshot;
use tracing::info;

use crate::app::App;
use crate::cli::parse_args;
use crate::fetch::{load_questions, HttpSource, QuestionSource};
use crate::models::LoadState;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(log_path) = logging::resolve_log_path(config.log_file.as_deref()) {
        if let Err(e) = logging::init(&log_path) {
            eprintln!("Warning: logging disabled ({}): {}", log_path.display(), e);
        }
    }

    let source = HttpSource::new(config.endpoint.clone(), config.amount);
    let mut app = App::new(source.describe());
    info!(source = %app.source, "starting trivia-tui");

    // The single fetch runs on the runtime; the UI loop picks up its result.
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let state = load_questions(&source).await;
        let _ = tx.send(state);
    });

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app, rx);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    info!("exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: oneshot::Receiver<LoadState>,
) -> io::Result<()> {
    let mut pending = Some(rx);

    while !app.should_quit {
        if let Some(rx) = pending.as_mut() {
            match rx.try_recv() {
                Ok(state) => {
                    app.apply_load_state(state);
                    pending = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    // Fetch task died without reporting
                    app.apply_load_state(LoadState::failed());
                    pending = None;
                }
            }
        }

        app.tick(Instant::now());
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
