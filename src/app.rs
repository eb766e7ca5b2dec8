//! Application state and core logic for the trivia TUI.
//!
//! `App` holds the load state, the category filter and the two derived
//! breakdown tables. The tables are recomputed by explicit calls whenever
//! the snapshot or the selected category changes.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::breakdown::{
    category_breakdown, difficulty_breakdown, filtered_questions, CategoryCount, DifficultyCount,
};
use crate::entities::decode_entities;
use crate::filter::{category_options, CategoryFilter, CategoryOption};
use crate::models::{LoadState, Snapshot};

/// How often the loading animation advances
const ANIMATION_INTERVAL: Duration = Duration::from_millis(120);

/// Application state
pub struct App {
    pub load_state: LoadState,
    pub filter: CategoryFilter,
    // Selector entries: "All Categories" + distinct raw categories
    pub category_options: Vec<CategoryOption>,
    // Derived tables feeding the two charts
    pub category_counts: Vec<CategoryCount>,
    pub difficulty_counts: Vec<DifficultyCount>,
    // Where the questions come from (shown in the header)
    pub source: String,
    // Elapsed time tracking for the loading screen
    pub load_start: Instant,
    pub load_finished: Option<Duration>,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(source: impl Into<String>) -> Self {
        let now = Instant::now();
        Self {
            load_state: LoadState::Loading,
            filter: CategoryFilter::new(),
            category_options: Vec::new(),
            category_counts: Vec::new(),
            difficulty_counts: Vec::new(),
            source: source.into(),
            load_start: now,
            load_finished: None,
            animation_tick: 0,
            last_animation_update: now,
            should_quit: false,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.load_state.snapshot()
    }

    /// Apply the outcome of the fetch. Only the first transition out of
    /// `Loading` is accepted; every other state is terminal.
    pub fn apply_load_state(&mut self, state: LoadState) {
        if !self.load_state.is_loading() {
            debug!(current = self.load_state.label(), "ignoring late load result");
            return;
        }

        self.load_finished = Some(self.load_start.elapsed());
        info!(state = state.label(), "load finished");
        self.load_state = state;
        self.filter.reset();
        self.recompute_all();
    }

    /// Write the selected category and refresh the difficulty breakdown.
    pub fn set_category(&mut self, value: impl Into<String>) {
        self.filter.set_category(value);
        self.recompute_difficulty();
    }

    fn recompute_all(&mut self) {
        match self.load_state.snapshot() {
            Some(snapshot) => {
                self.category_options = category_options(snapshot);
                self.category_counts = category_breakdown(snapshot);
            }
            None => {
                self.category_options.clear();
                self.category_counts.clear();
            }
        }
        self.recompute_difficulty();
    }

    fn recompute_difficulty(&mut self) {
        self.difficulty_counts = match self.load_state.snapshot() {
            Some(snapshot) => difficulty_breakdown(snapshot, self.filter.selected()),
            None => Vec::new(),
        };
    }

    /// Index of the current selection in `category_options` (0 if the
    /// selection is not one of the options)
    pub fn selected_option_index(&self) -> usize {
        self.category_options
            .iter()
            .position(|o| o.value == self.filter.selected())
            .unwrap_or(0)
    }

    /// Display label of the current selection
    pub fn selected_label(&self) -> String {
        match self
            .category_options
            .iter()
            .find(|o| o.value == self.filter.selected())
        {
            Some(option) => option.label.clone(),
            None => decode_entities(self.filter.selected()),
        }
    }

    fn select_option(&mut self, index: usize) {
        let Some(option) = self.category_options.get(index) else {
            return;
        };
        if option.value != self.filter.selected() {
            let value = option.value.clone();
            self.set_category(value);
        }
    }

    pub fn select_next_category(&mut self) {
        let last = self.category_options.len().saturating_sub(1);
        let next = (self.selected_option_index() + 1).min(last);
        self.select_option(next);
    }

    pub fn select_previous_category(&mut self) {
        let prev = self.selected_option_index().saturating_sub(1);
        self.select_option(prev);
    }

    pub fn select_first_category(&mut self) {
        self.select_option(0);
    }

    pub fn select_last_category(&mut self) {
        self.select_option(self.category_options.len().saturating_sub(1));
    }

    /// Total questions in the snapshot and how many pass the filter
    pub fn question_counts(&self) -> (usize, usize) {
        match self.snapshot() {
            Some(snapshot) => (
                snapshot.len(),
                filtered_questions(snapshot, self.filter.selected()).count(),
            ),
            None => (0, 0),
        }
    }

    /// Time spent loading, frozen once the fetch completes
    pub fn load_elapsed(&self) -> Duration {
        self.load_finished
            .unwrap_or_else(|| self.load_start.elapsed())
    }

    /// Advance the loading animation if enough time has passed
    pub fn tick(&mut self, now: Instant) {
        if now.duration_since(self.last_animation_update) >= ANIMATION_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = now;
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ if self.snapshot().is_none() => {}
            KeyCode::Down | KeyCode::Char('j') => self.select_next_category(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_category(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first_category(),
            KeyCode::End | KeyCode::Char('G') => self.select_last_category(),
            KeyCode::Char('a') => self.select_first_category(),
            _ => {}
        }
    }
}
