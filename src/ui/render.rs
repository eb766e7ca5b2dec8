//! Top-level frame layout: header, dashboard or status screen, key hints

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::charts::{render_category_chart, render_difficulty_chart};
use super::helpers::{centered_rect, format_duration, spinner_frame};
use super::selector::render_category_selector;
use super::stats::render_summary_cards;
use crate::app::App;
use crate::models::LoadState;
use crate::theme::{
    get_pulse_color, AMBER_WARNING, BG_PRIMARY, BG_SECONDARY, CYAN_DIM, CYAN_PRIMARY,
    RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
};

/// Draw the whole UI for the current app state
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Dashboard or status
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(main_layout[0], app, frame);

    match app.load_state.message() {
        Some(message) => render_status(main_layout[1], app, message, frame),
        None => render_dashboard(main_layout[1], app, frame),
    }

    render_key_hints(main_layout[2], app, frame);
}

fn render_header(area: Rect, app: &App, frame: &mut Frame) {
    let header = Line::from(vec![
        Span::styled(
            " Trivia Visualization ",
            Style::default()
                .fg(BG_PRIMARY)
                .bg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", app.source), Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_dashboard(area: Rect, app: &App, frame: &mut Frame) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    // Left: selector above summary cards
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(panels[0]);

    render_category_selector(
        left[0],
        &app.category_options,
        app.selected_option_index(),
        frame,
    );

    let (total, shown) = app.question_counts();
    render_summary_cards(left[1], shown, total, app.category_counts.len(), frame);

    // Right: category chart above difficulty chart
    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(panels[1]);

    render_category_chart(charts[0], &app.category_counts, frame);
    render_difficulty_chart(
        charts[1],
        &app.difficulty_counts,
        &app.selected_label(),
        frame,
    );
}

/// Loading, empty and error screens: a centered card with the message
fn render_status(area: Rect, app: &App, message: &str, frame: &mut Frame) {
    let (color, detail) = match &app.load_state {
        LoadState::Loading => (
            get_pulse_color(app.animation_tick, CYAN_PRIMARY, CYAN_DIM),
            format!(
                "{} {}",
                spinner_frame(app.animation_tick),
                format_duration(app.load_elapsed())
            ),
        ),
        LoadState::Empty => (AMBER_WARNING, "Press q to quit".to_string()),
        _ => (RED_ERROR, "Press q to quit".to_string()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(BG_SECONDARY));

    let content = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(detail, Style::default().fg(TEXT_MUTED))),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, centered_rect(50, 5, area));
}

fn render_key_hints(area: Rect, app: &App, frame: &mut Frame) {
    let hints = match app.load_state {
        LoadState::Ready(_) if !app.filter.is_all() => {
            " q: Quit | Up/Down: Category | Home/End: First/Last | a: All "
        }
        LoadState::Ready(_) => " q: Quit | Up/Down: Category | Home/End: First/Last ",
        _ => " q: Quit ",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(TEXT_PRIMARY).bg(BG_SECONDARY));
    frame.render_widget(bar, area);
}
