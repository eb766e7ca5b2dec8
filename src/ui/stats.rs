//! Summary card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED};

/// One card: big value on top, muted caption below
fn stat_card<'a>(value: String, caption: &'a str) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let content = vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption, Style::default().fg(TEXT_MUTED))),
    ];

    Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
}

/// Render the "shown/total questions" and "categories" cards side by side
pub fn render_summary_cards(
    area: Rect,
    shown: usize,
    total: usize,
    categories: usize,
    frame: &mut Frame,
) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(
        stat_card(format!("{}/{}", shown, total), "QUESTIONS"),
        card_layout[0],
    );
    frame.render_widget(
        stat_card(format!("{}", categories), "CATEGORIES"),
        card_layout[1],
    );
}
