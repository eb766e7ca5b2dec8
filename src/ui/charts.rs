//! Bar chart rendering for the two breakdowns

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use super::helpers::truncate_label;
use crate::breakdown::{CategoryCount, DifficultyCount};
use crate::theme::{
    BAR_CATEGORY, BAR_DIFFICULTY, BG_PRIMARY, BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_SECONDARY,
};

/// Panel block shared by both charts
pub fn panel_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .title_style(
            Style::default()
                .fg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(BG_SECONDARY))
}

/// Horizontal bars, one per category, so long category names stay readable
pub fn render_category_chart(area: Rect, counts: &[CategoryCount], frame: &mut Frame) {
    let block = panel_block(" Questions by Category ".to_string());

    if counts.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No categories",
            Style::default().fg(TEXT_MUTED),
        )))
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    // Leave at least two thirds of the width for the bars themselves
    let label_width = (area.width / 3).max(8) as usize;

    let bars: Vec<Bar> = counts
        .iter()
        .map(|c| {
            Bar::default()
                .value(c.count as u64)
                .label(Line::from(truncate_label(&c.label, label_width)))
                .text_value(c.count.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(BAR_CATEGORY))
        .value_style(Style::default().fg(BG_PRIMARY).bg(BAR_CATEGORY))
        .label_style(Style::default().fg(TEXT_SECONDARY))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Vertical bars for easy / medium / hard, titled with the active filter
pub fn render_difficulty_chart(
    area: Rect,
    counts: &[DifficultyCount],
    filter_label: &str,
    frame: &mut Frame,
) {
    let title_room = area.width.saturating_sub(30) as usize;
    let block = panel_block(format!(
        " Questions by Difficulty: {} ",
        truncate_label(filter_label, title_room.max(8))
    ));

    // Three bars with a gap of two between them
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / 3).saturating_sub(2).clamp(3, 16);

    let bars: Vec<Bar> = counts
        .iter()
        .map(|c| {
            Bar::default()
                .value(c.count as u64)
                .label(Line::from(c.level))
                .text_value(c.count.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(2)
        .bar_style(Style::default().fg(BAR_DIFFICULTY))
        .value_style(Style::default().fg(BG_PRIMARY).bg(BAR_DIFFICULTY))
        .label_style(Style::default().fg(TEXT_SECONDARY))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
