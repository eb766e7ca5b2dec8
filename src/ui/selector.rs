//! Category filter selector rendering

use ratatui::{
    prelude::*,
    widgets::{List, ListItem, ListState},
};

use super::charts::panel_block;
use super::helpers::truncate_label;
use crate::filter::CategoryOption;
use crate::theme::{BG_TERTIARY, CYAN_PRIMARY, TEXT_PRIMARY};

/// Render the "Filter by Category" list with the current selection highlighted
pub fn render_category_selector(
    area: Rect,
    options: &[CategoryOption],
    selected: usize,
    frame: &mut Frame,
) {
    // Borders (2) + highlight symbol (2)
    let label_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = options
        .iter()
        .map(|option| {
            ListItem::new(Line::from(Span::styled(
                truncate_label(&option.label, label_width),
                Style::default().fg(TEXT_PRIMARY),
            )))
        })
        .collect();

    let list = List::new(items)
        .block(panel_block(" Filter by Category ".to_string()))
        .highlight_style(
            Style::default()
                .fg(CYAN_PRIMARY)
                .bg(BG_TERTIARY)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
