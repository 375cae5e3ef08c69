//! Page header and search box rendering.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the page title and search box.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// The page title is the block title. Shows a placeholder while the search
/// box is empty and inactive, and highlights when in search mode.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Search;

    let line = if !is_active && app.search_value.is_empty() {
        Line::from(Span::styled(
            "Search articles (press '/')",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("Search articles: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                &app.search_value,
                Style::default().fg(if is_active { Color::White } else { Color::Gray }),
            ),
            Span::styled(
                if is_active { "_" } else { "" },
                Style::default().fg(Color::Yellow),
            ),
        ])
    };

    let title = Span::styled(
        app.title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    );

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
