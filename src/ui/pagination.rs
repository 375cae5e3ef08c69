//! Pagination controls rendering.

use crate::pagination::Pagination;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the previous/next page controls.
///
/// # Arguments
/// * `pagination` - Current page descriptor
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Unavailable directions are dimmed. The block title shows the route of the
/// current page.
pub fn render_pagination(pagination: &Pagination, area: Rect, buf: &mut Buffer) {
    let enabled = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled(
            "◀ Previous (p)",
            if pagination.has_prev() { enabled } else { disabled },
        ),
        Span::raw("   "),
        Span::styled(pagination.label(), Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled(
            "(n) Next ▶",
            if pagination.has_next() { enabled } else { disabled },
        ),
    ]);

    let title = crate::pagination::page_route(pagination.current_page);
    let paragraph = Paragraph::new(line)
        .block(Block::default().title(title).borders(Borders::ALL))
        .alignment(Alignment::Center);

    Widget::render(paragraph, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;

    #[test]
    fn test_renders_label_and_route() {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        render_pagination(&Pagination::new(2, 3), area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("2 of 3"));
        assert!(text.contains("/blog/page/2"));
        assert!(text.contains("Previous"));
        assert!(text.contains("Next"));
    }

    #[test]
    fn test_disabled_previous_on_first_page() {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        render_pagination(&Pagination::new(1, 3), area, &mut buf);

        let prev_cell = buf
            .content
            .iter()
            .find(|cell| cell.symbol() == "◀")
            .unwrap();
        assert_eq!(prev_cell.fg, Color::DarkGray);
    }
}
