//! Post list widget rendering.
//!
//! Displays a scrollable list of post summaries with selection highlighting.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Lines per post row: title, two summary lines, meta, cover, separator.
pub const LINES_PER_POST: u16 = 6;

/// Lines the summary is clamped to.
const SUMMARY_LINES: usize = 2;

/// Message shown when no posts are displayed.
pub const EMPTY_MESSAGE: &str = "No posts found.";

/// Compute the range of rows visible in a list area.
///
/// # Arguments
/// * `selected` - Selected row index
/// * `len` - Number of rows
/// * `area_height` - Height of the list area including borders
///
/// # Returns
/// * `(usize, usize)` - Start (inclusive) and end (exclusive) row indices
///
/// # Details
/// Keeps the selection centered while never scrolling past the end.
pub fn visible_window(selected: usize, len: usize, area_height: u16) -> (usize, usize) {
    let available_height = area_height.saturating_sub(2);
    let visible = (available_height / LINES_PER_POST).max(1) as usize;
    let center_offset = visible / 2;

    let max_scroll = len.saturating_sub(visible);
    let start = selected.saturating_sub(center_offset).min(max_scroll);
    let end = (start + visible).min(len);
    (start, end)
}

/// Word-wrap `text` to `width` terminal columns and keep at most `max_lines` lines.
///
/// Widths are display columns, so wide (CJK) characters count as two. The
/// last kept line ends with an ellipsis when text was cut off.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let word_width = word.width();
            let sep = usize::from(current_width > 0);
            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                break;
            }
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
                continue;
            }
            // A single word wider than the line is hard-split
            let (head, rest) = split_at_width(word, width);
            lines.push(head.to_string());
            word = rest;
        }
    }
    if current_width > 0 {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let (kept, _) = split_at_width(last, width.saturating_sub(1));
            *last = format!("{}…", kept.trim_end());
        }
    }
    lines
}

/// Split `text` after the longest prefix that fits in `width` columns.
///
/// At least one character goes to the prefix when `width` is non-zero, so a
/// character wider than the line still makes progress.
fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            let idx = if idx == 0 && width > 0 { ch.len_utf8() } else { idx };
            return text.split_at(idx);
        }
        used += ch_width;
    }
    (text, "")
}

/// Render the post list widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each post takes `LINES_PER_POST` lines:
/// - Line 1: Title (bold) and its `/post/{slug}` route
/// - Lines 2-3: Summary, clamped to two lines
/// - Line 4: Publish date and reading time
/// - Line 5: Cover image URL (default image when the post has none)
/// - Line 6: Separator
///
/// Shows "No posts found." when nothing is displayed.
pub fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    let posts = app.display_posts();
    let title = format!("Posts ({}/{})", posts.len(), app.posts.len());

    if app.show_empty_message() {
        let list = List::new(vec![ListItem::new(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(Color::Gray),
        ))])
        .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let selected_index = app.selected_index.min(posts.len().saturating_sub(1));

    let content_width = area.width.saturating_sub(2).max(10) as usize;
    let separator_line = "─".repeat(content_width);

    let (start_idx, end_idx) = visible_window(selected_index, posts.len(), area.height);

    let items: Vec<ListItem> = posts
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(end_idx - start_idx)
        .map(|(idx, post)| {
            let is_selected = idx == selected_index;

            let base_style = if is_selected {
                Style::default()
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let title_style = Style::default()
                .fg(if is_selected {
                    Color::Yellow
                } else {
                    Color::White
                })
                .add_modifier(Modifier::BOLD);

            let mut lines = Vec::with_capacity(LINES_PER_POST as usize);

            lines.push(Line::from(vec![
                Span::styled(post.title.clone(), title_style),
                Span::styled(
                    format!("  {}", post.href()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));

            let mut summary = clamp_lines(&post.summary, content_width, SUMMARY_LINES);
            summary.resize(SUMMARY_LINES, String::new());
            lines.extend(summary.into_iter().map(|text| {
                Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
            }));

            lines.push(Line::from(vec![
                Span::styled(post.format_date(app.locale), Style::default().fg(Color::Yellow)),
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    post.reading_time_label(app.locale),
                    Style::default().fg(Color::Magenta),
                ),
            ]));

            lines.push(Line::from(vec![
                Span::styled("Cover: ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    post.cover(&app.default_image).to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));

            let separator_style = if is_selected {
                Style::default().fg(Color::Blue)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(Span::styled(
                separator_line.clone(),
                separator_style,
            )));

            ListItem::new(lines).style(base_style)
        })
        .collect();

    let relative_selected = if selected_index >= start_idx && selected_index < end_idx {
        Some(selected_index - start_idx)
    } else {
        None
    };

    let mut list_state = ListState::default();
    list_state.select(relative_selected);

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    StatefulWidget::render(list, area, buf, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DateLocale, PostFrontMatter};
    use crate::ui::buffer_text;
    use chrono::NaiveDate;

    fn sample_posts() -> Vec<PostFrontMatter> {
        vec![
            PostFrontMatter::new(
                "a",
                "Hello World",
                "intro",
                vec!["go".to_string()],
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                3.0,
            ),
            PostFrontMatter::new(
                "b",
                "Bye",
                "other",
                vec!["rust".to_string()],
                NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
                1.0,
            )
            .with_image("https://example.com/b.png"),
        ]
    }

    fn render(app: &App) -> String {
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        render_list(app, area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_renders_rows() {
        let app = App::new(sample_posts(), "All Posts").with_display(DateLocale::English, "default.png");
        let text = render(&app);

        assert!(text.contains("Posts (2/2)"));
        assert!(text.contains("Hello World  /post/a"));
        assert!(text.contains("January 15, 2024 · 3 min read"));
        assert!(text.contains("Cover: default.png"));
        assert!(text.contains("Cover: https://example.com/b.png"));
        assert!(!text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_renders_indonesian_meta() {
        let app = App::new(sample_posts(), "Semua Artikel");
        let text = render(&app);
        assert!(text.contains("15 Januari 2024 · Dibaca 3 menit"));
    }

    #[test]
    fn test_renders_empty_message() {
        let mut app = App::new(sample_posts(), "All Posts");
        app.search_value = "zzz".to_string();
        let text = render(&app);

        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("Posts (0/2)"));
        assert!(!text.contains("Hello World"));
    }

    #[test]
    fn test_visible_window() {
        // 20 rows high: 18 usable lines, 3 posts visible
        assert_eq!(visible_window(0, 10, 20), (0, 3));
        assert_eq!(visible_window(5, 10, 20), (4, 7));
        assert_eq!(visible_window(9, 10, 20), (7, 10));
        assert_eq!(visible_window(0, 2, 20), (0, 2));
        assert_eq!(visible_window(0, 0, 20), (0, 0));
    }

    #[test]
    fn test_clamp_lines() {
        assert_eq!(clamp_lines("one two", 20, 2), vec!["one two"]);
        assert_eq!(
            clamp_lines("one two three four", 9, 2),
            vec!["one two", "three…"]
        );
        assert_eq!(clamp_lines("abcdefghij", 4, 3), vec!["abcd", "efgh", "ij"]);
        assert!(clamp_lines("", 10, 2).is_empty());
    }

    #[test]
    fn test_clamp_lines_wide_chars() {
        assert_eq!(
            clamp_lines("日本語のテキスト", 6, 3),
            vec!["日本語", "のテキ", "スト"]
        );
        assert_eq!(clamp_lines("日本語のテキスト", 6, 2), vec!["日本語", "のテ…"]);
        assert_eq!(clamp_lines("café 日本", 8, 2), vec!["café", "日本"]);

        for line in clamp_lines("日本語の長いテキストです", 7, 2) {
            assert!(line.width() <= 7, "{line:?} overflows");
        }
    }

    #[test]
    fn test_renders_wide_summary_within_width() {
        let mut posts = sample_posts();
        posts[0].summary = "日本語のテキスト".repeat(10);
        let app = App::new(posts, "All Posts");
        let area = Rect::new(0, 0, 30, 20);
        let mut buf = Buffer::empty(area);
        render_list(&app, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("…"));
    }
}
