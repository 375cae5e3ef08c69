//! UI components module.
//!
//! Contains ratatui widgets for displaying the post list layout.

pub mod list;
pub mod pagination;
pub mod search;

pub use list::render_list;
pub use pagination::render_pagination;
pub use search::render_search;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    buf.content.iter().map(|cell| cell.symbol()).collect()
}
