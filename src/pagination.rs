//! Page slicing and pagination descriptors.
//!
//! Mirrors the blog index routes: page 1 lives at `/blog`, later pages at
//! `/blog/page/{n}`.

use crate::content::PostFrontMatter;

/// Current page and page count of a paginated post index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-based)
    pub current_page: usize,
    /// Total number of pages
    pub total_pages: usize,
}

impl Pagination {
    /// Create a descriptor.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Label such as "2 of 5".
    pub fn label(&self) -> String {
        format!("{} of {}", self.current_page, self.total_pages)
    }
}

/// Route of a blog index page.
pub fn page_route(page: usize) -> String {
    if page <= 1 {
        "/blog".to_string()
    } else {
        format!("/blog/page/{}", page)
    }
}

/// Number of pages needed for `len` posts, at least one.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page).max(1)
}

/// Posts shown on a given page.
///
/// # Arguments
/// * `posts` - Full post collection
/// * `page` - Page number (1-based; 0 is treated as 1)
/// * `per_page` - Posts per page
///
/// # Returns
/// * `&[PostFrontMatter]` - Posts on that page, empty past the last page
pub fn page_slice(posts: &[PostFrontMatter], page: usize, per_page: usize) -> &[PostFrontMatter] {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(posts.len());
    let end = start.saturating_add(per_page).min(posts.len());
    &posts[start..end]
}
