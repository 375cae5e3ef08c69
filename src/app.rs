//! Application state management.
//!
//! Holds the post list layout state: the full post collection, the optional
//! initial page, the pagination descriptor, the search value and selection.

use crate::content::{DateLocale, PostFrontMatter};
use crate::content::models::DEFAULT_IMAGE_URL;
use crate::pagination::{self, Pagination};
use crate::search;
use std::cmp;

/// UI input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal list view
    List,
    /// Editing the search box
    Search,
}

/// Main application state.
///
/// The display set is never stored. It is derived from the posts, the
/// initial page and the search value each time it is read.
#[derive(Debug)]
pub struct App {
    /// All posts, newest first
    pub posts: Vec<PostFrontMatter>,
    /// Page title shown above the search box
    pub title: String,
    /// Precomputed page shown while the search box is empty
    pub initial_display_posts: Vec<PostFrontMatter>,
    /// Pagination descriptor for the current page
    pub pagination: Option<Pagination>,
    /// Search box contents
    pub search_value: String,
    /// Current UI mode
    pub mode: UiMode,
    /// Selected row (index into the display set)
    pub selected_index: usize,
    /// Status message to display
    pub status_message: Option<String>,
    /// Locale for dates and reading times
    pub locale: DateLocale,
    /// Cover image used when a post has none
    pub default_image: String,
    /// Posts per page (0 disables pagination)
    posts_per_page: usize,
}

impl App {
    /// Create a layout over `posts` without an initial page or pagination.
    ///
    /// # Arguments
    /// * `posts` - Full post collection
    /// * `title` - Page title
    pub fn new(posts: Vec<PostFrontMatter>, title: impl Into<String>) -> Self {
        Self {
            posts,
            title: title.into(),
            initial_display_posts: Vec::new(),
            pagination: None,
            search_value: String::new(),
            mode: UiMode::List,
            selected_index: 0,
            status_message: None,
            locale: DateLocale::default(),
            default_image: DEFAULT_IMAGE_URL.to_string(),
            posts_per_page: 0,
        }
    }

    /// Create a layout showing page 1 of `posts`.
    ///
    /// # Arguments
    /// * `posts` - Full post collection
    /// * `title` - Page title
    /// * `posts_per_page` - Page size; 0 disables pagination
    ///
    /// # Details
    /// The initial page is the first `posts_per_page` posts and the
    /// descriptor is `1 of ceil(len / posts_per_page)`.
    pub fn paginated(
        posts: Vec<PostFrontMatter>,
        title: impl Into<String>,
        posts_per_page: usize,
    ) -> Self {
        let mut app = Self::new(posts, title);
        if posts_per_page > 0 {
            app.posts_per_page = posts_per_page;
            app.load_page(1);
        }
        app
    }

    /// Set the initial page shown while the search box is empty.
    #[cfg(test)]
    pub fn with_initial_display_posts(mut self, posts: Vec<PostFrontMatter>) -> Self {
        self.initial_display_posts = posts;
        self
    }

    /// Set the pagination descriptor.
    #[cfg(test)]
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Set the display locale and default cover image.
    pub fn with_display(mut self, locale: DateLocale, default_image: impl Into<String>) -> Self {
        self.locale = locale;
        self.default_image = default_image.into();
        self
    }

    /// Posts matching the current search value, in input order.
    pub fn filtered_posts(&self) -> Vec<&PostFrontMatter> {
        search::filter_posts(&self.posts, &self.search_value)
    }

    /// Whether the precomputed initial page is shown.
    ///
    /// True when an initial page exists and the search box is empty.
    pub fn is_initial_view(&self) -> bool {
        !self.initial_display_posts.is_empty() && self.search_value.is_empty()
    }

    /// Posts to render.
    ///
    /// # Returns
    /// * `Vec<&PostFrontMatter>` - The initial page itself in initial view,
    ///   otherwise the filtered posts
    pub fn display_posts(&self) -> Vec<&PostFrontMatter> {
        if self.is_initial_view() {
            self.initial_display_posts.iter().collect()
        } else {
            self.filtered_posts()
        }
    }

    /// Whether the "No posts found." message is shown.
    pub fn show_empty_message(&self) -> bool {
        self.display_posts().is_empty()
    }

    /// Pagination descriptor, if the controls are visible.
    ///
    /// Controls are visible only with more than one page and an empty search.
    pub fn visible_pagination(&self) -> Option<Pagination> {
        self.pagination
            .filter(|p| p.total_pages > 1 && self.search_value.is_empty())
    }

    /// Get the currently selected post.
    ///
    /// # Returns
    /// * `Option<&PostFrontMatter>` - Selected post or None if nothing is shown
    pub fn selected_post(&self) -> Option<&PostFrontMatter> {
        self.display_posts().get(self.selected_index).copied()
    }

    /// Move selection up.
    ///
    /// # Details
    /// Decrements selected index, wrapping to bottom if at top.
    pub fn move_up(&mut self) {
        let len = self.display_posts().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down.
    ///
    /// # Details
    /// Increments selected index, wrapping to top if at bottom.
    pub fn move_down(&mut self) {
        let len = self.display_posts().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Add a character to the search value.
    ///
    /// # Details
    /// Only works in Search mode.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            self.search_value.push(ch);
            self.on_search_changed();
        }
    }

    /// Remove last character from the search value.
    ///
    /// # Details
    /// Only works in Search mode.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search {
            self.search_value.pop();
            self.on_search_changed();
        }
    }

    /// Clear the search value, returning to the initial page if there is one.
    pub fn clear_search(&mut self) {
        self.search_value.clear();
        self.on_search_changed();
    }

    fn on_search_changed(&mut self) {
        let shown = self.display_posts().len();
        tracing::debug!(query = %self.search_value, shown, "search changed");
        self.selected_index = cmp::min(self.selected_index, shown.saturating_sub(1));
    }

    /// Navigate to another page of the index.
    ///
    /// # Arguments
    /// * `page` - Target page (clamped to the valid range)
    ///
    /// # Returns
    /// * `bool` - True if the page changed
    ///
    /// # Details
    /// Only possible while the pagination controls are visible.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let Some(current) = self.visible_pagination() else {
            return false;
        };
        if self.posts_per_page == 0 {
            return false;
        }
        let page = page.clamp(1, current.total_pages);
        if page == current.current_page {
            return false;
        }
        self.load_page(page);
        tracing::info!(page, route = %pagination::page_route(page), "navigated to page");
        true
    }

    /// Navigate to the next page.
    pub fn next_page(&mut self) -> bool {
        match self.pagination {
            Some(p) if p.has_next() => self.go_to_page(p.current_page + 1),
            _ => false,
        }
    }

    /// Navigate to the previous page.
    pub fn prev_page(&mut self) -> bool {
        match self.pagination {
            Some(p) if p.has_prev() => self.go_to_page(p.current_page - 1),
            _ => false,
        }
    }

    fn load_page(&mut self, page: usize) {
        let total = pagination::total_pages(self.posts.len(), self.posts_per_page);
        self.initial_display_posts =
            pagination::page_slice(&self.posts, page, self.posts_per_page).to_vec();
        self.pagination = Some(Pagination::new(page, total));
        self.selected_index = 0;
    }

    /// Set status message.
    ///
    /// # Arguments
    /// * `message` - Status message to display
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
