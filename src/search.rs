//! Substring search over post front matter.
//!
//! A post matches when its title, summary and space-joined tags, concatenated,
//! contain the query case-insensitively.

use crate::content::PostFrontMatter;

/// Text a query is matched against: `title + summary + tags.join(" ")`.
pub fn search_content(post: &PostFrontMatter) -> String {
    format!("{}{}{}", post.title, post.summary, post.tags.join(" "))
}

/// Check whether a post matches a query.
///
/// # Arguments
/// * `post` - Post to test
/// * `query_lower` - Query, already lowercased
pub fn matches(post: &PostFrontMatter, query_lower: &str) -> bool {
    search_content(post).to_lowercase().contains(query_lower)
}

/// Filter posts by a search query.
///
/// # Arguments
/// * `posts` - Full post collection
/// * `query` - Search query (any case)
///
/// # Returns
/// * `Vec<&PostFrontMatter>` - Matching posts in input order
///
/// # Details
/// An empty query matches every post.
pub fn filter_posts<'a>(posts: &'a [PostFrontMatter], query: &str) -> Vec<&'a PostFrontMatter> {
    let query_lower = query.to_lowercase();
    posts
        .iter()
        .filter(|post| matches(post, &query_lower))
        .collect()
}
