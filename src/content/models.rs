//! Blog post models and display formatting.
//!
//! Contains the post front matter structure and the locale used to format
//! dates and reading-time labels.

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Cover image shown when a post does not provide one.
pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1600775508114-5c30cf911a40?ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&ixlib=rb-1.2.1&auto=format&fit=crop&w=764&q=80";

/// Display locale for dates and reading-time labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateLocale {
    /// Indonesian (`15 Januari 2024`, `Dibaca 3 menit`)
    #[default]
    #[serde(rename = "id-ID")]
    Indonesian,
    /// US English (`January 15, 2024`, `3 min read`)
    #[serde(rename = "en-US")]
    English,
}

impl DateLocale {
    fn chrono_locale(self) -> Locale {
        match self {
            DateLocale::Indonesian => Locale::id_ID,
            DateLocale::English => Locale::en_US,
        }
    }

    fn long_date_format(self) -> &'static str {
        match self {
            DateLocale::Indonesian => "%-d %B %Y",
            DateLocale::English => "%B %-d, %Y",
        }
    }
}

/// Front matter of a single blog post.
///
/// Immutable input to the list layout. Field names follow the camelCase keys
/// used by JSON post indexes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostFrontMatter {
    /// Unique post identifier, used in the post route
    pub slug: String,
    /// Post title
    pub title: String,
    /// Short summary shown under the title
    #[serde(default)]
    pub summary: String,
    /// Ordered tags (searched, not displayed)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Publish date
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Estimated reading time in minutes
    #[serde(default)]
    pub reading_time: f64,
    /// Optional cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Drafts are dropped by the loader
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
}

impl PostFrontMatter {
    /// Create a new post without a cover image.
    ///
    /// # Arguments
    /// * `slug` - Unique post slug
    /// * `title` - Post title
    /// * `summary` - Post summary
    /// * `tags` - Post tags
    /// * `date` - Publish date
    /// * `reading_time` - Reading time in minutes
    #[cfg(test)]
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        tags: Vec<String>,
        date: NaiveDate,
        reading_time: f64,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            summary: summary.into(),
            tags,
            date,
            reading_time,
            image: None,
            draft: false,
        }
    }

    /// Attach a cover image URL.
    #[cfg(test)]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Route of the post page (`/post/{slug}`).
    pub fn href(&self) -> String {
        format!("/post/{}", self.slug)
    }

    /// Cover image URL, falling back to `default` when the post has none.
    ///
    /// An empty image string counts as missing.
    pub fn cover<'a>(&'a self, default: &'a str) -> &'a str {
        self.image
            .as_deref()
            .filter(|image| !image.is_empty())
            .unwrap_or(default)
    }

    /// Format the publish date as a long localized date.
    ///
    /// # Returns
    /// * `String` - e.g. "15 Januari 2024" or "January 15, 2024"
    pub fn format_date(&self, locale: DateLocale) -> String {
        self.date
            .and_time(NaiveTime::default())
            .and_utc()
            .format_localized(locale.long_date_format(), locale.chrono_locale())
            .to_string()
    }

    /// Localized reading-time label.
    ///
    /// Shows at least one minute, so a missing estimate reads "1 min".
    pub fn reading_time_label(&self, locale: DateLocale) -> String {
        let minutes = self.reading_time.max(1.0);
        match locale {
            DateLocale::Indonesian => format!("Dibaca {} menit", minutes),
            DateLocale::English => format!("{} min read", minutes),
        }
    }
}

/// Parse a front matter date.
///
/// Accepts a bare `YYYY-MM-DD`, an RFC 3339 timestamp such as
/// `2021-08-01T00:00:00.000Z` (the date in its own offset), or a timestamp
/// without offset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Serde adapter for [`parse_date`].
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> PostFrontMatter {
        PostFrontMatter::new(
            "hello-world",
            "Hello World",
            "intro",
            vec!["go".to_string()],
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            3.0,
        )
    }

    #[test]
    fn test_href() {
        assert_eq!(sample_post().href(), "/post/hello-world");
    }

    #[test]
    fn test_cover_fallback() {
        let post = sample_post();
        assert_eq!(post.cover(DEFAULT_IMAGE_URL), DEFAULT_IMAGE_URL);

        let post = post.with_image("https://example.com/cover.png");
        assert_eq!(post.cover(DEFAULT_IMAGE_URL), "https://example.com/cover.png");

        let empty = sample_post().with_image("");
        assert_eq!(empty.cover(DEFAULT_IMAGE_URL), DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_format_date() {
        let post = sample_post();
        assert_eq!(post.format_date(DateLocale::English), "January 15, 2024");
        assert_eq!(post.format_date(DateLocale::Indonesian), "15 Januari 2024");
    }

    #[test]
    fn test_reading_time_label() {
        let mut post = sample_post();
        assert_eq!(post.reading_time_label(DateLocale::Indonesian), "Dibaca 3 menit");
        assert_eq!(post.reading_time_label(DateLocale::English), "3 min read");

        post.reading_time = 2.5;
        assert_eq!(post.reading_time_label(DateLocale::English), "2.5 min read");

        post.reading_time = 0.0;
        assert_eq!(post.reading_time_label(DateLocale::Indonesian), "Dibaca 1 menit");
        assert_eq!(post.reading_time_label(DateLocale::English), "1 min read");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "slug": "a",
            "title": "A",
            "date": "2023-05-01",
            "readingTime": 4,
            "tags": ["rust"]
        }"#;
        let post: PostFrontMatter = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug, "a");
        assert_eq!(post.reading_time, 4.0);
        assert_eq!(post.summary, "");
        assert!(post.image.is_none());
        assert!(!post.draft);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 8, 1);
        assert_eq!(parse_date("2021-08-01"), expected);
        assert_eq!(parse_date("2021-08-01T00:00:00.000Z"), expected);
        assert_eq!(parse_date("2021-08-01T23:30:00+07:00"), expected);
        assert_eq!(parse_date("2021-08-01T10:00:00"), expected);
        assert_eq!(parse_date("August 1st"), None);
    }

    #[test]
    fn test_deserialize_iso_timestamp_date() {
        let json = r#"{"slug": "a", "title": "A", "date": "2021-08-01T00:00:00.000Z"}"#;
        let post: PostFrontMatter = serde_json::from_str(json).unwrap();
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2021, 8, 1).unwrap());

        let bad = r#"{"slug": "a", "title": "A", "date": "yesterday"}"#;
        assert!(serde_json::from_str::<PostFrontMatter>(bad).is_err());
    }

    #[test]
    fn test_locale_serde_names() {
        let locale: DateLocale = serde_json::from_str("\"en-US\"").unwrap();
        assert_eq!(locale, DateLocale::English);
        assert_eq!(serde_json::to_string(&DateLocale::Indonesian).unwrap(), "\"id-ID\"");
    }
}
