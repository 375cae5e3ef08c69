//! Loading post front matter from local content.
//!
//! Supports a JSON post index or a directory of markdown posts with YAML
//! front matter.

use super::error::{ContentError, Result};
use super::models::{PostFrontMatter, deserialize_date};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Words read per minute for reading-time estimates.
const WORDS_PER_MINUTE: f64 = 200.0;

/// Front matter block of a markdown post.
///
/// Slug and reading time are derived from the file itself.
#[derive(Debug, Deserialize)]
struct MarkdownFrontMatter {
    title: String,
    #[serde(deserialize_with = "deserialize_date")]
    date: NaiveDate,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    draft: bool,
}

/// Load all published posts from `path`.
///
/// # Arguments
/// * `path` - JSON post index file, or directory of `.md`/`.mdx` posts
///
/// # Returns
/// * `Result<Vec<PostFrontMatter>>` - Posts sorted newest first
///
/// # Details
/// Drafts are excluded. Posts with equal dates keep their input order.
/// Duplicate slugs are rejected.
pub fn load_posts(path: &Path) -> Result<Vec<PostFrontMatter>> {
    let posts = if path.is_dir() {
        load_markdown_dir(path)?
    } else {
        load_json_index(path)?
    };

    finalize(posts)
}

fn load_json_index(path: &Path) -> Result<Vec<PostFrontMatter>> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_markdown_dir(dir: &Path) -> Result<Vec<PostFrontMatter>> {
    let io_err = |source: std::io::Error| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(io_err)?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| is_markdown(path))
        .collect();
    files.sort();

    files.iter().map(|file| load_markdown_post(file)).collect()
}

fn is_markdown(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "md" || ext == "mdx")
}

fn load_markdown_post(path: &Path) -> Result<PostFrontMatter> {
    tracing::debug!(path = %path.display(), "loading markdown post");

    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (yaml, body) = split_front_matter(&content)
        .ok_or_else(|| ContentError::MissingFrontMatter(path.to_path_buf()))?;

    let front: MarkdownFrontMatter =
        serde_yaml::from_str(yaml).map_err(|source| ContentError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    let slug = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(PostFrontMatter {
        slug,
        title: front.title,
        summary: front.summary,
        tags: front.tags,
        date: front.date,
        reading_time: reading_time(body),
        image: front.image,
        draft: front.draft,
    })
}

/// Split a markdown document into its YAML front matter and body.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;
    let end = rest.find("\n---")?;
    let yaml = &rest[..end];
    let body = rest[end + 4..]
        .split_once('\n')
        .map(|(_, body)| body)
        .unwrap_or("");
    Some((yaml, body))
}

/// Reading time in whole minutes, at least one.
fn reading_time(body: &str) -> f64 {
    let words = body.split_whitespace().count() as f64;
    (words / WORDS_PER_MINUTE).ceil().max(1.0)
}

fn finalize(mut posts: Vec<PostFrontMatter>) -> Result<Vec<PostFrontMatter>> {
    posts.retain(|post| !post.draft);

    let mut seen = HashSet::new();
    for post in &posts {
        if !seen.insert(post.slug.as_str()) {
            return Err(ContentError::DuplicateSlug(post.slug.clone()));
        }
    }

    // Stable: equal dates keep input order
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_index_sorted_without_drafts() {
        let temp_dir = TempDir::new().unwrap();
        let index = temp_dir.path().join("posts.json");
        fs::write(
            &index,
            r#"[
                {"slug": "old", "title": "Old", "date": "2022-01-01", "readingTime": 2},
                {"slug": "draft", "title": "Draft", "date": "2024-01-01", "draft": true},
                {"slug": "new", "title": "New", "date": "2023-06-01", "readingTime": 5}
            ]"#,
        )
        .unwrap();

        let posts = load_posts(&index).unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old"]);
    }

    #[test]
    fn test_load_markdown_dir() {
        let temp_dir = TempDir::new().unwrap();
        let words = vec!["word"; 450].join(" ");
        fs::write(
            temp_dir.path().join("first-post.md"),
            format!(
                "---\ntitle: First Post\ndate: 2023-03-04\ntags: [rust, tui]\nsummary: A summary\n---\n\n{}\n",
                words
            ),
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("second.mdx"),
            "---\ntitle: Second\ndate: 2023-04-01\nimage: https://example.com/a.png\n---\nshort body\n",
        )
        .unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let posts = load_posts(temp_dir.path()).unwrap();
        assert_eq!(posts.len(), 2);

        assert_eq!(posts[0].slug, "second");
        assert_eq!(posts[0].reading_time, 1.0);
        assert_eq!(posts[0].image.as_deref(), Some("https://example.com/a.png"));

        assert_eq!(posts[1].slug, "first-post");
        assert_eq!(posts[1].title, "First Post");
        assert_eq!(posts[1].tags, vec!["rust", "tui"]);
        assert_eq!(posts[1].reading_time, 3.0);
    }

    #[test]
    fn test_load_iso_timestamp_dates() {
        let temp_dir = TempDir::new().unwrap();
        let index = temp_dir.path().join("posts.json");
        fs::write(
            &index,
            r#"[{"slug": "x", "title": "X", "date": "2021-08-01T00:00:00.000Z", "readingTime": 2}]"#,
        )
        .unwrap();
        let posts = load_posts(&index).unwrap();
        assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2021, 8, 1).unwrap());

        let dir = temp_dir.path().join("content");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join("quoted.md"),
            "---\ntitle: Quoted\ndate: '2021-08-01T10:00:00Z'\n---\nbody\n",
        )
        .unwrap();
        fs::write(
            dir.join("plain.md"),
            "---\ntitle: Plain\ndate: 2021-07-01T10:00:00Z\n---\nbody\n",
        )
        .unwrap();
        let posts = load_posts(&dir).unwrap();
        assert_eq!(posts[0].slug, "quoted");
        assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2021, 8, 1).unwrap());
        assert_eq!(posts[1].date, NaiveDate::from_ymd_opt(2021, 7, 1).unwrap());
    }

    #[test]
    fn test_missing_front_matter() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bare.md"), "# No front matter\n").unwrap();

        let err = load_posts(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter(_)));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let index = temp_dir.path().join("posts.json");
        fs::write(
            &index,
            r#"[
                {"slug": "same", "title": "One", "date": "2022-01-01"},
                {"slug": "same", "title": "Two", "date": "2022-02-01"}
            ]"#,
        )
        .unwrap();

        let err = load_posts(&index).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug(slug) if slug == "same"));
    }

    #[test]
    fn test_missing_index_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_posts(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn test_split_front_matter() {
        let (yaml, body) = split_front_matter("---\ntitle: X\n---\nbody text\n").unwrap();
        assert_eq!(yaml, "title: X");
        assert_eq!(body, "body text\n");
        assert!(split_front_matter("title: X\n").is_none());
    }
}
