//! Configuration management for the blog TUI.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the content location, paging, display locale and logging.

use crate::content::DateLocale;
use crate::content::models::DEFAULT_IMAGE_URL;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title shown above the search box
    pub title: String,
    /// Post index JSON file or markdown directory (relative to config dir or absolute)
    pub posts_path: String,
    /// Posts per index page; 0 disables pagination
    pub posts_per_page: usize,
    /// Locale for dates and reading times
    pub locale: DateLocale,
    /// Cover image used when a post has none
    pub default_image: String,
    /// Site origin used to open post links (e.g. "https://blog.example.com")
    pub site_url: Option<String>,
    /// Log file path (relative to config dir or absolute)
    pub log_path: String,
    /// Log filter directive; `RUST_LOG` takes precedence
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "All Posts".to_string(),
            posts_path: "posts.json".to_string(),
            posts_per_page: 5,
            locale: DateLocale::default(),
            default_image: DEFAULT_IMAGE_URL.to_string(),
            site_url: None,
            log_path: "blog-tui.log".to_string(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/blog-tui/config.jsonc`
    /// 3. `~/.config/blog-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| "Failed to deserialize config")?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/blog-tui/config.jsonc`
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(app_config_dir()?.join("config.jsonc"))
    }

    /// Resolved path of the post content.
    pub fn posts_file_path(&self) -> Result<PathBuf> {
        resolve(&self.posts_path)
    }

    /// True while `posts_path` is still the built-in default.
    ///
    /// A missing default index is expected on first run and is not an error.
    pub fn uses_default_posts_path(&self) -> bool {
        self.posts_path == Config::default().posts_path
    }

    /// Resolved path of the log file.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        resolve(&self.log_path)
    }
}

fn app_config_dir() -> Result<PathBuf> {
    let config_dir =
        config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
    Ok(config_dir.join("blog-tui"))
}

/// Absolute paths are kept, relative ones resolve against the config directory.
fn resolve(path: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(app_config_dir()?.join(path))
    }
}

/// Strip `//` line comments that are not inside a string.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(strip_line_comment)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_line_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
        } else if b == b'"' {
            in_string = true;
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            return line[..i].trim_end();
        }
    }
    line
}
