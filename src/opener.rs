//! Opening post links in the system browser.

use anyhow::{Context, Result};
use std::process::Command;

/// Build the absolute URL of a route on the site.
///
/// # Arguments
/// * `site_url` - Site origin, with or without trailing slash
/// * `href` - Route such as `/post/hello-world`
pub fn link_url(site_url: &str, href: &str) -> String {
    format!(
        "{}/{}",
        site_url.trim_end_matches('/'),
        href.trim_start_matches('/')
    )
}

/// Open a URL with the platform's default handler.
///
/// # Arguments
/// * `url` - URL to open
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Uses `open` on macOS, `cmd /C start` on Windows and `xdg-open` elsewhere.
/// The handler is spawned and not waited on.
pub fn open_in_browser(url: &str) -> Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };

    cmd.arg(url)
        .spawn()
        .with_context(|| format!("Failed to open link in browser: {}", url))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_url_joins_slashes() {
        assert_eq!(
            link_url("https://blog.example.com", "/post/a"),
            "https://blog.example.com/post/a"
        );
        assert_eq!(
            link_url("https://blog.example.com/", "/post/a"),
            "https://blog.example.com/post/a"
        );
    }
}
