//! Blog TUI - Terminal User Interface for browsing blog posts.
//!
//! Main entry point and event loop for the application.

mod app;
mod config;
mod content;
mod logging;
mod opener;
mod pagination;
mod search;
mod ui;

use anyhow::Context;
use app::{App, UiMode};
use config::Config;
use content::PostFrontMatter;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration and posts, initializes the terminal and runs the event loop.
/// An optional first argument overrides the config file path.
fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;
    let wrote_template = config_path.is_none() && write_default_config(&config);

    let log_path = config.log_file_path()?;
    if let Err(e) = logging::init_tracing(&log_path, config.log_level.as_deref()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting blog-tui");
    if wrote_template {
        tracing::info!("wrote default config template");
    }

    let posts_path = config.posts_file_path()?;
    let (posts, notice) = load_initial_posts(&config, &posts_path)?;
    tracing::info!(count = posts.len(), path = %posts_path.display(), "loaded posts");

    let mut app = App::paginated(posts, config.title.clone(), config.posts_per_page)
        .with_display(config.locale, config.default_image.clone());
    app.set_status(notice.unwrap_or_else(|| format!("Loaded {} posts", app.posts.len())));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("exiting blog-tui");
    result
}

/// Write `config` to the default location if no config file exists there.
///
/// # Returns
/// * `bool` - True if a template was written
fn write_default_config(config: &Config) -> bool {
    let exists = Config::default_config_path()
        .map(|path| path.exists())
        .unwrap_or(true);
    if exists {
        return false;
    }
    match config.save(None) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: could not write default config: {:#}", e);
            false
        }
    }
}

/// Load the posts shown at startup.
///
/// # Arguments
/// * `config` - Configuration
/// * `posts_path` - Resolved content path
///
/// # Returns
/// * `Result<(Vec<PostFrontMatter>, Option<String>)>` - Posts and an optional status notice
///
/// # Details
/// A missing index at the default `posts_path` starts the list empty with a
/// notice, so a fresh install opens instead of failing. Any other load error
/// is fatal.
fn load_initial_posts(
    config: &Config,
    posts_path: &Path,
) -> anyhow::Result<(Vec<PostFrontMatter>, Option<String>)> {
    if !posts_path.exists() && config.uses_default_posts_path() {
        tracing::warn!(path = %posts_path.display(), "no post index found");
        let notice = format!(
            "No post index at {}; set posts_path in config.jsonc",
            posts_path.display()
        );
        return Ok((Vec::new(), Some(notice)));
    }

    let posts = content::load_posts(posts_path)
        .with_context(|| format!("Failed to load posts from {}", posts_path.display()))?;
    Ok((posts, None))
}

/// Split the screen into search, list, pagination and status areas.
///
/// The pagination area is empty while the controls are hidden.
fn layout(area: Rect, show_pagination: bool) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                  // Title and search
            Constraint::Min(0),                                     // Post list
            Constraint::Length(if show_pagination { 3 } else { 0 }), // Pagination
            Constraint::Length(1),                                  // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Render the complete UI.
///
/// # Returns
/// * `Rect` - Area of the post list, for mouse hit testing
fn render_ui(f: &mut ratatui::Frame, app: &App) -> Rect {
    let pagination = app.visible_pagination();
    let [search_area, list_area, pagination_area, status_area] =
        layout(f.area(), pagination.is_some());

    ui::render_search(app, search_area, f.buffer_mut());
    ui::render_list(app, list_area, f.buffer_mut());
    if let Some(pagination) = pagination {
        ui::render_pagination(&pagination, pagination_area, f.buffer_mut());
    }

    let status_text = app.status_message.as_deref().unwrap_or(
        "Press 'q' to quit, '/' to search, 'Enter' to open, 'n'/'p' to change page",
    );
    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(status_text));
    f.render_widget(status, status_area);

    list_area
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
/// * `config` - Configuration
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Handles keyboard and mouse events, updates state, and renders UI.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> anyhow::Result<()> {
    let mut list_area = Rect::default();

    loop {
        terminal.draw(|f| {
            list_area = render_ui(f, app);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !handle_key_event(key, app, config) {
                    break;
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, app, config, list_area),
            _ => {}
        }
    }

    Ok(())
}

/// Handle a key press.
///
/// # Returns
/// * `bool` - False when the application should exit
fn handle_key_event(key: KeyEvent, app: &mut App, config: &Config) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match app.mode {
        UiMode::List => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return false,
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Enter => open_selected(app, config),
            KeyCode::Char('/') => app.mode = UiMode::Search,
            KeyCode::Right | KeyCode::Char('n') => {
                if app.next_page() {
                    app.status_message = None;
                }
            }
            KeyCode::Left | KeyCode::Char('p') => {
                if app.prev_page() {
                    app.status_message = None;
                }
            }
            _ => {}
        },
        UiMode::Search => match key.code {
            KeyCode::Enter => app.mode = UiMode::List,
            KeyCode::Esc => {
                app.clear_search();
                app.mode = UiMode::List;
            }
            KeyCode::Backspace => app.remove_search_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.add_search_char(c)
            }
            _ => {}
        },
    }

    true
}

/// Open the selected post's link.
///
/// # Details
/// With `site_url` configured the post opens in the browser, otherwise its
/// route is shown in the status bar. Failures are reported, not propagated.
fn open_selected(app: &mut App, config: &Config) {
    let Some(post) = app.selected_post() else {
        return;
    };
    let href = post.href();
    let title = post.title.clone();

    let Some(site_url) = config.site_url.as_deref() else {
        app.set_status(format!("Link: {} (set site_url to open in browser)", href));
        return;
    };

    let url = opener::link_url(site_url, &href);
    match opener::open_in_browser(&url) {
        Ok(()) => {
            tracing::info!(%url, "opened post");
            app.set_status(format!("Opened: {}", title));
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "failed to open post");
            app.set_status(format!("Failed to open post: {}", e));
        }
    }
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
/// * `config` - Configuration
/// * `list_area` - Area of the post list widget
///
/// # Details
/// Scrolling moves the selection. A left click selects and opens the post
/// under the cursor.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, config: &Config, list_area: Rect) {
    if app.mode != UiMode::List {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            // Skip the top border
            if mouse.column < list_area.x
                || mouse.column >= list_area.x + list_area.width
                || mouse.row <= list_area.y
                || mouse.row >= list_area.y + list_area.height
            {
                return;
            }

            let len = app.display_posts().len();
            let (start, end) = ui::list::visible_window(app.selected_index, len, list_area.height);
            let clicked_row = ((mouse.row - list_area.y - 1) / ui::list::LINES_PER_POST) as usize;
            let index = start + clicked_row;

            if index < end {
                app.selected_index = index;
                open_selected(app, config);
            }
        }
        _ => {}
    }
}
