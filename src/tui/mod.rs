//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod clipboard;
pub mod component;
pub mod consent_banner;
pub mod detail_view;
pub mod help_overlay;
pub mod help_registry;
pub mod section_list;
pub mod section_picker;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::catalog::{self, CatalogError, CatalogLoader, DataSet, SectionKey};
use crate::config::{Config, ThemeMode};
use crate::consent::{ConsentState, ConsentStore};
use crate::constants::APP_NAME;
use crate::routes::Route;

// Re-export TUI components
pub use clipboard::SnippetClipboard;
pub use component::{Component, ComponentEvent};
pub use consent_banner::ConsentBanner;
pub use detail_view::DetailView;
pub use help_overlay::HelpOverlayState;
pub use help_registry::HelpRegistry;
pub use section_list::SectionList;
pub use section_picker::SectionPicker;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Screen currently shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Section picker
    Sections,
    /// Record list of one section
    List,
    /// Detail of one record
    Detail,
    /// Architecture reference page
    Architecture,
}

/// A section load running on the background runtime.
struct PendingLoad {
    section: SectionKey,
    /// Record to open once the section arrives
    open: Option<String>,
    handle: JoinHandle<Result<DataSet, CatalogError>>,
}

/// Application state for the terminal browser.
pub struct AppState {
    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Screen shown in the main area
    pub screen: Screen,
    /// Section picker component
    pub picker: SectionPicker,
    /// List component for the open section
    pub list: Option<SectionList>,
    /// Detail component for the open record
    pub detail: Option<DetailView>,
    /// Help overlay, when shown
    pub help_overlay: Option<HelpOverlayState>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Application configuration
    pub config: Config,
    /// Persisted consent flag
    pub consent: ConsentStore,
    /// Last copied snippet
    pub clipboard: SnippetClipboard,
    /// Keybinding definitions
    pub help: HelpRegistry,
    loader: Arc<CatalogLoader>,
    runtime: Runtime,
    pending: Option<PendingLoad>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the browser state on the section picker.
    pub fn new(config: Config, consent: ConsentStore) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("patterndex-loader")
            .enable_all()
            .build()
            .context("Failed to start background loader")?;
        let help = HelpRegistry::load().context("Failed to load keybinding help")?;
        let theme = Theme::from_mode(config.ui.theme_mode);

        let mut picker = SectionPicker::new();
        picker.focus(config.catalog.section());

        Ok(Self {
            theme,
            screen: Screen::Sections,
            picker,
            list: None,
            detail: None,
            help_overlay: None,
            status_message: "Press ? for help".to_string(),
            error_message: None,
            config,
            consent,
            clipboard: SnippetClipboard::new(),
            help,
            loader: Arc::new(CatalogLoader::embedded()),
            runtime,
            pending: None,
            should_quit: false,
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Route of the page currently shown.
    #[must_use]
    pub fn current_route(&self) -> Option<Route> {
        match self.screen {
            Screen::Sections => None,
            Screen::List => self.list.as_ref().map(|list| Route::List {
                section: list.section,
            }),
            Screen::Detail => self.detail.as_ref().map(|detail| Route::Detail {
                section: detail.section,
                id: detail.id.clone(),
            }),
            Screen::Architecture => Some(Route::Architecture),
        }
    }

    /// Section whose load has not settled yet.
    #[must_use]
    pub fn loading_section(&self) -> Option<SectionKey> {
        self.pending.as_ref().map(|pending| pending.section)
    }

    /// Opens the page a route points at.
    pub fn navigate(&mut self, route: Route) {
        match route {
            Route::List { section } => self.open_section(section, None),
            Route::Detail { section, id } => self.open_section(section, Some(id)),
            Route::Architecture => {
                self.picker.focus(SectionKey::Architecture);
                self.screen = Screen::Architecture;
            }
        }
    }

    /// Shows `section`, loading it in the background unless cached.
    fn open_section(&mut self, section: SectionKey, open: Option<String>) {
        if !section.is_catalog() {
            self.navigate(Route::Architecture);
            return;
        }
        self.picker.focus(section);
        self.cancel_pending();

        if let Some(items) = self.loader.cached(section.as_str()) {
            self.show_section(section, items, open);
            return;
        }

        let loader = Arc::clone(&self.loader);
        let handle = self
            .runtime
            .spawn(async move { loader.load(section.as_str()).await });
        self.pending = Some(PendingLoad {
            section,
            open,
            handle,
        });
        self.screen = Screen::List;
    }

    /// Applies a finished background load, if any.
    pub fn poll_pending(&mut self) {
        if !self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.handle.is_finished())
        {
            return;
        }
        let Some(PendingLoad {
            section,
            open,
            handle,
        }) = self.pending.take()
        else {
            return;
        };

        let items = match self.runtime.block_on(handle) {
            Ok(Ok(items)) => items,
            Ok(Err(e)) => {
                self.set_status(format!("{e}; showing an empty list"));
                catalog::empty_data_set()
            }
            Err(e) => {
                self.set_status(format!("Loading {} failed: {e}", section.title()));
                catalog::empty_data_set()
            }
        };
        self.show_section(section, items, open);
    }

    /// Blocks until the pending load settles. Used at startup and in tests.
    pub fn wait_for_load(&mut self) {
        while let Some(pending) = &self.pending {
            if pending.handle.is_finished() {
                self.poll_pending();
            } else {
                std::thread::sleep(Duration::from_millis(5));
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }

    fn show_section(&mut self, section: SectionKey, items: DataSet, open: Option<String>) {
        self.list = Some(SectionList::new(section, items));
        self.detail = None;
        self.screen = Screen::List;
        if let Some(id) = open {
            self.open_detail(id);
        }
    }

    fn open_detail(&mut self, id: String) {
        let Some(list) = &self.list else {
            return;
        };
        let record = catalog::resolve(list.view().items(), Some(&id)).cloned();
        self.detail = Some(DetailView::new(list.section, id, record));
        self.screen = Screen::Detail;
    }

    fn go_back(&mut self) {
        match self.screen {
            Screen::Detail => {
                if let (Some(list), Some(detail)) = (&mut self.list, &self.detail) {
                    list.focus(&detail.id);
                }
                self.detail = None;
                self.screen = Screen::List;
            }
            Screen::List | Screen::Architecture => {
                self.cancel_pending();
                self.screen = Screen::Sections;
            }
            Screen::Sections => {}
        }
    }

    fn apply_consent(&mut self, decision: ConsentState) {
        match self.consent.set(decision) {
            Ok(()) => {
                self.consent.initialize_if_consented();
                self.set_status(match decision {
                    ConsentState::Accepted => "Analytics accepted",
                    ConsentState::Rejected => "Analytics rejected",
                    ConsentState::Pending => "Analytics decision cleared",
                });
            }
            Err(e) => self.set_error(format!("Failed to save consent: {e:#}")),
        }
    }

    fn copy_snippet(&mut self, label: &'static str, text: String) {
        match self.clipboard.copy(label, text) {
            Ok(message) => self.set_status(message),
            Err(e) => self.set_error(format!("Clipboard unavailable: {e}")),
        }
    }

    fn cycle_theme(&mut self) {
        let mode = match self.config.ui.theme_mode {
            ThemeMode::Auto => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Auto,
        };
        self.config.ui.theme_mode = mode;
        self.theme = Theme::from_mode(mode);
        match self.config.save() {
            Ok(()) => self.set_status(format!("Theme: {}", mode.as_str())),
            Err(e) => self.set_status(format!("Theme: {} (not saved: {e})", mode.as_str())),
        }
    }

    fn handle_event(&mut self, event: ComponentEvent) {
        match event {
            ComponentEvent::SectionChosen(section) => self.navigate(if section.is_catalog() {
                Route::List { section }
            } else {
                Route::Architecture
            }),
            ComponentEvent::RecordChosen(id) => self.open_detail(id),
            ComponentEvent::Copy { label, text } => self.copy_snippet(label, text),
            ComponentEvent::FilterChanged(category) => {
                self.set_status(format!("Filter: {}", category.as_deref().unwrap_or("All")));
            }
            ComponentEvent::Back => self.go_back(),
        }
    }

    /// Help contexts active for the current screen, most specific first.
    #[must_use]
    pub fn help_contexts(&self) -> Vec<&'static str> {
        use help_registry::contexts;

        let mut names = Vec::new();
        if self.consent.is_pending() {
            names.push(contexts::CONSENT);
        }
        names.push(match self.screen {
            Screen::Sections => contexts::SECTIONS,
            Screen::List => contexts::LIST,
            Screen::Detail => contexts::DETAIL,
            Screen::Architecture => contexts::ARCHITECTURE,
        });
        names.push(contexts::GLOBAL);
        names
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Pick up sections that finished loading since the last frame
        state.poll_pending();

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            // Resize needs no handling; the next frame redraws at the new size
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                            // Title bar
            Constraint::Min(10),                              // Main content
            Constraint::Length(status_bar::STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let mut main_area = chunks[1];
    if state.consent.is_pending() {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(consent_banner::BANNER_HEIGHT),
            ])
            .split(main_area);
        main_area = split[0];
        ConsentBanner.render(f, split[1], &state.theme);
    }
    render_main_content(f, main_area, state);

    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(overlay) = &state.help_overlay {
        overlay.render(f, f.area(), &state.help, &state.theme);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with the current path
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let path = state
        .current_route()
        .map_or_else(|| "sections".to_string(), |route| route.path());

    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(path, Style::default().fg(state.theme.text_secondary)),
    ]);

    let title_widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(title_widget, area);
}

/// Render the active screen
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    if let Some(section) = state.loading_section() {
        let loading = Paragraph::new(Span::styled(
            format!("Loading {}...", section.title()),
            Style::default().fg(theme.text_muted),
        ))
        .block(
            Block::default()
                .title(format!(" {} ", section.title()))
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(loading, area);
        return;
    }

    match state.screen {
        Screen::Sections => state.picker.render(f, area, theme),
        Screen::List => {
            if let Some(list) = &state.list {
                list.render(f, area, theme);
            }
        }
        Screen::Detail => {
            if let Some(detail) = &state.detail {
                detail.render(f, area, theme);
            }
        }
        Screen::Architecture => render_architecture(f, area, theme),
    }
}

/// Render the architecture reference page
fn render_architecture(f: &mut Frame, area: Rect, theme: &Theme) {
    let page = SectionKey::Architecture;
    let mut lines = vec![
        Line::from(Span::styled(page.intro(), Style::default().fg(theme.text))),
        Line::from(""),
    ];
    if let Some(extra) = page.intro_extra() {
        lines.push(Line::from(Span::styled(
            extra,
            Style::default().fg(theme.text_secondary),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Sections",
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.extend(SectionKey::catalog_sections().map(|section| {
        Line::from(vec![
            Span::styled(
                format!("  /{:<12}", section.route_segment()),
                Style::default().fg(theme.accent),
            ),
            Span::styled(section.title(), Style::default().fg(theme.text)),
        ])
    }));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} ", page.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(widget, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events. Returns true when the user quits.
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return Ok(true);
    }

    // Help overlay captures navigation until closed
    if let Some(overlay) = &mut state.help_overlay {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => state.help_overlay = None,
            KeyCode::Up | KeyCode::Char('k') => overlay.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                let total = HelpOverlayState::content(&state.help, &state.theme).len();
                overlay.scroll_down(total);
            }
            _ => {}
        }
        return Ok(false);
    }

    // Consent keys take precedence while the decision is pending
    if state.consent.is_pending() {
        if let Some(decision) = ConsentBanner.handle_input(key) {
            state.apply_consent(decision);
            return Ok(false);
        }
    }

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Char('?') => {
            state.help_overlay = Some(HelpOverlayState::new());
            return Ok(false);
        }
        KeyCode::Char('t') => {
            state.cycle_theme();
            return Ok(false);
        }
        _ => {}
    }

    // Only backing out is possible while a section is loading
    if state.loading_section().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
            state.go_back();
        }
        return Ok(false);
    }

    let event = match state.screen {
        Screen::Sections => state.picker.handle_input(key),
        Screen::List => state
            .list
            .as_mut()
            .and_then(|list| list.handle_input(key)),
        Screen::Detail => state
            .detail
            .as_mut()
            .and_then(|detail| detail.handle_input(key)),
        Screen::Architecture => matches!(
            key.code,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h')
        )
        .then_some(ComponentEvent::Back),
    };

    if let Some(event) = event {
        state.handle_event(event);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn decided_state() -> AppState {
        let mut consent = ConsentStore::detached();
        consent
            .set(ConsentState::Rejected)
            .expect("detached store never writes");
        AppState::new(Config::default(), consent).expect("state")
    }

    #[test]
    fn test_navigate_detail_route_opens_record() {
        let mut state = decided_state();
        state.navigate(routes::resolve("/classic/singleton"));
        state.wait_for_load();

        assert_eq!(state.screen, Screen::Detail);
        let detail = state.detail.as_ref().expect("detail view");
        assert_eq!(detail.record.as_ref().map(|r| r.name.as_str()), Some("Singleton"));
        assert_eq!(
            state.current_route().map(|r| r.path()),
            Some("/classic/singleton".to_string())
        );
    }

    #[test]
    fn test_unknown_record_shows_not_found() {
        let mut state = decided_state();
        state.navigate(routes::resolve("/solid/nope"));
        state.wait_for_load();

        assert_eq!(state.screen, Screen::Detail);
        assert!(state.detail.as_ref().is_some_and(|d| d.record.is_none()));

        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert_eq!(state.screen, Screen::List);
        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert_eq!(state.screen, Screen::Sections);
    }

    #[test]
    fn test_cached_section_opens_without_loading() {
        let mut state = decided_state();
        state.navigate(Route::List {
            section: SectionKey::Grasp,
        });
        state.wait_for_load();
        state.go_back();

        state.navigate(Route::List {
            section: SectionKey::Grasp,
        });
        assert!(state.loading_section().is_none());
        assert_eq!(state.screen, Screen::List);
    }

    #[test]
    fn test_architecture_route() {
        let mut state = decided_state();
        state.navigate(routes::resolve("/architecture"));
        assert_eq!(state.screen, Screen::Architecture);
        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert_eq!(state.screen, Screen::Sections);
    }

    #[test]
    fn test_consent_keys_take_precedence() {
        let mut state = AppState::new(Config::default(), ConsentStore::detached()).unwrap();
        assert!(state.consent.is_pending());
        assert_eq!(state.help_contexts()[0], help_registry::contexts::CONSENT);

        handle_key_event(&mut state, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(state.consent.state(), ConsentState::Accepted);
        assert_eq!(state.status_message, "Analytics accepted");
        assert_eq!(state.help_contexts()[0], help_registry::contexts::SECTIONS);
    }

    #[test]
    fn test_error_overlay_blocks_input() {
        let mut state = decided_state();
        state.set_error("boom");
        assert!(!handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert!(state.error_message.is_none());
        assert!(handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_help_overlay_toggles() {
        let mut state = decided_state();
        handle_key_event(&mut state, key(KeyCode::Char('?'))).unwrap();
        assert!(state.help_overlay.is_some());
        // 'q' is swallowed by the overlay
        assert!(!handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(state.help_overlay.is_none());
    }

    #[test]
    fn test_picker_enter_opens_list() {
        let mut state = decided_state();
        state.picker.focus(SectionKey::Solid);
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        state.wait_for_load();
        assert_eq!(state.screen, Screen::List);
        let list = state.list.as_ref().expect("list");
        assert_eq!(list.view().items().len(), 5);
    }
}
