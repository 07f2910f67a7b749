//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Height of the status bar including borders
pub const STATUS_BAR_HEIGHT: u16 = 5;

/// Maximum number of key hints on the help line
const MAX_HINTS: usize = 6;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        // First line: loading indicator, error, or status message
        if let Some(section) = state.loading_section() {
            content_lines.push(Line::from(Span::styled(
                format!("Loading {}...", section.title()),
                Style::default().fg(theme.warning),
            )));
        } else if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ]));
        } else if !state.status_message.is_empty() {
            content_lines.push(Line::from(state.status_message.as_str()));
        } else {
            content_lines.push(Line::from(""));
        }

        // Second line: clipboard preview
        if let Some(preview) = state.clipboard.get_preview() {
            let label = state.clipboard.last().map_or("", |snippet| snippet.label);
            content_lines.push(Line::from(vec![
                Span::styled("Clipboard: ", Style::default().fg(theme.primary)),
                Span::styled(format!("[{label}] "), Style::default().fg(theme.text_muted)),
                Span::styled(preview, Style::default().fg(theme.accent)),
            ]));
        } else {
            content_lines.push(Line::from(""));
        }

        content_lines.push(Self::get_hints_line(state, theme));

        let status = Paragraph::new(content_lines)
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key hints for the active contexts, from the help registry
    fn get_hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints = state
            .help
            .format_status_bar_hints(&state.help_contexts(), MAX_HINTS);

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }
}
