//! Help overlay listing every keybinding, grouped by screen.
//!
//! Toggled with '?'. Content comes from the [`HelpRegistry`].

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::help_registry::{contexts, HelpRegistry};
use super::Theme;

/// Width reserved for the key column
const KEY_COLUMN: usize = 28;

/// State for the help overlay.
#[derive(Debug, Clone, Default)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub const fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line, stopping at the last line.
    pub fn scroll_down(&mut self, total_lines: usize) {
        if self.scroll_offset + 1 < total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Help content: one block per context, bindings in priority order.
    pub fn content(registry: &HelpRegistry, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for name in contexts::HELP_ORDER {
            let Some(context) = registry.get_context(name) else {
                continue;
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("═══ {} ═══", context.name.to_uppercase()),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", context.description),
                    Style::default().fg(theme.text_muted),
                ),
            ]));
            for binding in registry.get_bindings(name) {
                let (keys, action) = HelpRegistry::format_binding_for_help(binding);
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {keys:<width$}", width = KEY_COLUMN),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(action, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    /// Render the help overlay as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect, registry: &HelpRegistry, theme: &Theme) {
        let width = (area.width * 70) / 100;
        let height = (area.height * 80) / 100;
        let modal_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content = Self::content(registry, theme);
        let total_lines = content.len();
        let visible_height = chunks[0].height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(format!(" {} - Keyboard Shortcuts ", registry.app_name()))
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state = ScrollbarState::new(total_lines.saturating_sub(visible_height))
            .position(self.scroll_offset);
        frame.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}
