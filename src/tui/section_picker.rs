//! Section picker: the landing screen listing every catalog section.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::catalog::SectionKey;

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Section picker state
#[derive(Debug, Clone)]
pub struct SectionPicker {
    /// Currently highlighted section index into [`SectionKey::ALL`]
    pub selected: usize,
}

impl Default for SectionPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionPicker {
    /// Creates a picker with the first section highlighted
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Highlights `section`
    pub fn focus(&mut self, section: SectionKey) {
        if let Some(idx) = SectionKey::ALL.iter().position(|s| *s == section) {
            self.selected = idx;
        }
    }

    /// The highlighted section
    #[must_use]
    pub fn current(&self) -> SectionKey {
        SectionKey::ALL[self.selected.min(SectionKey::ALL.len() - 1)]
    }

    /// Move selection up, wrapping to the end
    pub const fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = SectionKey::ALL.len() - 1;
        }
    }

    /// Move selection down, wrapping to the start
    pub const fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SectionKey::ALL.len();
    }
}

impl Component for SectionPicker {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Home => {
                self.selected = 0;
                None
            }
            KeyCode::End => {
                self.selected = SectionKey::ALL.len() - 1;
                None
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                Some(ComponentEvent::SectionChosen(self.current()))
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let items: Vec<ListItem> = SectionKey::ALL
            .iter()
            .map(|section| {
                ListItem::new(Line::from(vec![
                    Span::styled(section.title(), Style::default().fg(theme.text)),
                    Span::styled(
                        format!("  /{}", section.route_segment()),
                        Style::default().fg(theme.text_muted),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Sections ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        // Intro preview for the highlighted section
        let section = self.current();
        let mut lines = vec![
            Line::from(Span::styled(
                section.title(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(section.intro(), Style::default().fg(theme.text))),
        ];
        if let Some(extra) = section.intro_extra() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                extra,
                Style::default().fg(theme.text_secondary),
            )));
        }

        let preview = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" About ")
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(preview, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_picker_wraps_both_ways() {
        let mut picker = SectionPicker::new();
        picker.select_previous();
        assert_eq!(picker.current(), SectionKey::ALL[SectionKey::ALL.len() - 1]);
        picker.select_next();
        assert_eq!(picker.current(), SectionKey::ALL[0]);
    }

    #[test]
    fn test_picker_enter_emits_section() {
        let mut picker = SectionPicker::new();
        picker.focus(SectionKey::Solid);
        assert_eq!(
            picker.handle_input(key(KeyCode::Enter)),
            Some(ComponentEvent::SectionChosen(SectionKey::Solid))
        );
    }

    #[test]
    fn test_picker_navigation_is_internal() {
        let mut picker = SectionPicker::new();
        assert_eq!(picker.handle_input(key(KeyCode::Down)), None);
        assert_eq!(picker.selected, 1);
    }
}
