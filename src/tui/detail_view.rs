//! Detail screen for a single record.
//!
//! Shows the full description and any code/markup snippets. A record that
//! cannot be resolved renders a not-found page with a way back to the list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{CatalogRecord, SectionKey};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Lines moved by PageUp/PageDown
const PAGE: u16 = 10;

/// Detail screen state
#[derive(Debug, Clone)]
pub struct DetailView {
    /// Section the record belongs to
    pub section: SectionKey,
    /// Id that was requested
    pub id: String,
    /// Resolved record, `None` when the id matched nothing
    pub record: Option<CatalogRecord>,
    scroll: u16,
}

impl DetailView {
    /// Creates a detail view for `id`, resolved to `record`
    #[must_use]
    pub fn new(section: SectionKey, id: impl Into<String>, record: Option<CatalogRecord>) -> Self {
        Self {
            section,
            id: id.into(),
            record,
            scroll: 0,
        }
    }

    /// Current scroll offset in lines
    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    fn copy_event(
        &self,
        label: &'static str,
        pick: fn(&CatalogRecord) -> Option<&String>,
    ) -> Option<ComponentEvent> {
        let text = self.record.as_ref().and_then(pick)?;
        Some(ComponentEvent::Copy {
            label,
            text: text.clone(),
        })
    }

    fn content<'a>(record: &'a CatalogRecord, theme: &Theme) -> Vec<Line<'a>> {
        let label = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        let mut header = Vec::new();
        if let Some(letter) = record.letter {
            header.push(Span::styled(
                format!("[{letter}] "),
                Style::default()
                    .fg(theme.badge)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        header.push(Span::styled(
            record.category.as_str(),
            Style::default().fg(theme.text_secondary),
        ));
        if let Some(rating) = record.rating {
            header.push(Span::styled(
                format!("  {}", rating.stars()),
                Style::default().fg(theme.star),
            ));
        }

        let mut lines = vec![
            Line::from(header),
            Line::from(""),
            Line::from(Span::styled(
                record.short_description.as_str(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
        ];
        lines.extend(
            record
                .description
                .lines()
                .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.text)))),
        );

        let snippets = [
            ("Code (y to copy)", record.code_example.as_deref()),
            ("Markup (m to copy)", record.markup_example.as_deref()),
        ];
        for (title, snippet) in snippets {
            let Some(snippet) = snippet else { continue };
            lines.push(Line::from(""));
            lines.push(label(title));
            lines.extend(snippet.lines().map(|line| {
                Line::from(Span::styled(
                    line,
                    Style::default().fg(theme.accent).bg(theme.surface),
                ))
            }));
        }

        lines
    }
}

impl Component for DetailView {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE);
                None
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(PAGE);
                None
            }
            KeyCode::Home => {
                self.scroll = 0;
                None
            }
            KeyCode::Char('y') => self.copy_event("code example", |r| r.code_example.as_ref()),
            KeyCode::Char('m') => {
                self.copy_event("markup example", |r| r.markup_example.as_ref())
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                Some(ComponentEvent::Back)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(record) = &self.record else {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Not found",
                    Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("No entry '{}' in {}.", self.id, self.section.title()),
                    Style::default().fg(theme.text),
                )),
                Line::from(Span::styled(
                    format!("Esc: back to /{}", self.section.route_segment()),
                    Style::default().fg(theme.text_muted),
                )),
            ];
            let page = Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
            f.render_widget(page, area);
            return;
        };

        let detail = Paragraph::new(Self::content(record, theme))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .title(format!(" {} ", record.name))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(detail, area);
    }
}
