//! Section list screen: category chips above a filtered record list.
//!
//! Tab / Shift+Tab cycle the category filter through "All" and each
//! category in first-occurrence order. Enter opens the highlighted record.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{CatalogRecord, DataSet, ListViewModel, SectionKey};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// List screen state for one section.
#[derive(Debug, Clone)]
pub struct SectionList {
    /// Section being browsed
    pub section: SectionKey,
    view: ListViewModel,
    /// Highlighted row within the filtered items
    selected: usize,
}

impl SectionList {
    /// Creates an unfiltered list over `items`
    #[must_use]
    pub const fn new(section: SectionKey, items: DataSet) -> Self {
        Self {
            section,
            view: ListViewModel::new(items),
            selected: 0,
        }
    }

    /// The underlying view model
    #[must_use]
    pub const fn view(&self) -> &ListViewModel {
        &self.view
    }

    /// The highlighted record, if the filtered list is non-empty
    #[must_use]
    pub fn current(&self) -> Option<&CatalogRecord> {
        self.view.filtered_items().get(self.selected).copied()
    }

    /// Highlights the record with `id` if it is visible under the current filter
    pub fn focus(&mut self, id: &str) {
        if let Some(idx) = self.view.filtered_items().iter().position(|r| r.id == id) {
            self.selected = idx;
        }
    }

    fn visible_count(&self) -> usize {
        self.view.filtered_items().len()
    }

    fn select_previous(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            self.selected = if self.selected > 0 {
                self.selected - 1
            } else {
                count - 1
            };
        }
    }

    fn select_next(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    fn filter_changed(&mut self) -> ComponentEvent {
        self.selected = 0;
        ComponentEvent::FilterChanged(self.view.selected_category().map(str::to_string))
    }

    fn render_chips(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let active = self.view.selected_category();
        let chip = |label: &str, is_active: bool| {
            let style = if is_active {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            Span::styled(format!(" {label} "), style)
        };

        let mut spans = vec![chip("All", active.is_none())];
        for category in self.view.categories() {
            spans.push(Span::raw(" "));
            spans.push(chip(category, active == Some(category)));
        }

        let chips = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Category (Tab/Shift+Tab) ")
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(chips, area);
    }

    fn list_item<'a>(record: &'a CatalogRecord, theme: &Theme) -> ListItem<'a> {
        let mut title = Vec::new();
        if let Some(letter) = record.letter {
            title.push(Span::styled(
                format!("[{letter}] "),
                Style::default()
                    .fg(theme.badge)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        title.push(Span::styled(
            record.name.as_str(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ));
        title.push(Span::styled(
            format!("  {}", record.category),
            Style::default().fg(theme.text_muted),
        ));
        if let Some(rating) = record.rating {
            title.push(Span::styled(
                format!("  {}", rating.stars()),
                Style::default().fg(theme.star),
            ));
        }

        ListItem::new(vec![
            Line::from(title),
            Line::from(Span::styled(
                format!("   {}", record.short_description),
                Style::default().fg(theme.text_secondary),
            )),
        ])
    }
}

impl Component for SectionList {
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
            KeyCode::Tab => {
                self.view.select_next();
                Some(self.filter_changed())
            }
            KeyCode::BackTab => {
                self.view.select_previous();
                Some(self.filter_changed())
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => self
                .current()
                .map(|record| ComponentEvent::RecordChosen(record.id.clone())),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                Some(ComponentEvent::Back)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let intro_height = if self.section.intro_extra().is_some() { 6 } else { 4 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(intro_height), // Intro
                Constraint::Length(3),            // Category chips
                Constraint::Min(5),               // Records
            ])
            .split(area);

        let mut intro = vec![Line::from(Span::styled(
            self.section.intro(),
            Style::default().fg(theme.text),
        ))];
        if let Some(extra) = self.section.intro_extra() {
            intro.push(Line::from(Span::styled(
                extra,
                Style::default().fg(theme.text_secondary),
            )));
        }
        let intro = Paragraph::new(intro).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(format!(" {} ", self.section.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(intro, chunks[0]);

        self.render_chips(f, chunks[1], theme);

        let filtered = self.view.filtered_items();
        let block = Block::default()
            .title(format!(
                " {} of {} ",
                filtered.len(),
                self.view.items().len()
            ))
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background));

        if filtered.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No entries to show.",
                Style::default().fg(theme.text_muted),
            ))
            .block(block);
            f.render_widget(empty, chunks[2]);
            return;
        }

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|record| Self::list_item(record, theme))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.highlight_bg))
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected.min(filtered.len() - 1)));
        f.render_stateful_widget(list, chunks[2], &mut list_state);
    }
}
