//! Consent banner shown along the bottom of the screen while consent is pending.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::consent::ConsentState;

use super::component::Component;
use super::Theme;

/// Height of the banner including borders
pub const BANNER_HEIGHT: u16 = 4;

/// Consent banner; takes `a`/`r` before any other handler sees them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsentBanner;

impl Component for ConsentBanner {
    type Event = ConsentState;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char('a' | 'A') => Some(ConsentState::Accepted),
            KeyCode::Char('r' | 'R') => Some(ConsentState::Rejected),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let key = |k: &'static str| {
            Span::styled(
                k,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let lines = vec![
            Line::from(Span::styled(
                "Patterndex can record anonymous usage analytics. Nothing is sent unless you accept.",
                Style::default().fg(theme.text),
            )),
            Line::from(vec![
                key("a"),
                Span::styled(" Accept   ", Style::default().fg(theme.text_secondary)),
                key("r"),
                Span::styled(" Reject", Style::default().fg(theme.text_secondary)),
            ]),
        ];

        let banner = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Privacy ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.warning))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(banner, area);
    }
}
