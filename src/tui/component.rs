//! Component trait pattern for TUI screens.
//!
//! Each screen is a self-contained component that handles its own input and
//! rendering and reports navigation intent to `AppState` through events.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::catalog::SectionKey;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard input, and can emit events to communicate with the parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Navigation and action events emitted by screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User picked a section
    SectionChosen(SectionKey),
    /// User opened a record's detail view
    RecordChosen(String),
    /// User asked to copy text to the system clipboard
    Copy {
        /// What is being copied, for the status message
        label: &'static str,
        /// Text to copy
        text: String,
    },
    /// Category filter changed
    FilterChanged(Option<String>),
    /// User asked to go back one screen
    Back,
}
