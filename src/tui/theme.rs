//! Theme system for consistent UI colors across dark and light modes.
//!
//! `ThemeMode::Auto` asks the OS for its dark/light preference through the
//! `dark-light` crate; the other modes pick a palette directly.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles, and emphasis
    pub primary: Color,
    /// Highlights, selections, and focus states
    pub accent: Color,
    /// Confirmations
    pub success: Color,
    /// Errors and failed loads
    pub error: Color,
    /// Warnings and the consent banner
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Labels and less important content
    pub text_secondary: Color,
    /// Help text and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Selection background color
    pub highlight_bg: Color,
    /// Background of code and markup snippets
    pub surface: Color,

    /// Star ratings
    pub star: Color,
    /// SOLID letter badges
    pub badge: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching palette.
    #[must_use]
    pub fn detect() -> Self {
        // Detection errors fall back to dark
        dark_light::detect().map_or_else(|_| Self::dark(), Self::for_os_mode)
    }

    /// Palette for a detected OS mode; unspecified means dark.
    #[must_use]
    pub const fn for_os_mode(mode: dark_light::Mode) -> Self {
        match mode {
            dark_light::Mode::Light => Self::light(),
            dark_light::Mode::Dark | dark_light::Mode::Unspecified => Self::dark(),
        }
    }

    /// Resolves the configured mode to a palette.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            star: Color::Rgb(255, 200, 0),
            badge: Color::Magenta,
        }
    }

    /// Palette for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            star: Color::Rgb(190, 130, 0),
            badge: Color::Rgb(140, 0, 140),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
