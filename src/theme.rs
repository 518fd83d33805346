//! UI palette and style helpers.
//!
//! Item cards take their colors from the server; everything else (chrome,
//! status bar, popups) draws from this fixed palette.

use ratatui::style::{Color, Modifier, Style};

/// Semantic colors for the UI chrome
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Primary background color
    pub bg: Color,
    /// Secondary background for popups
    pub bg_secondary: Color,
    /// Primary foreground/text color
    pub fg: Color,
    /// Dimmed text color
    pub fg_dim: Color,
    /// Muted text color (lowest contrast)
    pub fg_muted: Color,
    /// Accent color (top bar, spinner, highlights)
    pub accent: Color,
    /// Text on top of the accent color
    pub accent_fg: Color,
    /// Error state color
    pub error: Color,
    /// Border color (unfocused)
    pub border: Color,
    /// Selection highlight background
    pub selection: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            bg_secondary: Color::Rgb(0x26, 0x26, 0x2e),
            fg: Color::White,
            fg_dim: Color::Gray,
            fg_muted: Color::DarkGray,
            accent: Color::Rgb(0xd8, 0x1b, 0x60),
            accent_fg: Color::White,
            error: Color::Red,
            border: Color::DarkGray,
            selection: Color::Rgb(0x3a, 0x3a, 0x46),
        }
    }
}

impl Palette {
    /// Style for unfocused block borders
    pub fn block(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the top bar
    pub fn top_bar(&self) -> Style {
        Style::default().bg(self.accent).fg(self.accent_fg)
    }

    /// Style for the top bar title
    pub fn top_bar_title(&self) -> Style {
        self.top_bar().add_modifier(Modifier::BOLD)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Dimmed text
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    /// Muted text (hints, placeholders)
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    /// Error text
    pub fn text_error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Key-hint style ("[r] Retry")
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Spinner glyph style
    pub fn spinner(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Selected list row background
    pub fn selected(&self) -> Style {
        Style::default().bg(self.selection)
    }
}
