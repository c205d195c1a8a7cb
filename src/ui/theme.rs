//! Color palettes for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::state::Theme;

/// Colors used by one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Primary text
    pub fg: Color,
    /// Secondary text (hints, word count, footer)
    pub dim: Color,
    /// Panel borders
    pub border: Color,
    /// Active mode chip and enabled submit button
    pub accent: Color,
    /// Text drawn on `accent`
    pub accent_fg: Color,
    /// Inactive mode chips
    pub chip_bg: Color,
    /// Error banner text and border
    pub error_fg: Color,
    /// Error banner background
    pub error_bg: Color,
    /// Result panel border
    pub result_border: Color,
}

// ============================================================================
// Light
// ============================================================================

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(241, 245, 249),
    fg: Color::Rgb(31, 41, 55),
    dim: Color::Rgb(75, 85, 99),
    border: Color::Rgb(203, 213, 225),
    accent: Color::Rgb(37, 99, 235),
    accent_fg: Color::White,
    chip_bg: Color::Rgb(226, 232, 240),
    error_fg: Color::Rgb(185, 28, 28),
    error_bg: Color::Rgb(254, 242, 242),
    result_border: Color::Rgb(148, 163, 184),
};

// ============================================================================
// Dark
// ============================================================================

pub const DARK: Palette = Palette {
    bg: Color::Rgb(15, 23, 42),
    fg: Color::Rgb(243, 244, 246),
    dim: Color::Rgb(156, 163, 175),
    border: Color::Rgb(51, 65, 85),
    accent: Color::Rgb(37, 99, 235),
    accent_fg: Color::White,
    chip_bg: Color::Rgb(51, 65, 85),
    error_fg: Color::Rgb(252, 165, 165),
    error_bg: Color::Rgb(69, 10, 10),
    result_border: Color::Rgb(100, 116, 139),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent_fg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chip_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.chip_bg)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg).bg(self.error_bg)
    }
}
