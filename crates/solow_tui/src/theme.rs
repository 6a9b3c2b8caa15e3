//! Colors for the terminal explorer.
//!
//! Series colors follow the chart description; chrome uses the Kanagawa Wave
//! palette with a high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use solow_core::chart::SeriesColor;

mod colors {
    use super::Color;

    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const ERROR: Color = Color::Rgb(255, 93, 98); // peachRed

    pub const SERIES_BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const SERIES_GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const SERIES_RED: Color = Color::Rgb(255, 93, 98); // peachRed
    pub const SERIES_ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const SERIES_GRAY: Color = Color::Rgb(114, 113, 105); // fujiGray
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub error: Color,
    pub blue: Color,
    pub green: Color,
    pub red: Color,
    pub orange: Color,
    pub gray: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            error: colors::ERROR,
            blue: colors::SERIES_BLUE,
            green: colors::SERIES_GREEN,
            red: colors::SERIES_RED,
            orange: colors::SERIES_ORANGE,
            gray: colors::SERIES_GRAY,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            border: Color::Gray,
            text_primary: Color::White,
            text_muted: Color::Gray,
            primary: Color::White,
            error: Color::Red,
            blue: Color::Blue,
            green: Color::Green,
            red: Color::Red,
            orange: Color::Yellow,
            gray: Color::DarkGray,
        }
    }

    /// Maps a chart color onto the terminal palette. Black is drawn in the
    /// foreground color so the steady-state point shows on dark backgrounds.
    #[must_use]
    pub fn series(&self, color: SeriesColor) -> Color {
        match color {
            SeriesColor::Blue => self.blue,
            SeriesColor::Green => self.green,
            SeriesColor::Red => self.red,
            SeriesColor::Orange => self.orange,
            SeriesColor::Gray => self.gray,
            SeriesColor::Black => self.text_primary,
        }
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
