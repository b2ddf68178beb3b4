//! Flat style lookup tables: category and chart-color tokens to terminal
//! colors, one table consulted by both the console views and the TUI.

use once_cell::sync::Lazy;
use owo_colors::AnsiColors;
use ratatui::style::Color;
use std::collections::HashMap;

use helptrace_types::{ChartColor, SessionStatus};

/// Known issue categories and their palette slots. Unknown categories fall
/// back to the first slot.
static CATEGORY_COLORS: Lazy<HashMap<&'static str, ChartColor>> = Lazy::new(|| {
    HashMap::from([
        ("Network", ChartColor::Blue),
        ("Software", ChartColor::Green),
        ("Password", ChartColor::Amber),
        ("Hardware", ChartColor::Rose),
        ("Access", ChartColor::Violet),
    ])
});

pub fn category_color(name: &str) -> ChartColor {
    CATEGORY_COLORS
        .get(name)
        .copied()
        .unwrap_or(ChartColor::Blue)
}

/// ANSI color for console output.
pub fn ansi_color(color: ChartColor) -> AnsiColors {
    match color {
        ChartColor::Blue => AnsiColors::Cyan,
        ChartColor::Green => AnsiColors::Green,
        ChartColor::Amber => AnsiColors::Yellow,
        ChartColor::Rose => AnsiColors::Red,
        ChartColor::Violet => AnsiColors::Magenta,
    }
}

/// Light/dark palette selection for the interactive dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn foreground(self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    pub fn muted(self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::LightCyan,
            Theme::Light => Color::Blue,
        }
    }

    pub fn chart_color(self, color: ChartColor) -> Color {
        match (self, color) {
            (Theme::Dark, ChartColor::Blue) => Color::LightCyan,
            (Theme::Light, ChartColor::Blue) => Color::Blue,
            (Theme::Dark, ChartColor::Green) => Color::LightGreen,
            (Theme::Light, ChartColor::Green) => Color::Green,
            (_, ChartColor::Amber) => Color::Yellow,
            (Theme::Dark, ChartColor::Rose) => Color::LightRed,
            (Theme::Light, ChartColor::Rose) => Color::Red,
            (Theme::Dark, ChartColor::Violet) => Color::LightMagenta,
            (Theme::Light, ChartColor::Violet) => Color::Magenta,
        }
    }

    pub fn status_color(self, status: SessionStatus) -> Color {
        match status {
            SessionStatus::TicketRaised => Color::Yellow,
            SessionStatus::Resolved => match self {
                Theme::Dark => Color::LightGreen,
                Theme::Light => Color::Green,
            },
        }
    }
}

/// ANSI status color for console badges.
pub fn status_ansi(status: SessionStatus) -> AnsiColors {
    match status {
        SessionStatus::TicketRaised => AnsiColors::Yellow,
        SessionStatus::Resolved => AnsiColors::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_have_distinct_slots() {
        let slots = [
            category_color("Network"),
            category_color("Software"),
            category_color("Password"),
            category_color("Hardware"),
            category_color("Access"),
        ];
        for (i, a) in slots.iter().enumerate() {
            for b in slots.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_category_falls_back() {
        assert_eq!(category_color("Printers"), ChartColor::Blue);
    }
}
