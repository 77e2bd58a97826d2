//! Color mapping for widget accents and shared styles

use ratatui::style::{Color, Modifier, Style};

use crate::domain::Accent;

/// Terminal color for a card accent.
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Red => Color::Red,
        Accent::Green => Color::Green,
        Accent::Amber => Color::Yellow,
        Accent::Indigo => Color::Cyan,
        Accent::Gray => Color::DarkGray,
    }
}

pub fn heading() -> Style {
    Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn focused_border() -> Style {
    Style::default().fg(Color::Cyan)
}
