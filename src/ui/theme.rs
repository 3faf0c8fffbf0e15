//! Terminal colors for semantic tones

use crate::core::Tone;
use ratatui::style::{Color, Modifier, Style};

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Destructive => Color::Red,
        Tone::Info => Color::LightBlue,
        Tone::Primary => Color::Blue,
        Tone::Secondary => Color::Magenta,
        Tone::Accent => Color::Cyan,
        Tone::Muted => Color::DarkGray,
    }
}

/// Filled badge, e.g. alert priority
pub fn badge(tone: Tone) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(tone_color(tone))
        .add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Active navigation link / selected filter button
pub fn active() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}
