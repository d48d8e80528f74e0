use ratatui::style::{Color, Style};

use crate::config::ThemeMode;

/// The fixed style pair used for every grid cell. The grid is deliberately
/// monochrome: styling never reacts to content.
pub fn grid_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Light => Style::default().fg(Color::Black).bg(Color::Yellow),
        ThemeMode::Dark => Style::default().fg(Color::Yellow).bg(Color::Black),
    }
}

/// Style for the one-row status bar.
pub fn status_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}
