//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;

    // xterm-256 index 50: a bright teal.
    pub const GAUGE_BAR: Color = Color::Indexed(50);
    pub const GAUGE_LABEL: Color = Color::White;

    pub const BORDER: Color = Color::DarkGray;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Filled part of the gauge bar.
    pub fn gauge_bar() -> Style {
        Style::default().fg(Theme::GAUGE_BAR).bg(Theme::BG)
    }

    /// Percentage label drawn over the bar.
    pub fn gauge_label() -> Style {
        Style::default()
            .fg(Theme::GAUGE_LABEL)
            .add_modifier(Modifier::BOLD)
    }

    /// Widget border.
    pub fn border() -> Style {
        Style::default().fg(Theme::BORDER)
    }
}
