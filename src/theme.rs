//! Color themes for the terminal interface.

use ratatui::style::{Color, Modifier, Style};

/// Palette driving every styled widget in the interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub row_highlight_bg: Color,
    pub prompt_fg: Color,
    pub muted_fg: Color,
    pub correct_fg: Color,
    pub incorrect_fg: Color,
    pub error_fg: Color,
    pub modal_border_fg: Color,
}

impl Theme {
    /// Default dark palette.
    #[must_use]
    pub fn slate() -> Self {
        Self {
            header_fg: Color::Rgb(226, 232, 240),
            header_bg: Color::Rgb(51, 65, 85),
            row_highlight_bg: Color::Rgb(71, 85, 105),
            prompt_fg: Color::Rgb(125, 211, 252),
            muted_fg: Color::Rgb(148, 163, 184),
            correct_fg: Color::Rgb(74, 222, 128),
            incorrect_fg: Color::Rgb(248, 113, 113),
            error_fg: Color::Rgb(251, 146, 60),
            modal_border_fg: Color::Rgb(125, 211, 252),
        }
    }

    /// Palette for light terminal backgrounds.
    #[must_use]
    pub fn light() -> Self {
        Self {
            header_fg: Color::Rgb(248, 250, 252),
            header_bg: Color::Rgb(100, 116, 139),
            row_highlight_bg: Color::Rgb(203, 213, 225),
            prompt_fg: Color::Rgb(2, 132, 199),
            muted_fg: Color::Rgb(100, 116, 139),
            correct_fg: Color::Rgb(22, 163, 74),
            incorrect_fg: Color::Rgb(220, 38, 38),
            error_fg: Color::Rgb(194, 65, 12),
            modal_border_fg: Color::Rgb(2, 132, 199),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::new()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row_highlight_style(&self) -> Style {
        Style::new().bg(self.row_highlight_bg)
    }

    pub fn prompt_style(&self) -> Style {
        Style::new().fg(self.prompt_fg).add_modifier(Modifier::BOLD)
    }

    pub fn empty_style(&self) -> Style {
        Style::new().fg(self.muted_fg)
    }

    pub fn correct_style(&self) -> Style {
        Style::new().fg(self.correct_fg).add_modifier(Modifier::BOLD)
    }

    pub fn incorrect_style(&self) -> Style {
        Style::new().fg(self.incorrect_fg)
    }

    pub fn error_style(&self) -> Style {
        Style::new().fg(self.error_fg).add_modifier(Modifier::BOLD)
    }

    pub fn modal_border_style(&self) -> Style {
        Style::new().fg(self.modal_border_fg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

/// Names of the built-in themes, in presentation order.
pub fn names() -> Vec<&'static str> {
    vec!["slate", "light"]
}

/// Look up a built-in theme by name.
pub fn by_name(name: &str) -> Option<Theme> {
    match name {
        "slate" => Some(Theme::slate()),
        "light" => Some(Theme::light()),
        _ => None,
    }
}
