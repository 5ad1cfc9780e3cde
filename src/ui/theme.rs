use ratatui::style::{Color, Modifier, Style};

use crate::menu::Course;

/// Theme tokens for consistent styling across screens
pub struct Theme {
    pub title: Style,
    pub border: Style,
    pub focused_border: Style,
    pub selected: Style,
    pub normal: Style,
    pub muted: Style,
    pub price: Style,
    pub danger: Style,
    pub success: Style,
    pub key_hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Cyan),
            selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            normal: Style::default().fg(Color::White),
            muted: Style::default().fg(Color::DarkGray),
            price: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            danger: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            key_hint: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Accent colour per course, as on the main menu buttons
    pub fn course(&self, course: Course) -> Style {
        let color = match course {
            Course::Starters => Color::Green,
            Course::MainMeal => Color::LightRed,
            Course::Desserts => Color::Magenta,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }
}
