//! Color theme for the dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::core::{Difficulty, SearchIntent};

pub struct Theme {
    /// Primary accent color (active elements)
    pub primary: Color,
    /// Success color (positive values)
    pub success: Color,
    /// Muted color (labels, hints)
    pub muted: Color,
    /// Normal text color
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    /// Style for the component that owns keyboard input.
    pub fn focused_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn value_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn up_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn down_style(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn difficulty_style(&self, difficulty: Difficulty) -> Style {
        let color = match difficulty {
            Difficulty::Easy => Color::Green,
            Difficulty::Medium => Color::Yellow,
            Difficulty::Hard => Color::Red,
        };
        Style::default().fg(color)
    }

    pub fn intent_style(&self, intent: SearchIntent) -> Style {
        let color = match intent {
            SearchIntent::Informational => Color::Blue,
            SearchIntent::Transactional => Color::Green,
            SearchIntent::Navigational => Color::Magenta,
            SearchIntent::Commercial => Color::Yellow,
        };
        Style::default().fg(color)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
