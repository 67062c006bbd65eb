//! # TitleBar Component
//!
//! Top status bar showing which screen is active, how many recipes the store
//! holds, and the last status message.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Home", 3, "Added recipe #4");
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Recipebook | Home | 4 recipes | Added recipe #4"`
//! 2. **Default**: `"Recipebook | Home | 4 recipes"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Label of the active destination
    pub screen_label: String,
    /// Number of recipes in the latest store snapshot
    pub recipe_count: usize,
    /// Transient status (e.g. "Added recipe #4")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_label: &str, recipe_count: usize, status_message: &str) -> Self {
        Self {
            screen_label: screen_label.to_string(),
            recipe_count,
            status_message: status_message.to_string(),
        }
    }

    fn count_text(&self) -> String {
        match self.recipe_count {
            1 => "1 recipe".to_string(),
            n => format!("{n} recipes"),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = vec![
            Span::styled(
                "Recipebook",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | ", dim),
            Span::raw(self.screen_label.clone()),
            Span::styled(" | ", dim),
            Span::raw(self.count_text()),
        ];

        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", dim));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = render(&mut TitleBar::new("Home", 4, "Added recipe #4"));
        assert!(text.contains("Recipebook"));
        assert!(text.contains("Home"));
        assert!(text.contains("4 recipes"));
        assert!(text.contains("Added recipe #4"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let text = render(&mut TitleBar::new("Settings", 1, ""));
        assert!(text.contains("1 recipe"));
        assert!(!text.contains("1 recipes"));
        assert_eq!(text.matches('|').count(), 2);
    }
}
