//! # NavBar Component
//!
//! Bottom navigation with one tab per entry in `Destination::TABS`.
//! The tab whose destination is the current one is highlighted; on a
//! recipe detail screen no tab is.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::navigation::Destination;
use crate::tui::component::Component;

pub struct NavBar {
    pub current: Destination,
}

impl NavBar {
    pub fn new(current: Destination) -> Self {
        Self { current }
    }

    /// Index into `Destination::TABS` of the highlighted tab, if any.
    pub fn selected_tab(&self) -> Option<usize> {
        Destination::TABS.iter().position(|tab| *tab == self.current)
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let selected = self.selected_tab();
        let constraints = Destination::TABS.map(|_| Constraint::Ratio(1, Destination::TABS.len() as u32));
        let cells = Layout::horizontal(constraints).split(area);

        for (i, (tab, cell)) in Destination::TABS.iter().zip(cells.iter()).enumerate() {
            let is_selected = selected == Some(i);
            let style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let border_style = if is_selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let label = Line::from(format!(" F{} {} ", i + 1, tab.label())).style(style).centered();
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style);
            frame.render_widget(Paragraph::new(label).block(block), *cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_selected_tab() {
        assert_eq!(NavBar::new(Destination::Home).selected_tab(), Some(0));
        assert_eq!(NavBar::new(Destination::AddRecipe).selected_tab(), Some(1));
        assert_eq!(NavBar::new(Destination::Settings).selected_tab(), Some(2));
        assert_eq!(NavBar::new(Destination::RecipeDetail(1)).selected_tab(), None);
    }

    #[test]
    fn test_render_shows_all_tabs() {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        let mut nav_bar = NavBar::new(Destination::Home);
        terminal.draw(|f| nav_bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("F1 Home"));
        assert!(text.contains("F2 Add"));
        assert!(text.contains("F3 Settings"));
    }

    #[test]
    fn test_render_highlights_current_tab() {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        let mut nav_bar = NavBar::new(Destination::Settings);
        terminal.draw(|f| nav_bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let highlighted = buffer
            .content()
            .iter()
            .filter(|c| c.bg == Color::Green)
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(highlighted.contains("Settings"));
        assert!(!highlighted.contains("Home"));
    }
}
