//! # Settings Screen
//!
//! Placeholder. Shows where runtime configuration lives.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct SettingsScreen {
    /// Displayed config path, if the home directory is known
    pub config_path: Option<String>,
}

impl SettingsScreen {
    pub fn new(config_path: Option<String>) -> Self {
        Self { config_path }
    }
}

impl Component for SettingsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            "Settings",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if let Some(path) = &self.config_path {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("Config: {path}"),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}
