//! # Add Recipe Form
//!
//! Three text fields and a submit button.
//!
//! ```text
//! Add a New Recipe
//! ╭Recipe Title──────────────────╮
//! ╰──────────────────────────────╯
//! ╭Ingredients (one per line)────╮
//! │                              │   Tab / Shift+Tab  cycle focus
//! ╰──────────────────────────────╯   Enter            next (title), newline
//! ╭Steps (one per line)──────────╮                    (lists), submit (button)
//! │                              │   Ctrl+S           submit from anywhere
//! ╰──────────────────────────────╯
//!           [ Add Recipe ]
//! ```
//!
//! The form does no validation: whatever is typed is handed to the store,
//! which trims and splits it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Title,
    Ingredients,
    Steps,
    Button,
}

impl FormFocus {
    const ORDER: [FormFocus; 4] = [
        FormFocus::Title,
        FormFocus::Ingredients,
        FormFocus::Steps,
        FormFocus::Button,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit {
        title: String,
        ingredients: String,
        steps: String,
    },
}

pub struct AddRecipeForm {
    pub title: TextField,
    pub ingredients: TextField,
    pub steps: TextField,
    pub focus: FormFocus,
}

impl AddRecipeForm {
    pub fn new() -> Self {
        Self {
            title: TextField::new("Recipe Title", false),
            ingredients: TextField::new("Ingredients (one per line)", true),
            steps: TextField::new("Steps (one per line)", true),
            focus: FormFocus::Title,
        }
    }

    /// Empty every field and return focus to the title.
    pub fn reset(&mut self) {
        self.title.clear();
        self.ingredients.clear();
        self.steps.clear();
        self.focus = FormFocus::Title;
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormFocus::Title => Some(&mut self.title),
            FormFocus::Ingredients => Some(&mut self.ingredients),
            FormFocus::Steps => Some(&mut self.steps),
            FormFocus::Button => None,
        }
    }

    /// Take the raw field contents and clear the form.
    fn submit(&mut self) -> FormEvent {
        let event = FormEvent::Submit {
            title: std::mem::take(&mut self.title.buffer),
            ingredients: std::mem::take(&mut self.ingredients.buffer),
            steps: std::mem::take(&mut self.steps.buffer),
        };
        self.reset();
        event
    }
}

impl Default for AddRecipeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for AddRecipeForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::SubmitForm => return Some(self.submit()),
            TuiEvent::NextField => {
                self.focus = self.focus.next();
                return None;
            }
            TuiEvent::PrevField => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        if self.focus == FormFocus::Button {
            return match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(self.submit()),
                TuiEvent::CursorUp => {
                    self.focus = self.focus.prev();
                    None
                }
                _ => None,
            };
        }

        let field_event = self.focused_field().and_then(|field| field.handle_event(event));
        if field_event == Some(FieldEvent::Next) {
            self.focus = self.focus.next();
        }
        None
    }
}

impl Component for AddRecipeForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Fill, Length};
        let [heading_area, title_area, ingredients_area, steps_area, button_area] =
            Layout::vertical([Length(2), Length(3), Fill(1), Fill(1), Length(3)]).areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(" Add a New Recipe"))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            heading_area,
        );

        self.title.focused = self.focus == FormFocus::Title;
        self.ingredients.focused = self.focus == FormFocus::Ingredients;
        self.steps.focused = self.focus == FormFocus::Steps;

        self.title.render(frame, title_area);
        self.ingredients.render(frame, ingredients_area);
        self.steps.render(frame, steps_area);

        let button_style = if self.focus == FormFocus::Button {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        let button = Paragraph::new(Line::from("Add Recipe").centered())
            .style(button_style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Green)),
            );
        frame.render_widget(button, button_area);
    }
}
