//! # Recipe List Component
//!
//! The home screen: every recipe in store order, one row each.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RecipeListState` lives in `TuiState` and is refreshed from the store's
//!   watch channel whenever it reports a change
//! - `RecipeList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::recipe::{Recipe, RecipeId};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const HEADING: &str = "My Recipes (Enter to open)";

/// Persistent state for the home list.
pub struct RecipeListState {
    pub recipes: Vec<Recipe>,
    pub selected: usize,
    pub list_state: ListState,
}

impl RecipeListState {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut state = Self {
            recipes: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
        };
        state.set_recipes(recipes);
        state
    }

    /// Replace the snapshot, keeping the selection in range.
    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        if self.recipes.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.recipes.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.recipes.get(self.selected)
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

/// Events emitted by the recipe list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeListEvent {
    Open(RecipeId),
}

impl EventHandler for RecipeListState {
    type Event = RecipeListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<RecipeListEvent> {
        if self.recipes.is_empty() {
            return None;
        }
        let last = self.recipes.len() - 1;
        match event {
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select((self.selected + 1).min(last));
                None
            }
            TuiEvent::CursorHome | TuiEvent::PageUp => {
                self.select(0);
                None
            }
            TuiEvent::CursorEnd | TuiEvent::PageDown => {
                self.select(last);
                None
            }
            TuiEvent::Submit => self
                .selected_recipe()
                .map(|recipe| RecipeListEvent::Open(recipe.id)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the home list.
pub struct RecipeList<'a> {
    state: &'a mut RecipeListState,
}

impl<'a> RecipeList<'a> {
    pub fn new(state: &'a mut RecipeListState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let heading = Paragraph::new(Line::from(HEADING))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().padding(Padding::horizontal(1)));
        frame.render_widget(heading, heading_area);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        if self.state.recipes.is_empty() {
            let empty = Paragraph::new("No recipes yet. Press F2 to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, list_area);
            return;
        }

        let inner_width = list_area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .state
            .recipes
            .iter()
            .enumerate()
            .map(|(i, recipe)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(truncate_str(&recipe.title, inner_width))).style(style)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recipe::seed_recipes;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_down_then_enter_opens_second() {
        let mut state = RecipeListState::new(seed_recipes());
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(RecipeListEvent::Open(2)));
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = RecipeListState::new(seed_recipes());
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 2);
        state.handle_event(&TuiEvent::CursorHome);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_set_recipes_clamps_selection() {
        let mut state = RecipeListState::new(seed_recipes());
        state.handle_event(&TuiEvent::CursorEnd);
        state.set_recipes(seed_recipes().into_iter().take(1).collect());
        assert_eq!(state.selected, 0);
        state.set_recipes(Vec::new());
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_empty_list_ignores_events() {
        let mut state = RecipeListState::new(Vec::new());
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_render_lists_titles_in_order() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut state = RecipeListState::new(seed_recipes());
        terminal
            .draw(|f| RecipeList::new(&mut state).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(HEADING));
        let alfredo = text.find("Chicken Alfredo").unwrap();
        let tacos = text.find("Tacos").unwrap();
        let salad = text.find("Caesar Salad").unwrap();
        assert!(alfredo < tacos && tacos < salad);
    }

    #[test]
    fn test_render_empty_placeholder() {
        let mut terminal = Terminal::new(TestBackend::new(50, 6)).unwrap();
        let mut state = RecipeListState::new(Vec::new());
        terminal
            .draw(|f| RecipeList::new(&mut state).render(f, f.area()))
            .unwrap();
        assert!(buffer_text(&terminal).contains("No recipes yet"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Tacos", 10), "Tacos");
        assert_eq!(truncate_str("Chicken Alfredo", 10), "Chicken...");
        assert_eq!(truncate_str("Chicken", 2), "..");
        assert_eq!(truncate_str("寿司寿司寿司", 7), "寿司...");
    }
}
