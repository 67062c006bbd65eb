//! # Recipe Detail Component
//!
//! Title, bulleted ingredients and numbered steps for one recipe, inside a
//! scroll view. Long lines wrap with a hanging indent so the bullet or step
//! number stays visible on the left.
//!
//! When the id in the route no longer resolves (or never did), a
//! "Recipe not found!" placeholder is shown instead.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::recipe::Recipe;
use crate::tui::component::Component;

pub const NOT_FOUND: &str = "Recipe not found!";

/// Horizontal padding on each side of the detail text.
const MARGIN: u16 = 1;

pub struct RecipeDetail<'a> {
    recipe: Option<&'a Recipe>,
    scroll_state: &'a mut ScrollViewState,
}

impl<'a> RecipeDetail<'a> {
    pub fn new(recipe: Option<&'a Recipe>, scroll_state: &'a mut ScrollViewState) -> Self {
        Self {
            recipe,
            scroll_state,
        }
    }
}

impl Component for RecipeDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(recipe) = self.recipe else {
            let placeholder = Paragraph::new(NOT_FOUND)
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .block(Block::default().padding(Padding::top(area.height / 2)));
            frame.render_widget(placeholder, area);
            return;
        };

        // One column for the scrollbar, plus the margin on each side
        let content_width = area.width.saturating_sub(1);
        let text_width = content_width.saturating_sub(MARGIN * 2);
        let lines = detail_lines(recipe, text_width as usize);
        let height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(MARGIN))),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, area, &mut *self.scroll_state);
    }
}

/// Lay out the recipe as styled lines wrapped to `width` columns.
pub fn detail_lines(recipe: &Recipe, width: usize) -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD).fg(Color::Green);
    let width = width.max(8);

    let mut lines = vec![
        Line::styled(recipe.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::styled("Ingredients", heading),
    ];
    for ingredient in &recipe.ingredients {
        lines.extend(hanging(ingredient, "  • ", width));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("Steps", heading));
    for (index, step) in recipe.steps.iter().enumerate() {
        lines.extend(hanging(step, &format!("  {}. ", index + 1), width));
    }
    lines
}

fn hanging(text: &str, prefix: &str, width: usize) -> Vec<Line<'static>> {
    let indent = " ".repeat(unicode_width::UnicodeWidthStr::width(prefix));
    let options = textwrap::Options::new(width)
        .initial_indent(prefix)
        .subsequent_indent(&indent);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| Line::raw(line.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recipe::seed_recipes;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_detail_lines_layout() {
        let recipe = &seed_recipes()[2];
        let lines = plain(&detail_lines(recipe, 80));
        assert_eq!(
            lines,
            vec![
                "Caesar Salad",
                "",
                "Ingredients",
                "  • Romaine Lettuce",
                "  • Croutons",
                "  • Parmesan Cheese",
                "  • Caesar Dressing",
                "",
                "Steps",
                "  1. Chop the lettuce.",
                "  2. Toss all ingredients in a large bowl.",
            ]
        );
    }

    #[test]
    fn test_long_step_wraps_with_hanging_indent() {
        let recipe = Recipe::from_input(9, "Stew", "", "Simmer everything slowly for hours");
        let lines = plain(&detail_lines(&recipe, 20));
        let steps = &lines[lines.iter().position(|l| l == "Steps").unwrap() + 1..];
        assert!(steps.len() > 1);
        assert!(steps[0].starts_with("  1. Simmer"));
        assert!(steps[1..].iter().all(|l| l.starts_with("     ")));
    }

    #[test]
    fn test_empty_lists_still_show_headings() {
        let recipe = Recipe::from_input(1, "", "", "");
        let lines = plain(&detail_lines(&recipe, 40));
        assert_eq!(lines, vec!["", "", "Ingredients", "", "Steps"]);
    }

    #[test]
    fn test_render_recipe() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let recipes = seed_recipes();
        let mut scroll = ScrollViewState::default();
        terminal
            .draw(|f| RecipeDetail::new(Some(&recipes[0]), &mut scroll).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Chicken Alfredo"));
        assert!(text.contains("• Heavy Cream"));
        assert!(text.contains("3. Make sauce and combine everything."));
    }

    #[test]
    fn test_render_not_found() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut scroll = ScrollViewState::default();
        terminal
            .draw(|f| RecipeDetail::new(None, &mut scroll).render(f, f.area()))
            .unwrap();
        assert!(buffer_text(&terminal).contains(NOT_FOUND));
    }
}
