//! # Recipe Model
//!
//! A `Recipe` is an immutable value: once the store hands out an id, the
//! record never changes. Free-form text from the add form is normalized here
//! before it reaches the store.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store (current max + 1, starting at 1).
pub type RecipeId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Recipe {
    /// Build a recipe from raw form input.
    ///
    /// The title is trimmed. Both blocks are split on line breaks, each line
    /// is trimmed, and blank lines are dropped. Nothing is rejected: an empty
    /// title or empty lists are stored as-is.
    pub fn from_input(id: RecipeId, title: &str, ingredients_block: &str, steps_block: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            ingredients: split_lines(ingredients_block),
            steps: split_lines(steps_block),
        }
    }
}

/// Split a multi-line block into trimmed, non-empty lines.
///
/// `\n`, `\r\n` and a bare `\r` all count as line breaks.
pub fn split_lines(block: &str) -> Vec<String> {
    block
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn recipe(id: RecipeId, title: &str, ingredients: &[&str], steps: &[&str]) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

/// The recipes present at startup.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "Chicken Alfredo",
            &["Fettuccine", "Chicken Breast", "Heavy Cream", "Parmesan Cheese"],
            &[
                "Boil pasta.",
                "Cook chicken.",
                "Make sauce and combine everything.",
            ],
        ),
        recipe(
            2,
            "Tacos",
            &["Ground Beef", "Taco Shells", "Lettuce", "Tomato", "Cheese"],
            &[
                "Cook the ground beef.",
                "Warm the taco shells.",
                "Assemble tacos with toppings.",
            ],
        ),
        recipe(
            3,
            "Caesar Salad",
            &["Romaine Lettuce", "Croutons", "Parmesan Cheese", "Caesar Dressing"],
            &["Chop the lettuce.", "Toss all ingredients in a large bowl."],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blanks_and_trims() {
        assert_eq!(split_lines("A\nB\n\nC "), vec!["A", "B", "C"]);
        assert_eq!(split_lines("1\n2"), vec!["1", "2"]);
    }

    #[test]
    fn test_split_lines_handles_crlf_and_whitespace_only_lines() {
        assert_eq!(split_lines("Flour\r\n   \r\nMilk\r\n"), vec!["Flour", "Milk"]);
    }

    #[test]
    fn test_split_lines_treats_bare_cr_as_break() {
        assert_eq!(split_lines("Water\rSalt\rPepper"), vec!["Water", "Salt", "Pepper"]);
        assert_eq!(split_lines("a\r\rb\r"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_empty_block() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n\n  \n").is_empty());
    }

    #[test]
    fn test_from_input_trims_title() {
        let recipe = Recipe::from_input(7, "  Pancakes  ", "Flour\n\nMilk\nEggs", "Mix.\nCook.");
        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.title, "Pancakes");
        assert_eq!(recipe.ingredients, vec!["Flour", "Milk", "Eggs"]);
        assert_eq!(recipe.steps, vec!["Mix.", "Cook."]);
    }

    #[test]
    fn test_from_input_accepts_degenerate_input() {
        let recipe = Recipe::from_input(1, "   ", "", "\n");
        assert_eq!(recipe.title, "");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_seed_recipes() {
        let seeds = seed_recipes();
        let ids: Vec<_> = seeds.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(seeds[0].title, "Chicken Alfredo");
        assert_eq!(seeds[1].ingredients.len(), 5);
        assert_eq!(seeds[2].steps, vec!["Chop the lettuce.", "Toss all ingredients in a large bowl."]);
    }
}
