//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User picks a recipe row? That's `Action::OpenRecipe(id)`.
//! User submits the add form? That's `Action::SubmitRecipe { .. }`.
//!
//! The `update()` function applies an action to the `App` and tells the
//! caller if anything outside the core must happen (only quitting, for now).
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```

use log::{debug, info};

use crate::core::navigation::{Destination, NavOptions};
use crate::core::recipe::RecipeId;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A row on the home list was selected.
    OpenRecipe(RecipeId),
    /// The add form was submitted with its raw field contents.
    SubmitRecipe {
        title: String,
        ingredients: String,
        steps: String,
    },
    /// A bottom-navigation tab was selected.
    SelectTab(Destination),
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::OpenRecipe(id) => {
            app.nav.navigate(Destination::RecipeDetail(id), NavOptions::default());
            app.status_message.clear();
            Effect::None
        }
        Action::SubmitRecipe {
            title,
            ingredients,
            steps,
        } => {
            match app.store.add(&title, &ingredients, &steps) {
                Ok(id) => {
                    app.nav.navigate(
                        Destination::Home,
                        NavOptions::pop_up_to(Destination::Home, true),
                    );
                    app.status_message = format!("Added recipe #{id}");
                }
                Err(e) => {
                    app.status_message = format!("Could not add recipe: {e}");
                }
            }
            Effect::None
        }
        Action::SelectTab(destination) => {
            app.nav.navigate(destination, NavOptions::single_top());
            app.status_message.clear();
            Effect::None
        }
        Action::Back => {
            if !app.nav.pop_back() {
                app.status_message = String::from("Already at the top");
            } else {
                app.status_message.clear();
            }
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recipe::Recipe;
    use crate::core::store::RecipeStore;
    use crate::test_support::test_app;
    use std::sync::Arc;

    #[test]
    fn test_open_recipe_pushes_detail() {
        let mut app = test_app();
        let effect = update(&mut app, Action::OpenRecipe(2));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav.current(), Destination::RecipeDetail(2));
        assert_eq!(app.nav.depth(), 2);
    }

    #[test]
    fn test_submit_adds_and_returns_home_with_cleared_history() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(Destination::Settings));
        update(&mut app, Action::SelectTab(Destination::AddRecipe));
        assert_eq!(app.nav.depth(), 3);

        update(
            &mut app,
            Action::SubmitRecipe {
                title: "  Pancakes  ".into(),
                ingredients: "Flour\n\nMilk\nEggs".into(),
                steps: "Mix.\nCook.".into(),
            },
        );

        assert_eq!(app.nav.back_stack(), &[Destination::Home]);
        assert_eq!(app.store.len(), 4);
        assert_eq!(app.store.get_by_id(4).unwrap().title, "Pancakes");
        assert_eq!(app.status_message, "Added recipe #4");
    }

    #[test]
    fn test_submit_with_ids_exhausted_stays_on_form() {
        let store = RecipeStore::new(vec![Recipe::from_input(RecipeId::MAX, "Last", "", "")]);
        let mut app = App::new(Arc::new(store), Destination::AddRecipe);

        update(
            &mut app,
            Action::SubmitRecipe {
                title: "Pancakes".into(),
                ingredients: String::new(),
                steps: String::new(),
            },
        );

        assert_eq!(app.nav.current(), Destination::AddRecipe);
        assert_eq!(app.store.len(), 1);
        assert!(app.status_message.starts_with("Could not add recipe"));
    }

    #[test]
    fn test_select_tab_is_single_top() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(Destination::Home));
        update(&mut app, Action::SelectTab(Destination::Home));
        assert_eq!(app.nav.depth(), 1);

        update(&mut app, Action::SelectTab(Destination::Settings));
        update(&mut app, Action::SelectTab(Destination::Settings));
        assert_eq!(app.nav.depth(), 2);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert_eq!(app.nav.current(), Destination::Home);
        assert_eq!(app.status_message, "Already at the top");
    }

    #[test]
    fn test_back_restores_previous() {
        let mut app = test_app();
        update(&mut app, Action::OpenRecipe(1));
        update(&mut app, Action::Back);
        assert_eq!(app.nav.current(), Destination::Home);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
