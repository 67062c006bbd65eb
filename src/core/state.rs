//! # Application State
//!
//! Core business state. No TUI-specific types; presentation state lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── store: Arc<RecipeStore>        // recipes (shared, injected)
//! ├── nav: NavigationController      // back stack + current destination
//! └── status_message: String         // title bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::navigation::{Destination, NavigationController};
use crate::core::store::RecipeStore;

pub struct App {
    pub store: Arc<RecipeStore>,
    pub nav: NavigationController,
    pub status_message: String,
}

impl App {
    pub fn new(store: Arc<RecipeStore>, start: Destination) -> Self {
        Self {
            store,
            nav: NavigationController::with_start(start),
            status_message: String::new(),
        }
    }

    pub fn from_config(store: Arc<RecipeStore>, config: &ResolvedConfig) -> Self {
        Self::new(store, config.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CliOverrides, RecipebookConfig, resolve};
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.nav.current(), Destination::Home);
        assert_eq!(app.store.len(), 3);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_app_from_config_uses_start_route() {
        let cli = CliOverrides {
            start: Some(Destination::Settings),
            ..Default::default()
        };
        let resolved = resolve(&RecipebookConfig::default(), &cli);
        let app = App::from_config(Arc::new(RecipeStore::empty()), &resolved);
        assert_eq!(app.nav.back_stack(), &[Destination::Home, Destination::Settings]);
        assert!(app.store.is_empty());
    }
}
