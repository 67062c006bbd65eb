//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::navigation::Destination;
use crate::core::state::App;
use crate::core::store::RecipeStore;

/// Creates a test App on the seeded store, starting at Home.
pub fn test_app() -> App {
    App::new(Arc::new(RecipeStore::seeded()), Destination::Home)
}

/// Collects every cell symbol of a test terminal into one string.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
