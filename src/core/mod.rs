//! # Core Application Logic
//!
//! This module contains Recipebook's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • RecipeStore (data)   │
//!                    │  • Navigation (screens) │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No globals.     │
//!                    └───────────┬─────────────┘
//!                                │ watch channels
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`recipe`]: The `Recipe` value and the startup recipes
//! - [`store`]: `RecipeStore`, the single owner of recipe data
//! - [`navigation`]: `Destination`, routes, and the back stack
//! - [`state`]: The `App` struct that ties store and navigation together
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod navigation;
pub mod observe;
pub mod recipe;
pub mod state;
pub mod store;
