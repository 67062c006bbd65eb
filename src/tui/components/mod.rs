//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: top status line (screen, recipe count, status)
//! - `NavBar`: bottom navigation with the current tab highlighted
//! - `RecipeDetail`: one recipe, or the not-found placeholder
//! - `SettingsScreen`: placeholder screen
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `RecipeListState`: home list selection, emits `Open(id)`
//! - `AddRecipeForm`: three `TextField`s and a button, emits `Submit`
//!
//! Components receive external data as props, never by reaching into `App`.
//! The event loop turns their events into core `Action`s.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs
//! ├── nav_bar.rs
//! ├── recipe_list.rs
//! ├── recipe_detail.rs
//! ├── add_recipe_form.rs
//! ├── settings.rs
//! └── text_field/         (single/multi-line input)
//! ```

pub mod add_recipe_form;
pub mod nav_bar;
pub mod recipe_detail;
pub mod recipe_list;
pub mod settings;
pub mod text_field;
mod title_bar;

pub use add_recipe_form::{AddRecipeForm, FormEvent};
pub use nav_bar::NavBar;
pub use recipe_detail::RecipeDetail;
pub use recipe_list::{RecipeList, RecipeListEvent, RecipeListState};
pub use settings::SettingsScreen;
pub use title_bar::TitleBar;
