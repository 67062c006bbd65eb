//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop holds a watch receiver for the recipe list and one for the
//! current destination. It redraws only when an input event arrived or one
//! of those receivers reports a change, and otherwise sleeps up to 250ms in
//! `poll`.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::navigation::Destination;
use crate::core::recipe::Recipe;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{AddRecipeForm, FormEvent, RecipeListEvent, RecipeListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Latest snapshot from the store, plus selection
    pub recipe_list: RecipeListState,
    pub form: AddRecipeForm,
    pub detail_scroll: ScrollViewState,
    /// Shown on the settings screen
    pub config_path: Option<String>,
}

impl TuiState {
    pub fn new(recipes: Vec<Recipe>, config_path: Option<String>) -> Self {
        Self {
            recipe_list: RecipeListState::new(recipes),
            form: AddRecipeForm::new(),
            detail_scroll: ScrollViewState::default(),
            config_path,
        }
    }

    /// React to a change of the current destination.
    pub fn on_navigate(&mut self, destination: Destination) {
        if let Destination::RecipeDetail(_) = destination {
            self.detail_scroll = ScrollViewState::default();
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for form editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(app: App, config_path: Option<String>) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = {
        let _terminal_mode_guard = TerminalModeGuard::new();
        event_loop(&mut terminal, app, config_path)
    };
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut app: App,
    config_path: Option<String>,
) -> std::io::Result<()> {
    let mut recipes_rx = app.store.subscribe();
    let mut nav_rx = app.nav.subscribe();
    let initial = recipes_rx.borrow_and_update().clone();
    let mut tui = TuiState::new(initial, config_path);
    tui.on_navigate(*nav_rx.borrow_and_update());

    let mut needs_redraw = true; // Force first frame

    loop {
        if recipes_rx.has_changed().unwrap_or(false) {
            let recipes = recipes_rx.borrow_and_update().clone();
            debug!("Store changed: {} recipes", recipes.len());
            tui.recipe_list.set_recipes(recipes);
            needs_redraw = true;
        }
        if nav_rx.has_changed().unwrap_or(false) {
            let destination = *nav_rx.borrow_and_update();
            debug!("Destination changed: {}", destination);
            tui.on_navigate(destination);
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                info!("Shutting down");
                return Ok(());
            }
        }
    }
}

/// Route one event to the active screen and apply the resulting action.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::SelectTab(index) => {
            return match Destination::TABS.get(index) {
                Some(tab) => update(app, Action::SelectTab(*tab)),
                None => Effect::None,
            };
        }
        _ => {}
    }

    match app.nav.current() {
        Destination::AddRecipe => {
            if event == TuiEvent::Escape {
                return update(app, Action::Back);
            }
            match tui.form.handle_event(&event) {
                Some(FormEvent::Submit {
                    title,
                    ingredients,
                    steps,
                }) => update(
                    app,
                    Action::SubmitRecipe {
                        title,
                        ingredients,
                        steps,
                    },
                ),
                None => Effect::None,
            }
        }
        Destination::Home => match event {
            TuiEvent::InputChar('q') => update(app, Action::Quit),
            TuiEvent::Escape => update(app, Action::Back),
            _ => match tui.recipe_list.handle_event(&event) {
                Some(RecipeListEvent::Open(id)) => update(app, Action::OpenRecipe(id)),
                None => Effect::None,
            },
        },
        Destination::RecipeDetail(_) => {
            match event {
                TuiEvent::InputChar('q') => return update(app, Action::Quit),
                TuiEvent::Escape | TuiEvent::Backspace => return update(app, Action::Back),
                TuiEvent::CursorUp => tui.detail_scroll.scroll_up(),
                TuiEvent::CursorDown => tui.detail_scroll.scroll_down(),
                TuiEvent::PageUp => tui.detail_scroll.scroll_page_up(),
                TuiEvent::PageDown => tui.detail_scroll.scroll_page_down(),
                TuiEvent::CursorHome => tui.detail_scroll.scroll_to_top(),
                _ => {}
            }
            Effect::None
        }
        Destination::Settings => match event {
            TuiEvent::InputChar('q') => update(app, Action::Quit),
            TuiEvent::Escape => update(app, Action::Back),
            _ => Effect::None,
        },
    }
}
