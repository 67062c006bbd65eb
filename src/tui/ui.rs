use crate::core::navigation::Destination;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NavBar, RecipeDetail, RecipeList, SettingsScreen, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Title bar, active screen, bottom navigation.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, nav_area] = layout.areas(frame.area());

    let current = app.nav.current();

    let mut title_bar = TitleBar::new(
        current.label(),
        tui.recipe_list.recipes.len(),
        &app.status_message,
    );
    title_bar.render(frame, title_area);

    match current {
        Destination::Home => RecipeList::new(&mut tui.recipe_list).render(frame, main_area),
        Destination::AddRecipe => tui.form.render(frame, main_area),
        Destination::RecipeDetail(id) => {
            let recipe = app.store.get_by_id(id);
            RecipeDetail::new(recipe.as_ref(), &mut tui.detail_scroll).render(frame, main_area);
        }
        Destination::Settings => {
            SettingsScreen::new(tui.config_path.clone()).render(frame, main_area)
        }
    }

    NavBar::new(current).render(frame, nav_area);
}
