//! # Navigation
//!
//! A closed set of destinations and a back stack that tracks which one is
//! active.
//!
//! ```text
//!            ┌──── row selected ────► RecipeDetail(id)
//!   Home ────┤
//!    ▲       └──── tab ─────────────► AddRecipe ──── submit ───┐
//!    │                                                         │
//!    └───────────────── pop_up_to(Home, inclusive) ◄───────────┘
//! ```
//!
//! Each destination also has a string route (`recipe_detail/42`) so it can be
//! passed on the command line or written to logs.

use std::fmt;
use std::str::FromStr;

use futures::stream::BoxStream;
use log::debug;
use tokio::sync::watch;

use crate::core::observe::replay_latest;
use crate::core::recipe::RecipeId;

pub const ROUTE_HOME: &str = "home";
pub const ROUTE_ADD_RECIPE: &str = "add_recipe";
pub const ROUTE_SETTINGS: &str = "settings";
/// Prefix of the detail route; the recipe id follows as a plain integer segment.
pub const ROUTE_RECIPE_DETAIL: &str = "recipe_detail";
pub const ROUTE_RECIPE_DETAIL_PATTERN: &str = "recipe_detail/{recipeId}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Destination {
    #[default]
    Home,
    AddRecipe,
    RecipeDetail(RecipeId),
    Settings,
}

impl Destination {
    /// The destinations reachable from the bottom navigation bar, in display order.
    pub const TABS: [Destination; 3] = [Destination::Home, Destination::AddRecipe, Destination::Settings];

    pub fn route(&self) -> String {
        match self {
            Destination::Home => ROUTE_HOME.to_string(),
            Destination::AddRecipe => ROUTE_ADD_RECIPE.to_string(),
            Destination::RecipeDetail(id) => format!("{ROUTE_RECIPE_DETAIL}/{id}"),
            Destination::Settings => ROUTE_SETTINGS.to_string(),
        }
    }

    /// Short label used by the navigation bar and title bar.
    pub fn label(&self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::AddRecipe => "Add",
            Destination::RecipeDetail(_) => "Recipe",
            Destination::Settings => "Settings",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Unknown(String),
    InvalidRecipeId(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Unknown(route) => write!(f, "unknown route: {route:?}"),
            RouteError::InvalidRecipeId(segment) => {
                write!(f, "recipe id must be a non-negative integer, got {segment:?}")
            }
        }
    }
}

impl std::error::Error for RouteError {}

impl FromStr for Destination {
    type Err = RouteError;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        match route {
            ROUTE_HOME => return Ok(Destination::Home),
            ROUTE_ADD_RECIPE => return Ok(Destination::AddRecipe),
            ROUTE_SETTINGS => return Ok(Destination::Settings),
            _ => {}
        }

        match route.split_once('/') {
            Some((ROUTE_RECIPE_DETAIL, segment)) => parse_recipe_id(segment)
                .map(Destination::RecipeDetail)
                .ok_or_else(|| RouteError::InvalidRecipeId(segment.to_string())),
            _ => Err(RouteError::Unknown(route.to_string())),
        }
    }
}

/// Only the canonical form `route()` produces: ASCII digits, no sign, no
/// leading zeros.
fn parse_recipe_id(segment: &str) -> Option<RecipeId> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if !canonical {
        return None;
    }
    segment.parse().ok()
}

/// Truncate the back stack before pushing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopUpTo {
    pub destination: Destination,
    /// Also remove `destination` itself.
    pub inclusive: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    pub pop_up_to: Option<PopUpTo>,
    /// Skip the push when the destination is already on top.
    pub launch_single_top: bool,
}

impl NavOptions {
    pub fn single_top() -> Self {
        Self {
            launch_single_top: true,
            ..Self::default()
        }
    }

    pub fn pop_up_to(destination: Destination, inclusive: bool) -> Self {
        Self {
            pop_up_to: Some(PopUpTo {
                destination,
                inclusive,
            }),
            ..Self::default()
        }
    }
}

/// Owns the back stack. The top of the stack is the active destination.
///
/// The stack is never empty: `pop_back` refuses to remove the root.
pub struct NavigationController {
    back_stack: Vec<Destination>,
    current: watch::Sender<Destination>,
}

impl NavigationController {
    pub fn new(start: Destination) -> Self {
        let (current, _receiver) = watch::channel(start);
        Self {
            back_stack: vec![start],
            current,
        }
    }

    /// Start at `start`, keeping Home underneath so back returns there.
    pub fn with_start(start: Destination) -> Self {
        let mut nav = Self::new(Destination::Home);
        if start != Destination::Home {
            nav.navigate(start, NavOptions::default());
        }
        nav
    }

    pub fn current(&self) -> Destination {
        // The stack always holds at least the root.
        self.back_stack.last().copied().unwrap_or_default()
    }

    pub fn observe(&self) -> BoxStream<'static, Destination> {
        replay_latest(self.current.subscribe())
    }

    pub fn subscribe(&self) -> watch::Receiver<Destination> {
        self.current.subscribe()
    }

    pub fn back_stack(&self) -> &[Destination] {
        &self.back_stack
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    pub fn navigate(&mut self, destination: Destination, options: NavOptions) {
        if let Some(pop) = options.pop_up_to {
            self.pop_up_to(pop);
        }

        if options.launch_single_top && self.back_stack.last() == Some(&destination) {
            debug!("Navigate to {} skipped: already on top", destination);
            self.publish();
            return;
        }

        debug!("Navigate {} -> {}", self.current(), destination);
        self.back_stack.push(destination);
        self.publish();
    }

    /// Return to the previous destination. No-op at the root.
    pub fn pop_back(&mut self) -> bool {
        if self.back_stack.len() <= 1 {
            debug!("Back ignored at root ({})", self.current());
            return false;
        }
        let left = self.back_stack.pop();
        debug!("Back from {:?} to {}", left, self.current());
        self.publish();
        true
    }

    fn pop_up_to(&mut self, pop: PopUpTo) {
        let Some(index) = self.back_stack.iter().rposition(|d| *d == pop.destination) else {
            debug!("pop_up_to {}: not on the stack", pop.destination);
            return;
        };
        let keep = if pop.inclusive { index } else { index + 1 };
        self.back_stack.truncate(keep);
    }

    fn publish(&self) {
        let top = self.current();
        self.current.send_if_modified(|current| {
            if *current == top {
                false
            } else {
                *current = top;
                true
            }
        });
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(Destination::Home)
    }
}
