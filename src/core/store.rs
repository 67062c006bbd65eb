//! # Recipe Store
//!
//! The single owner of recipe data. Every read and write goes through it.
//!
//! ```text
//! RecipeStore
//! └── sender: watch::Sender<Vec<Recipe>>   // authoritative list + publication
//!       ├── observe()    → Stream (replay latest)
//!       ├── subscribe()  → watch::Receiver (polling consumers)
//!       └── add()        → send_if_modified (id + append under one write lock)
//! ```
//!
//! The store is constructed once per session and shared by `Arc`. There is
//! no global instance.

use std::fmt;

use futures::stream::BoxStream;
use log::{debug, info, warn};
use tokio::sync::watch;

use crate::core::observe::replay_latest;
use crate::core::recipe::{Recipe, RecipeId, seed_recipes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The highest stored id is already `RecipeId::MAX`.
    IdsExhausted,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IdsExhausted => write!(f, "no recipe ids left (max is {})", RecipeId::MAX),
        }
    }
}

impl std::error::Error for StoreError {}

pub struct RecipeStore {
    sender: watch::Sender<Vec<Recipe>>,
}

impl RecipeStore {
    pub fn new(initial: Vec<Recipe>) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self { sender }
    }

    /// A store holding the three startup recipes.
    pub fn seeded() -> Self {
        Self::new(seed_recipes())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Stream of full snapshots: the current list first, then one per change.
    pub fn observe(&self) -> BoxStream<'static, Vec<Recipe>> {
        replay_latest(self.sender.subscribe())
    }

    /// Receiver for consumers that poll (`has_changed` / `borrow_and_update`).
    pub fn subscribe(&self) -> watch::Receiver<Vec<Recipe>> {
        self.sender.subscribe()
    }

    /// Append a recipe built from raw form input and publish the new list.
    ///
    /// Id assignment and the append happen inside one write lock, so
    /// concurrent callers are serialized and observers never see a partial
    /// update. Returns the assigned id, or `IdsExhausted` once the highest id
    /// is `RecipeId::MAX` (nothing is stored or published then).
    pub fn add(
        &self,
        title: &str,
        ingredients_block: &str,
        steps_block: &str,
    ) -> Result<RecipeId, StoreError> {
        let mut assigned = None;
        self.sender.send_if_modified(|recipes| {
            let highest = recipes.iter().map(|r| r.id).max().unwrap_or(0);
            let Some(id) = highest.checked_add(1) else {
                return false;
            };
            recipes.push(Recipe::from_input(id, title, ingredients_block, steps_block));
            assigned = Some(id);
            true
        });

        match assigned {
            Some(id) => {
                info!("Added recipe {} ({:?})", id, title.trim());
                Ok(id)
            }
            None => {
                warn!("Rejected recipe {:?}: {}", title.trim(), StoreError::IdsExhausted);
                Err(StoreError::IdsExhausted)
            }
        }
    }

    pub fn get_by_id(&self, id: RecipeId) -> Option<Recipe> {
        let found = self.sender.borrow().iter().find(|r| r.id == id).cloned();
        if found.is_none() {
            debug!("Recipe {} not found", id);
        }
        found
    }

    pub fn snapshot(&self) -> Vec<Recipe> {
        self.sender.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.sender.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sender.borrow().is_empty()
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::seeded()
    }
}
