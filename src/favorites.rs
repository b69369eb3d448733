// ABOUTME: Favorites store holding full recipe records mirrored to durable storage
// ABOUTME: Membership test and toggle with write-through persistence and rollback on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Favorites Store
//!
//! An ordered collection of full [`Recipe`] records keyed by `id`. The store is
//! loaded once from a [`DurableStorage`] slot and written back after every
//! mutation. A missing or unreadable slot yields an empty store.
//!
//! The store is owned by exactly one caller; mutation takes `&mut self` and
//! there is no internal locking.

use crate::constants::storage::FAVORITES_KEY;
use crate::errors::AppResult;
use crate::models::Recipe;
use crate::storage::DurableStorage;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The record was appended to the store
    Added,
    /// The record was removed from the store
    Removed,
}

impl ToggleOutcome {
    /// Whether the record is a favorite after the toggle
    #[must_use]
    pub const fn is_favorite(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Write-through favorites store
#[derive(Debug)]
pub struct FavoritesStore<S> {
    storage: S,
    recipes: Vec<Recipe>,
}

impl<S: DurableStorage> FavoritesStore<S> {
    /// Load the store from `storage`
    ///
    /// Never fails: a read error, an absent slot, or unparseable contents all
    /// produce an empty store. Duplicate ids keep their first occurrence.
    pub async fn load(storage: S) -> Self {
        let recipes = match storage.read(FAVORITES_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Recipe>>(&raw) {
                Ok(recipes) => dedupe(recipes),
                Err(e) => {
                    warn!(error = %e, "Persisted favorites are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Could not read persisted favorites, starting empty");
                Vec::new()
            }
        };

        info!(count = recipes.len(), "Favorites loaded");
        Self { storage, recipes }
    }

    /// True iff a record with `id` is stored
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.recipes.iter().any(|recipe| recipe.id == id)
    }

    /// Remove the record with `recipe.id` if present, otherwise append `recipe`
    ///
    /// The whole store is persisted before returning. If persisting fails the
    /// in-memory change is undone, so memory and storage stay identical.
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the store cannot be persisted
    pub async fn toggle_favorite(&mut self, recipe: Recipe) -> AppResult<ToggleOutcome> {
        let id = recipe.id.clone();
        let (outcome, undo) = match self.position(&id) {
            Some(index) => {
                let removed = self.recipes.remove(index);
                (ToggleOutcome::Removed, Undo::Reinsert(index, removed))
            }
            None => {
                self.recipes.push(recipe);
                (ToggleOutcome::Added, Undo::Pop)
            }
        };

        if let Err(e) = self.persist().await {
            match undo {
                Undo::Reinsert(index, removed) => self.recipes.insert(index, removed),
                Undo::Pop => {
                    self.recipes.pop();
                }
            }
            warn!(recipe.id = %id, error = %e, "Favorite toggle rolled back");
            return Err(e.with_resource_id(id));
        }

        info!(recipe.id = %id, outcome = ?outcome, count = self.recipes.len(), "Favorites updated");
        Ok(outcome)
    }

    /// Stored records in insertion order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Stored record with `id`
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Backing storage
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.recipes.iter().position(|recipe| recipe.id == id)
    }

    async fn persist(&self) -> AppResult<()> {
        let serialized = serde_json::to_string(&self.recipes)?;
        self.storage.write(FAVORITES_KEY, &serialized).await
    }
}

enum Undo {
    Reinsert(usize, Recipe),
    Pop,
}

fn dedupe(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut seen = HashSet::new();
    let before = recipes.len();
    let unique: Vec<Recipe> = recipes
        .into_iter()
        .filter(|recipe| seen.insert(recipe.id.clone()))
        .collect();
    if unique.len() != before {
        warn!(
            dropped = before - unique.len(),
            "Duplicate favorite ids dropped on load"
        );
    }
    unique
}
