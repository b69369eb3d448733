// ABOUTME: Renderable view state produced by the view synchronizer
// ABOUTME: Annotated recipe lists, view kinds and titles, and the single user message channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{messages, views};
use crate::errors::AppError;
use crate::favorites::ToggleOutcome;
use crate::models::Recipe;
use serde::Serialize;
use std::fmt;

/// A recipe paired with its favorite flag at render time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedRecipe {
    /// The recipe as returned by the source
    pub recipe: Recipe,
    /// Whether the favorites store held this id when the view was built
    pub is_favorite: bool,
}

/// What a view shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViewKind {
    /// First recipes of the trending category
    Trending,
    /// Name search results
    Search(String),
    /// Category listing
    Category(String),
    /// The favorites store contents
    Favorites,
    /// One random recipe
    Random,
}

impl ViewKind {
    /// Title shown above the view
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Trending => views::TRENDING_TITLE.to_owned(),
            Self::Search(term) => format!("Search Results for \"{term}\""),
            Self::Category(category) => format!("{category} Recipes"),
            Self::Favorites => views::FAVORITES_TITLE.to_owned(),
            Self::Random => views::RANDOM_TITLE.to_owned(),
        }
    }
}

/// User-visible message attached to a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum ViewMessage {
    /// The query succeeded (or the source said not found) and nothing matched
    NoResults,
    /// Transport or server failure
    NetworkError(String),
    /// A search was submitted without a term
    EmptyQuery,
}

impl ViewMessage {
    /// Map a remote failure onto the message channel
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        if error.is_not_found() {
            Self::NoResults
        } else {
            Self::NetworkError(error.message.clone())
        }
    }

    /// True for failures, false for informational messages
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::NetworkError(_))
    }
}

impl fmt::Display for ViewMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResults => f.write_str(messages::NO_RESULTS),
            Self::NetworkError(detail) => write!(
                f,
                "{}: {detail}. {}",
                messages::NETWORK_ERROR_PREFIX,
                messages::NETWORK_ERROR_HINT
            ),
            Self::EmptyQuery => f.write_str(messages::EMPTY_QUERY),
        }
    }
}

/// A renderable list of recipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeView {
    /// What the view shows
    pub kind: ViewKind,
    /// Title shown above the entries
    pub title: String,
    /// Entries in source order
    pub entries: Vec<AnnotatedRecipe>,
    /// Message shown instead of, or next to, the entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ViewMessage>,
}

impl RecipeView {
    /// True when the view has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry ids in display order
    #[must_use]
    pub fn recipe_ids(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.recipe.id.as_str())
            .collect()
    }
}

/// Full detail of one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    /// Full record
    pub recipe: Recipe,
    /// Whether the record is a favorite
    pub is_favorite: bool,
    /// Display lines for the meaningful ingredients
    pub ingredient_lines: Vec<String>,
}

/// Result of toggling a favorite by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleResult {
    /// Toggled recipe id
    pub recipe_id: String,
    /// Toggled recipe name
    pub recipe_name: String,
    /// Whether the recipe was added or removed
    pub outcome: ToggleOutcome,
    /// New favorites view when the favorites view was current
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshed_view: Option<RecipeView>,
}

impl ToggleResult {
    /// Whether the recipe is a favorite after the toggle
    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        self.outcome.is_favorite()
    }
}
