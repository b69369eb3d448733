// ABOUTME: Recipe view-state synchronizer joining the remote source and the favorites store
// ABOUTME: Annotates lists with favorite flags, dispatches views, and toggles favorites by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # View Synchronizer
//!
//! [`ViewSynchronizer`] owns the [`FavoritesStore`] and a [`RecipeSource`].
//! Every view goes through three steps:
//!
//! 1. [`ViewSynchronizer::begin`] takes a [`ViewTicket`] for the request
//! 2. [`ViewSynchronizer::resolve`] fetches the recipes (`&self`, so several
//!    requests may be in flight at once)
//! 3. [`ViewSynchronizer::commit`] annotates the recipes with favorite flags
//!    and installs the view, unless a newer request has started since
//!
//! [`ViewSynchronizer::show`] runs all three for callers that work one request
//! at a time.

use super::sequence::{ViewSequence, ViewTicket};
use super::view_state::{
    AnnotatedRecipe, RecipeDetail, RecipeView, ToggleResult, ViewKind, ViewMessage,
};
use crate::constants::views;
use crate::errors::{AppError, AppResult};
use crate::external::RecipeSource;
use crate::favorites::FavoritesStore;
use crate::models::Recipe;
use crate::storage::DurableStorage;
use tracing::{debug, info, warn};

/// A view the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    /// First recipes of the trending category
    Trending,
    /// Name search; a blank term falls back to the trending view
    Search(String),
    /// Category listing; the reserved favorites category selects the store
    Category(String),
    /// The favorites store contents
    Favorites,
    /// One random recipe
    Random,
}

/// A request that has been issued a ticket but not resolved yet
#[derive(Debug, Clone)]
pub struct PendingView {
    ticket: ViewTicket,
    request: ViewRequest,
}

impl PendingView {
    /// Ticket identifying this request
    #[must_use]
    pub const fn ticket(&self) -> ViewTicket {
        self.ticket
    }
}

/// Fetched recipes waiting to be committed
#[derive(Debug, Clone)]
pub struct ResolvedView {
    ticket: ViewTicket,
    kind: ViewKind,
    recipes: Vec<Recipe>,
    message: Option<ViewMessage>,
}

impl ResolvedView {
    /// Ticket of the request this answers
    #[must_use]
    pub const fn ticket(&self) -> ViewTicket {
        self.ticket
    }

    /// Kind of view this will become
    #[must_use]
    pub const fn kind(&self) -> &ViewKind {
        &self.kind
    }
}

/// Recipe view-state synchronizer
pub struct ViewSynchronizer<R, S> {
    source: R,
    favorites: FavoritesStore<S>,
    sequence: ViewSequence,
    trending_limit: usize,
    current: Option<RecipeView>,
}

impl<R: RecipeSource, S: DurableStorage> ViewSynchronizer<R, S> {
    /// Create a synchronizer over `source` and an already loaded store
    #[must_use]
    pub fn new(source: R, favorites: FavoritesStore<S>) -> Self {
        Self {
            source,
            favorites,
            sequence: ViewSequence::new(),
            trending_limit: views::DEFAULT_TRENDING_LIMIT,
            current: None,
        }
    }

    /// Override the number of trending recipes shown
    #[must_use]
    pub fn with_trending_limit(mut self, limit: usize) -> Self {
        self.trending_limit = limit;
        self
    }

    /// Favorites store
    #[must_use]
    pub const fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    /// Remote source
    #[must_use]
    pub const fn source(&self) -> &R {
        &self.source
    }

    /// Most recently committed view
    #[must_use]
    pub const fn current_view(&self) -> Option<&RecipeView> {
        self.current.as_ref()
    }

    /// Pair every recipe with its favorite flag, preserving order and count
    #[must_use]
    pub fn annotate<I>(&self, recipes: I) -> Vec<AnnotatedRecipe>
    where
        I: IntoIterator<Item = Recipe>,
    {
        recipes
            .into_iter()
            .map(|recipe| AnnotatedRecipe {
                is_favorite: self.favorites.is_favorite(&recipe.id),
                recipe,
            })
            .collect()
    }

    /// Issue a ticket for `request`
    #[must_use]
    pub fn begin(&self, request: ViewRequest) -> PendingView {
        let ticket = self.sequence.begin();
        debug!(ticket = ticket.value(), request = ?request, "View requested");
        PendingView { ticket, request }
    }

    /// Fetch the recipes for a pending request
    ///
    /// Remote failures never escape: they become an empty list with a message.
    pub async fn resolve(&self, pending: PendingView) -> ResolvedView {
        let PendingView { ticket, request } = pending;

        let (kind, outcome, empty_query) = match request {
            ViewRequest::Favorites => (ViewKind::Favorites, Ok(self.stored()), false),
            ViewRequest::Category(category) if category == views::FAVORITES_CATEGORY => {
                (ViewKind::Favorites, Ok(self.stored()), false)
            }
            ViewRequest::Category(category) => {
                let outcome = self.source.filter_by_category(&category).await;
                (ViewKind::Category(category), outcome, false)
            }
            ViewRequest::Search(term) => {
                let term = term.trim();
                if term.is_empty() {
                    (ViewKind::Trending, self.fetch_trending().await, true)
                } else {
                    let outcome = self.source.search_by_name(term).await;
                    (ViewKind::Search(term.to_owned()), outcome, false)
                }
            }
            ViewRequest::Trending => (ViewKind::Trending, self.fetch_trending().await, false),
            ViewRequest::Random => {
                let outcome = self
                    .source
                    .random()
                    .await
                    .map(|recipe| recipe.into_iter().collect());
                (ViewKind::Random, outcome, false)
            }
        };

        let (recipes, message) = match outcome {
            Ok(recipes) if recipes.is_empty() => (recipes, Some(ViewMessage::NoResults)),
            Ok(recipes) => (recipes, None),
            Err(e) => {
                warn!(ticket = ticket.value(), view = ?kind, error = %e, "View fetch failed");
                (Vec::new(), Some(ViewMessage::from_error(&e)))
            }
        };

        // A blank search shows the prompt over whatever trending produced,
        // unless trending itself failed.
        let message = match message {
            Some(failure) if failure.is_error() => Some(failure),
            _ if empty_query => Some(ViewMessage::EmptyQuery),
            other => other,
        };

        ResolvedView {
            ticket,
            kind,
            recipes,
            message,
        }
    }

    /// Annotate and install a resolved view
    ///
    /// Returns `None`, leaving the current view untouched, when a newer
    /// request has started since `resolved` was issued its ticket.
    pub fn commit(&mut self, resolved: ResolvedView) -> Option<&RecipeView> {
        let ticket = resolved.ticket;
        let view = self.render(resolved);
        if self.install(ticket, view) {
            self.current.as_ref()
        } else {
            None
        }
    }

    /// Begin, resolve, and commit `request` in one step
    pub async fn show(&mut self, request: ViewRequest) -> RecipeView {
        let pending = self.begin(request);
        let resolved = self.resolve(pending).await;
        let ticket = resolved.ticket;
        let view = self.render(resolved);
        self.install(ticket, view.clone());
        view
    }

    /// Select a category; the reserved favorites category returns the store
    /// contents without touching the remote source
    pub async fn select_view(&mut self, category: &str) -> RecipeView {
        self.show(ViewRequest::Category(category.to_owned())).await
    }

    /// Show the favorites store contents
    pub async fn favorites_view(&mut self) -> RecipeView {
        self.show(ViewRequest::Favorites).await
    }

    /// Search by name
    pub async fn search(&mut self, term: &str) -> RecipeView {
        self.show(ViewRequest::Search(term.to_owned())).await
    }

    /// Show the trending recipes
    pub async fn trending(&mut self) -> RecipeView {
        self.show(ViewRequest::Trending).await
    }

    /// Show one random recipe
    pub async fn random(&mut self) -> RecipeView {
        self.show(ViewRequest::Random).await
    }

    /// Full detail for `id`
    ///
    /// Falls back to the stored favorite when the remote source cannot
    /// provide the record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank id, `ResourceNotFound` when neither
    /// the source nor the store knows the id, or the remote error when the
    /// source fails and the id is not a favorite
    pub async fn recipe_detail(&self, id: &str) -> AppResult<RecipeDetail> {
        let recipe = self.materialize(id).await?;
        Ok(RecipeDetail {
            is_favorite: self.favorites.is_favorite(&recipe.id),
            ingredient_lines: recipe.ingredient_lines(),
            recipe,
        })
    }

    /// Toggle the favorite state of `id`
    ///
    /// The full record is looked up first because list entries may be
    /// summaries. When the favorites view is current it is rebuilt; any other
    /// current view gets its favorite flags recomputed.
    ///
    /// # Errors
    ///
    /// Returns the lookup error (see [`Self::recipe_detail`]) or the store's
    /// persistence error; in both cases the store is unchanged
    pub async fn toggle_favorite(&mut self, id: &str) -> AppResult<ToggleResult> {
        let recipe = self.materialize(id).await?;
        let recipe_id = recipe.id.clone();
        let recipe_name = recipe.name.clone();

        let outcome = self.favorites.toggle_favorite(recipe).await?;

        let refreshed_view = match self.current.take() {
            Some(current) if current.kind == ViewKind::Favorites => {
                let view = self.render_favorites();
                self.current = Some(view.clone());
                Some(view)
            }
            Some(mut current) => {
                for entry in &mut current.entries {
                    entry.is_favorite = self.favorites.is_favorite(&entry.recipe.id);
                }
                self.current = Some(current);
                None
            }
            None => None,
        };

        Ok(ToggleResult {
            recipe_id,
            recipe_name,
            outcome,
            refreshed_view,
        })
    }

    async fn fetch_trending(&self) -> AppResult<Vec<Recipe>> {
        let mut recipes = self
            .source
            .filter_by_category(views::TRENDING_CATEGORY)
            .await?;
        recipes.truncate(self.trending_limit);
        Ok(recipes)
    }

    async fn materialize(&self, id: &str) -> AppResult<Recipe> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::invalid_input("Recipe id cannot be empty"));
        }

        let stored = self.favorites.get(id);
        match self.source.lookup_by_id(id).await {
            Ok(Some(recipe)) => Ok(recipe),
            Ok(None) => stored.cloned().ok_or_else(|| {
                AppError::not_found(format!("Recipe {id}")).with_resource_id(id)
            }),
            Err(e) => match stored {
                Some(recipe) => {
                    warn!(recipe.id = id, error = %e, "Lookup failed, using stored favorite");
                    Ok(recipe.clone())
                }
                None => Err(e.with_resource_id(id)),
            },
        }
    }

    fn render(&self, resolved: ResolvedView) -> RecipeView {
        // The store may have changed since resolve; list what it holds now
        if resolved.kind == ViewKind::Favorites {
            return self.render_favorites();
        }
        RecipeView {
            title: resolved.kind.title(),
            kind: resolved.kind,
            entries: self.annotate(resolved.recipes),
            message: resolved.message,
        }
    }

    fn stored(&self) -> Vec<Recipe> {
        self.favorites.recipes().to_vec()
    }

    fn render_favorites(&self) -> RecipeView {
        let recipes = self.stored();
        let message = recipes.is_empty().then_some(ViewMessage::NoResults);
        RecipeView {
            title: ViewKind::Favorites.title(),
            kind: ViewKind::Favorites,
            entries: self.annotate(recipes),
            message,
        }
    }

    fn install(&mut self, ticket: ViewTicket, view: RecipeView) -> bool {
        if !self.sequence.is_latest(ticket) {
            debug!(ticket = ticket.value(), view = ?view.kind, "Stale view dropped");
            return false;
        }
        info!(
            ticket = ticket.value(),
            view = ?view.kind,
            count = view.entries.len(),
            "View committed"
        );
        self.current = Some(view);
        true
    }
}
