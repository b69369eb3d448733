// ABOUTME: RecipeSource trait describing the remote recipe API consumed by the browser
// ABOUTME: Search by name, filter by category, lookup by id, and random recipe operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::models::Recipe;
use async_trait::async_trait;

/// Read-only remote recipe source
///
/// Empty results are `Ok(vec![])` / `Ok(None)`. Implementations report a
/// "not found" answer from the remote side as `ErrorCode::ResourceNotFound`
/// and transport or server failures as external service errors, so callers
/// can tell them apart by code.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Search recipes whose name matches `term`
    ///
    /// # Errors
    ///
    /// Returns an error if the remote source fails or reports not found
    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Recipe>>;

    /// List recipes in `category`
    ///
    /// Results are summaries: id, name, and thumbnail only.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote source fails or reports not found
    async fn filter_by_category(&self, category: &str) -> AppResult<Vec<Recipe>>;

    /// Fetch the full record for `id`
    ///
    /// # Errors
    ///
    /// Returns an error if the remote source fails
    async fn lookup_by_id(&self, id: &str) -> AppResult<Option<Recipe>>;

    /// Fetch one random full record
    ///
    /// # Errors
    ///
    /// Returns an error if the remote source fails
    async fn random(&self) -> AppResult<Option<Recipe>>;
}
