// ABOUTME: TheMealDB API client for recipe search, category listing, and detail lookup
// ABOUTME: Implements wire parsing, status mapping, detail caching, and a mock source for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! TheMealDB API Client
//!
//! Client for the free TheMealDB v1 API. Every endpoint answers with a
//! top-level `meals` field holding an array of records or `null` when nothing
//! matched.
//!
//! # Features
//! - Search by name, filter by category, lookup by id, random recipe
//! - Numbered `strIngredientN` / `strMeasureN` fields folded into an ordered list
//! - In-memory caching of full records looked up by id
//! - Mock source for testing
//!
//! # API Reference
//! TheMealDB API: <https://www.themealdb.com/api.php>
//!
//! # Example
//! ```rust,no_run
//! use mealdeck::external::{MealDbClient, MealDbClientConfig, RecipeSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let base_url = url::Url::parse("https://www.themealdb.com/api/json/v1/1/")?;
//! let client = MealDbClient::new(MealDbClientConfig::new(base_url));
//! let recipes = client.search_by_name("Arrabiata").await?;
//! # Ok(())
//! # }
//! ```

use super::source::RecipeSource;
use crate::config::AppConfig;
use crate::constants::{http, mealdb};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::http_client::shared_client;
use crate::models::{Ingredient, Recipe};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

/// TheMealDB client configuration
#[derive(Debug, Clone)]
pub struct MealDbClientConfig {
    /// Base `URL` ending in `/` (default: <https://www.themealdb.com/api/json/v1/1/>)
    pub base_url: Url,
    /// TTL for cached full records (default: 1 hour)
    pub detail_cache_ttl: Duration,
}

impl MealDbClientConfig {
    /// Configuration for `base_url` with the default cache TTL
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            detail_cache_ttl: Duration::from_secs(http::DEFAULT_DETAIL_CACHE_TTL_SECS),
        }
    }
}

impl From<&AppConfig> for MealDbClientConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            detail_cache_ttl: Duration::from_secs(config.detail_cache_ttl_secs),
        }
    }
}

/// Top-level response envelope shared by every endpoint
#[derive(Debug, Deserialize)]
struct MealsResponse {
    #[serde(default)]
    meals: Value,
}

/// One meal record in TheMealDB wire format
#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    /// Numbered ingredient and measure slots
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl MealRecord {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.slots
            .get(&format!("{prefix}{index}"))
            .and_then(Value::as_str)
    }

    fn into_recipe(self) -> Recipe {
        let ingredients = (1..=mealdb::MAX_INGREDIENT_SLOTS)
            .filter_map(|index| {
                let name = self.slot("strIngredient", index)?.trim();
                if name.is_empty() {
                    return None;
                }
                let measure = self.slot("strMeasure", index).unwrap_or_default().trim();
                Some(Ingredient::new(name, measure))
            })
            .collect();

        let tags = self
            .tags
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Recipe {
            id: self.id,
            name: self.name.unwrap_or_default(),
            thumbnail_url: self.thumbnail.unwrap_or_default(),
            instructions: non_blank(self.instructions),
            ingredients,
            video_url: non_blank(self.youtube),
            category: non_blank(self.category),
            area: non_blank(self.area),
            tags,
            source_url: non_blank(self.source),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Decode a response body into recipes
///
/// `meals: null`, a missing field, or a non-array placeholder all mean
/// "no matches".
fn parse_meals(body: &str) -> AppResult<Vec<Recipe>> {
    let envelope: MealsResponse = serde_json::from_str(body).map_err(|e| {
        AppError::external_service(mealdb::SERVICE_NAME, format!("JSON parse error: {e}"))
    })?;

    match envelope.meals {
        Value::Array(records) => records
            .into_iter()
            .map(|record| {
                serde_json::from_value::<MealRecord>(record)
                    .map(MealRecord::into_recipe)
                    .map_err(|e| {
                        AppError::external_service(
                            mealdb::SERVICE_NAME,
                            format!("malformed meal record: {e}"),
                        )
                    })
            })
            .collect(),
        Value::Null => Ok(Vec::new()),
        other => {
            debug!(meals = %other, "Non-array meals field treated as no matches");
            Ok(Vec::new())
        }
    }
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

/// TheMealDB API client
pub struct MealDbClient {
    config: MealDbClientConfig,
    http_client: reqwest::Client,
    details_cache: RwLock<HashMap<String, CacheEntry<Recipe>>>,
}

impl MealDbClient {
    /// Create a client on the shared HTTP connection pool
    #[must_use]
    pub fn new(config: MealDbClientConfig) -> Self {
        Self::with_http_client(config, shared_client().clone())
    }

    /// Create a client on a caller-provided HTTP client
    #[must_use]
    pub fn with_http_client(config: MealDbClientConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
            details_cache: RwLock::new(HashMap::new()),
        }
    }

    async fn fetch(&self, endpoint: &str, query: Option<(&str, &str)>) -> AppResult<Vec<Recipe>> {
        let url = self.config.base_url.join(endpoint).map_err(|e| {
            AppError::config_invalid(format!("cannot build URL for {endpoint}: {e}"))
        })?;

        let mut request = self.http_client.get(url);
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }

        let response = request.send().await.map_err(|e| {
            warn!(endpoint, error = %e, "TheMealDB request failed");
            AppError::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found("Recipes for this query")
                .with_resource_id(query.map_or(endpoint, |(_, value)| value)));
        }
        if !status.is_success() {
            return Err(AppError::external_service(
                mealdb::SERVICE_NAME,
                format!(
                    "HTTP {}: {}",
                    status,
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let body = response.text().await?;
        let recipes = parse_meals(&body)?;

        debug!(
            endpoint,
            http.status = status.as_u16(),
            count = recipes.len(),
            "TheMealDB request completed"
        );

        Ok(recipes)
    }

    async fn cached_detail(&self, id: &str) -> Option<Recipe> {
        let cache = self.details_cache.read().await;
        cache
            .get(id)
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.data.clone())
    }

    async fn cache_detail(&self, recipe: &Recipe) {
        let now = Instant::now();
        let mut cache = self.details_cache.write().await;
        cache.retain(|_, entry| now < entry.expires_at);
        cache.insert(
            recipe.id.clone(),
            CacheEntry {
                data: recipe.clone(),
                expires_at: now + self.config.detail_cache_ttl,
            },
        );
    }

    /// Clear the detail cache
    pub async fn clear_cache(&self) {
        self.details_cache.write().await.clear();
    }

    /// Number of cached detail records (expired ones are pruned on the next insert)
    pub async fn cache_len(&self) -> usize {
        self.details_cache.read().await.len()
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Recipe>> {
        self.fetch(mealdb::SEARCH_ENDPOINT, Some((mealdb::SEARCH_PARAM, term)))
            .await
    }

    async fn filter_by_category(&self, category: &str) -> AppResult<Vec<Recipe>> {
        self.fetch(mealdb::FILTER_ENDPOINT, Some((mealdb::FILTER_PARAM, category)))
            .await
    }

    async fn lookup_by_id(&self, id: &str) -> AppResult<Option<Recipe>> {
        if let Some(recipe) = self.cached_detail(id).await {
            debug!(recipe.id = id, "Recipe detail served from cache");
            return Ok(Some(recipe));
        }

        let recipe = match self
            .fetch(mealdb::LOOKUP_ENDPOINT, Some((mealdb::LOOKUP_PARAM, id)))
            .await
        {
            Ok(recipes) => recipes.into_iter().next(),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        if let Some(recipe) = &recipe {
            self.cache_detail(recipe).await;
        }
        Ok(recipe)
    }

    async fn random(&self) -> AppResult<Option<Recipe>> {
        let recipe = self
            .fetch(mealdb::RANDOM_ENDPOINT, None)
            .await?
            .into_iter()
            .next();

        if let Some(recipe) = &recipe {
            self.cache_detail(recipe).await;
        }
        Ok(recipe)
    }
}

/// Mock recipe source for testing (no API calls)
///
/// Holds full records; category results are reduced to summaries the way the
/// real endpoint does. Setting a failure code makes every call fail with it.
#[derive(Debug, Default)]
pub struct MockRecipeSource {
    recipes: Vec<Recipe>,
    failure: Option<ErrorCode>,
    calls: AtomicUsize,
}

impl MockRecipeSource {
    /// Create a mock source serving `recipes`
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock source where every call fails with `code`
    #[must_use]
    pub fn failing(code: ErrorCode) -> Self {
        Self {
            recipes: Vec::new(),
            failure: Some(code),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls made against this source
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin_call(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(ErrorCode::ResourceNotFound) => {
                Err(AppError::not_found("Recipes for this query"))
            }
            Some(code) => Err(AppError::new(code, format!("{}: mock failure", mealdb::SERVICE_NAME))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecipeSource for MockRecipeSource {
    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Recipe>> {
        self.begin_call()?;
        let needle = term.to_lowercase();
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| recipe.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn filter_by_category(&self, category: &str) -> AppResult<Vec<Recipe>> {
        self.begin_call()?;
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| recipe.category.as_deref() == Some(category))
            .map(|recipe| Recipe::summary(&recipe.id, &recipe.name, &recipe.thumbnail_url))
            .collect())
    }

    async fn lookup_by_id(&self, id: &str) -> AppResult<Option<Recipe>> {
        self.begin_call()?;
        Ok(self.recipes.iter().find(|recipe| recipe.id == id).cloned())
    }

    async fn random(&self) -> AppResult<Option<Recipe>> {
        self.begin_call()?;
        Ok(self.recipes.first().cloned())
    }
}
