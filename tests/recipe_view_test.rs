// ABOUTME: Integration tests for the recipe view synchronizer
// ABOUTME: Covers annotation, view dispatch, message mapping, favorite toggles, and stale view handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use anyhow::Result;
use common::{arrabiata, browser_with, indian_recipes, seeded_storage, teriyaki};
use mealdeck::{
    errors::ErrorCode,
    external::MockRecipeSource,
    favorites::ToggleOutcome,
    models::Recipe,
    services::{ViewKind, ViewMessage, ViewRequest},
    storage::MemoryStorage,
};

fn catalog() -> Vec<Recipe> {
    let mut recipes = vec![teriyaki(), arrabiata()];
    recipes.extend(indian_recipes(12));
    recipes
}

#[tokio::test]
async fn test_annotate_preserves_order_and_count() {
    let browser = browser_with(
        MockRecipeSource::new(Vec::new()),
        seeded_storage(&[arrabiata()]),
    )
    .await;

    let input = vec![teriyaki(), arrabiata(), teriyaki()];
    let annotated = browser.annotate(input.clone());

    assert_eq!(annotated.len(), 3);
    let ids: Vec<&str> = annotated.iter().map(|a| a.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["52772", "52771", "52772"]);
    let flags: Vec<bool> = annotated.iter().map(|a| a.is_favorite).collect();
    assert_eq!(flags, vec![false, true, false]);
    assert!(browser.annotate(Vec::new()).is_empty());
}

#[tokio::test]
async fn test_favorites_category_is_served_offline() {
    let mut browser = browser_with(
        MockRecipeSource::failing(ErrorCode::ExternalServiceUnavailable),
        seeded_storage(&[teriyaki(), arrabiata()]),
    )
    .await;

    let view = browser.select_view("Favorites").await;

    assert_eq!(view.kind, ViewKind::Favorites);
    assert_eq!(view.title, "My Favorite Recipes");
    assert_eq!(view.recipe_ids(), vec!["52772", "52771"]);
    assert!(view.entries.iter().all(|entry| entry.is_favorite));
    assert_eq!(view.entries[0].recipe, teriyaki());
    assert_eq!(view.message, None);
    assert_eq!(browser.source().calls(), 0);
}

#[tokio::test]
async fn test_favorites_category_is_case_sensitive() {
    let mut browser = browser_with(
        MockRecipeSource::new(catalog()),
        seeded_storage(&[teriyaki()]),
    )
    .await;

    let view = browser.select_view("favorites").await;
    assert_eq!(view.kind, ViewKind::Category("favorites".into()));
    assert_eq!(browser.source().calls(), 1);
}

#[tokio::test]
async fn test_empty_favorites_view_reports_no_results() {
    let mut browser = browser_with(MockRecipeSource::default(), MemoryStorage::new()).await;

    let view = browser.favorites_view().await;
    assert!(view.is_empty());
    assert_eq!(view.message, Some(ViewMessage::NoResults));
}

#[tokio::test]
async fn test_empty_category_reports_no_results() {
    let mut browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new()).await;

    let view = browser.select_view("Seafood").await;

    assert_eq!(view.title, "Seafood Recipes");
    assert!(view.is_empty());
    assert_eq!(view.message, Some(ViewMessage::NoResults));
    assert!(!view.message.as_ref().unwrap().is_error());
}

#[tokio::test]
async fn test_category_returns_annotated_summaries() {
    let mut browser = browser_with(
        MockRecipeSource::new(catalog()),
        seeded_storage(&[teriyaki()]),
    )
    .await;

    let view = browser.select_view("Chicken").await;

    assert_eq!(view.recipe_ids(), vec!["52772"]);
    assert!(view.entries[0].is_favorite);
    assert!(view.entries[0].recipe.is_summary());
    assert_eq!(browser.current_view(), Some(&view));
}

#[tokio::test]
async fn test_not_found_maps_to_no_results() {
    let mut browser = browser_with(
        MockRecipeSource::failing(ErrorCode::ResourceNotFound),
        MemoryStorage::new(),
    )
    .await;

    let view = browser.search("nothing").await;
    assert!(view.is_empty());
    assert_eq!(view.message, Some(ViewMessage::NoResults));
}

#[tokio::test]
async fn test_remote_failure_maps_to_network_error() {
    let mut browser = browser_with(
        MockRecipeSource::failing(ErrorCode::ExternalServiceError),
        MemoryStorage::new(),
    )
    .await;

    let view = browser.select_view("Seafood").await;

    assert!(view.is_empty());
    let message = view.message.expect("network error message");
    assert!(message.is_error());
    assert!(matches!(message, ViewMessage::NetworkError(ref detail) if detail.contains("mock failure")));
    let rendered = message.to_string();
    assert!(rendered.starts_with("Error: "));
    assert!(rendered.ends_with("Please try checking your internet connection."));
}

#[tokio::test]
async fn test_trending_is_truncated() {
    let mut browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new()).await;

    let view = browser.trending().await;
    assert_eq!(view.kind, ViewKind::Trending);
    assert_eq!(view.title, "Trending Recipes");
    assert_eq!(view.entries.len(), 8);
    assert_eq!(view.entries[0].recipe.id, "53000");

    let mut browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new())
        .await
        .with_trending_limit(3);
    assert_eq!(browser.trending().await.entries.len(), 3);
}

#[tokio::test]
async fn test_blank_search_falls_back_to_trending() {
    let mut browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new()).await;

    let view = browser.search("   ").await;

    assert_eq!(view.kind, ViewKind::Trending);
    assert_eq!(view.entries.len(), 8);
    assert_eq!(view.message, Some(ViewMessage::EmptyQuery));
}

#[tokio::test]
async fn test_blank_search_keeps_network_error() {
    let mut browser = browser_with(
        MockRecipeSource::failing(ErrorCode::ExternalServiceUnavailable),
        MemoryStorage::new(),
    )
    .await;

    let view = browser.search("").await;
    assert!(view.message.unwrap().is_error());
}

#[tokio::test]
async fn test_search_trims_and_matches() {
    let mut browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new()).await;

    let view = browser.search("  teriyaki ").await;

    assert_eq!(view.title, "Search Results for \"teriyaki\"");
    assert_eq!(view.recipe_ids(), vec!["52772"]);
    assert_eq!(view.message, None);
}

#[tokio::test]
async fn test_random_view() {
    let mut browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new()).await;

    let view = browser.random().await;
    assert_eq!(view.kind, ViewKind::Random);
    assert_eq!(view.entries.len(), 1);

    let mut browser = browser_with(MockRecipeSource::default(), MemoryStorage::new()).await;
    assert_eq!(browser.random().await.message, Some(ViewMessage::NoResults));
}

#[tokio::test]
async fn test_recipe_detail() -> Result<()> {
    let browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new()).await;

    let detail = browser.recipe_detail("52772").await?;
    assert_eq!(detail.recipe, teriyaki());
    assert!(!detail.is_favorite);
    assert_eq!(
        detail.ingredient_lines,
        vec!["3/4 cup soy sauce", "1/2 cup water", "garlic"]
    );

    let err = browser.recipe_detail("00000").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = browser.recipe_detail("  ").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    Ok(())
}

#[tokio::test]
async fn test_toggle_stores_full_record_and_updates_flags() -> Result<()> {
    let mut browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new()).await;

    let view = browser.select_view("Chicken").await;
    assert!(!view.entries[0].is_favorite);

    let result = browser.toggle_favorite("52772").await?;

    assert_eq!(result.outcome, ToggleOutcome::Added);
    assert!(result.is_favorite());
    assert_eq!(result.recipe_name, "Teriyaki Chicken Casserole");
    assert!(result.refreshed_view.is_none());

    let stored = browser.favorites().get("52772").unwrap();
    assert!(!stored.is_summary());
    assert_eq!(stored.ingredients.len(), 3);

    let current = browser.current_view().unwrap();
    assert!(current.entries[0].is_favorite);

    let result = browser.toggle_favorite("52772").await?;
    assert_eq!(result.outcome, ToggleOutcome::Removed);
    assert!(!browser.current_view().unwrap().entries[0].is_favorite);

    Ok(())
}

#[tokio::test]
async fn test_toggle_refreshes_favorites_view() -> Result<()> {
    let mut browser = browser_with(
        MockRecipeSource::new(catalog()),
        seeded_storage(&[teriyaki(), arrabiata()]),
    )
    .await;
    browser.favorites_view().await;

    let result = browser.toggle_favorite("52772").await?;
    let refreshed = result.refreshed_view.expect("favorites view refreshed");
    assert_eq!(refreshed.recipe_ids(), vec!["52771"]);
    assert_eq!(browser.current_view(), Some(&refreshed));

    let result = browser.toggle_favorite("52771").await?;
    let refreshed = result.refreshed_view.expect("favorites view refreshed");
    assert!(refreshed.is_empty());
    assert_eq!(refreshed.message, Some(ViewMessage::NoResults));

    Ok(())
}

#[tokio::test]
async fn test_favorites_commit_reflects_toggle_made_in_flight() -> Result<()> {
    let mut browser = browser_with(
        MockRecipeSource::new(catalog()),
        seeded_storage(&[teriyaki(), arrabiata()]),
    )
    .await;

    let pending = browser.begin(ViewRequest::Favorites);
    let resolved = browser.resolve(pending).await;
    browser.toggle_favorite("52772").await?;

    let view = browser.commit(resolved).expect("latest request commits");
    assert_eq!(view.kind, ViewKind::Favorites);
    assert_eq!(view.recipe_ids(), vec!["52771"]);
    assert!(view.entries.iter().all(|entry| entry.is_favorite));

    let pending = browser.begin(ViewRequest::Category("Favorites".into()));
    let resolved = browser.resolve(pending).await;
    browser.toggle_favorite("52771").await?;

    let view = browser.commit(resolved).expect("latest request commits");
    assert!(view.is_empty());
    assert_eq!(view.message, Some(ViewMessage::NoResults));

    Ok(())
}

#[tokio::test]
async fn test_toggle_unknown_id_leaves_store_untouched() {
    let mut browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new()).await;

    let err = browser.toggle_favorite("99999").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.resource_id.as_deref(), Some("99999"));
    assert!(browser.favorites().is_empty());
    assert_eq!(browser.favorites().storage().writes(), 0);
}

#[tokio::test]
async fn test_toggle_removes_stored_favorite_offline() -> Result<()> {
    let mut browser = browser_with(
        MockRecipeSource::failing(ErrorCode::ExternalServiceUnavailable),
        seeded_storage(&[teriyaki()]),
    )
    .await;

    let result = browser.toggle_favorite("52772").await?;
    assert_eq!(result.outcome, ToggleOutcome::Removed);
    assert!(browser.favorites().is_empty());

    let err = browser.toggle_favorite("52772").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(browser.favorites().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_toggle_persistence_failure_is_reported() {
    let mut browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new()).await;
    browser.favorites().storage().set_fail_writes(true);

    let err = browser.toggle_favorite("52772").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(!browser.favorites().is_favorite("52772"));
}

#[tokio::test]
async fn test_stale_view_never_replaces_newer() {
    let mut browser = browser_with(
        MockRecipeSource::new(catalog()),
        seeded_storage(&[arrabiata()]),
    )
    .await;

    let older = browser.begin(ViewRequest::Category("Chicken".into()));
    let newer = browser.begin(ViewRequest::Favorites);
    assert!(newer.ticket() > older.ticket());

    let newer = browser.resolve(newer).await;
    let older = browser.resolve(older).await;

    assert!(browser.commit(newer).is_some());
    assert!(browser.commit(older).is_none());

    let current = browser.current_view().unwrap();
    assert_eq!(current.kind, ViewKind::Favorites);
    assert_eq!(current.recipe_ids(), vec!["52771"]);
}

#[tokio::test]
async fn test_late_commit_of_older_request_is_dropped() {
    let mut browser = browser_with(MockRecipeSource::new(catalog()), MemoryStorage::new()).await;

    let first = browser.begin(ViewRequest::Trending);
    let first = browser.resolve(first).await;
    browser.search("arrabiata").await;

    assert!(browser.commit(first).is_none());
    assert_eq!(
        browser.current_view().unwrap().kind,
        ViewKind::Search("arrabiata".into())
    );
}
