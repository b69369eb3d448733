// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, recipe fixtures, and synchronizer builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `mealdeck`

use mealdeck::{
    constants::storage::FAVORITES_KEY,
    external::MockRecipeSource,
    favorites::FavoritesStore,
    models::Recipe,
    services::ViewSynchronizer,
    storage::MemoryStorage,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Full record for Teriyaki Chicken Casserole
pub fn teriyaki() -> Recipe {
    Recipe::summary(
        "52772",
        "Teriyaki Chicken Casserole",
        "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
    )
    .with_category("Chicken")
    .with_instructions("Preheat oven to 350 F. Combine soy sauce and water.")
    .with_ingredient("soy sauce", "3/4 cup")
    .with_ingredient("water", "1/2 cup")
    .with_ingredient("garlic", "")
    .with_video_url("https://www.youtube.com/watch?v=4aZr5hZXP_s")
}

/// Full record for Spicy Arrabiata Penne
pub fn arrabiata() -> Recipe {
    Recipe::summary(
        "52771",
        "Spicy Arrabiata Penne",
        "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
    )
    .with_category("Vegetarian")
    .with_instructions("Bring a large pot of water to a boil.")
    .with_ingredient("penne rigate", "1 pound")
    .with_ingredient("olive oil", "1/4 cup")
}

/// `count` full records in the trending category
pub fn indian_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            Recipe::summary(
                format!("530{i:02}"),
                format!("Indian Dish {i}"),
                format!("https://example.test/thumb/{i}.jpg"),
            )
            .with_category("Indian")
            .with_instructions("Simmer.")
        })
        .collect()
}

/// Memory storage seeded with `recipes` in the favorites slot
pub fn seeded_storage(recipes: &[Recipe]) -> MemoryStorage {
    let raw = serde_json::to_string(recipes).unwrap();
    MemoryStorage::seeded(FAVORITES_KEY, raw)
}

/// Synchronizer over a mock source and memory storage
pub async fn browser_with(
    source: MockRecipeSource,
    storage: MemoryStorage,
) -> ViewSynchronizer<MockRecipeSource, MemoryStorage> {
    init_test_logging();
    let favorites = FavoritesStore::load(storage).await;
    ViewSynchronizer::new(source, favorites)
}
