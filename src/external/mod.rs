// ABOUTME: External API client modules (TheMealDB)
// ABOUTME: Provides the RecipeSource abstraction, HTTP client, and mock source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains the remote recipe source consumed by the view
//! synchronizer.

pub mod mealdb_client;
pub mod source;

// Re-export commonly used types
pub use mealdb_client::{MealDbClient, MealDbClientConfig, MockRecipeSource};
pub use source::RecipeSource;
