// ABOUTME: Main library entry point for the Mealdeck recipe browser
// ABOUTME: Favorites store, view synchronizer, TheMealDB client, and durable storage backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealdeck
//!
//! A recipe browser over the public TheMealDB API with a locally persisted
//! favorites list.
//!
//! ## Architecture
//!
//! - **External**: `RecipeSource` trait and the `MealDbClient` HTTP implementation
//! - **Storage**: string-keyed durable slots (file and in-memory backends)
//! - **Favorites**: the write-through favorites store
//! - **Services**: the view synchronizer that annotates recipe lists with
//!   favorite flags and picks the user-facing message
//! - **Config** / **Logging**: environment-driven configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealdeck::config::AppConfig;
//! use mealdeck::external::{MealDbClient, MealDbClientConfig};
//! use mealdeck::favorites::FavoritesStore;
//! use mealdeck::services::ViewSynchronizer;
//! use mealdeck::storage::FileStorage;
//! use mealdeck::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let client = MealDbClient::new(MealDbClientConfig::from(&config));
//!     let favorites = FavoritesStore::load(FileStorage::new(&config.data_dir)).await;
//!     let mut browser = ViewSynchronizer::new(client, favorites);
//!
//!     let view = browser.select_view("Seafood").await;
//!     println!("{} ({} recipes)", view.title, view.entries.len());
//!     Ok(())
//! }
//! ```

// Re-export mealdeck-core modules so callers can keep `mealdeck::errors::*` etc.
pub use mealdeck_core::constants;
pub use mealdeck_core::errors;
pub use mealdeck_core::models;

/// Environment-based configuration
pub mod config;

/// External API clients (TheMealDB)
pub mod external;

/// Write-through favorites store
pub mod favorites;

/// Shared HTTP client for remote API calls
pub mod http_client;

/// Logging configuration and structured logging setup
pub mod logging;

/// View state services built on the favorites store and remote source
pub mod services;

/// Durable key-value storage backends
pub mod storage;
