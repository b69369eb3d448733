// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Remote API endpoints, storage keys, view defaults, and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Remote recipe source (TheMealDB) constants
pub mod mealdb;

/// User-facing message texts
pub mod messages;

/// Durable storage constants
pub mod storage {
    /// Storage key holding the serialized favorites array
    pub const FAVORITES_KEY: &str = "favoriteRecipes";

    /// Extension appended to storage keys by the file backend
    pub const FILE_EXTENSION: &str = "json";

    /// Directory name under the platform data directory
    pub const DATA_DIR_NAME: &str = "mealdeck";

    /// Fallback data directory when the platform has none
    pub const FALLBACK_DATA_DIR: &str = "./data";
}

/// View selection constants
pub mod views {
    /// Reserved pseudo-category that selects the favorites store
    pub const FAVORITES_CATEGORY: &str = "Favorites";

    /// Category used to stand in for "trending" recipes
    pub const TRENDING_CATEGORY: &str = "Indian";

    /// Default number of trending recipes shown
    pub const DEFAULT_TRENDING_LIMIT: usize = 8;

    /// Title of the trending view
    pub const TRENDING_TITLE: &str = "Trending Recipes";

    /// Title of the favorites view
    pub const FAVORITES_TITLE: &str = "My Favorite Recipes";

    /// Title of the random recipe view
    pub const RANDOM_TITLE: &str = "Random Recipe";
}

/// HTTP client defaults
pub mod http {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Default TTL for cached recipe details (1 hour)
    pub const DEFAULT_DETAIL_CACHE_TTL_SECS: u64 = 3_600;
}

/// Environment variable names
pub mod env_vars {
    /// Remote API base URL override
    pub const API_BASE_URL: &str = "MEALDECK_API_BASE_URL";
    /// Data directory override
    pub const DATA_DIR: &str = "MEALDECK_DATA_DIR";
    /// Request timeout override
    pub const HTTP_TIMEOUT_SECS: &str = "MEALDECK_HTTP_TIMEOUT_SECS";
    /// Connect timeout override
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "MEALDECK_HTTP_CONNECT_TIMEOUT_SECS";
    /// Detail cache TTL override
    pub const DETAIL_CACHE_TTL_SECS: &str = "MEALDECK_DETAIL_CACHE_TTL_SECS";
    /// Trending list length override
    pub const TRENDING_LIMIT: &str = "MEALDECK_TRENDING_LIMIT";
}
