// ABOUTME: TheMealDB endpoint paths, query parameter names, and wire limits
// ABOUTME: Free public API, no key beyond the shared test key in the base URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service name used in error messages and log fields
pub const SERVICE_NAME: &str = "TheMealDB";

/// Default base URL (v1, shared test key `1`)
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

/// Search by meal name: `search.php?s=<term>`
pub const SEARCH_ENDPOINT: &str = "search.php";
/// Filter by category: `filter.php?c=<category>`
pub const FILTER_ENDPOINT: &str = "filter.php";
/// Lookup full details by id: `lookup.php?i=<id>`
pub const LOOKUP_ENDPOINT: &str = "lookup.php";
/// Single random meal: `random.php`
pub const RANDOM_ENDPOINT: &str = "random.php";

/// Query parameter for name search
pub const SEARCH_PARAM: &str = "s";
/// Query parameter for category filter
pub const FILTER_PARAM: &str = "c";
/// Query parameter for id lookup
pub const LOOKUP_PARAM: &str = "i";

/// Number of numbered ingredient/measure slots on a meal record
pub const MAX_INGREDIENT_SLOTS: usize = 20;
