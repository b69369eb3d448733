// ABOUTME: User-facing message texts shown alongside recipe views
// ABOUTME: Single message channel for empty results, network failures, and bad input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Shown when a query succeeded but nothing matched
pub const NO_RESULTS: &str = "No recipes found for your search. Try a different term or category!";

/// Prefix for transport and server failures
pub const NETWORK_ERROR_PREFIX: &str = "Error";

/// Suffix for transport and server failures
pub const NETWORK_ERROR_HINT: &str = "Please try checking your internet connection.";

/// Shown when a search is submitted without a term
pub const EMPTY_QUERY: &str = "Please enter a recipe name or ingredient to search.";
