// ABOUTME: Core data models for the Mealdeck recipe browser
// ABOUTME: Re-exports the Recipe record and Ingredient pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The same [`Recipe`] type represents full records (lookup results and
//! favorites) and summaries (category results). A summary simply has no
//! instructions and no ingredients; see [`Recipe::is_summary`].

mod recipe;

pub use recipe::{Ingredient, Recipe};
