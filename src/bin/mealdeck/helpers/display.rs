// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for the mealdeck CLI
// ABOUTME: Provides consistent display functions for views, recipe detail, and toggles

use mealdeck::{
    errors::{AppError, AppResult},
    services::{RecipeDetail, RecipeView, ToggleResult},
};
use serde::Serialize;

/// Print any result as pretty JSON on stdout
pub fn display_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::serialization(format!("Failed to render JSON: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Display a list view with favorites marked by `*`
pub fn display_view(view: &RecipeView) {
    println!("\n{}", view.title);
    println!("{}", "=".repeat(view.title.len().max(20)));

    if let Some(message) = &view.message {
        println!("{message}");
    }

    for (index, entry) in view.entries.iter().enumerate() {
        let marker = if entry.is_favorite { '*' } else { ' ' };
        println!(
            "{marker} {:>2}. {} (id {})",
            index + 1,
            entry.recipe.name,
            entry.recipe.id
        );
    }

    if !view.is_empty() {
        println!("\n{} recipe(s). * = favorite", view.entries.len());
    }
}

/// Display the full detail of one recipe
pub fn display_detail(detail: &RecipeDetail) {
    let recipe = &detail.recipe;
    let marker = if detail.is_favorite { " *" } else { "" };
    println!("\n{}{marker}", recipe.name);
    println!("{}", "=".repeat(recipe.name.len().max(20)));
    println!("   Id: {}", recipe.id);

    if let Some(category) = &recipe.category {
        println!("   Category: {category}");
    }
    if let Some(area) = &recipe.area {
        println!("   Area: {area}");
    }
    if !recipe.tags.is_empty() {
        println!("   Tags: {}", recipe.tags.join(", "));
    }

    if !detail.ingredient_lines.is_empty() {
        println!("\nIngredients:");
        for line in &detail.ingredient_lines {
            println!("  - {line}");
        }
    }

    if let Some(instructions) = &recipe.instructions {
        println!("\nInstructions:");
        println!("{instructions}");
    }

    if let Some(video) = &recipe.video_url {
        println!("\nVideo: {video}");
    }
    if let Some(source) = &recipe.source_url {
        println!("Source: {source}");
    }
}

/// Display the result of a favorite toggle
pub fn display_toggle(result: &ToggleResult, total: usize) {
    if result.is_favorite() {
        println!("Added \"{}\" to favorites.", result.recipe_name);
    } else {
        println!("Removed \"{}\" from favorites.", result.recipe_name);
    }
    println!("{total} favorite(s) saved.");
}
