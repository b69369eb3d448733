// ABOUTME: List view commands for the mealdeck CLI
// ABOUTME: Trending, search, category, favorites, and random views printed as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealdeck::{errors::AppResult, services::RecipeView};

use crate::helpers::display::{display_json, display_view};
use crate::Browser;

type Result<T> = AppResult<T>;

/// Show the trending recipes
pub async fn trending(browser: &mut Browser, json: bool) -> Result<()> {
    let view = browser.trending().await;
    render(&view, json)
}

/// Search recipes by name
pub async fn search(browser: &mut Browser, term: &str, json: bool) -> Result<()> {
    let view = browser.search(term).await;
    render(&view, json)
}

/// List a category, or the favorites for the reserved category name
pub async fn category(browser: &mut Browser, name: &str, json: bool) -> Result<()> {
    let view = browser.select_view(name).await;
    render(&view, json)
}

/// List the favorites
pub async fn favorites(browser: &mut Browser, json: bool) -> Result<()> {
    let view = browser.favorites_view().await;
    render(&view, json)
}

/// Show one random recipe
pub async fn random(browser: &mut Browser, json: bool) -> Result<()> {
    let view = browser.random().await;
    render(&view, json)
}

fn render(view: &RecipeView, json: bool) -> Result<()> {
    if json {
        display_json(view)
    } else {
        display_view(view);
        Ok(())
    }
}
