// ABOUTME: Single-recipe commands for the mealdeck CLI
// ABOUTME: Shows full recipe detail and toggles a recipe in the favorites store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealdeck::errors::AppResult;
use tracing::{error, info};

use crate::helpers::display::{display_detail, display_json, display_toggle};
use crate::Browser;

type Result<T> = AppResult<T>;

/// Show the full detail of one recipe
pub async fn show(browser: &Browser, id: &str, json: bool) -> Result<()> {
    let detail = browser
        .recipe_detail(id)
        .await
        .inspect_err(|e| error!(recipe.id = id, error = %e, "Recipe detail unavailable"))?;

    if json {
        display_json(&detail)
    } else {
        display_detail(&detail);
        Ok(())
    }
}

/// Toggle a recipe in the favorites store
pub async fn favorite(browser: &mut Browser, id: &str, json: bool) -> Result<()> {
    let result = browser
        .toggle_favorite(id)
        .await
        .inspect_err(|e| error!(recipe.id = id, error = %e, "Favorite toggle failed"))?;
    info!(
        recipe.id = %result.recipe_id,
        favorite = result.is_favorite(),
        total = browser.favorites().len(),
        "Favorite toggled"
    );

    if json {
        display_json(&result)
    } else {
        display_toggle(&result, browser.favorites().len());
        Ok(())
    }
}
