// ABOUTME: Recipe record and ingredient models shared by the store, views, and remote client
// ABOUTME: Recipe, Ingredient definitions with display helpers and summary detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A single ingredient with its measure
///
/// Only ingredients with a non-blank name are meaningful; the remote client
/// drops the others while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name (e.g. "soy sauce")
    pub name: String,
    /// Free-text measure (e.g. "3/4 cup"), empty when unspecified
    #[serde(default)]
    pub measure: String,
}

impl Ingredient {
    /// Create an ingredient from a name and a measure
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.into(),
        }
    }

    /// Display line: `"<measure> <name>"`, or just the name without a measure
    #[must_use]
    pub fn display_line(&self) -> String {
        let name = self.name.trim();
        let measure = self.measure.trim();
        if measure.is_empty() {
            name.to_owned()
        } else {
            format!("{measure} {name}")
        }
    }
}

/// A recipe as returned by the remote source or stored as a favorite
///
/// # Examples
///
/// ```rust
/// use mealdeck_core::models::Recipe;
///
/// let recipe = Recipe::summary(
///     "52772",
///     "Teriyaki Chicken Casserole",
///     "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
/// );
/// assert!(recipe.is_summary());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier, stable across lookups
    pub id: String,
    /// Display name
    pub name: String,
    /// Thumbnail image `URL`
    #[serde(default)]
    pub thumbnail_url: String,
    /// Cooking instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Ordered ingredient list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<Ingredient>,
    /// Video walkthrough `URL`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Category (e.g. "Seafood")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cuisine area (e.g. "Japanese")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Original recipe source `URL`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Recipe {
    /// Create a summary record with only the fields category listings carry
    pub fn summary(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail_url: thumbnail_url.into(),
            instructions: None,
            ingredients: Vec::new(),
            video_url: None,
            category: None,
            area: None,
            tags: Vec::new(),
            source_url: None,
        }
    }

    /// Set instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Append an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, name: impl Into<String>, measure: impl Into<String>) -> Self {
        self.ingredients.push(Ingredient::new(name, measure));
        self
    }

    /// Set the video `URL`
    #[must_use]
    pub fn with_video_url(mut self, video_url: impl Into<String>) -> Self {
        self.video_url = Some(video_url.into());
        self
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when the record lacks both instructions and ingredients
    #[must_use]
    pub fn is_summary(&self) -> bool {
        self.instructions.is_none() && self.ingredients.is_empty()
    }

    /// Display lines for every meaningful ingredient, in order
    #[must_use]
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .filter(|ingredient| !ingredient.name.trim().is_empty())
            .map(Ingredient::display_line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line_trims_and_joins() {
        assert_eq!(
            Ingredient::new(" soy sauce ", " 3/4 cup ").display_line(),
            "3/4 cup soy sauce"
        );
        assert_eq!(Ingredient::new("salt", "  ").display_line(), "salt");
    }

    #[test]
    fn test_ingredient_lines_skip_blank_names() {
        let recipe = Recipe::summary("1", "Soup", "")
            .with_ingredient("water", "1 l")
            .with_ingredient("   ", "pinch")
            .with_ingredient("salt", "");

        assert_eq!(recipe.ingredient_lines(), vec!["1 l water", "salt"]);
        assert!(!recipe.is_summary());
    }

    #[test]
    fn test_persisted_shape_omits_empty_fields() {
        let json = serde_json::to_value(Recipe::summary("52772", "Teriyaki Chicken", "t.jpg"))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "52772",
                "name": "Teriyaki Chicken",
                "thumbnail_url": "t.jpg"
            })
        );
    }

    #[test]
    fn test_minimal_record_deserializes_with_defaults() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id":"52772","name":"Teriyaki Chicken"}"#).unwrap();
        assert!(recipe.thumbnail_url.is_empty());
        assert!(recipe.is_summary());
    }
}
