//! Core recipe types for larder.
//!
//! This module defines the domain entity stored in the recipe table and the
//! display-only recipe type value object sourced from the vocabulary.

use serde::{Deserialize, Serialize};

/// Navigation sentinel meaning "create a new recipe" rather than edit one.
pub const NEW_RECIPE_SENTINEL: i64 = -1;

/// Storage sentinel for a recipe that has not been persisted yet.
///
/// The storage layer ignores this value on insert and assigns a fresh id.
pub const UNSAVED_ID: i64 = 0;

/// A single recipe record.
///
/// All text fields are free-form and unstructured; ingredients and steps are
/// not parsed into discrete items. `image_uri` points at a locally owned copy
/// of the photo, never at the original external reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier, assigned by the storage layer on insert and
    /// immutable thereafter. `UNSAVED_ID` before the first insert.
    pub id: i64,

    /// Display name of the dish.
    pub name: String,

    /// Classification string. Expected to match a vocabulary entry but not
    /// enforced by storage; any string is accepted.
    pub recipe_type: String,

    /// Ingredient text, unstructured.
    pub ingredients: String,

    /// Preparation step text, unstructured.
    pub steps: String,

    /// Local path of the recipe photo, if one was selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

impl Recipe {
    /// Create an unsaved recipe with the given fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        recipe_type: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
        image_uri: Option<String>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            recipe_type: recipe_type.into(),
            ingredients: ingredients.into(),
            steps: steps.into(),
            image_uri,
        }
    }

    /// Check whether this recipe has been persisted.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.id != UNSAVED_ID
    }

    /// Get the image path, treating an empty string the same as no image.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        self.image_uri.as_deref().filter(|p| !p.is_empty())
    }
}

/// A display-only recipe classification sourced from the vocabulary.
///
/// Not persisted and has no identity beyond its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeType {
    /// The classification name, e.g. "Dinner".
    pub name: String,
}

impl std::fmt::Display for RecipeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
