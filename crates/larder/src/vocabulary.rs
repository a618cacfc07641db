//! Recipe type vocabulary for larder.
//!
//! The vocabulary is a static list of `{"name": "..."}` objects used to
//! populate type pickers. A compiled-in default list is used unless a config
//! file override is supplied. The source is re-read and re-parsed on every
//! call; nothing is cached.

use std::path::Path;

use crate::error::{Error, Result};
use crate::recipe::RecipeType;

/// The built-in vocabulary, used when no override file is configured.
pub const DEFAULT_RECIPE_TYPES: &str = r#"[
    { "name": "Breakfast" },
    { "name": "Lunch" },
    { "name": "Dinner" },
    { "name": "Dessert" },
    { "name": "Snack" },
    { "name": "Drink" }
]"#;

/// Load the recipe type vocabulary.
///
/// When `override_path` is set, the file is read and parsed at call time;
/// otherwise the built-in list is parsed. Types are display-only and never
/// enforced as a storage constraint.
///
/// # Errors
///
/// Returns an error if the override file cannot be read or either source
/// fails to parse.
pub fn load_recipe_types(override_path: Option<&Path>) -> Result<Vec<RecipeType>> {
    let json = match override_path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| Error::VocabularyRead {
            path: path.to_path_buf(),
            source,
        })?,
        None => DEFAULT_RECIPE_TYPES.to_string(),
    };

    let types: Vec<RecipeType> = serde_json::from_str(&json)?;
    Ok(types)
}
