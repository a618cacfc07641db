//! Add/edit screen view model.
//!
//! Holds the transient edit buffer, applies field-change intents, manages the
//! locally owned image copy, and saves the buffer as an insert or update
//! depending on whether a non-sentinel recipe id was supplied.

use tracing::warn;

use crate::error::Result;
use crate::images::ImageStore;
use crate::recipe::{Recipe, RecipeType, NEW_RECIPE_SENTINEL, UNSAVED_ID};
use crate::repository::Repository;

/// The edit buffer rendered by the add/edit screen.
#[derive(Debug, Clone, Default)]
pub struct AddEditRecipeState {
    /// Name field.
    pub name: String,
    /// Ingredient text field.
    pub ingredients: String,
    /// Step text field.
    pub steps: String,
    /// Locally owned image path, if one was selected.
    pub image_uri: Option<String>,
    /// Vocabulary entries for the type picker.
    pub recipe_types: Vec<RecipeType>,
    /// Currently selected type; empty until picked.
    pub selected_type: String,
    /// True while a save is in flight.
    pub is_saving: bool,
    /// True when editing an existing recipe, false when creating.
    pub is_edit: bool,
}

/// What `save` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The buffer failed validation; nothing was written.
    Invalid,
    /// A new record was inserted with the given id.
    Inserted(i64),
    /// The existing record with the given id was updated.
    Updated(i64),
}

/// State holder for the add/edit screen.
#[derive(Debug)]
pub struct AddEditRecipeModel {
    repo: Repository,
    images: ImageStore,
    /// Navigation parameter; `None` or the `-1` sentinel means create mode.
    recipe_id: Option<i64>,
    state: AddEditRecipeState,
}

impl AddEditRecipeModel {
    /// Load the vocabulary and, in edit mode, the recipe's fields.
    ///
    /// Edit mode applies when an id is supplied and is not the "new record"
    /// sentinel; a supplied id with no matching record falls back to create
    /// mode with an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary or the record load fails.
    pub async fn init(
        repo: Repository,
        images: ImageStore,
        recipe_id: Option<i64>,
    ) -> Result<Self> {
        let mut state = AddEditRecipeState {
            recipe_types: repo.recipe_types()?,
            ..AddEditRecipeState::default()
        };

        if let Some(id) = recipe_id.filter(|&id| id != NEW_RECIPE_SENTINEL) {
            if let Some(recipe) = repo.get_by_id(id).await? {
                state.name = recipe.name;
                state.ingredients = recipe.ingredients;
                state.steps = recipe.steps;
                state.image_uri = recipe.image_uri;
                state.selected_type = recipe.recipe_type;
                state.is_edit = true;
            }
        }

        Ok(Self {
            repo,
            images,
            recipe_id,
            state,
        })
    }

    /// Get the current buffer snapshot.
    #[must_use]
    pub fn state(&self) -> &AddEditRecipeState {
        &self.state
    }

    /// Replace the name field.
    pub fn on_name_changed(&mut self, name: impl Into<String>) {
        self.state.name = name.into();
    }

    /// Replace the selected type.
    pub fn on_type_changed(&mut self, recipe_type: impl Into<String>) {
        self.state.selected_type = recipe_type.into();
    }

    /// Replace the ingredient text.
    pub fn on_ingredients_changed(&mut self, ingredients: impl Into<String>) {
        self.state.ingredients = ingredients.into();
    }

    /// Replace the step text.
    pub fn on_steps_changed(&mut self, steps: impl Into<String>) {
        self.state.steps = steps.into();
    }

    /// Copy a newly selected image into the store and point the buffer at it.
    ///
    /// No-ops for `None` and the literal string `"null"` (some pickers hand
    /// back the stringified null). The previously held local copy is removed
    /// best-effort once the new copy exists. A failed copy leaves the buffer
    /// unchanged.
    pub fn on_image_selected(&mut self, uri: Option<&str>) {
        let Some(uri) = uri else { return };
        if uri == "null" {
            return;
        }

        match self.images.ingest(uri) {
            Ok(path) => {
                if let Some(previous) = &self.state.image_uri {
                    ImageStore::remove_best_effort(previous);
                }
                self.state.image_uri = Some(path.to_string_lossy().into_owned());
            }
            Err(e) => {
                warn!("Failed to copy selected image: {}", e);
            }
        }
    }

    /// Check whether the buffer can be saved: all four required text fields
    /// non-blank, whitespace-only counting as blank.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.state.name.trim().is_empty()
            && !self.state.ingredients.trim().is_empty()
            && !self.state.steps.trim().is_empty()
            && !self.state.selected_type.trim().is_empty()
    }

    /// Save the buffer.
    ///
    /// No-op when invalid. Otherwise builds a record from the buffer,
    /// reusing the original id when editing and the unsaved sentinel when
    /// creating, and forwards to repository update or insert accordingly.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn save(&mut self) -> Result<SaveOutcome> {
        if !self.is_valid() {
            return Ok(SaveOutcome::Invalid);
        }

        self.state.is_saving = true;

        let editing = self.recipe_id.filter(|&id| id != NEW_RECIPE_SENTINEL);
        let recipe = Recipe {
            id: editing.unwrap_or(UNSAVED_ID),
            name: self.state.name.clone(),
            recipe_type: self.state.selected_type.clone(),
            ingredients: self.state.ingredients.clone(),
            steps: self.state.steps.clone(),
            image_uri: self.state.image_uri.clone(),
        };

        let result = match editing {
            Some(id) => self.repo.update(&recipe).await.map(|()| SaveOutcome::Updated(id)),
            None => self.repo.insert(&recipe).await.map(SaveOutcome::Inserted),
        };

        self.state.is_saving = false;
        result
    }
}
