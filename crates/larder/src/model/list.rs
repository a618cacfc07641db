//! List screen view model.
//!
//! Loads the vocabulary once, subscribes to the full recipe collection, and
//! republishes every emission. The type filter is held locally; filtering
//! happens at render time via `RecipeListState::visible_recipes`, never in
//! storage.

use crate::error::Result;
use crate::images::ImageStore;
use crate::recipe::{Recipe, RecipeType};
use crate::repository::{ListWatch, Repository};

/// Renderable snapshot for the list screen.
#[derive(Debug, Clone, Default)]
pub struct RecipeListState {
    /// The full recipe collection, name-ascending.
    pub recipes: Vec<Recipe>,
    /// Vocabulary entries for the filter picker.
    pub recipe_types: Vec<RecipeType>,
    /// Locally held filter; `None` shows everything.
    pub selected_type: Option<String>,
    /// True until the first emission arrives.
    pub is_loading: bool,
}

impl RecipeListState {
    /// Apply the selected-type filter at render time.
    #[must_use]
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        match &self.selected_type {
            Some(t) => self
                .recipes
                .iter()
                .filter(|r| &r.recipe_type == t)
                .collect(),
            None => self.recipes.iter().collect(),
        }
    }
}

/// State holder for the list screen.
#[derive(Debug)]
pub struct RecipeListModel {
    repo: Repository,
    watch: ListWatch,
    state: RecipeListState,
}

impl RecipeListModel {
    /// Load the vocabulary, subscribe to the recipe collection, and take the
    /// first emission. The loading flag clears once it arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary or the initial query fails.
    pub async fn init(repo: Repository) -> Result<Self> {
        let mut state = RecipeListState {
            is_loading: true,
            ..RecipeListState::default()
        };
        state.recipe_types = repo.recipe_types()?;

        let mut watch = repo.watch_all();
        state.recipes = watch.next().await?;
        state.is_loading = false;

        Ok(Self { repo, watch, state })
    }

    /// Get the current state snapshot.
    #[must_use]
    pub fn state(&self) -> &RecipeListState {
        &self.state
    }

    /// Await the next emission of the subscription and republish it.
    ///
    /// # Errors
    ///
    /// Returns an error if the subscription or the query fails.
    pub async fn refresh(&mut self) -> Result<()> {
        self.state.recipes = self.watch.next().await?;
        Ok(())
    }

    /// Update the locally held type filter.
    pub fn on_filter_changed(&mut self, recipe_type: Option<String>) {
        self.state.selected_type = recipe_type;
    }

    /// Delete a recipe: best-effort image removal, then the record.
    ///
    /// The collection is not touched optimistically; the change arrives
    /// through the subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the record delete fails.
    pub async fn on_delete(&mut self, recipe: &Recipe) -> Result<()> {
        if let Some(path) = recipe.image_path() {
            ImageStore::remove_best_effort(path);
        }
        self.repo.delete(recipe.id).await?;
        Ok(())
    }
}
