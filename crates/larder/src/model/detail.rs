//! Detail screen view model.
//!
//! Takes a recipe id from navigation, performs a one-shot read, and
//! republishes the result. The loading flag clears on both outcomes so an
//! absent record renders as "not found" rather than a perpetual spinner.

use crate::error::Result;
use crate::images::ImageStore;
use crate::recipe::Recipe;
use crate::repository::Repository;

/// Renderable snapshot for the detail screen.
#[derive(Debug, Clone, Default)]
pub struct RecipeDetailState {
    /// The loaded recipe; `None` after loading means not found.
    pub recipe: Option<Recipe>,
    /// True until the one-shot read completes.
    pub is_loading: bool,
}

/// State holder for the detail screen.
#[derive(Debug)]
pub struct RecipeDetailModel {
    repo: Repository,
    state: RecipeDetailState,
}

impl RecipeDetailModel {
    /// One-shot load of the recipe with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn init(repo: Repository, recipe_id: i64) -> Result<Self> {
        let recipe = repo.get_by_id(recipe_id).await?;
        Ok(Self {
            repo,
            state: RecipeDetailState {
                recipe,
                is_loading: false,
            },
        })
    }

    /// Get the current state snapshot.
    #[must_use]
    pub fn state(&self) -> &RecipeDetailState {
        &self.state
    }

    /// Delete the loaded recipe: best-effort image removal, then the record.
    ///
    /// Does nothing when no recipe is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the record delete fails.
    pub async fn on_delete(&mut self) -> Result<()> {
        if let Some(recipe) = self.state.recipe.take() {
            if let Some(path) = recipe.image_path() {
                ImageStore::remove_best_effort(path);
            }
            self.repo.delete(recipe.id).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn test_repo() -> Repository {
        Repository::new(Storage::open_in_memory().unwrap(), None)
    }

    #[tokio::test]
    async fn test_init_loads_recipe() {
        let repo = test_repo();
        let id = repo
            .insert(&Recipe::new("Soup", "Dinner", "Water", "Boil", None))
            .await
            .unwrap();

        let model = RecipeDetailModel::init(repo, id).await.unwrap();
        let state = model.state();

        assert!(!state.is_loading);
        assert_eq!(state.recipe.as_ref().unwrap().name, "Soup");
    }

    #[tokio::test]
    async fn test_init_not_found_clears_loading() {
        let model = RecipeDetailModel::init(test_repo(), 99999).await.unwrap();
        let state = model.state();

        // Not-found renders as an absent recipe, not a perpetual spinner
        assert!(!state.is_loading);
        assert!(state.recipe.is_none());
    }

    #[tokio::test]
    async fn test_on_delete_removes_record() {
        let repo = test_repo();
        let id = repo
            .insert(&Recipe::new("Soup", "Dinner", "Water", "Boil", None))
            .await
            .unwrap();

        let mut model = RecipeDetailModel::init(repo.clone(), id).await.unwrap();
        model.on_delete().await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert!(model.state().recipe.is_none());
    }

    #[tokio::test]
    async fn test_on_delete_removes_image_file() {
        let dir = std::env::temp_dir().join(format!("larder_detail_del_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let image = dir.join("photo.jpg");
        std::fs::write(&image, b"bytes").unwrap();

        let repo = test_repo();
        let recipe = Recipe::new(
            "Soup",
            "Dinner",
            "Water",
            "Boil",
            Some(image.to_string_lossy().into_owned()),
        );
        let id = repo.insert(&recipe).await.unwrap();

        let mut model = RecipeDetailModel::init(repo, id).await.unwrap();
        model.on_delete().await.unwrap();
        assert!(!image.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_on_delete_without_loaded_recipe_is_noop() {
        let mut model = RecipeDetailModel::init(test_repo(), 99999).await.unwrap();
        model.on_delete().await.unwrap();
    }
}
