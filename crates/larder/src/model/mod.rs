//! Per-screen view models for larder.
//!
//! Each model owns a renderable state snapshot, issues load/mutate calls to
//! the repository, and republishes results for the presentation layer. The
//! presentation layer never talks to storage directly.

mod detail;
mod edit;
mod list;

pub use detail::{RecipeDetailModel, RecipeDetailState};
pub use edit::{AddEditRecipeModel, AddEditRecipeState, SaveOutcome};
pub use list::{RecipeListModel, RecipeListState};
