//! Recipe repository for larder.
//!
//! A pass-through facade over the storage layer: every operation mirrors
//! storage 1:1 with no validation, caching, or error translation, plus the
//! vocabulary read. Continuous queries are exposed as watches: every write
//! bumps a shared data version, and each watch re-runs its query after every
//! change for as long as the subscriber holds it.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeType};
use crate::storage::Storage;
use crate::vocabulary;

/// Shared, cloneable facade over recipe storage.
///
/// All database work happens behind async calls so the caller's task is
/// never blocked. Clones share one connection and one change feed.
#[derive(Debug, Clone)]
pub struct Repository {
    storage: Arc<Mutex<Storage>>,
    changes: Arc<watch::Sender<u64>>,
    types_path: Option<PathBuf>,
}

impl Repository {
    /// Wrap a storage instance.
    ///
    /// `types_path` optionally points at a vocabulary override file; when
    /// `None` the built-in vocabulary is used.
    #[must_use]
    pub fn new(storage: Storage, types_path: Option<PathBuf>) -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            storage: Arc::new(Mutex::new(storage)),
            changes: Arc::new(tx),
            types_path,
        }
    }

    /// Insert a recipe, returning the assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn insert(&self, recipe: &Recipe) -> Result<i64> {
        let id = self.storage.lock().await.insert(recipe)?;
        self.notify();
        Ok(id)
    }

    /// Update the row matching the recipe's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update(&self, recipe: &Recipe) -> Result<()> {
        self.storage.lock().await.update(recipe)?;
        self.notify();
        Ok(())
    }

    /// Delete a recipe by id. Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self.storage.lock().await.delete(id)?;
        self.notify();
        Ok(deleted)
    }

    /// Get all recipes ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get_all(&self) -> Result<Vec<Recipe>> {
        self.storage.lock().await.get_all()
    }

    /// Get recipes of the given type, case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get_by_type(&self, recipe_type: &str) -> Result<Vec<Recipe>> {
        self.storage.lock().await.get_by_type(recipe_type)
    }

    /// Get a recipe by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Recipe>> {
        self.storage.lock().await.get_by_id(id)
    }

    /// Count recipes in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn count(&self) -> Result<i64> {
        self.storage.lock().await.count()
    }

    /// Load the recipe type vocabulary.
    ///
    /// Re-read from its source on every call; never cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary cannot be read or parsed.
    pub fn recipe_types(&self) -> Result<Vec<RecipeType>> {
        vocabulary::load_recipe_types(self.types_path.as_deref())
    }

    /// Subscribe to the full recipe collection, ordered by name.
    #[must_use]
    pub fn watch_all(&self) -> ListWatch {
        ListWatch::new(self.clone(), ListQuery::All)
    }

    /// Subscribe to recipes of one type.
    #[must_use]
    pub fn watch_by_type(&self, recipe_type: &str) -> ListWatch {
        ListWatch::new(self.clone(), ListQuery::ByType(recipe_type.to_string()))
    }

    /// Subscribe to a single recipe by id.
    #[must_use]
    pub fn watch_by_id(&self, id: i64) -> SingleWatch {
        let mut rx = self.changes.subscribe();
        rx.mark_changed();
        SingleWatch {
            repo: self.clone(),
            rx,
            id,
        }
    }

    fn notify(&self) {
        self.changes.send_modify(|v| *v += 1);
    }
}

/// Which list query a `ListWatch` re-runs on each change.
#[derive(Debug, Clone)]
enum ListQuery {
    All,
    ByType(String),
}

/// A continuous query over a recipe collection.
///
/// `next()` resolves immediately with the current result on first call, then
/// waits for the next write anywhere in the process before re-querying.
/// Writes landing between calls coalesce into one emission.
#[derive(Debug)]
pub struct ListWatch {
    repo: Repository,
    rx: watch::Receiver<u64>,
    query: ListQuery,
}

impl ListWatch {
    fn new(repo: Repository, query: ListQuery) -> Self {
        let mut rx = repo.changes.subscribe();
        // First next() emits without waiting for a write
        rx.mark_changed();
        Self { repo, rx, query }
    }

    /// Wait for the next emission and return the query result.
    ///
    /// # Errors
    ///
    /// Returns an error if the change feed shut down or the query fails.
    pub async fn next(&mut self) -> Result<Vec<Recipe>> {
        self.rx.changed().await.map_err(|_| Error::WatchClosed)?;
        match &self.query {
            ListQuery::All => self.repo.get_all().await,
            ListQuery::ByType(t) => self.repo.get_by_type(t).await,
        }
    }
}

/// A continuous query over a single recipe, zero-or-one per emission.
#[derive(Debug)]
pub struct SingleWatch {
    repo: Repository,
    rx: watch::Receiver<u64>,
    id: i64,
}

impl SingleWatch {
    /// Wait for the next emission and return the matching recipe, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the change feed shut down or the query fails.
    pub async fn next(&mut self) -> Result<Option<Recipe>> {
        self.rx.changed().await.map_err(|_| Error::WatchClosed)?;
        self.repo.get_by_id(self.id).await
    }
}
