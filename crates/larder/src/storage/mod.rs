//! Storage layer for larder.
//!
//! This module provides `SQLite`-based persistent storage for recipes,
//! backing the four read queries and three write operations the repository
//! exposes.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::recipe::Recipe;

/// Storage engine for recipes.
///
/// One table keyed by the recipe id. No uniqueness constraint beyond the id,
/// no transactions spanning multiple operations, no retry.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a storage database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a recipe and return the assigned id.
    ///
    /// The recipe's own `id` field is ignored; AUTOINCREMENT guarantees the
    /// returned id has never been used before.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn insert(&self, recipe: &Recipe) -> Result<i64> {
        self.conn.execute(
            r"
            INSERT INTO recipes (name, recipe_type, ingredients, steps, image_uri)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
            params![
                recipe.name,
                recipe.recipe_type,
                recipe.ingredients,
                recipe.steps,
                recipe.image_uri,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted recipe with id {}", id);
        Ok(id)
    }

    /// Replace the row matching the recipe's id with the supplied fields.
    ///
    /// Silently does nothing when no row matches; storage does not guard
    /// against updating a missing record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn update(&self, recipe: &Recipe) -> Result<()> {
        self.conn.execute(
            r"
            UPDATE recipes
            SET name = ?1, recipe_type = ?2, ingredients = ?3, steps = ?4, image_uri = ?5
            WHERE id = ?6
            ",
            params![
                recipe.name,
                recipe.recipe_type,
                recipe.ingredients,
                recipe.steps,
                recipe.image_uri,
                recipe.id,
            ],
        )?;
        Ok(())
    }

    /// Delete a recipe by id.
    ///
    /// Returns `true` if a recipe was deleted, `false` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(affected > 0)
    }

    /// Get a recipe by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Recipe>> {
        let result = self
            .conn
            .query_row(
                r"
                SELECT id, name, recipe_type, ingredients, steps, image_uri
                FROM recipes WHERE id = ?1
                ",
                [id],
                Self::row_to_recipe,
            )
            .optional()?;
        Ok(result)
    }

    /// Get all recipes, ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_all(&self) -> Result<Vec<Recipe>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT id, name, recipe_type, ingredients, steps, image_uri
            FROM recipes ORDER BY name ASC
            ",
        )?;

        let recipes = stmt
            .query_map([], Self::row_to_recipe)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Get recipes whose type equals the argument exactly (case-sensitive),
    /// ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_by_type(&self, recipe_type: &str) -> Result<Vec<Recipe>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT id, name, recipe_type, ingredients, steps, image_uri
            FROM recipes WHERE recipe_type = ?1
            ORDER BY name ASC
            ",
        )?;

        let recipes = stmt
            .query_map([recipe_type], Self::row_to_recipe)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Count total recipes in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Convert a database row to a Recipe struct.
    fn row_to_recipe(row: &rusqlite::Row) -> rusqlite::Result<Recipe> {
        Ok(Recipe {
            id: row.get(0)?,
            name: row.get(1)?,
            recipe_type: row.get(2)?,
            ingredients: row.get(3)?,
            steps: row.get(4)?,
            image_uri: row.get(5)?,
        })
    }
}
