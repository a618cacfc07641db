//! `SQLite` schema definitions for larder.
//!
//! This module contains the SQL statements for creating and managing
//! the database schema.

/// SQL statement to create the recipes table.
pub const CREATE_RECIPES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    recipe_type TEXT NOT NULL,
    ingredients TEXT NOT NULL,
    steps TEXT NOT NULL,
    image_uri TEXT
)
";

/// SQL statement to create an index on `name` for the list ordering.
pub const CREATE_NAME_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_recipes_name ON recipes(name ASC)
";

/// SQL statement to create an index on `recipe_type` for filtering.
pub const CREATE_TYPE_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_recipes_type ON recipes(recipe_type)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_RECIPES_TABLE,
    CREATE_NAME_INDEX,
    CREATE_TYPE_INDEX,
    CREATE_METADATA_TABLE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements_not_empty() {
        assert!(!SCHEMA_STATEMENTS.is_empty());
        for stmt in SCHEMA_STATEMENTS {
            assert!(!stmt.is_empty());
        }
    }

    #[test]
    fn test_create_recipes_table_contains_required_columns() {
        assert!(CREATE_RECIPES_TABLE.contains("id INTEGER PRIMARY KEY"));
        assert!(CREATE_RECIPES_TABLE.contains("name TEXT NOT NULL"));
        assert!(CREATE_RECIPES_TABLE.contains("recipe_type TEXT NOT NULL"));
        assert!(CREATE_RECIPES_TABLE.contains("ingredients TEXT NOT NULL"));
        assert!(CREATE_RECIPES_TABLE.contains("steps TEXT NOT NULL"));
        assert!(CREATE_RECIPES_TABLE.contains("image_uri TEXT"));
    }

    #[test]
    fn test_image_uri_is_nullable() {
        // image_uri must be the only optional column
        assert!(!CREATE_RECIPES_TABLE.contains("image_uri TEXT NOT NULL"));
    }

    #[test]
    fn test_create_metadata_table_structure() {
        assert!(CREATE_METADATA_TABLE.contains("key TEXT PRIMARY KEY"));
        assert!(CREATE_METADATA_TABLE.contains("value TEXT NOT NULL"));
    }
}
