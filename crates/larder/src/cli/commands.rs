//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Filter by recipe type (exact, case-sensitive)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub recipe_type: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Id of the recipe to show
    pub id: i64,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Recipe name
    #[arg(short, long)]
    pub name: String,

    /// Recipe type, e.g. "Dinner"
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub recipe_type: String,

    /// Ingredient text
    #[arg(short, long)]
    pub ingredients: String,

    /// Preparation step text
    #[arg(short, long)]
    pub steps: String,

    /// Path to a photo to copy into the image store
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,
}

/// Edit command arguments.
///
/// Only the supplied fields change; everything else keeps its stored value.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Id of the recipe to edit
    pub id: i64,

    /// New recipe name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New recipe type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub recipe_type: Option<String>,

    /// New ingredient text
    #[arg(short, long)]
    pub ingredients: Option<String>,

    /// New preparation step text
    #[arg(short, long)]
    pub steps: Option<String>,

    /// Path to a replacement photo
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Id of the recipe to delete
    pub id: i64,
}

/// Types command arguments.
#[derive(Debug, Args)]
pub struct TypesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
