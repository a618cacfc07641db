//! Command-line interface for larder.
//!
//! This module provides the CLI structure and command definitions for the
//! `larder` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, DeleteCommand, EditCommand, ListCommand, ShowCommand, TypesCommand,
};

/// larder - Keep your recipes on your own machine
///
/// A single-device recipe manager: create, list, filter, view, edit, and
/// delete recipes, each with a name, type, ingredient text, step text, and an
/// optional photo, all stored in a local database.
#[derive(Debug, Parser)]
#[command(name = "larder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List recipes, optionally filtered by type
    List(ListCommand),

    /// Show one recipe in full
    Show(ShowCommand),

    /// Add a new recipe
    Add(AddCommand),

    /// Edit an existing recipe
    Edit(EditCommand),

    /// Delete a recipe and its photo
    Delete(DeleteCommand),

    /// List the recipe type vocabulary
    Types(TypesCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
