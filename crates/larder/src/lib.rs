//! `larder` - A single-device recipe manager
//!
//! This library provides the data path for a local recipe collection: the
//! recipe entity, `SQLite`-backed storage, a repository with continuous
//! queries, a local image store, and the per-screen view models the `larder`
//! binary drives.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod images;
pub mod logging;
pub mod model;
pub mod recipe;
pub mod repository;
pub mod storage;
pub mod vocabulary;

pub use config::Config;
pub use error::{Error, Result};
pub use images::ImageStore;
pub use logging::init_logging;
pub use recipe::{Recipe, RecipeType};
pub use repository::Repository;
pub use storage::Storage;
