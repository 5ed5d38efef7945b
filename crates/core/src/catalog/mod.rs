//! Solution catalog - curated first-aid entries the engine matches against.
//!
//! The catalog is owned by the curation subsystem. The engine only ever sees
//! an immutable [`SolutionCatalog`] snapshot, either loaded from a TOML file
//! or the built-in seed set.

mod loader;
mod seed;
mod types;

pub use loader::{load_catalog, load_catalog_for};
pub use types::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Solution name cannot be blank")]
    BlankName,

    #[error("Duplicate solution name: {0}")]
    DuplicateName(String),

    #[error("Solution {0:?} has no keywords")]
    NoKeywords(String),
}
