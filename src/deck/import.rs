//! Loading categories from a JSON deck file
//!
//! A deck file is a JSON array of categories using the same camelCase
//! field names as [`NewCategory`]. Every entry goes through registry
//! validation, so a deck file can never bypass the add-category rules.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::models::NewCategory;
use super::registry::{CategoryRegistry, RegistryError};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entry {index} ({name:?}) rejected: {source}")]
    Entry {
        index: usize,
        name: String,
        #[source]
        source: RegistryError,
    },
}

pub type Result<T> = std::result::Result<T, ImportError>;

/// Parse deck JSON into drafts without registering them
pub fn parse_deck(json: &str) -> Result<Vec<NewCategory>> {
    let drafts: Vec<NewCategory> = serde_json::from_str(json)?;
    Ok(drafts)
}

/// Build a registry from a deck file, in file order
pub fn load_deck(path: &Path) -> Result<CategoryRegistry> {
    let content = fs::read_to_string(path)?;
    let drafts = parse_deck(&content)?;

    let mut registry = CategoryRegistry::new();
    for (index, draft) in drafts.into_iter().enumerate() {
        let name = draft.name.clone();
        registry
            .add(draft)
            .map_err(|source| ImportError::Entry { index, name, source })?;
    }

    log::info!("Loaded {} categories from {:?}", registry.len(), path);
    Ok(registry)
}
