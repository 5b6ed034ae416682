//! Category registry for the flashcard browser
//!
//! This module provides:
//! - Category and flashcard models
//! - The append-only registry with add-category validation
//! - Built-in seed categories
//! - JSON deck file import

pub mod import;
pub mod models;
pub mod registry;
pub mod seed;

pub use models::*;
pub use registry::{CategoryRegistry, FieldError, RegistryError, ValidationErrors};
