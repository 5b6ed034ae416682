//! Append-only registry of categories
//!
//! The registry is the single source of truth for the browser. Entries are
//! never removed or mutated; new categories are appended at the end and are
//! visible to every derived view on the next read.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use super::models::{Category, CategoryId, NewCategory, DEFAULT_ACCENT};

/// One failing field of a rejected category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field key as the form knows it (`name`, `question_0`, ...)
    pub field: String,
    pub message: String,
}

/// Every failing field of a rejected category, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid category: {0}")]
    Validation(ValidationErrors),

    #[error("Category id already registered: {0}")]
    DuplicateId(CategoryId),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Check a draft the way the add-category form does.
pub fn validate(draft: &NewCategory) -> std::result::Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }
    if draft.department.trim().is_empty() {
        errors.push("department", "Department is required");
    }
    if draft.image_ref.trim().is_empty() {
        errors.push("image", "Image is required");
    }
    if draft.description.trim().is_empty() {
        errors.push("description", "Description is required");
    }

    if draft.flashcards.is_empty() {
        errors.push("flashcards", "At least one flashcard is required");
    }
    for (index, card) in draft.flashcards.iter().enumerate() {
        if card.question.trim().is_empty() {
            errors.push(format!("question_{}", index), "Question is required");
        }
        if card.answer.trim().is_empty() {
            errors.push(format!("answer_{}", index), "Answer is required");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a category. Nothing changes when this fails.
    pub fn add(&mut self, draft: NewCategory) -> Result<CategoryId> {
        validate(&draft).map_err(RegistryError::Validation)?;

        let id = draft.id.unwrap_or_else(Uuid::new_v4);
        if self.contains(id) {
            return Err(RegistryError::DuplicateId(id));
        }

        let accent_color = draft
            .accent_color
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACCENT.to_string());

        let name = draft.name.trim().to_string();
        log::info!("Registered category {} ({})", name, id);

        self.categories.push(Category {
            id,
            name,
            department: draft.department.trim().to_string(),
            accent_color,
            image_ref: draft.image_ref.trim().to_string(),
            description: draft.description.trim().to_string(),
            flashcards: draft.flashcards,
        });

        Ok(id)
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.get(id).is_some()
    }

    /// All categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
