//! Data models for categories and their flashcards

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a category within a registry
pub type CategoryId = Uuid;

/// Namespace for ids derived from category names (seed and imported decks)
const CATEGORY_NAMESPACE: Uuid = Uuid::from_u128(0x6b1f_52c4_0d7e_4a8b_9c3d_1e5f_a0b2_c4d6);

/// Accent color used when a new category does not pick one
pub const DEFAULT_ACCENT: &str = "#6366f1";

/// Accent colors offered by the add-category form
pub const ACCENT_PALETTE: [&str; 12] = [
    "#F42C38", "#6366f1", "#006CA5", "#48a860", "#ffa500", "#808000", "#8b5cf6", "#ef4444",
    "#06b6d4", "#10b981", "#f59e0b", "#ec4899",
];

/// Departments suggested by the add-category form
pub const SUGGESTED_DEPARTMENTS: [&str; 10] = [
    "Science",
    "Movies",
    "BTech",
    "Business",
    "General Knowledge",
    "Law",
    "History",
    "Literature",
    "Sports",
    "Technology",
];

/// A question and its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}

/// A themed deck of flashcards. Immutable once it is in a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub department: String,
    pub accent_color: String,
    pub image_ref: String,
    pub description: String,
    pub flashcards: Vec<Flashcard>,
}

impl Category {
    /// Id derived from a category name, stable across runs
    pub fn id_for_name(name: &str) -> CategoryId {
        Uuid::new_v5(&CATEGORY_NAMESPACE, name.as_bytes())
    }

    pub fn card_count(&self) -> usize {
        self.flashcards.len()
    }
}

/// Input to `CategoryRegistry::add`, as collected by the add-category form.
///
/// `id` is optional: when absent the registry assigns a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub image_ref: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_accent(mut self, color: impl Into<String>) -> Self {
        self.accent_color = Some(color.into());
        self
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_card(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.flashcards.push(Flashcard::new(question, answer));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_for_name_is_stable() {
        assert_eq!(Category::id_for_name("Medical"), Category::id_for_name("Medical"));
        assert_ne!(Category::id_for_name("Medical"), Category::id_for_name("Lawyer"));
    }

    #[test]
    fn test_flashcard_well_formed() {
        assert!(Flashcard::new("Q", "A").is_well_formed());
        assert!(!Flashcard::new("  ", "A").is_well_formed());
        assert!(!Flashcard::new("Q", "").is_well_formed());
    }

    #[test]
    fn test_new_category_deserializes_camel_case() {
        let json = r##"{
            "name": "Chemistry",
            "department": "Science",
            "accentColor": "#10b981",
            "imageRef": "chemistry.png",
            "description": "Elements and reactions",
            "flashcards": [{ "question": "H2O?", "answer": "Water" }]
        }"##;

        let draft: NewCategory = serde_json::from_str(json).unwrap();
        assert_eq!(draft.id, None);
        assert_eq!(draft.accent_color.as_deref(), Some("#10b981"));
        assert_eq!(draft.image_ref, "chemistry.png");
        assert_eq!(draft.flashcards.len(), 1);
    }
}
