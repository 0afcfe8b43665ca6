use serde::Serialize;

/// A recipe that passed normalization.
///
/// Only [`normalize_recipe`](super::services::normalize_recipe) builds one, so `servings`
/// is always positive and `ingredients` is non-empty with trimmed, non-empty entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    title: String,
    servings: u32,
    ingredients: Vec<String>,
    instructions: String,
}

impl Recipe {
    pub(crate) fn new(
        title: String,
        servings: u32,
        ingredients: Vec<String>,
        instructions: String,
    ) -> Self {
        Self {
            title,
            servings,
            ingredients,
            instructions,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}
