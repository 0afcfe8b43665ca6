use std::fmt;

use crate::domain::{diet::value_objects::UserDietSelection, recipe::value_objects::RecipeForm};

/// Credential for the nutrition analysis service.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct EvaluateRecipeInput {
    pub form: RecipeForm,
    pub selected_diets: Vec<String>,
    pub api_key: ApiKey,
}

#[derive(Debug, Clone)]
pub struct EvaluateSelectionInput {
    pub form: RecipeForm,
    pub selection: UserDietSelection,
    pub api_key: ApiKey,
}
