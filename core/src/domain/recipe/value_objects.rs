use serde::{Deserialize, Serialize};

/// Servings as submitted: free text from a form field or an already parsed number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawServings {
    Number(i64),
    Text(String),
}

impl From<&str> for RawServings {
    fn from(s: &str) -> Self {
        RawServings::Text(s.to_string())
    }
}

impl From<String> for RawServings {
    fn from(s: String) -> Self {
        RawServings::Text(s)
    }
}

impl From<i64> for RawServings {
    fn from(n: i64) -> Self {
        RawServings::Number(n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeForm {
    pub title: String,
    pub servings: RawServings,
    /// Comma separated ingredient lines
    pub ingredients: String,
    #[serde(default)]
    pub instructions: Option<String>,
}
