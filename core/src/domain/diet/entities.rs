use serde::{Deserialize, Serialize};

/// A dietary category a user can opt into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietTag {
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Classifier attributes this diet is judged by. Empty means the attribute
    /// named like the diet itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifier_flags: Vec<String>,
}

impl DietTag {
    pub fn new(id: i32, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
            classifier_flags: Vec::new(),
        }
    }

    /// A tag known only by name, used for selections that are not in the catalog.
    pub fn named(name: &str) -> Self {
        Self::new(0, name.to_string(), None)
    }

    pub fn with_classifier_flags(mut self, flags: Vec<String>) -> Self {
        self.classifier_flags = flags;
        self
    }

    /// Lower-cased attribute names this diet is matched against.
    pub fn flag_keys(&self) -> Vec<String> {
        if self.classifier_flags.is_empty() {
            vec![normalize_diet_name(&self.name)]
        } else {
            self.classifier_flags
                .iter()
                .map(|flag| normalize_diet_name(flag))
                .collect()
        }
    }
}

pub fn normalize_diet_name(name: &str) -> String {
    name.trim().to_lowercase()
}
