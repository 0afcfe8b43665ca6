use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet::entities::{DietTag, normalize_diet_name},
};

/// Boolean compliance flags returned by the nutrition classifier for one recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub flags: BTreeMap<String, bool>,
}

impl ComplianceReport {
    pub fn new(flags: BTreeMap<String, bool>) -> Self {
        Self { flags }
    }

    /// Keep the boolean entries of a flat JSON object and drop everything else
    /// (scores, prices, nested data).
    pub fn from_response(body: serde_json::Value) -> Result<Self, CoreError> {
        let serde_json::Value::Object(attributes) = body else {
            return Err(CoreError::ClassifierResponse(
                "expected a JSON object of recipe attributes".to_string(),
            ));
        };

        let flags = attributes
            .into_iter()
            .filter_map(|(name, value)| value.as_bool().map(|flag| (name, flag)))
            .collect();

        Ok(Self { flags })
    }

    /// Case-insensitive flag lookup. `key` must already be lower-cased.
    /// Conflicting spellings of the same attribute resolve to `false`.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.flags
            .iter()
            .filter(|(name, _)| normalize_diet_name(name) == key)
            .map(|(_, value)| *value)
            .reduce(|a, b| a && b)
    }
}

/// Selected diets the recipe fails, plus the ones the classifier said nothing about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonComplianceResult {
    pub non_compliant_diets: BTreeSet<String>,
    pub unassessed_diets: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceEvaluation {
    pub chosen_diets: Vec<DietTag>,
    pub non_compliant_diets: BTreeSet<String>,
    pub unassessed_diets: BTreeSet<String>,
}

impl ComplianceEvaluation {
    pub fn is_compliant(&self) -> bool {
        self.non_compliant_diets.is_empty()
    }
}
