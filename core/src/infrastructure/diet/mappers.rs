use serde::Deserialize;

use crate::domain::diet::entities::DietTag;

/// One entry of the diet seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct DietSeed {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub classifier_flags: Vec<String>,
}

impl From<DietSeed> for DietTag {
    fn from(seed: DietSeed) -> Self {
        let description = seed
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        DietTag::new(seed.id, seed.name.trim().to_string(), description).with_classifier_flags(
            seed.classifier_flags
                .into_iter()
                .map(|flag| flag.trim().to_string())
                .filter(|flag| !flag.is_empty())
                .collect(),
        )
    }
}
