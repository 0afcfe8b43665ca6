use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet::{
        entities::{DietTag, normalize_diet_name},
        ports::DietRepository,
    },
};
use crate::infrastructure::diet::mappers::DietSeed;

const BUNDLED_DIETS: &str = include_str!("../../../../data/diets.json");

/// Diet catalog seeded from a JSON file once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct JsonDietRepository {
    diets: Arc<Vec<DietTag>>,
}

impl JsonDietRepository {
    pub fn new(diets: Vec<DietTag>) -> Result<Self, CoreError> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for diet in &diets {
            if diet.name.trim().is_empty() {
                return Err(CoreError::Catalog(format!("diet {} has no name", diet.id)));
            }
            if !ids.insert(diet.id) {
                return Err(CoreError::Catalog(format!("duplicate diet id {}", diet.id)));
            }
            if !names.insert(normalize_diet_name(&diet.name)) {
                return Err(CoreError::Catalog(format!(
                    "duplicate diet name '{}'",
                    diet.name
                )));
            }
        }

        let mut diets = diets;
        diets.sort_by_key(|diet| diet.id);

        Ok(Self {
            diets: Arc::new(diets),
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let seeds: Vec<DietSeed> = serde_json::from_str(raw).map_err(|e| {
            error!("Failed to parse diet catalog: {}", e);
            CoreError::Catalog(format!("invalid diet catalog: {}", e))
        })?;

        Self::new(seeds.into_iter().map(DietTag::from).collect())
    }

    pub async fn from_file(path: &Path) -> Result<Self, CoreError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("Failed to read diet catalog {}: {}", path.display(), e);
            CoreError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;

        let repository = Self::from_json(&raw)?;
        info!(
            "Loaded {} diets from {}",
            repository.diets.len(),
            path.display()
        );

        Ok(repository)
    }

    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_json(BUNDLED_DIETS)
    }
}

impl DietRepository for JsonDietRepository {
    async fn fetch_diets(&self) -> Result<Vec<DietTag>, CoreError> {
        Ok(self.diets.to_vec())
    }

    async fn get_by_ids(&self, ids: BTreeSet<i32>) -> Result<Vec<DietTag>, CoreError> {
        Ok(self
            .diets
            .iter()
            .filter(|diet| ids.contains(&diet.id))
            .cloned()
            .collect())
    }

    async fn get_by_names(&self, names: Vec<String>) -> Result<Vec<DietTag>, CoreError> {
        let wanted: HashSet<String> = names.iter().map(|name| normalize_diet_name(name)).collect();

        Ok(self
            .diets
            .iter()
            .filter(|diet| wanted.contains(&normalize_diet_name(&diet.name)))
            .cloned()
            .collect())
    }
}
