use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    compliance::ports::NutritionClassifier,
    diet::{
        entities::DietTag,
        ports::{DietRepository, DietService},
        value_objects::UserDietSelection,
    },
};

impl<D, NC> DietService for Service<D, NC>
where
    D: DietRepository,
    NC: NutritionClassifier,
{
    async fn get_diets(&self) -> Result<Vec<DietTag>, CoreError> {
        self.diet_repository.fetch_diets().await
    }

    #[instrument(skip(self), fields(diet_count = selection.diet_ids.len()))]
    async fn resolve_selection(
        &self,
        selection: UserDietSelection,
    ) -> Result<Vec<DietTag>, CoreError> {
        if selection.is_empty() {
            return Ok(Vec::new());
        }

        let diets = self
            .diet_repository
            .get_by_ids(selection.diet_ids.clone())
            .await?;

        let missing: Vec<String> = selection
            .diet_ids
            .iter()
            .filter(|id| !diets.iter().any(|diet| diet.id == **id))
            .map(|id| id.to_string())
            .collect();

        if !missing.is_empty() {
            tracing::warn!("Selection references unknown diets: {}", missing.join(", "));
            return Err(CoreError::NotFound(format!(
                "unknown diet ids: {}",
                missing.join(", ")
            )));
        }

        Ok(diets)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::{
        compliance::ports::MockNutritionClassifier, diet::ports::MockDietRepository,
    };

    fn catalog() -> Vec<DietTag> {
        vec![
            DietTag::new(1, "vegetarian".to_string(), None),
            DietTag::new(2, "vegan".to_string(), None),
        ]
    }

    #[tokio::test]
    async fn test_resolve_selection_returns_catalog_entries() {
        let mut diet_repository = MockDietRepository::new();
        diet_repository
            .expect_get_by_ids()
            .withf(|ids| *ids == BTreeSet::from([1, 2]))
            .times(1)
            .returning(|_| Box::pin(async { Ok::<_, CoreError>(catalog()) }));

        let service = Service::new(diet_repository, MockNutritionClassifier::new());
        let diets = service
            .resolve_selection(UserDietSelection::new([2, 1]))
            .await
            .unwrap();

        assert_eq!(diets, catalog());
    }

    #[tokio::test]
    async fn test_resolve_selection_rejects_unknown_ids() {
        let mut diet_repository = MockDietRepository::new();
        diet_repository
            .expect_get_by_ids()
            .returning(|_| Box::pin(async { Ok::<_, CoreError>(catalog()) }));

        let service = Service::new(diet_repository, MockNutritionClassifier::new());
        let error = service
            .resolve_selection(UserDietSelection::new([1, 7, 9]))
            .await
            .unwrap_err();

        assert_eq!(error, CoreError::NotFound("unknown diet ids: 7, 9".to_string()));
    }

    #[tokio::test]
    async fn test_empty_selection_skips_the_catalog() {
        let mut diet_repository = MockDietRepository::new();
        diet_repository.expect_get_by_ids().times(0);

        let service = Service::new(diet_repository, MockNutritionClassifier::new());
        let diets = service
            .resolve_selection(UserDietSelection::default())
            .await
            .unwrap();

        assert!(diets.is_empty());
    }
}
