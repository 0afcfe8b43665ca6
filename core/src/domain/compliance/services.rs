use std::collections::HashSet;

use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    compliance::{
        entities::ComplianceEvaluation,
        helpers::{assemble_evaluation, find_non_compliant_with},
        ports::{ComplianceService, NutritionClassifier},
        value_objects::{ApiKey, EvaluateRecipeInput, EvaluateSelectionInput},
    },
    diet::{
        entities::{DietTag, normalize_diet_name},
        ports::{DietRepository, DietService},
    },
    recipe::{entities::Recipe, services::normalize_recipe},
};

impl<D, NC> ComplianceService for Service<D, NC>
where
    D: DietRepository,
    NC: NutritionClassifier,
{
    #[instrument(skip(self, input), fields(selected = input.selected_diets.len()))]
    async fn evaluate(&self, input: EvaluateRecipeInput) -> Result<ComplianceEvaluation, CoreError> {
        // 1. Normalize before anything leaves the process
        let recipe = normalize_recipe(input.form)?;

        // 2. Resolve diet names through the catalog
        let chosen_diets = self.resolve_diet_names(input.selected_diets).await?;

        self.classify_and_match(recipe, chosen_diets, input.api_key)
            .await
    }

    #[instrument(skip(self, input), fields(selected = input.selection.diet_ids.len()))]
    async fn evaluate_for_selection(
        &self,
        input: EvaluateSelectionInput,
    ) -> Result<ComplianceEvaluation, CoreError> {
        let recipe = normalize_recipe(input.form)?;
        let chosen_diets = self.resolve_selection(input.selection).await?;

        self.classify_and_match(recipe, chosen_diets, input.api_key)
            .await
    }
}

impl<D, NC> Service<D, NC>
where
    D: DietRepository,
    NC: NutritionClassifier,
{
    /// Catalog entries for the given names, in selection order. Names missing from the
    /// catalog are kept as name-only tags; blank and repeated names are dropped.
    async fn resolve_diet_names(&self, names: Vec<String>) -> Result<Vec<DietTag>, CoreError> {
        let mut seen = HashSet::new();
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty() && seen.insert(normalize_diet_name(name)))
            .collect();

        if names.is_empty() {
            return Ok(Vec::new());
        }

        let catalog = self.diet_repository.get_by_names(names.clone()).await?;

        let diets = names
            .iter()
            .map(|name| {
                let key = normalize_diet_name(name);
                catalog
                    .iter()
                    .find(|diet| normalize_diet_name(&diet.name) == key)
                    .cloned()
                    .unwrap_or_else(|| DietTag::named(name))
            })
            .collect();

        Ok(diets)
    }

    async fn classify_and_match(
        &self,
        recipe: Recipe,
        chosen_diets: Vec<DietTag>,
        api_key: ApiKey,
    ) -> Result<ComplianceEvaluation, CoreError> {
        let title = recipe.title().to_string();
        let report = self.nutrition_classifier.classify(recipe, api_key).await?;

        let result = find_non_compliant_with(&report, &chosen_diets);
        info!(
            recipe = %title,
            flags = report.flags.len(),
            non_compliant = result.non_compliant_diets.len(),
            unassessed = result.unassessed_diets.len(),
            "recipe evaluated"
        );

        Ok(assemble_evaluation(result, chosen_diets))
    }
}
