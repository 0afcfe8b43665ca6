use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    compliance::{
        entities::{ComplianceEvaluation, ComplianceReport},
        value_objects::{ApiKey, EvaluateRecipeInput, EvaluateSelectionInput},
    },
    recipe::entities::Recipe,
};

/// Client for the external nutrition analysis service
#[cfg_attr(test, mockall::automock)]
pub trait NutritionClassifier: Send + Sync {
    fn classify(
        &self,
        recipe: Recipe,
        api_key: ApiKey,
    ) -> impl Future<Output = Result<ComplianceReport, CoreError>> + Send;
}

/// Service trait for the recipe evaluation pipeline
#[cfg_attr(test, mockall::automock)]
pub trait ComplianceService: Send + Sync {
    fn evaluate(
        &self,
        input: EvaluateRecipeInput,
    ) -> impl Future<Output = Result<ComplianceEvaluation, CoreError>> + Send;

    fn evaluate_for_selection(
        &self,
        input: EvaluateSelectionInput,
    ) -> impl Future<Output = Result<ComplianceEvaluation, CoreError>> + Send;
}
