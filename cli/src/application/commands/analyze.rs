use nutree_core::domain::{
    compliance::{
        entities::ComplianceEvaluation,
        ports::ComplianceService,
        value_objects::{ApiKey, EvaluateRecipeInput, EvaluateSelectionInput},
    },
    diet::value_objects::UserDietSelection,
    recipe::value_objects::{RawServings, RecipeForm},
};
use tracing::info;

use crate::{
    application::output::render_evaluation,
    args::AnalyzeArgs,
};

pub async fn analyze<S>(service: &S, api_key: ApiKey, args: AnalyzeArgs) -> anyhow::Result<String>
where
    S: ComplianceService,
{
    let form = RecipeForm {
        title: args.title,
        servings: RawServings::Text(args.servings),
        ingredients: args.ingredients,
        instructions: args.instructions,
    };

    let evaluation: ComplianceEvaluation = if args.diet_ids.is_empty() {
        service
            .evaluate(EvaluateRecipeInput {
                form,
                selected_diets: args.diets,
                api_key,
            })
            .await?
    } else {
        service
            .evaluate_for_selection(EvaluateSelectionInput {
                form,
                selection: UserDietSelection::new(args.diet_ids),
                api_key,
            })
            .await?
    };

    info!(
        "Recipe checked against {} diets, {} not satisfied",
        evaluation.chosen_diets.len(),
        evaluation.non_compliant_diets.len()
    );

    Ok(render_evaluation(&evaluation, args.format)?)
}
