use anyhow::Context;

use crate::{
    domain::common::{NutreeConfig, services::Service},
    infrastructure::{diet::JsonDietRepository, nutrition::SpoonacularClassifier},
};

pub type NutreeService = Service<JsonDietRepository, SpoonacularClassifier>;

pub async fn create_service(config: NutreeConfig) -> Result<NutreeService, anyhow::Error> {
    let diet_repository = match &config.catalog.diets_file {
        Some(path) => JsonDietRepository::from_file(path)
            .await
            .with_context(|| format!("loading diet catalog from {}", path.display()))?,
        None => JsonDietRepository::bundled().context("loading bundled diet catalog")?,
    };

    let nutrition_classifier = SpoonacularClassifier::new(&config.classifier)
        .context("configuring nutrition classifier")?;

    tracing::debug!(
        "Nutrition classifier endpoint: {}",
        nutrition_classifier.endpoint()
    );

    Ok(Service::new(diet_repository, nutrition_classifier))
}
