use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use url::Url;

use crate::domain::{
    common::{ClassifierConfig, RetryConfig, entities::app_errors::CoreError},
    compliance::{entities::ComplianceReport, ports::NutritionClassifier, value_objects::ApiKey},
    recipe::entities::Recipe,
};

pub const ANALYZE_PATH: &str = "recipes/analyze";

/// Body of `POST /recipes/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRecipePayload {
    pub title: String,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl From<&Recipe> for AnalyzeRecipePayload {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title().to_string(),
            servings: recipe.servings(),
            ingredients: recipe.ingredients().to_vec(),
            instructions: recipe.instructions().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpoonacularClassifier {
    endpoint: Url,
    retry: RetryConfig,
    client: Client,
}

enum Failure {
    Transient(CoreError),
    Permanent(CoreError),
}

impl SpoonacularClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self, CoreError> {
        let mut base_url = config.base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let endpoint = Url::parse(&base_url)
            .and_then(|base| base.join(ANALYZE_PATH))
            .map_err(|e| {
                CoreError::Configuration(format!("invalid classifier url '{}': {}", base_url, e))
            })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::Configuration(format!("cannot build http client: {}", e)))?;

        Ok(Self {
            endpoint,
            retry: config.retry.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn analyze_once(
        &self,
        payload: &AnalyzeRecipePayload,
        api_key: &ApiKey,
    ) -> Result<ComplianceReport, Failure> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .query(&[
                ("apiKey", api_key.expose()),
                ("language", "en"),
                ("includeNutrition", "false"),
            ])
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                // The request url carries the api key
                let e = e.without_url();
                error!("Recipe analysis request failed: {}", e);
                let err = CoreError::ClassifierUnavailable(format!("request failed: {}", e));
                if e.is_timeout() || e.is_connect() || e.is_request() {
                    Failure::Transient(err)
                } else {
                    Failure::Permanent(err)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Recipe analysis returned error: {} - {}", status, error_text);
            let err = CoreError::ClassifierUnavailable(format!(
                "analysis service returned {}",
                status
            ));
            return Err(if is_retryable_status(status) {
                Failure::Transient(err)
            } else {
                Failure::Permanent(err)
            });
        }

        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            error!("Failed to read recipe analysis response: {}", e);
            Failure::Transient(CoreError::ClassifierUnavailable(format!(
                "failed to read response: {}",
                e
            )))
        })?;

        let parsed: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse recipe analysis response: {}", e);
            Failure::Permanent(CoreError::ClassifierResponse(format!(
                "response is not valid JSON: {}",
                e
            )))
        })?;

        ComplianceReport::from_response(parsed).map_err(|e| {
            error!("Unexpected recipe analysis response shape: {}", e);
            Failure::Permanent(e)
        })
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

impl NutritionClassifier for SpoonacularClassifier {
    async fn classify(&self, recipe: Recipe, api_key: ApiKey) -> Result<ComplianceReport, CoreError> {
        let payload = AnalyzeRecipePayload::from(&recipe);
        debug!(
            "Analyzing recipe '{}' with {} ingredients",
            payload.title,
            payload.ingredients.len()
        );

        let mut attempt = 0;
        loop {
            match self.analyze_once(&payload, &api_key).await {
                Ok(report) => return Ok(report),
                Err(Failure::Transient(err)) if attempt < self.retry.max_retries => {
                    attempt += 1;
                    let backoff = self.retry.backoff_for(attempt);
                    warn!(
                        "Recipe analysis failed ({}) - retry {}/{} after {:?}",
                        err, attempt, self.retry.max_retries, backoff
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(Failure::Transient(err)) | Err(Failure::Permanent(err)) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::{services::normalize_recipe, value_objects::RecipeForm};

    #[test]
    fn test_payload_round_trip_preserves_recipe() {
        let recipe = normalize_recipe(RecipeForm {
            title: "Shakshuka".to_string(),
            servings: "2".into(),
            ingredients: "4 eggs, 1 can tomatoes , cumin,,".to_string(),
            instructions: None,
        })
        .unwrap();

        let wire = serde_json::to_string(&AnalyzeRecipePayload::from(&recipe)).unwrap();
        let received: AnalyzeRecipePayload = serde_json::from_str(&wire).unwrap();

        assert_eq!(received.title, recipe.title());
        assert_eq!(received.servings, recipe.servings());
        assert_eq!(received.ingredients, recipe.ingredients());
        assert_eq!(received.instructions, "");
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        for base_url in ["https://api.spoonacular.com", "https://api.spoonacular.com/"] {
            let classifier = SpoonacularClassifier::new(&ClassifierConfig {
                base_url: base_url.to_string(),
                ..ClassifierConfig::default()
            })
            .unwrap();
            assert_eq!(
                classifier.endpoint().as_str(),
                "https://api.spoonacular.com/recipes/analyze"
            );
        }
    }

    #[test]
    fn test_invalid_base_url_is_a_configuration_error() {
        let result = SpoonacularClassifier::new(&ClassifierConfig {
            base_url: "not a url".to_string(),
            ..ClassifierConfig::default()
        });
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!is_retryable_status(StatusCode::PAYMENT_REQUIRED));
    }
}
