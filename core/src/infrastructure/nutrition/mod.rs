pub mod spoonacular_client;

pub use spoonacular_client::{AnalyzeRecipePayload, SpoonacularClassifier};
