pub mod analyze;
pub mod diets;
