use crate::domain::{compliance::ports::NutritionClassifier, diet::ports::DietRepository};

#[derive(Clone)]
pub struct Service<D, NC>
where
    D: DietRepository,
    NC: NutritionClassifier,
{
    pub(crate) diet_repository: D,
    pub(crate) nutrition_classifier: NC,
}

impl<D, NC> Service<D, NC>
where
    D: DietRepository,
    NC: NutritionClassifier,
{
    pub fn new(diet_repository: D, nutrition_classifier: NC) -> Self {
        Self {
            diet_repository,
            nutrition_classifier,
        }
    }
}
