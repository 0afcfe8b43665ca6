use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{RawServings, RecipeForm},
    },
};

pub const INGREDIENT_DELIMITER: char = ',';

/// Build a [`Recipe`] from raw form input.
pub fn normalize_recipe(form: RecipeForm) -> Result<Recipe, CoreError> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(CoreError::validation("title", "title is required"));
    }

    let servings = parse_servings(&form.servings)?;

    let ingredients = split_ingredients(&form.ingredients);
    if ingredients.is_empty() {
        return Err(CoreError::validation(
            "ingredients",
            "at least one ingredient is required",
        ));
    }

    let instructions = form
        .instructions
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    Ok(Recipe::new(
        title.to_string(),
        servings,
        ingredients,
        instructions,
    ))
}

impl TryFrom<RecipeForm> for Recipe {
    type Error = CoreError;

    fn try_from(form: RecipeForm) -> Result<Self, Self::Error> {
        normalize_recipe(form)
    }
}

/// Split on commas, trim every token and drop the empty ones. Order is preserved.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(INGREDIENT_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

pub fn parse_servings(raw: &RawServings) -> Result<u32, CoreError> {
    let value = match raw {
        RawServings::Number(n) => *n,
        RawServings::Text(text) => text.trim().parse::<i64>().map_err(|_| {
            CoreError::validation("servings", format!("'{}' is not a whole number", text))
        })?,
    };

    if value <= 0 {
        return Err(CoreError::validation(
            "servings",
            "servings must be a positive number",
        ));
    }

    u32::try_from(value)
        .map_err(|_| CoreError::validation("servings", "servings is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, servings: RawServings, ingredients: &str) -> RecipeForm {
        RecipeForm {
            title: title.to_string(),
            servings,
            ingredients: ingredients.to_string(),
            instructions: None,
        }
    }

    fn assert_validation_field(result: Result<Recipe, CoreError>, expected: &str) {
        match result {
            Err(CoreError::Validation { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected validation error on {expected}, got {other:?}"),
        }
    }

    #[test]
    fn test_split_ingredients_trims_and_drops_empty_tokens() {
        assert_eq!(
            split_ingredients(" 1 cup flour,  2 eggs ,sugar"),
            vec!["1 cup flour", "2 eggs", "sugar"]
        );
        assert_eq!(split_ingredients("salt,, ,pepper,"), vec!["salt", "pepper"]);
        assert!(split_ingredients(" , ,").is_empty());
    }

    #[test]
    fn test_normalize_recipe() {
        let mut raw = form("  Pancakes ", "4".into(), " 1 cup flour,  2 eggs ,sugar");
        raw.instructions = Some("  Mix and fry.  ".to_string());

        let recipe = normalize_recipe(raw).unwrap();
        assert_eq!(recipe.title(), "Pancakes");
        assert_eq!(recipe.servings(), 4);
        assert_eq!(recipe.ingredients(), ["1 cup flour", "2 eggs", "sugar"]);
        assert_eq!(recipe.instructions(), "Mix and fry.");
    }

    #[test]
    fn test_missing_instructions_become_empty() {
        let recipe = normalize_recipe(form("Toast", RawServings::Number(1), "bread")).unwrap();
        assert_eq!(recipe.instructions(), "");
    }

    #[test]
    fn test_invalid_servings_are_rejected() {
        for servings in ["0", "-3", "abc", "", "2.5", "99999999999"] {
            assert_validation_field(
                normalize_recipe(form("Soup", servings.into(), "water")),
                "servings",
            );
        }
        assert_validation_field(normalize_recipe(form("Soup", RawServings::Number(0), "water")), "servings");
    }

    #[test]
    fn test_servings_accept_surrounding_whitespace() {
        assert_eq!(parse_servings(&" 4 ".into()).unwrap(), 4);
        assert_eq!(parse_servings(&RawServings::Number(12)).unwrap(), 12);
    }

    #[test]
    fn test_blank_title_is_rejected() {
        assert_validation_field(normalize_recipe(form("   ", "2".into(), "rice")), "title");
    }

    #[test]
    fn test_empty_ingredient_list_is_rejected() {
        assert_validation_field(normalize_recipe(form("Air", "2".into(), " , , ")), "ingredients");
    }

    #[test]
    fn test_raw_servings_deserializes_from_text_or_number() {
        let from_text: RecipeForm =
            serde_json::from_str(r#"{"title":"a","servings":"3","ingredients":"b"}"#).unwrap();
        assert_eq!(from_text.servings, RawServings::Text("3".to_string()));

        let from_number: RecipeForm =
            serde_json::from_str(r#"{"title":"a","servings":3,"ingredients":"b"}"#).unwrap();
        assert_eq!(from_number.servings, RawServings::Number(3));
        assert_eq!(from_number.instructions, None);
    }
}
