// ABOUTME: Cleans raw recommender rows into presentation-ready recipe results
// ABOUTME: Drops NaN and negative values, defaults cook time, and infers missing food types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use crate::intelligence::infer_food_type;
use crate::models::{NutrientField, RecipeCandidate, RecipeNutrients, RecipeResult};
use tracing::debug;

/// Convert a raw recommender row into a [`RecipeResult`]
///
/// Nutrients and times that are NaN, infinite, or negative become absent, except
/// `CookTime` which defaults to 0. A missing food type is inferred from the
/// ingredients. `image_link` starts as `placeholder_image_url`.
#[must_use]
pub fn sanitize_candidate(candidate: RecipeCandidate, placeholder_image_url: &str) -> RecipeResult {
    let name = candidate.name.trim().to_owned();

    let raw = candidate.nutrition.to_array();
    let cleaned = raw.map(clean_value);
    for (field, (before, after)) in NutrientField::ALL.iter().zip(raw.iter().zip(cleaned)) {
        if before.is_some() && after.is_none() {
            debug!(recipe = %name, nutrient = %field, "Dropped invalid nutrient value");
        }
    }

    let cook_time = clean_value(candidate.cook_time).unwrap_or_else(|| {
        debug!(recipe = %name, "Missing cook time, defaulting to 0");
        0.0
    });

    let recipe_ingredient_parts = clean_lines(candidate.recipe_ingredient_parts);
    let food_type = candidate.food_type.or_else(|| {
        let inferred = infer_food_type(&recipe_ingredient_parts);
        debug!(recipe = %name, food_type = %inferred, "Inferred missing food type");
        Some(inferred)
    });

    RecipeResult {
        name,
        cook_time,
        prep_time: clean_value(candidate.prep_time),
        total_time: clean_value(candidate.total_time),
        recipe_ingredient_parts,
        recipe_instructions: clean_lines(candidate.recipe_instructions),
        food_type,
        nutrition: RecipeNutrients::from_array(cleaned),
        image_link: placeholder_image_url.to_owned(),
    }
}

fn clean_value(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite() && *value >= 0.0)
}

fn clean_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodType;

    const PLACEHOLDER: &str = "https://placeholder.test/none.png";

    #[test]
    fn test_nan_and_negative_nutrients_become_absent() {
        let candidate = RecipeCandidate {
            name: " Oat Porridge ".to_owned(),
            cook_time: Some(f64::NAN),
            prep_time: Some(-3.0),
            total_time: Some(12.0),
            nutrition: RecipeNutrients {
                calories: Some(310.0),
                fat_content: Some(f64::NAN),
                sodium_content: Some(-1.0),
                protein_content: Some(f64::INFINITY),
                ..RecipeNutrients::default()
            },
            food_type: Some(FoodType::Veg),
            ..RecipeCandidate::default()
        };

        let result = sanitize_candidate(candidate, PLACEHOLDER);
        assert_eq!(result.name, "Oat Porridge");
        assert!(result.cook_time.abs() < f64::EPSILON);
        assert_eq!(result.prep_time, None);
        assert_eq!(result.total_time, Some(12.0));
        assert_eq!(result.nutrition.calories, Some(310.0));
        assert_eq!(result.nutrition.fat_content, None);
        assert_eq!(result.nutrition.sodium_content, None);
        assert_eq!(result.nutrition.protein_content, None);
        assert_eq!(result.image_link, PLACEHOLDER);
    }

    #[test]
    fn test_missing_food_type_is_inferred() {
        let candidate = RecipeCandidate {
            name: "Chicken Curry".to_owned(),
            recipe_ingredient_parts: vec!["chicken thighs".to_owned(), " ".to_owned()],
            ..RecipeCandidate::default()
        };
        let result = sanitize_candidate(candidate, PLACEHOLDER);
        assert_eq!(result.food_type, Some(FoodType::NonVeg));
        assert_eq!(result.recipe_ingredient_parts, vec!["chicken thighs"]);
    }
}
