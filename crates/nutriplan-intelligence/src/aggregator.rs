// ABOUTME: Weighted componentwise aggregation of nutrition vectors
// ABOUTME: Order-independent sums used for meal totals and image analysis totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{NutrientField, NutritionVector};

/// Componentwise `sum(vectors[i] * weights[i])`
///
/// Per field the products are added in ascending order, so the result is
/// bit-identical for every permutation of the input pairs.
///
/// # Errors
///
/// Returns a validation error if the slices differ in length or a weight is
/// negative or not finite
pub fn aggregate(vectors: &[NutritionVector], weights: &[f64]) -> AppResult<NutritionVector> {
    if vectors.len() != weights.len() {
        return Err(AppError::validation(
            "weights",
            format!(
                "Expected {} weights for {} vectors, got {}",
                vectors.len(),
                vectors.len(),
                weights.len()
            ),
        ));
    }
    if let Some(weight) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(AppError::out_of_range(
            "weights",
            format!("Weights must be non-negative numbers, got {weight}"),
        ));
    }

    let mut totals = [0.0; 9];
    let mut products = Vec::with_capacity(vectors.len());
    for field in NutrientField::ALL {
        products.clear();
        products.extend(
            vectors
                .iter()
                .zip(weights)
                .map(|(vector, weight)| vector.get(field) * weight),
        );
        products.sort_by(f64::total_cmp);
        totals[field.index()] = products.iter().sum();
    }
    Ok(NutritionVector::from_array(totals))
}

/// Componentwise sum with every weight equal to 1
#[must_use]
pub fn sum(vectors: &[NutritionVector]) -> NutritionVector {
    let mut totals = [0.0; 9];
    let mut values = Vec::with_capacity(vectors.len());
    for field in NutrientField::ALL {
        values.clear();
        values.extend(vectors.iter().map(|vector| vector.get(field)));
        values.sort_by(f64::total_cmp);
        totals[field.index()] = values.iter().sum();
    }
    NutritionVector::from_array(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_lengths_rejected() {
        let error = aggregate(&[NutritionVector::ZERO], &[1.0, 2.0]).unwrap_err();
        assert_eq!(error.field(), Some("weights"));
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(aggregate(&[], &[]).unwrap(), NutritionVector::ZERO);
        assert_eq!(sum(&[]), NutritionVector::ZERO);
    }

    #[test]
    fn test_weighted_sum() {
        let a = NutritionVector::from_array([100.0, 1.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 2.0]);
        let b = NutritionVector::from_array([50.0, 2.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0]);
        let total = aggregate(&[a, b], &[2.0, 1.0]).unwrap();
        assert!((total.calories - 250.0).abs() < 1e-9);
        assert!((total.fat_content - 4.0).abs() < 1e-9);
        assert!((total.fiber_content - 3.0).abs() < 1e-9);
        assert!((total.protein_content - 4.0).abs() < 1e-9);
    }
}
