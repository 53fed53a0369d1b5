// ABOUTME: Tests for weighted nutrition aggregation
// ABOUTME: Verifies weighted sums, input validation, and permutation-independent results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::errors::ErrorCode;
use nutriplan::intelligence::aggregator::{aggregate, sum};
use nutriplan::models::NutritionVector;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn meal(calories: f64, protein: f64, sodium: f64) -> NutritionVector {
    NutritionVector {
        calories,
        protein_content: protein,
        sodium_content: sodium,
        ..NutritionVector::ZERO
    }
}

#[test]
fn test_weighted_sum_per_field() {
    let vectors = [meal(500.0, 20.0, 300.0), meal(250.0, 10.0, 150.0)];
    let total = aggregate(&vectors, &[2.0, 0.5]).unwrap();
    assert!((total.calories - 1125.0).abs() < 1e-9);
    assert!((total.protein_content - 45.0).abs() < 1e-9);
    assert!((total.sodium_content - 675.0).abs() < 1e-9);
    assert!(total.fat_content.abs() < f64::EPSILON);
}

#[test]
fn test_sum_matches_unit_weights() {
    let vectors = [
        meal(410.2, 18.3, 220.0),
        meal(133.7, 4.1, 90.5),
        meal(622.0, 31.9, 710.25),
    ];
    let weighted = aggregate(&vectors, &[1.0, 1.0, 1.0]).unwrap();
    assert_eq!(sum(&vectors), weighted);
}

#[test]
fn test_empty_sum_is_zero() {
    assert_eq!(sum(&[]), NutritionVector::ZERO);
}

#[test]
fn test_length_mismatch_is_rejected() {
    let error = aggregate(&[meal(100.0, 1.0, 1.0)], &[]).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.field(), Some("weights"));
}

#[test]
fn test_negative_weight_is_rejected() {
    let error = aggregate(&[meal(100.0, 1.0, 1.0)], &[-1.0]).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_result_is_identical_for_every_permutation() {
    let mut pairs: Vec<(NutritionVector, f64)> = (0..12)
        .map(|i| {
            let i = f64::from(i);
            (
                meal(0.1 * i + 123.456, 1.0 / (i + 3.0), 1e6 / (i + 7.0)),
                0.3 + 0.07 * i,
            )
        })
        .collect();
    let (vectors, weights): (Vec<_>, Vec<_>) = pairs.iter().copied().unzip();
    let expected = aggregate(&vectors, &weights).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..50 {
        pairs.shuffle(&mut rng);
        let (vectors, weights): (Vec<_>, Vec<_>) = pairs.iter().copied().unzip();
        let total = aggregate(&vectors, &weights).unwrap();
        assert_eq!(
            total.to_array().map(f64::to_bits),
            expected.to_array().map(f64::to_bits)
        );
    }
}
