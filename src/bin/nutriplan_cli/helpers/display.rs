// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: Provides consistent display functions for energy summaries, recipes, and food analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use anyhow::Result;
use nutriplan::analysis::FoodAnalysisOutcome;
use nutriplan::models::{NutrientField, NutritionVector, RecipeResult};
use nutriplan::recommendations::{
    CustomRecommendation, Degradation, DietRecommendation, MealSelectionSummary,
};
use serde::Serialize;

use crate::commands::plan::EnergySummary;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display BMI, energy expenditure, plans, and per-meal calories
pub fn display_energy_summary(summary: &EnergySummary) {
    println!("\nBody Mass Index");
    println!("{}", "=".repeat(50));
    println!(
        "   BMI: {:.2} kg/m² ({}, {})",
        summary.bmi.value, summary.bmi.category, summary.bmi.color
    );
    println!("   BMR: {:.0} kcal/day", summary.energy.bmr);
    println!("   TDEE: {:.0} kcal/day", summary.energy.tdee);

    println!("\nCalorie plans");
    println!("{}", "=".repeat(50));
    for plan in &summary.calorie_plans {
        let marker = if plan.plan == summary.energy.plan { "*" } else { " " };
        println!(
            " {marker} {:<22} {:>6} kcal/day  {}",
            plan.name, plan.calories, plan.weekly_delta
        );
    }

    println!("\nMeals");
    println!("{}", "=".repeat(50));
    for (meal, calories) in &summary.meal_calories {
        println!("   {:<16} {calories:>7.0} kcal", meal.label());
    }
}

/// Display a diet recommendation grouped by meal
pub fn display_diet_recommendation(recommendation: &DietRecommendation) {
    println!("\nDiet recommendation {}", recommendation.request_id);
    println!("{}", "=".repeat(80));
    println!(
        "   BMI {:.2} ({}), plan {} at {} kcal/day",
        recommendation.bmi.value,
        recommendation.bmi.category,
        recommendation.energy.plan.label(),
        recommendation.energy.rounded_plan_calories()
    );

    for group in &recommendation.meals {
        println!(
            "\n{} (target {:.0} kcal){}",
            group.meal.label(),
            group.target.calories,
            if group.degraded { " [degraded]" } else { "" }
        );
        if group.recipes.is_empty() {
            println!("   No matching recipes");
        }
        for recipe in &group.recipes {
            display_recipe_line(recipe);
        }
    }
    display_degradations(&recommendation.degradations);
}

/// Display the recipes of a custom search
pub fn display_custom_recommendation(recommendation: &CustomRecommendation) {
    println!("\nCustom recommendation {}", recommendation.request_id);
    println!("{}", "=".repeat(80));
    if recommendation.recipes.is_empty() {
        println!("   No matching recipes");
    }
    for recipe in &recommendation.recipes {
        display_recipe_line(recipe);
    }
    display_degradations(&recommendation.degradations);
}

/// Display totals of the chosen recipes against the plan
pub fn display_meal_selection(summary: &MealSelectionSummary) {
    println!("\nSelected meals");
    println!("{}", "=".repeat(50));
    for choice in &summary.choices {
        println!("   {:<16} {}", choice.meal.label(), choice.recipe_name);
    }
    display_nutrition_table(&summary.totals);
    println!(
        "\n   {:.0} kcal chosen vs {} kcal planned{}",
        summary.totals.calories,
        summary.plan_calories,
        if summary.exceeds_plan {
            " (over plan)"
        } else {
            ""
        }
    );
}

/// Display a food analysis report or the reason it could not be produced
pub fn display_food_analysis(outcome: &FoodAnalysisOutcome) {
    let report = match outcome {
        FoodAnalysisOutcome::Analyzed(report) => report,
        FoodAnalysisOutcome::CouldNotAnalyze { reason } => {
            println!("\nCould not analyze the image: {reason}");
            return;
        }
    };

    for item in &report.items {
        println!(
            "\n{} (quantity {}, {})",
            item.item_name, item.quantity, item.serving_size
        );
        println!("{}", "=".repeat(50));
        for field in NutrientField::ALL {
            println!(
                "   {:<22} {:>8.1} {:>9.1} {}",
                field.key(),
                item.nutrition_per_unit.get(field),
                item.total_nutrition.get(field),
                field.unit()
            );
        }
        println!(
            "   {} ({}), {}",
            item.classification.health_status,
            item.classification.health_color,
            item.classification.weight_impact
        );
    }

    println!("\nGrand total");
    println!("{}", "=".repeat(50));
    display_nutrition_table(&report.grand_total);
    println!(
        "   {} ({}), {}",
        report.overall.health_status, report.overall.health_color, report.overall.weight_impact
    );
}

fn display_recipe_line(recipe: &RecipeResult) {
    let calories = recipe
        .nutrition
        .calories
        .map_or_else(|| "?".to_owned(), |calories| format!("{calories:.0}"));
    println!(
        "   - {} ({calories} kcal, {:.0} min cook) {}",
        recipe.name, recipe.cook_time, recipe.image_link
    );
}

fn display_nutrition_table(totals: &NutritionVector) {
    for field in NutrientField::ALL {
        println!(
            "   {:<22} {:>9.1} {}",
            field.key(),
            totals.get(field),
            field.unit()
        );
    }
}

fn display_degradations(degradations: &[Degradation]) {
    if degradations.is_empty() {
        return;
    }
    println!("\nWARNING {} collaborator call(s) failed:", degradations.len());
    for degradation in degradations {
        let scope = match (&degradation.meal, &degradation.recipe) {
            (Some(meal), Some(recipe)) => format!("{meal} / {recipe}"),
            (Some(meal), None) => meal.to_string(),
            (None, Some(recipe)) => recipe.clone(),
            (None, None) => "request".to_owned(),
        };
        println!(
            "   {} [{scope}]: {}",
            degradation.collaborator, degradation.reason
        );
    }
}
